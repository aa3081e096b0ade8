use crate::models::Book;
use std::collections::HashSet;

/// Default size of a recommendation set
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Filters the candidate pool down to the recommendation set
///
/// A candidate survives only if its title is not the seed input (case-insensitive
/// exact match), it is the first occurrence of its id, and it has a usable
/// thumbnail. The first `limit` survivors are kept in pool order.
///
/// Dedup is decided over the whole pool: the first occurrence of an id claims
/// it even when that occurrence is later rejected by another check.
pub fn select_recommendations(pool: Vec<Book>, seed_input: &str, limit: usize) -> Vec<Book> {
    let mut seen_ids = HashSet::new();

    pool.into_iter()
        .filter(|book| {
            let first_seen = seen_ids.insert(book.id.clone());
            first_seen && !book.title_matches(seed_input) && book.usable_thumbnail().is_some()
        })
        .take(limit)
        .collect()
}
