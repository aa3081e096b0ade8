/// Literal query appended to every candidate batch
pub const GENERIC_QUERY: &str = "bestseller fiction";

/// Builds the candidate queries for a seed's genre and author
///
/// The author query is skipped when the author is empty. Order determines
/// which duplicate wins during selection.
pub fn build_queries(genre: &str, author: &str) -> Vec<String> {
    let mut queries = vec![format!("subject:{}", genre)];

    if !author.is_empty() {
        queries.push(format!("inauthor:{}", author));
    }

    queries.push(format!("subject:{} bestseller", genre));
    queries.push(format!("subject:{} popular", genre));
    queries.push(GENERIC_QUERY.to_string());

    queries
}
