use crate::{
    error::{AppError, AppResult},
    models::{Book, Seed, FALLBACK_GENRE},
    services::providers::{BookProvider, SearchRequest},
};

/// Resolves the user's title to a single seed book
///
/// Fails with `SeedNotFound` when the lookup returns no items. Transport and
/// decoding errors are returned unchanged, since a failed seed lookup aborts
/// the whole request.
pub async fn resolve_seed(provider: &dyn BookProvider, title: &str) -> AppResult<Seed> {
    let books = provider.search(&SearchRequest::seed(title)).await?;

    let book = books
        .into_iter()
        .next()
        .ok_or_else(|| AppError::SeedNotFound(title.to_string()))?;

    let seed = seed_from_book(title, book);

    tracing::debug!(
        input = %seed.input,
        seed_id = %seed.book.id,
        genre = %seed.genre,
        author = %seed.author,
        "Seed resolved"
    );

    Ok(seed)
}

/// Extracts the primary genre and author from the resolved book
pub fn seed_from_book(input: &str, book: Book) -> Seed {
    let genre = book
        .categories
        .first()
        .filter(|category| !category.is_empty())
        .cloned()
        .unwrap_or_else(|| FALLBACK_GENRE.to_string());

    let author = book.authors.first().cloned().unwrap_or_default();

    Seed {
        input: input.to_string(),
        book,
        genre,
        author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockBookProvider;

    fn dune() -> Book {
        Book {
            id: "dune-1".to_string(),
            title: "Dune".to_string(),
            authors: vec!["Frank Herbert".to_string(), "Brian Herbert".to_string()],
            categories: vec!["Science Fiction".to_string(), "Classics".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_seed_takes_first_category_and_author() {
        let seed = seed_from_book("Dune", dune());
        assert_eq!(seed.genre, "Science Fiction");
        assert_eq!(seed.author, "Frank Herbert");
        assert_eq!(seed.input, "Dune");
    }

    #[test]
    fn test_seed_falls_back_to_fiction_without_categories() {
        let book = Book {
            id: "x".to_string(),
            title: "Untagged".to_string(),
            ..Default::default()
        };
        let seed = seed_from_book("Untagged", book);
        assert_eq!(seed.genre, "fiction");
        assert_eq!(seed.author, "");
    }

    #[test]
    fn test_seed_falls_back_to_fiction_on_blank_category() {
        let book = Book {
            categories: vec!["".to_string()],
            ..dune()
        };
        assert_eq!(seed_from_book("Dune", book).genre, "fiction");
    }

    #[tokio::test]
    async fn test_resolve_seed_issues_single_result_lookup() {
        let mut provider = MockBookProvider::new();
        provider
            .expect_search()
            .withf(|request| request.query == "Dune" && request.max_results == 1)
            .times(1)
            .returning(|_| Ok(vec![dune()]));

        let seed = resolve_seed(&provider, "Dune").await.unwrap();
        assert_eq!(seed.book.id, "dune-1");
    }

    #[tokio::test]
    async fn test_resolve_seed_without_items_is_not_found() {
        let mut provider = MockBookProvider::new();
        provider.expect_search().returning(|_| Ok(vec![]));

        let err = resolve_seed(&provider, "Nonexistent Tome").await.unwrap_err();
        assert!(matches!(err, AppError::SeedNotFound(title) if title == "Nonexistent Tome"));
    }

    #[tokio::test]
    async fn test_resolve_seed_propagates_provider_errors() {
        let mut provider = MockBookProvider::new();
        provider
            .expect_search()
            .returning(|_| Err(AppError::ExternalApi("status 500".to_string())));

        let err = resolve_seed(&provider, "Dune").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }
}
