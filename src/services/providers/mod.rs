/// Book metadata provider abstraction
///
/// Seed resolution and candidate aggregation both go through a single search
/// operation, so a provider only has to know how to turn a [`SearchRequest`]
/// into a list of books.
use crate::{error::AppResult, models::Book};

pub mod google_books;

pub use google_books::GoogleBooksProvider;

/// Results requested for the seed lookup
pub const SEED_RESULT_LIMIT: u32 = 1;
/// Results requested for each candidate query
pub const CANDIDATE_RESULT_LIMIT: u32 = 10;

/// Result ordering accepted by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Relevance,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Relevance => "relevance",
        }
    }
}

/// A single call to the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Sent verbatim as the `q` parameter
    pub query: String,
    pub max_results: u32,
    pub order_by: Option<OrderBy>,
}

impl SearchRequest {
    /// Lookup of the user's title, at most one match
    pub fn seed(title: &str) -> Self {
        Self {
            query: title.to_string(),
            max_results: SEED_RESULT_LIMIT,
            order_by: None,
        }
    }

    /// Lookup of one builder-produced query, relevance ordered
    pub fn candidates(query: &str) -> Self {
        Self {
            query: query.to_string(),
            max_results: CANDIDATE_RESULT_LIMIT,
            order_by: Some(OrderBy::Relevance),
        }
    }
}

/// Trait for book metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BookProvider: Send + Sync {
    /// Search for books matching the request
    ///
    /// An empty list is a valid answer; errors are reserved for transport,
    /// status and decoding failures.
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<Book>>;
}
