use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{Book, BookCard};

/// Genre used when the seed book carries no categories
pub const FALLBACK_GENRE: &str = "fiction";

/// The resolved seed of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    /// Trimmed title as typed by the user
    pub input: String,
    pub book: Book,
    /// First category of the seed book, or [`FALLBACK_GENRE`]
    pub genre: String,
    /// First author of the seed book, empty when unknown
    pub author: String,
}

/// Result of a single candidate search
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Succeeded { query: String, books: Vec<Book> },
    Failed { query: String, reason: String },
}

impl QueryOutcome {
    pub fn query(&self) -> &str {
        match self {
            QueryOutcome::Succeeded { query, .. } | QueryOutcome::Failed { query, .. } => query,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed { .. })
    }
}

/// Terminal, non-error outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendationOutcome {
    /// At least one recommendation survived filtering
    Success(Vec<Book>),
    /// Aggregation finished but nothing survived filtering
    Empty,
}

impl RecommendationOutcome {
    pub fn from_selection(books: Vec<Book>) -> Self {
        if books.is_empty() {
            RecommendationOutcome::Empty
        } else {
            RecommendationOutcome::Success(books)
        }
    }

    pub fn books(&self) -> &[Book] {
        match self {
            RecommendationOutcome::Success(books) => books,
            RecommendationOutcome::Empty => &[],
        }
    }

    pub fn count(&self) -> usize {
        self.books().len()
    }
}

/// Lifecycle of one recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "count", rename_all = "snake_case")]
pub enum RequestPhase {
    Idle,
    Resolving,
    Aggregating,
    Filtering,
    Succeeded(usize),
    Empty,
    Failed,
}

impl RequestPhase {
    /// Whether the request has reported its outcome
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestPhase::Succeeded(_) | RequestPhase::Empty | RequestPhase::Failed
        )
    }

    /// Whether a request is currently running
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            RequestPhase::Resolving | RequestPhase::Aggregating | RequestPhase::Filtering
        )
    }
}

impl Display for RequestPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestPhase::Idle => write!(f, "idle"),
            RequestPhase::Resolving => write!(f, "resolving"),
            RequestPhase::Aggregating => write!(f, "aggregating"),
            RequestPhase::Filtering => write!(f, "filtering"),
            RequestPhase::Succeeded(n) => write!(f, "succeeded({})", n),
            RequestPhase::Empty => write!(f, "empty"),
            RequestPhase::Failed => write!(f, "failed"),
        }
    }
}

// ============================================================================
// HTTP request/response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub title: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
    Success,
    Empty,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: RecommendationStatus,
    pub count: usize,
    pub message: String,
    pub seed: String,
    pub recommendations: Vec<BookCard>,
}

impl RecommendationResponse {
    pub fn new(seed: String, outcome: &RecommendationOutcome) -> Self {
        match outcome {
            RecommendationOutcome::Success(books) => Self {
                status: RecommendationStatus::Success,
                count: books.len(),
                message: format!("Found {} book recommendations for you.", books.len()),
                seed,
                recommendations: books.iter().map(BookCard::from).collect(),
            },
            RecommendationOutcome::Empty => Self {
                status: RecommendationStatus::Empty,
                count: 0,
                message: "Try searching for a different book.".to_string(),
                seed,
                recommendations: Vec::new(),
            },
        }
    }
}
