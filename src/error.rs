use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Book not found: {0}")]
    SeedNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A recommendation request is already in progress")]
    RequestInFlight,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is the seed lookup coming back empty rather than a fault
    pub fn is_seed_not_found(&self) -> bool {
        matches!(self, AppError::SeedNotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::SeedNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::RequestInFlight => (StatusCode::CONFLICT, self.to_string()),
            AppError::ExternalApi(_) | AppError::HttpClient(_) => {
                tracing::error!(error = %self, "Recommendation pipeline failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch book recommendations. Please try again.".to_string(),
                )
            }
            AppError::Internal(_) => {
                tracing::error!(error = %self, "Recommendation pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch book recommendations. Please try again.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
