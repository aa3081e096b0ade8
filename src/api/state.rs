use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::{BookProvider, RecommendationFetcher};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fetcher: RecommendationFetcher,
    pub contact_delay: Duration,
}

impl AppState {
    /// Creates state around a book provider
    pub fn new(provider: Arc<dyn BookProvider>, config: &Config) -> Self {
        Self {
            fetcher: RecommendationFetcher::new(provider, config.recommendation_limit),
            contact_delay: config.contact_delay(),
        }
    }
}
