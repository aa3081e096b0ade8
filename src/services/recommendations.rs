use crate::{
    error::{AppError, AppResult},
    models::{RecommendationOutcome, RequestPhase},
    services::{
        aggregator::aggregate_candidates,
        providers::BookProvider,
        query_builder::build_queries,
        seed::resolve_seed,
        selection::select_recommendations,
        session::{RequestGuard, RequestSession},
    },
};
use std::sync::Arc;
use std::time::Instant;

/// Generates book recommendations for a seed title
///
/// One request runs at a time: the seed title is resolved to a book, genre
/// and author queries are aggregated into a candidate pool, and the pool is
/// filtered down to at most `limit` books.
#[derive(Clone)]
pub struct RecommendationFetcher {
    provider: Arc<dyn BookProvider>,
    session: RequestSession,
    limit: usize,
}

impl RecommendationFetcher {
    pub fn new(provider: Arc<dyn BookProvider>, limit: usize) -> Self {
        Self {
            provider,
            session: RequestSession::new(),
            limit,
        }
    }

    pub fn session(&self) -> &RequestSession {
        &self.session
    }

    /// Runs the full recommendation pipeline for `title`
    ///
    /// Returns `InvalidInput` for a blank title, `RequestInFlight` while another
    /// request is running and `SeedNotFound` when the title matches nothing.
    /// Failing candidate queries are absorbed; if all of them fail the outcome
    /// is `Empty`.
    pub async fn recommend(&self, title: &str) -> AppResult<RecommendationOutcome> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidInput(
                "Book title cannot be empty".to_string(),
            ));
        }

        let guard = self.session.begin()?;
        let start = Instant::now();

        match self.run(&guard, title).await {
            Ok(outcome) => {
                let phase = match &outcome {
                    RecommendationOutcome::Success(books) => RequestPhase::Succeeded(books.len()),
                    RecommendationOutcome::Empty => RequestPhase::Empty,
                };
                guard.advance(phase);

                tracing::info!(
                    seed = %title,
                    count = outcome.count(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Recommendations completed"
                );

                Ok(outcome)
            }
            Err(e) => {
                guard.advance(RequestPhase::Failed);

                if e.is_seed_not_found() {
                    tracing::info!(seed = %title, "Seed book not found");
                } else {
                    tracing::error!(seed = %title, error = %e, "Recommendation request failed");
                }

                Err(e)
            }
        }
    }

    async fn run(&self, guard: &RequestGuard, title: &str) -> AppResult<RecommendationOutcome> {
        let seed = resolve_seed(self.provider.as_ref(), title).await?;

        guard.advance(RequestPhase::Aggregating);
        let queries = build_queries(&seed.genre, &seed.author);
        let pool = aggregate_candidates(Arc::clone(&self.provider), &queries).await;

        guard.advance(RequestPhase::Filtering);
        let selected = select_recommendations(pool, &seed.input, self.limit);

        Ok(RecommendationOutcome::from_selection(selected))
    }
}
