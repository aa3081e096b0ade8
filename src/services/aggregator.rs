use crate::{
    error::AppResult,
    models::{Book, QueryOutcome},
    services::providers::{BookProvider, SearchRequest},
};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};

/// Join handle that aborts its task when dropped
///
/// Dropping `run_queries` mid-way (e.g. the request was cancelled) drops the
/// remaining handles, so no search outlives the request that issued it.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> AbortOnDrop<T> {
    async fn join(&mut self) -> Result<T, JoinError> {
        (&mut self.0).await
    }
}

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs every candidate query, one task per query
///
/// Tasks are awaited in query order, so the returned outcomes line up with
/// `queries` regardless of completion order. A failed or panicked query turns
/// into `QueryOutcome::Failed` and never aborts the batch.
pub async fn run_queries(provider: Arc<dyn BookProvider>, queries: &[String]) -> Vec<QueryOutcome> {
    let mut tasks: Vec<(String, AbortOnDrop<AppResult<Vec<Book>>>)> =
        Vec::with_capacity(queries.len());

    for query in queries {
        let provider = Arc::clone(&provider);
        let request = SearchRequest::candidates(query);
        let task = tokio::spawn(async move { provider.search(&request).await });
        tasks.push((query.clone(), AbortOnDrop(task)));
    }

    let mut outcomes = Vec::with_capacity(tasks.len());

    for (query, mut task) in tasks {
        let outcome = match task.join().await {
            Ok(Ok(books)) => QueryOutcome::Succeeded { query, books },
            Ok(Err(e)) => {
                tracing::warn!(query = %query, error = %e, "Candidate query failed");
                QueryOutcome::Failed {
                    query,
                    reason: e.to_string(),
                }
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Candidate query task join error");
                QueryOutcome::Failed {
                    query,
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    let failed: Vec<&str> = outcomes
        .iter()
        .filter(|outcome| outcome.is_failed())
        .map(QueryOutcome::query)
        .collect();
    if !failed.is_empty() {
        tracing::warn!(
            success_count = outcomes.len() - failed.len(),
            error_count = failed.len(),
            failed_queries = ?failed,
            "Partial candidate aggregation failure"
        );
    }

    outcomes
}

/// Concatenates successful results in query order, dropping failures
pub fn candidate_pool(outcomes: Vec<QueryOutcome>) -> Vec<Book> {
    outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            QueryOutcome::Succeeded { books, .. } => Some(books),
            QueryOutcome::Failed { .. } => None,
        })
        .flatten()
        .collect()
}

/// Runs the queries and returns the raw candidate pool
pub async fn aggregate_candidates(
    provider: Arc<dyn BookProvider>,
    queries: &[String],
) -> Vec<Book> {
    let outcomes = run_queries(provider, queries).await;
    let pool = candidate_pool(outcomes);

    tracing::debug!(queries = queries.len(), candidates = pool.len(), "Candidate pool built");

    pool
}
