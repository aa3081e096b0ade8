/// Google Books volumes API provider
///
/// Both call shapes hit `/volumes`:
/// 1. Seed lookup: `q=<title>&maxResults=1`
/// 2. Candidate lookup: `q=<query>&maxResults=10&orderBy=relevance`
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ApiVolumeList, Book},
    services::providers::{BookProvider, SearchRequest},
};
use reqwest::Client as HttpClient;
use std::time::Duration;

#[derive(Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl GoogleBooksProvider {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.books_api_url.clone(),
            config.books_api_key.clone(),
            config.request_timeout(),
        )
    }

    fn volumes_url(&self) -> String {
        format!("{}/volumes", self.api_url)
    }

    /// Query string pairs for a search request
    fn query_params(&self, request: &SearchRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", request.query.clone()),
            ("maxResults", request.max_results.to_string()),
        ];

        if let Some(order_by) = request.order_by {
            params.push(("orderBy", order_by.as_str().to_string()));
        }

        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }

        params
    }
}

#[async_trait::async_trait]
impl BookProvider for GoogleBooksProvider {
    async fn search(&self, request: &SearchRequest) -> AppResult<Vec<Book>> {
        let response = self
            .http_client
            .get(self.volumes_url())
            .query(&self.query_params(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )));
        }

        let volumes: ApiVolumeList = response.json().await?;
        let books: Vec<Book> = volumes.into();

        tracing::info!(
            query = %request.query,
            max_results = request.max_results,
            results = books.len(),
            provider = "google_books",
            "Book search completed"
        );

        Ok(books)
    }
}
