use crate::services::selection::DEFAULT_RECOMMENDATION_LIMIT;
use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Book metadata API base URL
    #[serde(default = "default_books_api_url")]
    pub books_api_url: String,

    /// Optional API key for the book metadata API
    #[serde(default)]
    pub books_api_key: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-call timeout for outbound book searches
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Simulated contact form submission delay
    #[serde(default = "default_contact_delay_ms")]
    pub contact_delay_ms: u64,

    /// Maximum number of books in a recommendation set
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
}

fn default_books_api_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_contact_delay_ms() -> u64 {
    1000
}

fn default_recommendation_limit() -> usize {
    DEFAULT_RECOMMENDATION_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_api_url: default_books_api_url(),
            books_api_key: None,
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
            contact_delay_ms: default_contact_delay_ms(),
            recommendation_limit: default_recommendation_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
