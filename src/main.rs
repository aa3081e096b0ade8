use std::sync::Arc;

use book_whisperer::{
    api::{create_router, AppState},
    config::Config,
    services::GoogleBooksProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_whisperer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize application state
    let provider = GoogleBooksProvider::from_config(&config)?;
    let state = AppState::new(Arc::new(provider), &config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, books_api = %config.books_api_url, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
