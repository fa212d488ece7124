//! Sentiment Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lexicon_sentiment_analyzer::api::{self, AppState};
use lexicon_sentiment_analyzer::config::AppConfig;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::load_default()?;
    let state = AppState::new(&cfg);
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    tracing::info!(addr = %cfg.bind, "sentiment service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
