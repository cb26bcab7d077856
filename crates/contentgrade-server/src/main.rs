//! Binary entrypoint for the contentgrade HTTP server.
//!
//! Loads `.env` if present, reads [`ServerConfig`] from the environment (see
//! [`contentgrade_server::config`]), and serves the router until shutdown.

use contentgrade_server::config::ServerConfig;
use contentgrade_server::router::build_router;
use contentgrade_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = ServerConfig::from_env()?;
    if config.llm.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; grading requests will fail with 500");
    }

    let app = build_router(AppState::new(&config));

    let addr = config.bind_addr();
    tracing::info!(model = %config.llm.model, "contentgrade server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
