use std::sync::Arc;

use movie_rec_api::{create_router, services::OmdbProvider, AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_rec_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Initialize the upstream provider
    let provider = OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
        config.request_timeout(),
    )?;

    let state = Arc::new(AppState::new(
        Arc::new(provider),
        config.pipeline_settings(),
    ));

    // Create the router with all routes
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        address = %address,
        upstream = %config.omdb_base_url,
        concurrency = config.fanout_concurrency,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
