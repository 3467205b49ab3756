use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movie_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::TmdbProvider,
    store::MovieStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        let message = format!("{:#}", e);
        tracing::error!(error = %message, "Startup failed");
        return Err(e);
    }

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let store = MovieStore::load(&config.catalog_path, &config.similarity_path)
        .context("Error loading data")?;

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(provider),
        config.tmdb_image_base_url.clone(),
    );
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
