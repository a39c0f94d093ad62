use anyhow::Context;
use tracing_subscriber::EnvFilter;

use marquee_api::api::{create_router, AppState};
use marquee_api::config::Config;
use marquee_api::services::{MovieCatalog, Recommender, SimilarityMatrix};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the startup artifacts; everything is read-only after this point
    let catalog = MovieCatalog::load(&config.titles_path, &config.metadata_path)
        .context("failed to load movie catalog")?;
    let similarity = SimilarityMatrix::load(&config.similarity_path)
        .context("failed to load similarity matrix")?;
    let recommender =
        Recommender::new(catalog, similarity).context("artifact index spaces are misaligned")?;

    let state = AppState::new(recommender);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
