//! Forkpath API server entry point.

use std::error::Error;
use std::sync::Arc;

use forkpath_api::assets::AssetResolver;
use forkpath_api::config::Config;
use forkpath_api::error::AppError;
use forkpath_api::state::AppState;
use forkpath_content::corpus::StoryBook;
use forkpath_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Forkpath API server");

    let config = Config::from_env()?;

    let book = match &config.story_corpus_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading story book");
            StoryBook::from_path(path).map_err(AppError::from)?
        }
        None => StoryBook::builtin().map_err(AppError::from)?,
    };
    tracing::info!(corpus_hash = book.version_hash(), "story book loaded");

    let app_state = AppState::new(
        Arc::new(book),
        Arc::new(SystemClock),
        AssetResolver::new(config.asset_base_url.clone()),
    );
    let app = forkpath_api::app(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(AppError::from)?;

    axum::serve(listener, app).await.map_err(AppError::from)?;

    Ok(())
}
