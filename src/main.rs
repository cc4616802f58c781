//! Who Gets the Mic? - HTTP server entry point

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mic_rotation::api::{create_router, AppState};
use mic_rotation::{Config, JsonFileStore, StoreError};

#[derive(Debug, Error)]
enum ServerError {
    #[error("could not open data directory: {0}")]
    Store(#[from] StoreError),

    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not install shutdown handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(Config::from_env()).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    let store = Arc::new(JsonFileStore::open(&config.data_dir)?);
    tracing::info!(dir = %store.data_dir().display(), roster = config.roster.len(), "state directory ready");

    let state = Arc::new(AppState::from_config(&config, store));
    let app = create_router(state);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(true);
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🎤 Who Gets the Mic? server running on port {}", config.port);
    tracing::info!("📍 Health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.wait_for(|stop| *stop).await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
