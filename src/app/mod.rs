pub mod assets;
pub mod handlers;

use axum::routing::get;
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::adapters::LocalAssetDirectory;
use crate::config::SiteConfig;
use crate::core::{GalleryResolver, GallerySettings};
use crate::domain::ports::AssetDirectory;

/// Immutable per-process state shared by every handler.
pub struct AppState {
    pub resolver: GalleryResolver,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &SiteConfig, assets: Arc<dyn AssetDirectory>) -> Self {
        Self {
            resolver: GalleryResolver::new(assets, GallerySettings::from_config(config)),
            public_dir: config.public_dir(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config, Arc::new(LocalAssetDirectory::new()))
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/gallery", get(handlers::gallery))
        .route("/health", get(handlers::health))
        .fallback(get(assets::serve_asset))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
