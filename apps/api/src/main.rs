mod catalog;
mod config;
mod counselor;
mod errors;
mod explore;
mod favorites;
mod quiz;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::counselor::HttpCounselor;
use crate::favorites::registry::FavoritesRegistry;
use crate::favorites::store::{FileStore, KeyValueStore, MemoryStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // The catalog is required; a bad table stops startup.
    let catalog = Catalog::load(config.catalog_path.as_deref())?;

    // Favorites never block startup; unreadable storage hydrates empty.
    let store: Box<dyn KeyValueStore> = match &config.data_dir {
        Some(dir) => {
            let store = FileStore::new(dir);
            info!("Favorites storage: {}", store.dir().display());
            Box::new(store)
        }
        None => {
            info!("Favorites storage: in memory (DATA_DIR is empty)");
            Box::new(MemoryStore::new())
        }
    };
    let favorites = FavoritesRegistry::hydrate(store);

    let counselor = HttpCounselor::new(
        config.counselor_api_url.clone(),
        Duration::from_secs(config.counselor_timeout_secs),
    )?;
    info!("Counselor endpoint: {}", counselor.endpoint());

    let state = AppState::new(catalog, favorites, Arc::new(counselor));

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
