use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod handlers;
mod memory;
mod models;
mod shortcode;
mod store;

use config::{AppConfig, StorageBackend};
use store::UrlStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    /// The one storage handle shared by every request.
    pub store: Arc<dyn UrlStore>,
    pub config: AppConfig,
}

// ── Entry point ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (ignore error if file is absent; env vars may already be set)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shrinkr=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!("Starting shrinkr on {}:{}", config.host, config.port);
    tracing::info!("Base URL: {}", config.base_url);

    let store = open_store(&config).await?;
    tracing::info!("Using {} store", store.backend_name());

    let bind_addr = format!("{}:{}", config.host, config.port);
    let app = router(Arc::new(AppState { store, config }));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the configured storage backend.
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn UrlStore>> {
    let store: Arc<dyn UrlStore> = match config.storage_backend {
        StorageBackend::Sqlite => {
            let pool = db::connect(&config.database_url, config.db_max_connections).await?;
            Arc::new(db::SqliteStore::new(pool))
        }
        StorageBackend::Memory => Arc::new(memory::MemoryStore::new()),
    };
    Ok(store)
}

// ── Router ─────────────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        .route("/shorten", post(handlers::shorten::shorten))
        .route("/redirect/:id", get(handlers::redirect::redirect))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
