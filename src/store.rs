use crate::models::UrlMapping;
use async_trait::async_trait;

/// Failure modes of a [`UrlStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("URL not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence for short code -> original URL mappings.
///
/// Handlers hold one shared `Arc<dyn UrlStore>`; implementations rely on
/// their own backend for concurrency control.
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Derive the short code for `original_url` and persist the mapping,
    /// overwriting any existing row with the same code. Returns the code.
    async fn create(&self, original_url: &str) -> Result<String, StoreError>;

    /// Fetch the mapping stored under `id`.
    async fn lookup(&self, id: &str) -> Result<UrlMapping, StoreError>;

    /// Short name for startup logging.
    fn backend_name(&self) -> &'static str;
}
