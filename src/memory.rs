use crate::{
    models::UrlMapping,
    store::{StoreError, UrlStore},
};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe in-process [`UrlStore`] mapping short code -> [`UrlMapping`].
///
/// Backed by a DashMap so concurrent handlers never block each other for
/// long. Nothing survives a restart; select it with `STORAGE_BACKEND=memory`
/// or use it as the store in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<String, UrlMapping>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl UrlStore for MemoryStore {
    async fn create(&self, original_url: &str) -> Result<String, StoreError> {
        let mapping = UrlMapping::new(original_url);
        let id = mapping.id.clone();
        self.inner.insert(id.clone(), mapping);
        Ok(id)
    }

    async fn lookup(&self, id: &str) -> Result<UrlMapping, StoreError> {
        self.inner
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
