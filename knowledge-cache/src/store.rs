use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// Extracted text retained for a single source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedText {
    pub url: String,
    pub text: String,
}

/// Key-value table backing the knowledge cache.
///
/// Writes for the same key are last-write-wins; callers never remove entries.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, url: &str) -> Option<String>;

    async fn insert(&self, entry: CachedText);

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, url: &str) -> Option<String> {
        self.entries.read().await.get(url).cloned()
    }

    async fn insert(&self, entry: CachedText) {
        self.entries.write().await.insert(entry.url, entry.text);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
