use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    extractor::TextExtractor,
    fetcher::DocumentFetcher,
    store::{CacheStore, CachedText},
};

/// Memoizes extracted document text per URL for the lifetime of the owning process.
///
/// Concurrent misses for the same URL are not coalesced: each caller fetches and
/// extracts on its own and the last insert wins.
#[derive(Clone)]
pub struct KnowledgeCache {
    fetcher: Arc<dyn DocumentFetcher>,
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn CacheStore>,
}

impl KnowledgeCache {
    pub fn new(
        fetcher: Arc<dyn DocumentFetcher>,
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            store,
        }
    }

    /// Returns the text behind `url`, fetching and extracting it on a miss.
    ///
    /// `None` means the document contributed nothing: the fetch failed, extraction
    /// failed, or extraction produced no text. None of these outcomes are cached.
    pub async fn get_text(&self, url: &str) -> Option<String> {
        if let Some(text) = self.store.get(url).await {
            debug!(url = %url, "Knowledge cache hit");
            return Some(text);
        }

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, error = %e, reason = "fetch_failed", "Document not cached");
                return None;
            }
        };

        let text = match self.extractor.extract(body).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %url, error = %e, reason = "extraction_failed", "Document not cached");
                return None;
            }
        };

        if text.trim().is_empty() {
            warn!(url = %url, reason = "empty_text", "Document not cached");
            return None;
        }

        info!(url = %url, chars = text.chars().count(), "Cached document text");
        self.store
            .insert(CachedText {
                url: url.to_string(),
                text: text.clone(),
            })
            .await;

        Some(text)
    }

    /// Number of URLs currently holding text.
    pub async fn cached_documents(&self) -> usize {
        self.store.len().await
    }
}
