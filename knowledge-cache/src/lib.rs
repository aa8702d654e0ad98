//! Process-lifetime memoization of extracted document text, keyed by source URL.
//!
//! A miss fetches the document over HTTP, extracts its text and stores it only when
//! the text is non-empty, so failed or empty documents are retried on the next call.

pub mod cache;
pub mod extractor;
pub mod fetcher;
pub mod store;

pub use cache::KnowledgeCache;
pub use extractor::{ContentTextExtractor, TextExtractor};
pub use fetcher::{DocumentFetcher, HttpFetcher};
pub use store::{CacheStore, CachedText, InMemoryCacheStore};
