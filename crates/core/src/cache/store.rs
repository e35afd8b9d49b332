//! TTL-bounded description store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// A cached description with the instant it was extracted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub description: String,
    pub fetched_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() > ttl
    }
}

/// Process-wide description cache shared between requests and the sweeper.
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Debug, Clone)]
pub struct DescriptionCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Duration,
}

impl DescriptionCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entries: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached description if present and still within the TTL.
    ///
    /// A stale entry is reported as a miss but left in place for the sweeper.
    pub async fn get(&self, url: &str) -> Option<String> {
        let entries = self.entries.read().await;
        match entries.get(url) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                tracing::debug!("description cache hit for {}", url);
                Some(entry.description.clone())
            }
            Some(_) => {
                tracing::debug!("description cache entry for {} is stale", url);
                None
            }
            None => None,
        }
    }

    /// Insert or overwrite the entry for `url`, stamped with the current instant.
    pub async fn put(&self, url: &str, description: impl Into<String>) {
        let entry = CacheEntry { description: description.into(), fetched_at: Instant::now() };
        self.entries.write().await.insert(url.to_string(), entry);
    }

    /// Drop the entry for `url`. Returns whether one existed.
    pub async fn remove(&self, url: &str) -> bool {
        self.entries.write().await.remove(url).is_some()
    }

    /// Delete every entry older than the TTL.
    ///
    /// Returns the number of deleted entries.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(self.ttl));
        before - entries.len()
    }

    /// Number of stored entries, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
