//! In-memory entity cache keyed by collection and id.
//!
//! Entities are stored serialized as their API DTOs with a fixed TTL. Reads
//! fill the cache on miss; updates and deletes invalidate the entry. Expired
//! entries are dropped lazily on read and in bulk by the pruning job.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

/// Default time-to-live for cached entities, in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

#[derive(Clone)]
struct CachedEntry {
    value: Value,
    expires_at: Instant,
}

impl CachedEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Shared cache of serialized entities.
///
/// Clones share the same storage, so the cache lives in application state and
/// is handed to each service by reference.
#[derive(Clone)]
pub struct EntityCache {
    entries: Arc<RwLock<HashMap<String, CachedEntry>>>,
    ttl: Duration,
}

impl EntityCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }

    /// Returns the cached entity if present, unexpired and still decodable.
    ///
    /// An entry that no longer decodes into `T` is treated as a miss.
    pub async fn get<T: DeserializeOwned>(&self, collection: &str, id: &str) -> Option<T> {
        let key = Self::key(collection, id);

        {
            let entries = self.entries.read().await;
            match entries.get(&key) {
                Some(entry) if !entry.is_expired() => {
                    return serde_json::from_value(entry.value.clone()).ok();
                }
                Some(_) => {}
                None => return None,
            }
        }

        self.entries.write().await.remove(&key);
        None
    }

    /// Stores `value` under `collection`/`id` for the cache TTL.
    ///
    /// Values that fail to serialize are skipped with a warning; the cache is
    /// never a source of request failures.
    pub async fn put<T: Serialize>(&self, collection: &str, id: &str, value: &T) {
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Skipping cache write for {}/{}: {}", collection, id, e);
                return;
            }
        };

        self.entries.write().await.insert(
            Self::key(collection, id),
            CachedEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub async fn invalidate(&self, collection: &str, id: &str) {
        self.entries
            .write()
            .await
            .remove(&Self::key(collection, id));
    }

    /// Drops every expired entry and returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for EntityCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS))
    }
}
