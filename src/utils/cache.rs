use std::{future::Future, sync::Arc};

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::models::{cache::CacheEntry, news::NewsResponse};

pub const TRENDING_KEY: &str = "trending";

/// In-process key/value cache with per-entry expiry.
///
/// Owned by the application state; each server instance has its own copy.
pub struct Cache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    fill_locks: DashMap<String, Arc<Mutex<()>>>,
    ttl_seconds: i64,
}

impl<V: Clone> Cache<V> {
    pub fn new(ttl_seconds: i64) -> Self {
        Cache {
            entries: DashMap::new(),
            fill_locks: DashMap::new(),
            ttl_seconds,
        }
    }

    /// Returns the live value for `key`. Expired entries are dropped here.
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entry = self.entries.get(key)?;
            if !entry.is_expired() {
                return Some(entry.value.clone());
            }
        }
        self.entries.remove_if(key, |_, entry| entry.is_expired());
        debug!(key, "Cache entry expired");
        None
    }

    pub fn insert(&self, key: &str, value: V) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, self.ttl_seconds));
    }

    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.remove(key).map(|(_, entry)| entry.value)
    }

    pub fn clear_cache(&self) {
        self.entries.clear();
    }

    /// Returns the cached value for `key`, or runs `fetch` and caches its
    /// result. Concurrent misses on the same key wait for a single `fetch`.
    /// Errors are returned to every caller and nothing is cached.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            debug!(key, "Cache hit");
            return Ok(value);
        }

        let lock = self
            .fill_locks
            .entry(key.to_string())
            .or_default()
            .value()
            .clone();
        let _guard = lock.lock().await;

        // Another caller may have filled the slot while we waited.
        if let Some(value) = self.get(key) {
            debug!(key, "Cache filled while waiting");
            return Ok(value);
        }

        debug!(key, "Cache miss");
        let value = fetch().await?;
        self.insert(key, value.clone());
        Ok(value)
    }
}

impl Cache<NewsResponse> {
    pub fn get_trending_cached(&self) -> Option<NewsResponse> {
        self.get(TRENDING_KEY)
    }

    pub fn set_trending_cached(&self, news: NewsResponse) {
        self.insert(TRENDING_KEY, news);
    }
}
