//! Time-based cache with TTL (Time To Live) support.
//!
//! Holds the buyer list pages fetched from the API. Entries expire after a
//! fixed TTL and can be patched in place when the service knows the backend
//! state changed (a buyer was just created).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.inserted_at) < ttl
    }
}

/// A thread-safe cache with time-based expiration.
///
/// Clones share the same storage.
#[derive(Clone)]
pub struct TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    cache: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new TimedCache with the specified TTL in seconds.
    pub fn new(ttl_seconds: u64) -> Self {
        Self::with_ttl(Duration::from_secs(ttl_seconds))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Insert or replace a value, restarting its TTL.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, entry);
        }
    }

    /// Get a value if it exists and hasn't expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();

        let cache = self.cache.read().ok()?;
        cache
            .get(key)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Patch a fresh entry in place without restarting its TTL.
    ///
    /// Returns `false` when the key is absent or expired; nothing is
    /// inserted in that case.
    pub fn update<F>(&self, key: &K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        let now = Instant::now();

        let Ok(mut cache) = self.cache.write() else {
            return false;
        };

        match cache.get_mut(key) {
            Some(entry) if entry.is_fresh(now, self.ttl) => {
                f(&mut entry.value);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_and_get() {
        let cache = TimedCache::new(60);
        cache.insert("page0", vec!["acme"]);

        assert_eq!(cache.get(&"page0"), Some(vec!["acme"]));
        assert_eq!(cache.get(&"page1"), None);
    }

    #[test]
    fn test_ttl_expiration() {
        let cache = TimedCache::with_ttl(Duration::from_millis(50));
        cache.insert("page0", 1);

        assert_eq!(cache.get(&"page0"), Some(1));
        thread::sleep(Duration::from_millis(80));
        assert_eq!(cache.get(&"page0"), None);

        cache.insert("page0", 2);
        assert_eq!(cache.get(&"page0"), Some(2));
    }

    #[test]
    fn test_update_patches_fresh_entry() {
        let cache = TimedCache::new(60);
        cache.insert("page0", vec!["globex"]);

        let updated = cache.update(&"page0", |buyers| buyers.insert(0, "acme"));

        assert!(updated);
        assert_eq!(cache.get(&"page0"), Some(vec!["acme", "globex"]));
    }

    #[test]
    fn test_update_skips_missing_and_expired() {
        let cache: TimedCache<&str, Vec<&str>> = TimedCache::with_ttl(Duration::from_millis(30));

        assert!(!cache.update(&"page0", |buyers| buyers.push("acme")));
        assert_eq!(cache.get(&"page0"), None);

        cache.insert("page0", vec![]);
        thread::sleep(Duration::from_millis(60));
        assert!(!cache.update(&"page0", |buyers| buyers.push("acme")));
    }

    #[test]
    fn test_clone_shares_storage() {
        let cache1 = TimedCache::new(60);
        let cache2 = cache1.clone();

        cache2.insert("page0", 1);
        assert_eq!(cache1.get(&"page0"), Some(1));
    }
}
