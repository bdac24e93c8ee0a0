//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use merx_core::MerxResult;
use shaku::Interface;
use std::time::Duration;
use tracing::warn;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between Redis, in-memory, or other cache backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> MerxResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> MerxResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> MerxResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> MerxResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;

    /// TTL applied to cached read results unless a caller overrides it.
    fn default_ttl(&self) -> Duration;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any serializable
/// type, plus the read-through and invalidation helpers that the services
/// build on.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> MerxResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> MerxResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Read-through helper: return the cached value on hit; on miss run the
    /// fallback, cache its result when `should_cache` accepts it, and return
    /// it.
    ///
    /// Cache failures on either side are logged and swallowed so a cache
    /// outage degrades to the backing store instead of failing the read.
    /// Errors from the fallback itself (including not-found) propagate, and
    /// nothing is cached for them.
    async fn read_through<T, P, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        should_cache: P,
        fallback: F,
    ) -> MerxResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        P: FnOnce(&T) -> bool + Send,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = MerxResult<T>> + Send,
    {
        match self.get::<T>(key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for key '{}': {}", key, e),
        }

        let value = fallback().await?;

        if should_cache(&value) {
            if let Err(e) = self.set(key, &value, ttl).await {
                warn!("Cache write failed for key '{}': {}", key, e);
            }
        }

        Ok(value)
    }

    /// Deletes the given keys, logging and swallowing per-key failures.
    ///
    /// Called after a store mutation has committed; a failed delete leaves a
    /// stale entry behind until its TTL expires but never converts the
    /// committed write into an error.
    async fn invalidate(&self, keys: &[String]) {
        for key in keys {
            if let Err(e) = self.delete(key).await {
                warn!("Cache invalidation failed for key '{}': {}", key, e);
            }
        }
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_core::MerxError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory cache double that can be told to fail each operation.
    struct FlakyCache {
        entries: Mutex<HashMap<String, String>>,
        fail_gets: bool,
        fail_sets: bool,
        fail_deletes: bool,
    }

    impl FlakyCache {
        fn reliable() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_gets: false,
                fail_sets: false,
                fail_deletes: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail_gets: true,
                fail_sets: true,
                fail_deletes: true,
            }
        }
    }

    #[async_trait]
    impl CacheInterface for FlakyCache {
        async fn get_raw(&self, key: &str) -> MerxResult<Option<String>> {
            if self.fail_gets {
                return Err(MerxError::Cache("get failed".to_string()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str, _ttl: Duration) -> MerxResult<()> {
            if self.fail_sets {
                return Err(MerxError::Cache("set failed".to_string()));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> MerxResult<bool> {
            if self.fail_deletes {
                return Err(MerxError::Cache("delete failed".to_string()));
            }
            Ok(self.entries.lock().unwrap().remove(key).is_some())
        }

        async fn exists(&self, key: &str) -> MerxResult<bool> {
            Ok(self.entries.lock().unwrap().contains_key(key))
        }

        fn is_enabled(&self) -> bool {
            true
        }

        fn default_ttl(&self) -> Duration {
            Duration::from_secs(3600)
        }
    }

    #[tokio::test]
    async fn test_read_through_hit_skips_fallback() {
        let cache = FlakyCache::reliable();
        cache
            .set("k", &"cached".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let calls = AtomicUsize::new(0);
        let value: String = cache
            .read_through("k", Duration::from_secs(60), |_| true, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("fresh".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "cached");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_read_through_miss_populates_cache() {
        let cache = FlakyCache::reliable();

        let value: String = cache
            .read_through("k", Duration::from_secs(60), |_| true, || async {
                Ok("fresh".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "fresh");
        assert!(cache.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_through_predicate_blocks_caching() {
        let cache = FlakyCache::reliable();

        let value: Vec<String> = cache
            .read_through(
                "k",
                Duration::from_secs(60),
                |v: &Vec<String>| !v.is_empty(),
                || async { Ok(Vec::new()) },
            )
            .await
            .unwrap();

        assert!(value.is_empty());
        assert!(!cache.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_through_degrades_on_cache_failure() {
        let cache = FlakyCache::failing();

        let value: String = cache
            .read_through("k", Duration::from_secs(60), |_| true, || async {
                Ok("from store".to_string())
            })
            .await
            .unwrap();

        assert_eq!(value, "from store");
    }

    #[tokio::test]
    async fn test_read_through_propagates_fallback_error() {
        let cache = FlakyCache::reliable();

        let result: MerxResult<String> = cache
            .read_through("k", Duration::from_secs(60), |_| true, || async {
                Err(MerxError::not_found("Product", "missing"))
            })
            .await;

        assert!(matches!(result, Err(MerxError::NotFound { .. })));
        assert!(!cache.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalidate_swallows_failures() {
        let cache = FlakyCache::failing();
        // Must not panic or surface the error.
        cache.invalidate(&["a".to_string(), "b".to_string()]).await;
    }

    #[tokio::test]
    async fn test_invalidate_removes_keys() {
        let cache = FlakyCache::reliable();
        cache
            .set("a", &1u32, Duration::from_secs(60))
            .await
            .unwrap();
        cache
            .set("b", &2u32, Duration::from_secs(60))
            .await
            .unwrap();

        cache.invalidate(&["a".to_string()]).await;

        assert!(!cache.exists("a").await.unwrap());
        assert!(cache.exists("b").await.unwrap());
    }
}
