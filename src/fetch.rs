// Cache-backed fetching.
// Wraps network calls in a read-through cache with a freshness TTL.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::{CacheEntry, KeyValueStore};
use crate::error::Result;

/// How long fetched language data stays fresh: 24 hours.
pub const LANGUAGES_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache key for a repository's language data.
pub fn languages_cache_key(repo: &str) -> String {
    format!("github_languages_{}", repo)
}

/// Source of the current time, injectable for tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Read-through cache over an async fetch.
///
/// A fresh cached entry is returned without touching the network; on a
/// miss the fetch runs and its result is written back. Concurrent
/// misses for the same key each fetch, and the last write wins.
#[derive(Debug, Clone)]
pub struct CachedFetcher<S, C> {
    store: S,
    clock: C,
    ttl: Duration,
}

impl<S: KeyValueStore, C: Clock> CachedFetcher<S, C> {
    pub fn new(store: S, clock: C, ttl: Duration) -> Self {
        Self { store, clock, ttl }
    }

    /// Return the cached value for `cache_key` if fresh, otherwise run
    /// `fetch` and cache its result. Fetch errors propagate; a stale
    /// entry is never served in their place.
    pub async fn fetch_with_cache<T, F, Fut>(&self, cache_key: &str, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(data) = self.read_fresh(cache_key) {
            return Ok(data);
        }

        let data = fetch().await?;
        self.write_entry(cache_key, &data);
        Ok(data)
    }

    /// Read a cached entry, treating missing, unparseable, and stale
    /// entries alike as a miss.
    fn read_fresh<T: DeserializeOwned>(&self, cache_key: &str) -> Option<T> {
        let raw = self.store.get(cache_key)?;
        let entry = CacheEntry::<T>::from_json(&raw).ok()?;
        if entry.is_fresh(self.clock.now(), self.ttl) {
            Some(entry.data)
        } else {
            None
        }
    }

    /// Best-effort write; the cache being unavailable is not an error.
    fn write_entry<T: Serialize>(&self, cache_key: &str, data: &T) {
        let entry = CacheEntry::new(data, self.clock.now());
        if let Ok(json) = entry.to_json() {
            let _ = self.store.set(cache_key, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::cache::MemoryStore;
    use crate::error::FolioError;
    use crate::github::Languages;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn sample_languages() -> Languages {
        [("TypeScript".to_string(), 300), ("CSS".to_string(), 100)]
            .into_iter()
            .collect()
    }

    fn seed_entry(store: &MemoryStore, key: &str, data: &Languages, at: DateTime<Utc>) {
        let entry = CacheEntry::new(data, at);
        store.set(key, &entry.to_json().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn test_miss_fetches_and_writes() {
        let store = MemoryStore::default();
        let now = millis(1_700_000_000_000);
        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_languages())
            })
            .await
            .unwrap();

        assert_eq!(result, sample_languages());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let raw = store.get("github_languages_demo").unwrap();
        let entry = CacheEntry::<Languages>::from_json(&raw).unwrap();
        assert_eq!(entry.data, sample_languages());
        assert_eq!(entry.timestamp, now);
    }

    #[tokio::test]
    async fn test_fresh_entry_skips_fetch() {
        let store = MemoryStore::default();
        let written = millis(1_700_000_000_000);
        let now = written + chrono::Duration::hours(1);
        seed_entry(&store, "github_languages_demo", &sample_languages(), written);

        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok([("Python".to_string(), 999)].into_iter().collect::<Languages>())
            })
            .await
            .unwrap();

        assert_eq!(result, sample_languages());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // The stored entry keeps its original stamp.
        let raw = store.get("github_languages_demo").unwrap();
        let entry = CacheEntry::<Languages>::from_json(&raw).unwrap();
        assert_eq!(entry.timestamp, written);
    }

    #[tokio::test]
    async fn test_stale_entry_refetches() {
        let store = MemoryStore::default();
        let written = millis(1_700_000_000_000);
        let now = written + chrono::Duration::hours(25);
        seed_entry(&store, "github_languages_demo", &sample_languages(), written);

        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);
        let fresh: Languages = [("Rust".to_string(), 512)].into_iter().collect();

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(fresh.clone())
            })
            .await
            .unwrap();

        assert_eq!(result, fresh);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let raw = store.get("github_languages_demo").unwrap();
        let entry = CacheEntry::<Languages>::from_json(&raw).unwrap();
        assert_eq!(entry.data, fresh);
        assert_eq!(entry.timestamp, now);
    }

    #[tokio::test]
    async fn test_second_call_hits_cache() {
        let store = MemoryStore::default();
        let now = millis(1_700_000_000_000);
        let fetcher = CachedFetcher::new(store, FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            fetcher
                .fetch_with_cache("github_languages_demo", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(sample_languages())
                })
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_entry_is_a_miss() {
        let store = MemoryStore::default();
        store.set("github_languages_demo", "not json").unwrap();

        let now = millis(1_700_000_000_000);
        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(sample_languages())
            })
            .await
            .unwrap();

        assert_eq!(result, sample_languages());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The garbage entry is replaced with a valid one.
        let raw = store.get("github_languages_demo").unwrap();
        assert!(CacheEntry::<Languages>::from_json(&raw).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let store = MemoryStore::default();
        let now = millis(1_700_000_000_000);
        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                Err::<Languages, _>(FolioError::Other("network down".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.get("github_languages_demo"), None);
    }

    #[tokio::test]
    async fn test_stale_entry_not_served_on_error() {
        let store = MemoryStore::default();
        let written = millis(1_700_000_000_000);
        let now = written + chrono::Duration::hours(25);
        seed_entry(&store, "github_languages_demo", &sample_languages(), written);
        let before = store.get("github_languages_demo").unwrap();

        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);

        let result = fetcher
            .fetch_with_cache("github_languages_demo", || async {
                Err::<Languages, _>(FolioError::Other("network down".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.get("github_languages_demo").unwrap(), before);
    }

    #[tokio::test]
    async fn test_concurrent_misses_both_fetch() {
        let store = MemoryStore::default();
        let now = millis(1_700_000_000_000);
        let fetcher = CachedFetcher::new(store.clone(), FixedClock(now), LANGUAGES_TTL);
        let calls = AtomicUsize::new(0);

        // Both calls check the cache before either write lands; there
        // is no dedup, so both fetch and the last write wins.
        let (a, b) = tokio::join!(
            fetcher.fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok(sample_languages())
            }),
            fetcher.fetch_with_cache("github_languages_demo", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok(sample_languages())
            }),
        );

        assert_eq!(a.unwrap(), sample_languages());
        assert_eq!(b.unwrap(), sample_languages());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let raw = store.get("github_languages_demo").unwrap();
        let entry = CacheEntry::<Languages>::from_json(&raw).unwrap();
        assert_eq!(entry.data, sample_languages());
    }
}
