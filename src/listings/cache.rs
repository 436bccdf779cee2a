//! Freshness cache for aggregated server lists, keyed by game id
//!
//! One entry per game id, overwritten (never merged) on recomputation.
//! Staleness is evaluated lazily on read; expired entries are popped when
//! encountered rather than swept in the background. The store is a bounded
//! LRU so long-running processes cannot accumulate entries for unbounded
//! numbers of distinct game ids.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::constants::{SERVER_LIST_CACHE_CAPACITY, cache_ttl};
use crate::listings::models::ServerListResponse;

/// A cached aggregated response with its creation timestamp.
#[derive(Debug, Clone)]
pub struct CachedServerList {
    pub data: ServerListResponse,
    pub cached_at: Instant,
}

impl CachedServerList {
    pub fn new(data: ServerListResponse) -> Self {
        Self {
            data,
            cached_at: Instant::now(),
        }
    }

    /// An entry is usable iff it is younger than the cache's TTL.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() >= ttl
    }
}

/// Bounded TTL cache owned by the orchestrator and shared across request
/// tasks. Concurrent misses for the same key are allowed to race; the last
/// write wins, which is harmless because recomputation is idempotent.
pub struct ServerListCache {
    entries: RwLock<LruCache<String, CachedServerList>>,
    ttl: Duration,
}

impl Default for ServerListCache {
    fn default() -> Self {
        Self::new(
            SERVER_LIST_CACHE_CAPACITY,
            Duration::from_secs(cache_ttl::SERVER_LIST_SECONDS),
        )
    }
}

impl ServerListCache {
    /// Creates a cache with explicit capacity and TTL. Tests use short TTLs
    /// here; production construction goes through `Default`.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Retrieves the cached response for a game id if it is still fresh.
    #[instrument(skip(self))]
    pub async fn get(&self, game_id: &str) -> Option<ServerListResponse> {
        let mut entries = self.entries.write().await;

        let Some(entry) = entries.get(game_id) else {
            debug!("Cache miss for gameId={game_id}");
            return None;
        };

        if entry.is_expired(self.ttl) {
            warn!(
                "Removing expired server list cache entry: gameId={}, age={:?}, ttl={:?}",
                game_id,
                entry.cached_at.elapsed(),
                self.ttl
            );
            entries.pop(game_id);
            return None;
        }

        debug!(
            "Cache hit for gameId={}, count={}, age={:?}",
            game_id,
            entry.data.count,
            entry.cached_at.elapsed()
        );
        Some(entry.data.clone())
    }

    /// Stores a freshly aggregated response, replacing any previous entry
    /// for the same game id.
    #[instrument(skip(self, data))]
    pub async fn insert(&self, game_id: &str, data: ServerListResponse) {
        let count = data.count;
        let mut entries = self.entries.write().await;
        entries.put(game_id.to_string(), CachedServerList::new(data));

        info!(
            "Cached server list: gameId={}, count={}, ttl={:?}",
            game_id, count, self.ttl
        );
    }

    /// Number of entries currently held, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every entry. Used by tests.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(game_id: &str, total: usize) -> ServerListResponse {
        ServerListResponse {
            game_id: game_id.to_string(),
            total,
            count: 0,
            servers: vec![],
        }
    }

    #[tokio::test]
    async fn test_get_returns_fresh_entry_verbatim() {
        let cache = ServerListCache::new(10, Duration::from_secs(60));
        cache.insert("123", response("123", 42)).await;

        let hit = cache.get("123").await.unwrap();
        assert_eq!(hit.game_id, "123");
        assert_eq!(hit.total, 42);
    }

    #[tokio::test]
    async fn test_get_misses_for_unknown_key() {
        let cache = ServerListCache::new(10, Duration::from_secs(60));
        assert!(cache.get("999").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_popped_on_read() {
        let cache = ServerListCache::new(10, Duration::from_millis(20));
        cache.insert("123", response("123", 1)).await;
        assert_eq!(cache.len().await, 1);

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(cache.get("123").await.is_none());
        // lazily removed by the failed read
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_insert_overwrites_previous_entry() {
        let cache = ServerListCache::new(10, Duration::from_secs(60));
        cache.insert("123", response("123", 1)).await;
        cache.insert("123", response("123", 2)).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get("123").await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_lru_eviction_bounds_distinct_game_ids() {
        let cache = ServerListCache::new(2, Duration::from_secs(60));
        cache.insert("1", response("1", 1)).await;
        cache.insert("2", response("2", 2)).await;
        cache.insert("3", response("3", 3)).await;

        assert_eq!(cache.len().await, 2);
        // oldest entry evicted
        assert!(cache.get("1").await.is_none());
        assert!(cache.get("3").await.is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = ServerListCache::new(10, Duration::from_secs(60));
        cache.insert("1", response("1", 1)).await;
        assert!(!cache.is_empty().await);

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
