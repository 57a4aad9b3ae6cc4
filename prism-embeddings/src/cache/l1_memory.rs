//! L1 in-memory cache using moka.
//!
//! TinyLFU admission policy, per-entry TTL, and built-in request
//! coalescing: concurrent lookups for the same fingerprint share one
//! computation.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use prism_core::errors::PrismError;

/// L1 in-memory embedding cache.
///
/// Keys are content fingerprints. Values are embedding vectors.
pub struct L1MemoryCache {
    cache: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    /// Create a new L1 cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .time_to_live(Duration::from_secs(86400)) // 24 hour max TTL
            .build();

        Self { cache }
    }

    /// Get an embedding by fingerprint.
    pub fn get(&self, fingerprint: &str) -> Option<Vec<f32>> {
        self.cache.get(fingerprint)
    }

    /// Insert an embedding keyed by fingerprint.
    pub fn insert(&self, fingerprint: String, embedding: Vec<f32>) {
        self.cache.insert(fingerprint, embedding);
    }

    /// Get the cached embedding or compute and cache it.
    ///
    /// When several threads ask for the same fingerprint at once, only
    /// one runs `init`; the rest block and receive its result. Errors
    /// are returned to every waiter and nothing is cached for them.
    pub fn get_or_try_compute<F>(
        &self,
        fingerprint: String,
        init: F,
    ) -> Result<Vec<f32>, Arc<PrismError>>
    where
        F: FnOnce() -> Result<Vec<f32>, PrismError>,
    {
        self.cache.try_get_with(fingerprint, init)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
