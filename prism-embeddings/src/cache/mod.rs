//! Two-tier embedding cache.
//!
//! L1 is a moka in-memory cache; L2 is an optional SQLite file that
//! survives restarts. Lookups coalesce: concurrent requests for one
//! fingerprint run the encoder once and share the result.

mod l1_memory;
mod l2_sqlite;

pub use l1_memory::L1MemoryCache;
pub use l2_sqlite::L2SqliteCache;

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use prism_core::errors::{CacheError, PrismError, PrismResult};

/// Coordinates L1 and L2 cache tiers for the embedding engine.
///
/// The read path is L1 → L2 → encoder; whatever the encoder produces is
/// written through to L2 before being admitted to L1. Failed encodes
/// are never cached in either tier.
pub struct CacheCoordinator {
    l1: L1MemoryCache,
    l2: Option<L2SqliteCache>,
}

impl CacheCoordinator {
    /// Memory-only cache.
    pub fn new(l1_capacity: u64) -> Self {
        Self {
            l1: L1MemoryCache::new(l1_capacity),
            l2: None,
        }
    }

    /// Cache with a persistent SQLite tier at the given path.
    pub fn with_persistent(l1_capacity: u64, path: &Path) -> Result<Self, CacheError> {
        Ok(Self {
            l1: L1MemoryCache::new(l1_capacity),
            l2: Some(L2SqliteCache::open(path)?),
        })
    }

    /// Whether a persistent tier is attached.
    pub fn has_persistent_tier(&self) -> bool {
        self.l2.is_some()
    }

    /// Get the embedding for `fingerprint`, computing it at most once.
    ///
    /// The single-flight guarantee comes from the L1 tier: all callers
    /// for one fingerprint funnel through one closure execution, and
    /// that closure consults L2 before invoking the encoder.
    pub fn get_or_compute<F>(&self, fingerprint: &str, compute: F) -> PrismResult<Vec<f32>>
    where
        F: FnOnce() -> PrismResult<Vec<f32>>,
    {
        self.l1
            .get_or_try_compute(fingerprint.to_string(), || {
                if let Some(l2) = &self.l2 {
                    if let Some(vec) = l2.get(fingerprint)? {
                        debug!(fingerprint, "L2 cache hit");
                        return Ok(vec);
                    }
                }

                let vec = compute()?;

                if let Some(l2) = &self.l2 {
                    l2.insert(fingerprint, &vec)?;
                }
                Ok(vec)
            })
            .map_err(unwrap_shared_error)
    }

    /// Drop every entry from both tiers.
    pub fn clear(&self) -> PrismResult<()> {
        self.l1.clear();
        if let Some(l2) = &self.l2 {
            l2.clear()?;
        }
        Ok(())
    }
}

/// moka hands every waiter the same `Arc`-wrapped error; unwrap it when
/// this caller is the only holder, clone otherwise.
fn unwrap_shared_error(err: Arc<PrismError>) -> PrismError {
    Arc::try_unwrap(err).unwrap_or_else(|shared| (*shared).clone())
}
