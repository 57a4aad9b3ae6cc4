use std::path::Path;

use crate::errors::PrismResult;

/// A searchable store of item vectors.
///
/// The retrieval engine only speaks this interface, so the exact
/// brute-force implementation can be swapped for an approximate
/// nearest-neighbor structure without touching callers.
pub trait IVectorIndex: Send + Sync {
    /// Append a vector for `item_id`. Fails on duplicate ids and on
    /// vectors whose width differs from the index dimension.
    fn add(&mut self, item_id: &str, vector: &[f32]) -> PrismResult<()>;

    /// Exact inner-product search: the `k` highest-scoring entries in
    /// non-increasing score order, ties broken by insertion order.
    /// Read-only and side-effect free.
    fn search(&self, query: &[f32], k: usize) -> PrismResult<Vec<(String, f32)>>;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of stored vectors.
    fn dimensions(&self) -> usize;

    /// Persist the full vector matrix and id mapping.
    fn save(&self, path: &Path) -> PrismResult<()>;

    /// Restore a previously saved index. Search behavior after a load is
    /// identical to before the save.
    fn load(path: &Path) -> PrismResult<Self>
    where
        Self: Sized;
}
