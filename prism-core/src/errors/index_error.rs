/// Vector index consistency errors.
///
/// Fatal at build time: a broken id-to-row mapping corrupts every later
/// retrieval, so indexing halts rather than silently skipping.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexError {
    #[error("duplicate item id: {id}")]
    DuplicateId { id: String },

    #[error("vector dimension mismatch: index is {expected}-dimensional, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
