/// Encoder failures on otherwise well-formed input.
///
/// These are surfaced to the caller, never retried — encoding is
/// deterministic, so a retry would not change the outcome.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EncodingError {
    #[error("model load failed for {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
