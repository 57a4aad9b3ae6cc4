/// Embedding cache persistence errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    #[error("cache open failed for {path}: {message}")]
    OpenFailed { path: String, message: String },

    #[error("cache read failed: {message}")]
    ReadFailed { message: String },

    #[error("cache write failed: {message}")]
    WriteFailed { message: String },
}
