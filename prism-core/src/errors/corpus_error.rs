/// Corpus store and ingestion errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CorpusError {
    /// An id referenced by an index is absent from the store. This is a
    /// consistency violation between the two, surfaced rather than skipped.
    #[error("corpus item not found: {id}")]
    ItemNotFound { id: String },

    #[error("duplicate corpus item: {id}")]
    DuplicateItem { id: String },

    #[error("malformed corpus line {line} in {path}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("corpus file io for {path}: {message}")]
    Io { path: String, message: String },
}
