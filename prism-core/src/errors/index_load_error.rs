/// Failures restoring a persisted vector index.
///
/// All variants are fatal — there is no automatic rebuild from a corrupt
/// file, since a silently regenerated index could mask data loss.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IndexLoadError {
    #[error("index file not found: {path}")]
    Missing { path: String },

    #[error("not an index file: bad magic {found}")]
    BadMagic { found: String },

    #[error("unsupported index format version: {found}")]
    UnsupportedVersion { found: u32 },

    #[error("index file truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("malformed item id at row {row}")]
    MalformedId { row: usize },

    #[error("index file io: {message}")]
    Io { message: String },
}
