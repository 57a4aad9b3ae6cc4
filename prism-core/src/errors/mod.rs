//! Error taxonomy for the Prism engine.
//!
//! One enum per subsystem, unified under [`PrismError`]. Build-time errors
//! (ingestion, index construction, index load) are fatal and abort the
//! build; query-time errors (input validation, encoding) are returned as
//! structured failures so a single bad query never affects later queries.
//!
//! Every variant carries string or scalar fields only, so the whole
//! taxonomy is `Clone` — the embedding cache shares in-flight computation
//! results (including failures) between concurrent callers.

mod cache_error;
mod config_error;
mod corpus_error;
mod encoding_error;
mod index_error;
mod index_load_error;
mod input_error;

pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use encoding_error::EncodingError;
pub use index_error::IndexError;
pub use index_load_error::IndexLoadError;
pub use input_error::InputError;

/// Top-level error type unifying all subsystem errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PrismError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    IndexLoad(#[from] IndexLoadError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias used across the workspace.
pub type PrismResult<T> = Result<T, PrismError>;
