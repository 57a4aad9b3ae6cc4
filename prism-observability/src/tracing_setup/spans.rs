//! Span definitions per operation: retrieval, embedding, index build, ingest.
//!
//! Each span carries duration, result, and metadata via the `tracing` crate.

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("prism.retrieval", query = %$query, top_k = $top_k)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimensions:expr) => {
        tracing::info_span!("prism.embedding", provider = %$provider, dimensions = $dimensions)
    };
}

/// Create an index build span.
#[macro_export]
macro_rules! index_build_span {
    ($partition:expr, $item_count:expr) => {
        tracing::info_span!("prism.index_build", partition = %$partition, item_count = $item_count)
    };
}

/// Create a corpus ingest span.
#[macro_export]
macro_rules! ingest_span {
    ($path:expr) => {
        tracing::info_span!("prism.ingest", path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "prism.retrieval";
    pub const EMBEDDING: &str = "prism.embedding";
    pub const INDEX_BUILD: &str = "prism.index_build";
    pub const INGEST: &str = "prism.ingest";
}
