//! # prism-corpus
//!
//! The item store and its ingestion paths. A corpus is built once from
//! static sources (caption file + dictionary file) and is read-only for
//! the lifetime of the process.

pub mod ingest;
pub mod store;

pub use store::CorpusStore;
