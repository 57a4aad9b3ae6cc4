//! # prism-retrieval
//!
//! The retrieval pipeline: encode a query once, search every partition
//! index with the same vector, merge by score, and resolve winners into
//! display-ready context. Also owns the build path that turns a corpus
//! into partition indexes.

pub mod build;
pub mod context;
pub mod engine;

pub use build::IndexBuilder;
pub use context::ContextBuilder;
pub use engine::RetrievalEngine;
