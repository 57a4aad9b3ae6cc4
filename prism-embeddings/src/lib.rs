//! # prism-embeddings
//!
//! Embedding generation for the Prism retrieval engine.
//! Validates inputs, fingerprints content, runs the configured encoder
//! (CLIP via ONNX Runtime, or the hashing fallback), and caches results
//! in a two-tier (memory + SQLite) cache with single-flight semantics.

pub mod cache;
pub mod engine;
pub mod fingerprint;
pub mod preprocess;
pub mod providers;
pub mod validate;

pub use cache::CacheCoordinator;
pub use engine::EmbeddingEngine;
pub use fingerprint::fingerprint;
pub use providers::{create_encoder, ClipOnnxEncoder, HashEncoder};
