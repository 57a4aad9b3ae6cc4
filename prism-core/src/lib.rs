//! # prism-core
//!
//! Foundation crate for the Prism multimodal retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod item;
pub mod models;
pub mod traits;
pub mod vector;

// Re-export the most commonly used types at the crate root.
pub use config::PrismConfig;
pub use errors::{PrismError, PrismResult};
pub use item::{CorpusItem, Modality};
pub use models::{QueryInput, QueryResult, RetrievalOptions, RetrievalResult};
