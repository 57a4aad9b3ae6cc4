use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval pipeline defaults. Both values can be overridden per query
/// via `RetrievalOptions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum results returned per query.
    pub top_k: usize,
    /// Minimum cosine similarity for a result to be returned.
    pub similarity_threshold: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
