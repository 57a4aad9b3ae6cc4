use serde::{Deserialize, Serialize};

/// One ranked match. Produced per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub item_id: String,
    /// Cosine similarity between query and item, in [-1, 1].
    pub score: f32,
    /// Position in the final ranking, starting at 0.
    pub rank: usize,
}

/// The ordered output of one retrieval call.
///
/// Results are sorted by descending score, every score clears the
/// similarity threshold the query ran with, and the list is at most top-K
/// long. An empty result is a valid outcome, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub results: Vec<QueryResult>,
    /// Wall-clock duration of the retrieval call, for observability.
    pub latency_ms: u64,
}

impl RetrievalResult {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Item ids in rank order.
    pub fn item_ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.item_id.as_str()).collect()
    }

    /// Score of the best match, if any.
    pub fn top_score(&self) -> Option<f32> {
        self.results.first().map(|r| r.score)
    }
}
