use crate::item::Modality;

/// A query accepted by the retrieval pipeline: raw text or raw image bytes.
#[derive(Debug, Clone)]
pub enum QueryInput {
    Text(String),
    Image(Vec<u8>),
}

impl QueryInput {
    pub fn modality(&self) -> Modality {
        match self {
            QueryInput::Text(_) => Modality::Text,
            QueryInput::Image(_) => Modality::Image,
        }
    }

    /// Short, loggable description of the query. Text is truncated to 120
    /// characters; image bytes are summarized by length.
    pub fn summary(&self) -> String {
        match self {
            QueryInput::Text(t) => {
                if t.chars().count() > 120 {
                    let truncated: String = t.chars().take(120).collect();
                    format!("{truncated}…")
                } else {
                    t.clone()
                }
            }
            QueryInput::Image(bytes) => format!("[image {} bytes]", bytes.len()),
        }
    }
}

/// Per-query overrides for the retrieval defaults. `None` fields fall back
/// to the values in `RetrievalConfig`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetrievalOptions {
    pub top_k: Option<usize>,
    pub similarity_threshold: Option<f32>,
}

impl RetrievalOptions {
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = Some(k);
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = Some(threshold);
        self
    }
}
