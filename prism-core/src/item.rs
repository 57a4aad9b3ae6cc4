//! Corpus items — the unit of retrieval.

use serde::{Deserialize, Serialize};

/// The modality of a corpus item or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Image,
    Text,
}

/// A single retrievable item. Immutable once indexed.
///
/// Caption items carry `Modality::Image` (the item stands for a photograph,
/// described by its caption text); dictionary items carry `Modality::Text`.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct CorpusItem {
    /// Unique id. Captions use `<image_name>#<caption_idx>`; dictionary
    /// entries use the word itself.
    pub id: String,
    pub modality: Modality,
    /// Opaque locator: the image file name for captions, the word for
    /// dictionary entries.
    pub content_ref: String,
    /// Human-readable text shown in results and fed to the encoder.
    pub display_text: String,
}

impl CorpusItem {
    pub fn new(
        id: impl Into<String>,
        modality: Modality,
        content_ref: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            modality,
            content_ref: content_ref.into(),
            display_text: display_text.into(),
        }
    }
}

/// Identity equality: two items are equal if they have the same id.
/// An item's identity is its corpus id, not its display content.
impl PartialEq for CorpusItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
