use serde::{Deserialize, Serialize};

use crate::item::Modality;

/// One resolved result entry, ready for display or generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextEntry {
    pub item_id: String,
    pub display_text: String,
    pub modality: Modality,
    pub score: f32,
}

/// Context assembled for the downstream answer-generation step.
///
/// Groups the retrieved items by partition so the generation prompt can
/// distinguish photograph captions from dictionary definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    /// Loggable description of the original query.
    pub query_summary: String,
    /// Resolved entries in rank order.
    pub entries: Vec<ContextEntry>,
}

impl GenerationContext {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the sectioned context block consumed by the generation
    /// collaborator. An empty context renders an explicit "no relevant
    /// context" marker so the caller can answer accordingly.
    pub fn render(&self) -> String {
        let mut out = format!("Query: {}\n", self.query_summary);

        if self.entries.is_empty() {
            out.push_str("No relevant context found.\n");
            return out;
        }

        let captions: Vec<&ContextEntry> = self
            .entries
            .iter()
            .filter(|e| e.modality == Modality::Image)
            .collect();
        let definitions: Vec<&ContextEntry> = self
            .entries
            .iter()
            .filter(|e| e.modality == Modality::Text)
            .collect();

        if !captions.is_empty() {
            out.push_str("\nImage captions:\n");
            for entry in captions {
                out.push_str(&format!("- {} (score {:.3})\n", entry.display_text, entry.score));
            }
        }

        if !definitions.is_empty() {
            out.push_str("\nDictionary definitions:\n");
            for entry in definitions {
                out.push_str(&format!("- {} (score {:.3})\n", entry.display_text, entry.score));
            }
        }

        out
    }
}
