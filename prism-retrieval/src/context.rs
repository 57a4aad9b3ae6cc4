//! Result-to-context resolution.
//!
//! The retrieval pipeline works in item ids; the generation step needs
//! text. The context builder bridges the two by resolving every result id
//! through the corpus store.

use prism_core::errors::PrismResult;
use prism_core::models::{ContextEntry, GenerationContext, QueryInput, RetrievalResult};
use prism_corpus::CorpusStore;
use tracing::debug;

/// Resolves ranked results into a `GenerationContext`.
pub struct ContextBuilder;

impl ContextBuilder {
    /// Resolve each result id and carry its score and modality over,
    /// preserving rank order.
    ///
    /// A result id missing from the store means the index and the corpus
    /// have drifted apart; that is `CorpusError::ItemNotFound`, not a
    /// skippable entry.
    pub fn build(
        query: &QueryInput,
        result: &RetrievalResult,
        store: &CorpusStore,
    ) -> PrismResult<GenerationContext> {
        let mut entries = Vec::with_capacity(result.len());
        for r in &result.results {
            let item = store.get(&r.item_id)?;
            entries.push(ContextEntry {
                item_id: item.id.clone(),
                display_text: item.display_text.clone(),
                modality: item.modality,
                score: r.score,
            });
        }

        debug!(entries = entries.len(), "context assembled");
        Ok(GenerationContext {
            query_summary: query.summary(),
            entries,
        })
    }
}
