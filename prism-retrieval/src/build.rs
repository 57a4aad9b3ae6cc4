//! Partition index construction.
//!
//! A partition index is built once from the corpus store: every item of
//! one modality is embedded (display text for dictionary entries, caption
//! text for images) and inserted in corpus order. Build-time failures are
//! fatal — a partially built index is worse than no index.

use std::path::Path;

use prism_core::errors::{IndexLoadError, PrismError, PrismResult};
use prism_core::item::Modality;
use prism_core::traits::IVectorIndex;
use prism_corpus::CorpusStore;
use prism_embeddings::EmbeddingEngine;
use prism_index::FlatIpIndex;
use rayon::prelude::*;
use tracing::info;

/// Builds partition indexes from a corpus store.
pub struct IndexBuilder<'a> {
    embeddings: &'a EmbeddingEngine,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(embeddings: &'a EmbeddingEngine) -> Self {
        Self { embeddings }
    }

    /// Embed every item of `modality` and index the vectors.
    ///
    /// Embedding runs in parallel; insertion is sequential and follows
    /// corpus order, which is what makes equal-score ties reproducible
    /// across rebuilds. The first failed embedding aborts the whole build.
    pub fn build_partition(
        &self,
        store: &CorpusStore,
        modality: Modality,
    ) -> PrismResult<FlatIpIndex> {
        let ids = store.all_ids_for_modality(modality);

        let embedded: Vec<(String, Vec<f32>)> = ids
            .par_iter()
            .map(|id| {
                let item = store.get(id)?;
                let vector = self.embeddings.embed_text(&item.display_text)?;
                Ok((item.id.clone(), vector))
            })
            .collect::<PrismResult<Vec<_>>>()?;

        let mut index = FlatIpIndex::new(self.embeddings.dimensions());
        for (id, vector) in embedded {
            index.add(&id, &vector)?;
        }

        info!(
            partition = ?modality,
            items = index.len(),
            dims = index.dimensions(),
            "partition index built"
        );
        Ok(index)
    }

    /// Load a saved partition index, or build and save it if the file
    /// does not exist yet.
    ///
    /// Only a missing file triggers a rebuild. Any other load failure —
    /// bad magic, truncation, version mismatch — is passed through as
    /// fatal, because silently regenerating over a corrupt file could
    /// mask data loss.
    pub fn load_or_build(
        &self,
        path: &Path,
        store: &CorpusStore,
        modality: Modality,
    ) -> PrismResult<FlatIpIndex> {
        match FlatIpIndex::load(path) {
            Ok(index) => {
                info!(
                    path = %path.display(),
                    items = index.len(),
                    "partition index loaded"
                );
                Ok(index)
            }
            Err(PrismError::IndexLoad(IndexLoadError::Missing { .. })) => {
                info!(path = %path.display(), "index file missing, building from corpus");
                let index = self.build_partition(store, modality)?;
                index.save(path)?;
                Ok(index)
            }
            Err(e) => Err(e),
        }
    }
}
