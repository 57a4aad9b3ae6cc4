//! RetrievalEngine: the cross-partition query pipeline.
//!
//! One query vector, searched against every partition with the same k;
//! candidates merge into a single score-ordered, threshold-filtered,
//! top-K-truncated result list.

use std::cmp::Ordering;
use std::time::Instant;

use prism_core::config::RetrievalConfig;
use prism_core::errors::PrismResult;
use prism_core::models::{QueryInput, QueryResult, RetrievalOptions, RetrievalResult};
use prism_core::traits::IVectorIndex;
use prism_embeddings::EmbeddingEngine;
use tracing::{debug, info};

/// A partition hit before merging. `partition_rank` is the hit's position
/// within its own partition's result list; it breaks cross-partition score
/// ties so the merge order never depends on which partition was searched
/// first.
struct Candidate {
    item_id: String,
    score: f32,
    partition_rank: usize,
}

/// The main retrieval engine. Orchestrates the full pipeline:
/// query → encode → per-partition search → merge → threshold → rank.
pub struct RetrievalEngine<'a> {
    embeddings: &'a EmbeddingEngine,
    caption_index: &'a dyn IVectorIndex,
    dictionary_index: &'a dyn IVectorIndex,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        embeddings: &'a EmbeddingEngine,
        caption_index: &'a dyn IVectorIndex,
        dictionary_index: &'a dyn IVectorIndex,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            embeddings,
            caption_index,
            dictionary_index,
            config,
        }
    }

    /// Run one query through the full pipeline.
    ///
    /// `options` overrides the configured `top_k` and
    /// `similarity_threshold` for this call only. An empty result list is
    /// a normal outcome, not an error: nothing in the corpus cleared the
    /// threshold.
    pub fn retrieve(
        &self,
        query: &QueryInput,
        options: RetrievalOptions,
    ) -> PrismResult<RetrievalResult> {
        let started = Instant::now();
        let top_k = options.top_k.unwrap_or(self.config.top_k);
        let threshold = options
            .similarity_threshold
            .unwrap_or(self.config.similarity_threshold);

        // Step 1: Validate and encode. Both happen inside the embedding
        // engine; a malformed query never reaches the indexes.
        let query_vector = self.embeddings.embed_query(query)?;
        debug!(
            modality = ?query.modality(),
            dims = query_vector.len(),
            "query encoded"
        );

        // Step 2: Search every partition with the same vector and the
        // same k. Each partition returns its own best matches; the merge
        // below decides the final order.
        let mut pool: Vec<Candidate> = Vec::new();
        for index in [self.caption_index, self.dictionary_index] {
            let hits = index.search(&query_vector, top_k)?;
            for (partition_rank, (item_id, score)) in hits.into_iter().enumerate() {
                pool.push(Candidate {
                    item_id,
                    score,
                    partition_rank,
                });
            }
        }
        debug!(candidates = pool.len(), "partition search complete");

        // Step 3: Threshold filter.
        pool.retain(|c| c.score >= threshold);

        // Step 4: Merge order — score descending, then partition rank,
        // then id. Deterministic for any input.
        pool.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.partition_rank.cmp(&b.partition_rank))
                .then_with(|| a.item_id.cmp(&b.item_id))
        });

        // Step 5: Truncate to k and assign final ranks.
        pool.truncate(top_k);
        let results: Vec<QueryResult> = pool
            .into_iter()
            .enumerate()
            .map(|(rank, c)| QueryResult {
                item_id: c.item_id,
                score: c.score,
                rank,
            })
            .collect();

        let latency_ms = started.elapsed().as_millis() as u64;
        info!(
            query = %query.summary(),
            results = results.len(),
            top_k,
            threshold,
            latency_ms,
            "retrieval complete"
        );

        Ok(RetrievalResult {
            results,
            latency_ms,
        })
    }
}
