//! Property tests: ordering, filtering, and truncation laws of the
//! retrieval pipeline over arbitrary corpora and queries.

use std::collections::HashSet;

use proptest::prelude::*;

use prism_core::config::{EmbeddingConfig, RetrievalConfig};
use prism_core::item::{CorpusItem, Modality};
use prism_core::models::{QueryInput, RetrievalOptions};
use prism_corpus::CorpusStore;
use prism_embeddings::EmbeddingEngine;
use prism_index::FlatIpIndex;
use prism_retrieval::{IndexBuilder, RetrievalEngine};

const DIMS: usize = 64;

fn hash_engine() -> EmbeddingEngine {
    let config = EmbeddingConfig {
        provider: "hash".to_string(),
        dimensions: DIMS,
        ..EmbeddingConfig::default()
    };
    EmbeddingEngine::new(config).unwrap()
}

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{2,10}"
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_word(), 1..6).prop_map(|words| words.join(" "))
}

fn arb_texts(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_text(), 0..max)
}

/// Build both partition indexes from generated caption and definition
/// texts. Ids are disjoint across partitions by construction, as they are
/// in the real corpus format.
fn build_fixture(
    engine: &EmbeddingEngine,
    captions: &[String],
    definitions: &[String],
) -> (FlatIpIndex, FlatIpIndex) {
    let mut items = Vec::new();
    for (i, text) in captions.iter().enumerate() {
        items.push(CorpusItem::new(
            format!("img{i:03}#0"),
            Modality::Image,
            format!("img{i:03}.jpg"),
            text.clone(),
        ));
    }
    for (i, text) in definitions.iter().enumerate() {
        items.push(CorpusItem::new(
            format!("word{i:03}"),
            Modality::Text,
            format!("word{i:03}"),
            text.clone(),
        ));
    }
    let store = CorpusStore::from_items(items).unwrap();
    let builder = IndexBuilder::new(engine);
    let caption_index = builder.build_partition(&store, Modality::Image).unwrap();
    let dictionary_index = builder.build_partition(&store, Modality::Text).unwrap();
    (caption_index, dictionary_index)
}

proptest! {
    #[test]
    fn prop_results_respect_k_threshold_and_order(
        captions in arb_texts(10),
        definitions in arb_texts(10),
        query in arb_text(),
        k in 0usize..15,
        threshold in -1.0f32..=1.0,
    ) {
        let engine = hash_engine();
        let (caption_index, dictionary_index) = build_fixture(&engine, &captions, &definitions);
        let retrieval = RetrievalEngine::new(
            &engine,
            &caption_index,
            &dictionary_index,
            RetrievalConfig::default(),
        );

        let result = retrieval.retrieve(
            &QueryInput::Text(query),
            RetrievalOptions::default().with_top_k(k).with_threshold(threshold),
        ).unwrap();

        prop_assert!(result.len() <= k);
        for r in &result.results {
            prop_assert!(r.score >= threshold, "score {} below threshold {}", r.score, threshold);
        }
        for pair in result.results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score, "scores must be non-increasing");
        }
        for (i, r) in result.results.iter().enumerate() {
            prop_assert_eq!(r.rank, i, "ranks must be dense from zero");
        }

        // Every result id exists in exactly one partition, and no id
        // appears twice.
        let known: HashSet<&str> = caption_index
            .ids()
            .iter()
            .chain(dictionary_index.ids())
            .map(String::as_str)
            .collect();
        let mut seen = HashSet::new();
        for r in &result.results {
            prop_assert!(known.contains(r.item_id.as_str()));
            prop_assert!(seen.insert(r.item_id.as_str()), "duplicate id in results");
        }
    }

    #[test]
    fn prop_retrieval_is_deterministic(
        captions in arb_texts(8),
        definitions in arb_texts(8),
        query in arb_text(),
    ) {
        let engine = hash_engine();
        let (caption_index, dictionary_index) = build_fixture(&engine, &captions, &definitions);
        let retrieval = RetrievalEngine::new(
            &engine,
            &caption_index,
            &dictionary_index,
            RetrievalConfig::default(),
        );
        let q = QueryInput::Text(query);

        let first = retrieval.retrieve(&q, RetrievalOptions::default()).unwrap();
        let second = retrieval.retrieve(&q, RetrievalOptions::default()).unwrap();

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.results.iter().zip(&second.results) {
            prop_assert_eq!(&a.item_id, &b.item_id);
            prop_assert_eq!(a.score, b.score, "scores must be bit-identical across runs");
            prop_assert_eq!(a.rank, b.rank);
        }
    }

    #[test]
    fn prop_raising_the_threshold_only_shrinks_results(
        captions in arb_texts(8),
        definitions in arb_texts(8),
        query in arb_text(),
        t_a in -1.0f32..=1.0,
        t_b in -1.0f32..=1.0,
    ) {
        let (t_lo, t_hi) = if t_a <= t_b { (t_a, t_b) } else { (t_b, t_a) };
        let engine = hash_engine();
        let (caption_index, dictionary_index) = build_fixture(&engine, &captions, &definitions);
        let retrieval = RetrievalEngine::new(
            &engine,
            &caption_index,
            &dictionary_index,
            RetrievalConfig::default(),
        );
        let q = QueryInput::Text(query);

        let loose = retrieval.retrieve(
            &q,
            RetrievalOptions::default().with_threshold(t_lo),
        ).unwrap();
        let strict = retrieval.retrieve(
            &q,
            RetrievalOptions::default().with_threshold(t_hi),
        ).unwrap();

        // The strict result is exactly the loose result with sub-threshold
        // entries dropped — same items, same order.
        let expected: Vec<&str> = loose
            .results
            .iter()
            .filter(|r| r.score >= t_hi)
            .map(|r| r.item_id.as_str())
            .collect();
        prop_assert_eq!(strict.item_ids(), expected);
    }

    #[test]
    fn prop_growing_k_extends_the_result_prefix(
        captions in arb_texts(8),
        definitions in arb_texts(8),
        query in arb_text(),
        k_a in 0usize..12,
        k_b in 0usize..12,
    ) {
        let (k_lo, k_hi) = if k_a <= k_b { (k_a, k_b) } else { (k_b, k_a) };
        let engine = hash_engine();
        let (caption_index, dictionary_index) = build_fixture(&engine, &captions, &definitions);
        let retrieval = RetrievalEngine::new(
            &engine,
            &caption_index,
            &dictionary_index,
            RetrievalConfig::default(),
        );
        let q = QueryInput::Text(query);

        let small = retrieval.retrieve(
            &q,
            RetrievalOptions::default().with_top_k(k_lo),
        ).unwrap();
        let large = retrieval.retrieve(
            &q,
            RetrievalOptions::default().with_top_k(k_hi),
        ).unwrap();

        let prefix: Vec<&str> = large.item_ids().into_iter().take(small.len()).collect();
        prop_assert_eq!(small.item_ids(), prefix);
        prop_assert!(small.len() <= large.len());
    }

    #[test]
    fn prop_indexed_text_is_its_own_best_match(
        captions in prop::collection::vec(arb_text(), 1..8),
        definitions in arb_texts(8),
        pick in 0usize..8,
    ) {
        let engine = hash_engine();
        let (caption_index, dictionary_index) = build_fixture(&engine, &captions, &definitions);
        let retrieval = RetrievalEngine::new(
            &engine,
            &caption_index,
            &dictionary_index,
            RetrievalConfig::default(),
        );

        // Query with a text that is literally in the corpus: nothing can
        // beat an exact self-match, so the top score is ~1.0.
        let query_text = captions[pick % captions.len()].clone();
        let result = retrieval.retrieve(
            &QueryInput::Text(query_text),
            RetrievalOptions::default().with_threshold(0.0),
        ).unwrap();

        let top = result.top_score().unwrap();
        prop_assert!(top > 0.999, "self-match scored {top}");
    }
}
