//! Property tests: search ordering, score exactness, round-trip identity.

use proptest::prelude::*;

use prism_core::traits::IVectorIndex;
use prism_core::vector;
use prism_index::FlatIpIndex;

const DIMS: usize = 16;

fn arb_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-10.0f32..10.0, DIMS)
}

fn arb_corpus() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(arb_vector(), 1..40)
}

fn build_index(rows: &[Vec<f32>]) -> FlatIpIndex {
    let mut index = FlatIpIndex::new(DIMS);
    for (i, row) in rows.iter().enumerate() {
        index.add(&format!("row{i:03}"), row).unwrap();
    }
    index
}

proptest! {
    #[test]
    fn prop_search_returns_at_most_k_sorted(
        rows in arb_corpus(),
        query in arb_vector(),
        k in 0usize..50
    ) {
        let index = build_index(&rows);
        let hits = index.search(&query, k).unwrap();

        prop_assert!(hits.len() <= k);
        prop_assert!(hits.len() <= rows.len());
        for pair in hits.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1, "scores must be non-increasing");
        }
    }

    #[test]
    fn prop_scores_are_exact_inner_products(
        rows in arb_corpus(),
        query in arb_vector()
    ) {
        let index = build_index(&rows);
        // k = all rows so every stored vector appears.
        let hits = index.search(&query, rows.len()).unwrap();

        for (id, score) in hits {
            let row: usize = id[3..].parse().unwrap();
            let stored = vector::l2_normalize(rows[row].clone());
            let expected = vector::dot(&query, &stored);
            prop_assert!(
                (score - expected).abs() < 1e-5,
                "score {score} must equal recomputed inner product {expected}"
            );
        }
    }

    #[test]
    fn prop_every_stored_row_is_unit_norm_or_zero(
        rows in arb_corpus(),
    ) {
        let index = build_index(&rows);
        // Searching with each basis vector recovers each coordinate; instead
        // verify through a self-query: a unit row scores 1.0 against itself.
        for (i, row) in rows.iter().enumerate() {
            let normalized = vector::l2_normalize(row.clone());
            if vector::l2_norm(&normalized) == 0.0 {
                continue; // degenerate all-zero input stays zero
            }
            let hits = index.search(&normalized, rows.len()).unwrap();
            let own = hits.iter().find(|(id, _)| *id == format!("row{i:03}")).unwrap();
            prop_assert!((own.1 - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn prop_round_trip_is_identity(
        rows in arb_corpus(),
        query in arb_vector()
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.pidx");

        let index = build_index(&rows);
        index.save(&path).unwrap();
        let restored = FlatIpIndex::load(&path).unwrap();

        let before = index.search(&query, 10).unwrap();
        let after = restored.search(&query, 10).unwrap();
        prop_assert_eq!(before.len(), after.len());
        for ((id_a, score_a), (id_b, score_b)) in before.iter().zip(&after) {
            prop_assert_eq!(id_a, id_b);
            prop_assert!((score_a - score_b).abs() < 1e-6);
        }
    }
}
