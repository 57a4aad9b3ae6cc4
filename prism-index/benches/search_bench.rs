use criterion::{criterion_group, criterion_main, Criterion};

use prism_core::traits::IVectorIndex;
use prism_index::FlatIpIndex;

/// Deterministic pseudo-random unit vector (xorshift over a seed).
fn make_vector(seed: u64, dims: usize) -> Vec<f32> {
    let mut state = seed.wrapping_mul(0x9e3779b97f4a7c15).max(1);
    let mut v = Vec::with_capacity(dims);
    for _ in 0..dims {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        v.push((state as i64 as f64 / i64::MAX as f64) as f32);
    }
    prism_core::vector::l2_normalize(v)
}

fn build_index(rows: usize, dims: usize) -> FlatIpIndex {
    let mut index = FlatIpIndex::new(dims);
    for i in 0..rows {
        index
            .add(&format!("item{i:05}"), &make_vector(i as u64 + 1, dims))
            .unwrap();
    }
    index
}

fn bench_search_1k(c: &mut Criterion) {
    let index = build_index(1_000, 512);
    let query = make_vector(0xdead, 512);

    c.bench_function("flat_search_1k_rows_512d_k5", |b| {
        b.iter(|| index.search(&query, 5).unwrap());
    });
}

fn bench_search_10k(c: &mut Criterion) {
    let index = build_index(10_000, 512);
    let query = make_vector(0xbeef, 512);

    c.bench_function("flat_search_10k_rows_512d_k5", |b| {
        b.iter(|| index.search(&query, 5).unwrap());
    });
}

fn bench_add(c: &mut Criterion) {
    let vectors: Vec<Vec<f32>> = (0..1_000).map(|i| make_vector(i as u64 + 1, 512)).collect();

    c.bench_function("flat_add_1k_rows_512d", |b| {
        b.iter(|| {
            let mut index = FlatIpIndex::new(512);
            for (i, v) in vectors.iter().enumerate() {
                index.add(&format!("item{i:05}"), v).unwrap();
            }
            index.len()
        });
    });
}

criterion_group!(benches, bench_search_1k, bench_search_10k, bench_add);
criterion_main!(benches);
