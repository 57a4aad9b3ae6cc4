//! The flat (brute-force) inner-product index.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use prism_core::errors::{IndexError, PrismResult};
use prism_core::traits::IVectorIndex;
use prism_core::vector;
use tracing::debug;

use crate::persist;

/// Exact inner-product index.
///
/// Owns a row-major vector matrix and the id-to-row mapping. Row *i* of
/// the matrix belongs to `ids[i]`; the map gives O(1) duplicate detection.
/// Vectors are re-normalized on insert, so inner product against a
/// normalized query is always cosine similarity.
#[derive(Debug)]
pub struct FlatIpIndex {
    dims: usize,
    ids: Vec<String>,
    rows: HashMap<String, usize>,
    /// Row-major matrix, `ids.len() * dims` long.
    matrix: Vec<f32>,
}

impl FlatIpIndex {
    /// Create an empty index for `dims`-wide vectors.
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            ids: Vec::new(),
            rows: HashMap::new(),
            matrix: Vec::new(),
        }
    }

    /// Item ids in insertion order (parallel to the matrix rows).
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether `item_id` has a row in this index.
    pub fn contains(&self, item_id: &str) -> bool {
        self.rows.contains_key(item_id)
    }

    pub(crate) fn from_parts(dims: usize, ids: Vec<String>, matrix: Vec<f32>) -> Self {
        let rows = ids
            .iter()
            .enumerate()
            .map(|(row, id)| (id.clone(), row))
            .collect();
        Self {
            dims,
            ids,
            rows,
            matrix,
        }
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.matrix[i * self.dims..(i + 1) * self.dims]
    }
}

impl IVectorIndex for FlatIpIndex {
    fn add(&mut self, item_id: &str, vector: &[f32]) -> PrismResult<()> {
        if vector.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: vector.len(),
            }
            .into());
        }
        if self.rows.contains_key(item_id) {
            return Err(IndexError::DuplicateId {
                id: item_id.to_string(),
            }
            .into());
        }

        // Normalize at the boundary so inner product equals cosine
        // similarity for every stored row. Idempotent for unit vectors.
        let normalized = vector::l2_normalize(vector.to_vec());
        let row = self.ids.len();
        self.matrix.extend_from_slice(&normalized);
        self.ids.push(item_id.to_string());
        self.rows.insert(item_id.to_string(), row);
        Ok(())
    }

    fn search(&self, query: &[f32], k: usize) -> PrismResult<Vec<(String, f32)>> {
        if query.len() != self.dims {
            return Err(IndexError::DimensionMismatch {
                expected: self.dims,
                actual: query.len(),
            }
            .into());
        }
        if k == 0 || self.ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<(usize, f32)> = (0..self.ids.len())
            .map(|i| (i, vector::dot(query, self.row(i))))
            .collect();

        // Stable sort by descending score: equal scores keep row order,
        // which is insertion order — the documented tie-break.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(k);

        debug!(rows = self.ids.len(), returned = scored.len(), "index scan complete");

        Ok(scored
            .into_iter()
            .map(|(i, score)| (self.ids[i].clone(), score))
            .collect())
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn save(&self, path: &Path) -> PrismResult<()> {
        persist::write_index(path, self.dims, &self.ids, &self.matrix)
    }

    fn load(path: &Path) -> PrismResult<Self> {
        let (dims, ids, matrix) = persist::read_index(path)?;
        Ok(Self::from_parts(dims, ids, matrix))
    }
}
