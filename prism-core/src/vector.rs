//! Dense vector math shared by the encoder, cache, and index layers.
//!
//! All similarity in Prism is inner product over unit-normalized vectors,
//! which makes it equal to cosine similarity. The helpers here are the one
//! place that invariant is computed and checked.

/// Inner product of two equal-length vectors.
///
/// For unit-normalized inputs this is the cosine similarity in [-1, 1].
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "dot product length mismatch");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean (L2) norm.
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale a vector to unit L2 norm.
///
/// A zero vector (norm below `f32::EPSILON`) is returned unchanged — there
/// is no meaningful direction to preserve, and dividing would produce NaNs.
pub fn l2_normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm = l2_norm(&v);
    if norm > f32::EPSILON {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

/// Whether `v` has unit L2 norm within `tolerance`.
pub fn is_unit_norm(v: &[f32], tolerance: f32) -> bool {
    (l2_norm(v) - 1.0).abs() < tolerance
}
