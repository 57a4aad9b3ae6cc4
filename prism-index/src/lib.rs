//! # prism-index
//!
//! Exact brute-force inner-product index over unit-normalized vectors.
//! Corpus sizes here (tens of thousands of rows) make exact search cheap,
//! and exactness removes an entire class of recall bugs that approximate
//! structures carry.

pub mod flat;
mod persist;

pub use flat::FlatIpIndex;
