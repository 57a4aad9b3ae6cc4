//! Trait seams between subsystems.

mod encoder;
mod vector_index;

pub use encoder::IEncoder;
pub use vector_index::IVectorIndex;
