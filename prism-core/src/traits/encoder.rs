use crate::errors::PrismResult;

/// A multimodal encoder into the shared embedding space.
///
/// Both methods return vectors in the same `dimensions()`-wide space — that
/// is the property that makes cross-modal search work: a text query can
/// match an image item and vice versa. Implementations must L2-normalize
/// their output.
pub trait IEncoder: Send + Sync {
    /// Encode a text string.
    fn encode_text(&self, text: &str) -> PrismResult<Vec<f32>>;

    /// Encode raw image bytes. Input is assumed to be pre-validated
    /// (size, format); decoding failures still surface as errors.
    fn encode_image(&self, bytes: &[u8]) -> PrismResult<Vec<f32>>;

    /// The dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Version tag mixed into cache fingerprints. Changing the encoding
    /// method must change this tag, invalidating cached vectors.
    fn version(&self) -> &str;

    /// Human-readable encoder name.
    fn name(&self) -> &str;

    /// Whether this encoder is currently available.
    fn is_available(&self) -> bool;
}
