//! EmbeddingEngine — the main entry point for prism-embeddings.
//!
//! Coordinates input validation, fingerprinting, the configured
//! encoder, and the two-tier cache. Every vector leaving this engine is
//! exactly `dimensions()` wide and unit-norm.

use std::sync::Arc;

use tracing::{debug, info};

use prism_core::config::EmbeddingConfig;
use prism_core::errors::{CacheError, EncodingError, PrismResult};
use prism_core::models::QueryInput;
use prism_core::traits::IEncoder;
use prism_core::vector;

use crate::cache::CacheCoordinator;
use crate::fingerprint::fingerprint;
use crate::providers;
use crate::validate;

/// The main embedding engine.
///
/// Validation runs before fingerprinting, so rejected inputs never hit
/// the cache or the encoder. Encoder output is checked against the
/// configured width and re-normalized before it is admitted to any
/// cache tier — a misbehaving encoder cannot poison stored vectors.
pub struct EmbeddingEngine {
    encoder: Arc<dyn IEncoder>,
    cache: CacheCoordinator,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    ///
    /// Resolves the encoder provider (with fallback) and opens the
    /// persistent cache tier when `cache_path` is set.
    pub fn new(config: EmbeddingConfig) -> Result<Self, CacheError> {
        let encoder: Arc<dyn IEncoder> = Arc::from(providers::create_encoder(&config));
        Self::with_encoder(encoder, config)
    }

    /// Create an engine around an existing encoder.
    ///
    /// Used by tests to inject counting or failing encoders.
    pub fn with_encoder(
        encoder: Arc<dyn IEncoder>,
        config: EmbeddingConfig,
    ) -> Result<Self, CacheError> {
        let cache = match &config.cache_path {
            Some(path) => {
                CacheCoordinator::with_persistent(config.l1_cache_size, std::path::Path::new(path))?
            }
            None => CacheCoordinator::new(config.l1_cache_size),
        };

        info!(
            provider = encoder.name(),
            version = encoder.version(),
            dims = config.dimensions,
            persistent_cache = cache.has_persistent_tier(),
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            encoder,
            cache,
            config,
        })
    }

    /// Embed a text string, with validation and caching.
    pub fn embed_text(&self, text: &str) -> PrismResult<Vec<f32>> {
        validate::validate_text(text)?;

        let fp = fingerprint(self.encoder.version(), text.as_bytes());
        debug!(fingerprint = %fp, "embedding text");

        self.cache
            .get_or_compute(&fp, || self.checked_encode(|e| e.encode_text(text)))
    }

    /// Embed raw image bytes, with validation and caching.
    pub fn embed_image(&self, bytes: &[u8]) -> PrismResult<Vec<f32>> {
        validate::validate_image(bytes, self.config.max_image_bytes)?;

        let fp = fingerprint(self.encoder.version(), bytes);
        debug!(fingerprint = %fp, size_bytes = bytes.len(), "embedding image");

        self.cache
            .get_or_compute(&fp, || self.checked_encode(|e| e.encode_image(bytes)))
    }

    /// Embed either kind of query input.
    pub fn embed_query(&self, input: &QueryInput) -> PrismResult<Vec<f32>> {
        match input {
            QueryInput::Text(text) => self.embed_text(text),
            QueryInput::Image(bytes) => self.embed_image(bytes),
        }
    }

    /// Run the encoder and enforce the output contract.
    fn checked_encode<F>(&self, encode: F) -> PrismResult<Vec<f32>>
    where
        F: FnOnce(&dyn IEncoder) -> PrismResult<Vec<f32>>,
    {
        let embedding = encode(self.encoder.as_ref())?;

        if embedding.len() != self.config.dimensions {
            return Err(EncodingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        Ok(vector::l2_normalize(embedding))
    }

    /// The width of every vector this engine produces.
    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    /// Name of the active encoder provider.
    pub fn provider_name(&self) -> &str {
        self.encoder.name()
    }

    /// Version tag of the active encoder.
    pub fn encoder_version(&self) -> &str {
        self.encoder.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_engine(dims: usize) -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            provider: "hash".to_string(),
            dimensions: dims,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn engine_creates_with_hash_provider() {
        let engine = hash_engine(128);
        assert_eq!(engine.dimensions(), 128);
        assert_eq!(engine.provider_name(), "hash-encoder");
    }

    #[test]
    fn embed_text_returns_unit_norm_vector() {
        let engine = hash_engine(128);
        let vec = engine.embed_text("a dog running on the beach").unwrap();
        assert_eq!(vec.len(), 128);
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn embed_text_rejects_empty() {
        let engine = hash_engine(128);
        assert!(engine.embed_text("   ").is_err());
    }

    #[test]
    fn embed_text_is_deterministic_across_calls() {
        let engine = hash_engine(128);
        let a = engine.embed_text("same query").unwrap();
        let b = engine.embed_text("same query").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn embed_query_dispatches_on_modality() {
        let engine = hash_engine(128);
        let vec = engine
            .embed_query(&QueryInput::Text("hello world".to_string()))
            .unwrap();
        assert_eq!(vec.len(), 128);
    }

    #[test]
    fn oversized_image_rejected_without_decoding() {
        let engine = hash_engine(128);
        let huge = vec![0u8; 10 * 1024 * 1024 + 1];
        let err = engine.embed_image(&huge);
        assert!(matches!(
            err,
            Err(prism_core::errors::PrismError::Input(
                prism_core::errors::InputError::ImageTooLarge { .. }
            ))
        ));
    }
}
