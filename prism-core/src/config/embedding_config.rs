use serde::{Deserialize, Serialize};

use super::defaults;

/// Encoder and embedding cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Encoder provider: `"clip-onnx"` or `"hash"` (deterministic fallback).
    pub provider: String,
    /// Width of the shared embedding space.
    pub dimensions: usize,
    /// Path to the ONNX text encoder model.
    pub text_model_path: String,
    /// Path to the ONNX vision encoder model.
    pub vision_model_path: String,
    /// Maximum entries held in the in-process cache tier.
    pub l1_cache_size: u64,
    /// Path for the persistent cache database. `None` keeps the cache
    /// in-memory only.
    pub cache_path: Option<String>,
    /// Maximum accepted query image size in bytes.
    pub max_image_bytes: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_PROVIDER.to_string(),
            dimensions: defaults::DEFAULT_DIMENSIONS,
            text_model_path: defaults::DEFAULT_TEXT_MODEL_PATH.to_string(),
            vision_model_path: defaults::DEFAULT_VISION_MODEL_PATH.to_string(),
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_path: None,
            max_image_bytes: defaults::DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}
