//! Encoder providers.
//!
//! `create_encoder` resolves the configured provider at startup. When
//! the CLIP models cannot be loaded the engine degrades to the hashing
//! encoder rather than refusing to start; the swap is logged and the
//! differing encoder version keeps the caches honest.

mod clip_onnx;
mod hash_encoder;

pub use clip_onnx::ClipOnnxEncoder;
pub use hash_encoder::HashEncoder;

use tracing::warn;

use prism_core::config::EmbeddingConfig;
use prism_core::traits::IEncoder;

/// Build the encoder named by the config, falling back to the hashing
/// encoder when the primary cannot be constructed.
pub fn create_encoder(config: &EmbeddingConfig) -> Box<dyn IEncoder> {
    match config.provider.as_str() {
        "clip-onnx" => {
            match ClipOnnxEncoder::load(
                &config.text_model_path,
                &config.vision_model_path,
                config.dimensions,
            ) {
                Ok(encoder) => Box::new(encoder),
                Err(e) => {
                    warn!(
                        error = %e,
                        "CLIP ONNX encoder unavailable, falling back to hash encoder"
                    );
                    Box::new(HashEncoder::new(config.dimensions))
                }
            }
        }
        "hash" => Box::new(HashEncoder::new(config.dimensions)),
        other => {
            warn!(
                provider = other,
                "unknown encoder provider, falling back to hash encoder"
            );
            Box::new(HashEncoder::new(config.dimensions))
        }
    }
}
