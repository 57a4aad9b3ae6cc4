//! CLIP embedding provider backed by ONNX Runtime.
//!
//! Loads the text and vision towers of a CLIP export via the `ort`
//! crate (v2) and projects both into the shared embedding space. Text
//! goes through a hash-to-vocab tokenizer; images go through the
//! standard CLIP resize + normalize pipeline in [`crate::preprocess`].

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use prism_core::constants::{CLIP_IMAGE_SIZE, CLIP_MAX_TOKENS};
use prism_core::errors::{EncodingError, PrismResult};
use prism_core::traits::IEncoder;
use prism_core::vector;

use crate::preprocess;

const BOS_TOKEN: i64 = 49406;
const EOS_TOKEN: i64 = 49407;
const PAD_TOKEN: i64 = 0;

/// CLIP text + vision encoder using the `ort` crate.
///
/// Holds one session per tower and routes each modality to its own
/// graph; both outputs land in the same `dimensions()`-wide space.
pub struct ClipOnnxEncoder {
    /// Session requires `&mut self` for `run`, so we wrap in Mutex
    /// to satisfy the `&self` trait requirement.
    text_session: Mutex<Session>,
    vision_session: Mutex<Session>,
    dimensions: usize,
}

// Safety: Session is Send but not Sync by default. The Mutex provides Sync.
unsafe impl Sync for ClipOnnxEncoder {}

impl ClipOnnxEncoder {
    /// Load both CLIP towers from their ONNX files.
    ///
    /// # Errors
    /// Returns `EncodingError::ModelLoadFailed` for whichever model
    /// cannot be loaded; startup treats that as fatal for this provider.
    pub fn load(text_path: &str, vision_path: &str, dimensions: usize) -> PrismResult<Self> {
        let text_session = Self::open_session(text_path)?;
        let vision_session = Self::open_session(vision_path)?;

        debug!(
            text_model = text_path,
            vision_model = vision_path,
            dims = dimensions,
            "CLIP ONNX sessions loaded"
        );

        Ok(Self {
            text_session: Mutex::new(text_session),
            vision_session: Mutex::new(vision_session),
            dimensions,
        })
    }

    fn open_session(model_path: &str) -> Result<Session, EncodingError> {
        if !Path::new(model_path).exists() {
            return Err(EncodingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            });
        }

        Session::builder()
            .map_err(|e| EncodingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| EncodingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| EncodingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })
    }

    /// Run the text tower on a tokenized sequence.
    fn infer_text(&self, text: &str) -> PrismResult<Vec<f32>> {
        let (input_ids, attention_mask) = clip_tokenize(text);

        let ids_tensor = Tensor::from_array((vec![1i64, CLIP_MAX_TOKENS as i64], input_ids))
            .map_err(|e| EncodingError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mask_tensor = Tensor::from_array((vec![1i64, CLIP_MAX_TOKENS as i64], attention_mask))
            .map_err(|e| EncodingError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session =
            self.text_session
                .lock()
                .map_err(|e| EncodingError::InferenceFailed {
                    reason: format!("session lock poisoned: {e}"),
                })?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| EncodingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Extract the first output tensor.
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EncodingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EncodingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        // Mean pool across the sequence dimension.
        let embedding = if shape.len() == 3 {
            // [batch=1, seq, dims]
            let seq = shape[1] as usize;
            let dims = shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            for s in 0..seq {
                for d in 0..dims {
                    pooled[d] += data[s * dims + d];
                }
            }
            for v in &mut pooled {
                *v /= seq as f32;
            }
            pooled
        } else if shape.len() == 2 {
            // [batch=1, dims] — already pooled.
            let dims = shape[1] as usize;
            data[..dims].to_vec()
        } else {
            return Err(EncodingError::InferenceFailed {
                reason: format!("unexpected output shape: {shape:?}"),
            }
            .into());
        };

        self.project(embedding)
    }

    /// Run the vision tower on preprocessed image pixels.
    fn infer_image(&self, bytes: &[u8]) -> PrismResult<Vec<f32>> {
        let img = preprocess::decode(bytes)?;
        let pixels = preprocess::clip_image_tensor(&img);

        let side = CLIP_IMAGE_SIZE as i64;
        let pixel_tensor = Tensor::from_array((vec![1i64, 3, side, side], pixels)).map_err(|e| {
            EncodingError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session =
            self.vision_session
                .lock()
                .map_err(|e| EncodingError::InferenceFailed {
                    reason: format!("session lock poisoned: {e}"),
                })?;

        let outputs = session
            .run(ort::inputs![pixel_tensor])
            .map_err(|e| EncodingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // Extract the first output tensor.
        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EncodingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EncodingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        // The vision tower emits [batch=1, dims] (pooled CLS) or
        // [batch=1, patches, dims]; mean pool the latter.
        let embedding = if shape.len() == 3 {
            let patches = shape[1] as usize;
            let dims = shape[2] as usize;
            let mut pooled = vec![0.0f32; dims];
            for p in 0..patches {
                for d in 0..dims {
                    pooled[d] += data[p * dims + d];
                }
            }
            for v in &mut pooled {
                *v /= patches as f32;
            }
            pooled
        } else if shape.len() == 2 {
            let dims = shape[1] as usize;
            data[..dims].to_vec()
        } else {
            return Err(EncodingError::InferenceFailed {
                reason: format!("unexpected output shape: {shape:?}"),
            }
            .into());
        };

        self.project(embedding)
    }

    fn project(&self, embedding: Vec<f32>) -> PrismResult<Vec<f32>> {
        Ok(check_width(embedding, self.dimensions)?)
    }
}

/// Check a pooled tower output against the target width and normalize.
///
/// A width disagreement means the wrong model file is loaded; it is
/// surfaced as a mismatch rather than padded or truncated to fit.
fn check_width(embedding: Vec<f32>, dimensions: usize) -> Result<Vec<f32>, EncodingError> {
    if embedding.len() != dimensions {
        return Err(EncodingError::DimensionMismatch {
            expected: dimensions,
            actual: embedding.len(),
        });
    }
    Ok(vector::l2_normalize(embedding))
}

/// Tokenize text for the CLIP text tower.
///
/// Words are hashed into the vocab range rather than BPE-merged; the
/// sequence is BOS-prefixed, EOS-terminated, truncated to the context
/// length, and zero-padded. Returns `(input_ids, attention_mask)`.
fn clip_tokenize(text: &str) -> (Vec<i64>, Vec<i64>) {
    let mut ids = vec![BOS_TOKEN];
    for word in text.split(|c: char| !c.is_alphanumeric() && c != '_') {
        if word.is_empty() {
            continue;
        }
        let mut h: u32 = 0x811c9dc5;
        for b in word.to_lowercase().as_bytes() {
            h ^= *b as u32;
            h = h.wrapping_mul(0x01000193);
        }
        // Vocab ids 1..=49405 sit between PAD and the special tokens.
        ids.push(1 + (h % 49405) as i64);
    }
    ids.truncate(CLIP_MAX_TOKENS - 1);
    ids.push(EOS_TOKEN);

    let used = ids.len();
    ids.resize(CLIP_MAX_TOKENS, PAD_TOKEN);

    let mut mask = vec![1i64; used];
    mask.resize(CLIP_MAX_TOKENS, 0);

    (ids, mask)
}

impl IEncoder for ClipOnnxEncoder {
    fn encode_text(&self, text: &str) -> PrismResult<Vec<f32>> {
        self.infer_text(text)
    }

    fn encode_image(&self, bytes: &[u8]) -> PrismResult<Vec<f32>> {
        self.infer_image(bytes)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn version(&self) -> &str {
        "clip-vit-b32-onnx-v1"
    }

    fn name(&self) -> &str {
        "clip-onnx"
    }

    fn is_available(&self) -> bool {
        true
    }
}
