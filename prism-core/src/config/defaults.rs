//! Default values for every config section.

use crate::constants;

pub const DEFAULT_PROVIDER: &str = "clip-onnx";
pub const DEFAULT_DIMENSIONS: usize = constants::EMBEDDING_DIMENSIONS;
pub const DEFAULT_TEXT_MODEL_PATH: &str = "models/clip-text.onnx";
pub const DEFAULT_VISION_MODEL_PATH: &str = "models/clip-vision.onnx";
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = constants::MAX_IMAGE_BYTES;

pub const DEFAULT_CAPTIONS_PATH: &str = "data/captions.txt";
pub const DEFAULT_DICTIONARY_PATH: &str = "data/dictionary.csv";
pub const DEFAULT_MAX_CAPTIONS_PER_IMAGE: usize = constants::MAX_CAPTIONS_PER_IMAGE;
pub const DEFAULT_MAX_CAPTION_IMAGES: usize = constants::MAX_CAPTION_IMAGES;
pub const DEFAULT_MAX_DICTIONARY_ENTRIES: usize = constants::MAX_DICTIONARY_ENTRIES;
pub const DEFAULT_MIN_DEFINITION_LEN: usize = constants::MIN_DEFINITION_LEN;

pub const DEFAULT_TOP_K: usize = constants::DEFAULT_TOP_K;
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = constants::DEFAULT_SIMILARITY_THRESHOLD;
