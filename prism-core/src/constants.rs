/// Prism system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the shared embedding space. Every encoder output, cached
/// vector, and index row has exactly this many dimensions.
pub const EMBEDDING_DIMENSIONS: usize = 512;

/// Tolerance for the unit-norm invariant on stored vectors.
pub const UNIT_NORM_TOLERANCE: f32 = 1e-5;

/// Default number of results returned per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Default minimum cosine similarity for a result to be returned.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.1;

/// Maximum accepted query image size in bytes (10 MB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Image formats accepted as query input.
pub const SUPPORTED_IMAGE_FORMATS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp"];

/// Maximum captions ingested per image.
pub const MAX_CAPTIONS_PER_IMAGE: usize = 5;

/// Maximum distinct images ingested from the caption corpus.
pub const MAX_CAPTION_IMAGES: usize = 15_000;

/// Maximum entries ingested from the dictionary corpus.
pub const MAX_DICTIONARY_ENTRIES: usize = 80_000;

/// Minimum definition length for a dictionary entry to be ingested.
pub const MIN_DEFINITION_LEN: usize = 10;

/// CLIP preprocessing: input image side length in pixels.
pub const CLIP_IMAGE_SIZE: u32 = 224;

/// CLIP preprocessing: per-channel RGB mean.
pub const CLIP_MEAN: [f32; 3] = [0.481_454_66, 0.457_827_5, 0.408_210_73];

/// CLIP preprocessing: per-channel RGB standard deviation.
pub const CLIP_STD: [f32; 3] = [0.268_629_54, 0.261_302_58, 0.275_777_11];

/// CLIP text encoder context length (token ids per sequence).
pub const CLIP_MAX_TOKENS: usize = 77;
