//! Image decoding and CLIP tensor preprocessing.
//!
//! Decoding is shared by every encoder; the tensor layout here matches
//! what the CLIP vision ONNX graph expects: 224x224 RGB, per-channel
//! normalized, planar CHW order.

use image::imageops::FilterType;
use image::DynamicImage;
use prism_core::constants::{CLIP_IMAGE_SIZE, CLIP_MEAN, CLIP_STD};
use prism_core::errors::InputError;

/// Decode raw image bytes into a `DynamicImage`.
///
/// Assumes the format was already sniffed by validation; a failure here
/// means the payload is truncated or internally inconsistent.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, InputError> {
    let format = image::guess_format(bytes).map_err(|e| InputError::CorruptImage {
        reason: e.to_string(),
    })?;
    image::load_from_memory_with_format(bytes, format).map_err(|e| InputError::CorruptImage {
        reason: e.to_string(),
    })
}

/// Convert a decoded image into the CLIP vision input tensor.
///
/// Resizes to 224x224 (bilinear, aspect ratio not preserved), scales
/// to `[0, 1]`, normalizes per channel, and lays the result out as
/// `[C, H, W]` for a batch-of-one `[1, 3, 224, 224]` tensor.
pub fn clip_image_tensor(img: &DynamicImage) -> Vec<f32> {
    let resized = img
        .resize_exact(CLIP_IMAGE_SIZE, CLIP_IMAGE_SIZE, FilterType::Triangle)
        .to_rgb8();

    let side = CLIP_IMAGE_SIZE as usize;
    let mut tensor = vec![0.0f32; 3 * side * side];

    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            let value = pixel[c] as f32 / 255.0;
            tensor[c * side * side + y as usize * side + x as usize] =
                (value - CLIP_MEAN[c]) / CLIP_STD[c];
        }
    }

    tensor
}
