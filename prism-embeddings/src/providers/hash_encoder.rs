//! Hashing fallback encoder.
//!
//! Produces deterministic dense vectors with no model files: text terms
//! are TF-weighted and hashed into fixed-dimension buckets, images are
//! reduced to a quantized color histogram. Not as semantically rich as
//! CLIP, but always available — shared-token text still ranks above
//! unrelated text, and color-similar images cluster together.

use std::collections::HashMap;

use prism_core::errors::PrismResult;
use prism_core::traits::IEncoder;
use prism_core::vector;

use crate::preprocess;

/// Model-free encoder hashing content into the embedding space.
pub struct HashEncoder {
    dimensions: usize,
}

impl HashEncoder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Hash a term into a bucket index using FNV-1a.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    /// Tokenize text into lowercase alphanumeric terms.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Build a TF-weighted bucket vector for the given text.
    fn text_vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        // Count term frequencies.
        let mut tf: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *tf.entry(tok.clone()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];

        for (term, count) in &tf {
            let freq = count / total;
            // IDF approximation: penalize very short terms (likely stopwords).
            let idf = 1.0 + (term.len() as f32).ln();
            let bucket = Self::hash_term(term, self.dimensions);
            vec[bucket] += freq * idf;
        }

        vector::l2_normalize(vec)
    }

    /// Build a quantized color histogram for the given image bytes.
    ///
    /// Each pixel maps to a 12-bit color code (4 bits per channel) that
    /// is bucketed modulo the dimension count.
    fn image_vector(&self, bytes: &[u8]) -> PrismResult<Vec<f32>> {
        let img = preprocess::decode(bytes)?.to_rgb8();

        let mut vec = vec![0.0f32; self.dimensions];
        for pixel in img.pixels() {
            let code = ((pixel[0] as usize >> 4) << 8)
                | ((pixel[1] as usize >> 4) << 4)
                | (pixel[2] as usize >> 4);
            vec[code % self.dimensions] += 1.0;
        }

        Ok(vector::l2_normalize(vec))
    }
}

impl IEncoder for HashEncoder {
    fn encode_text(&self, text: &str) -> PrismResult<Vec<f32>> {
        Ok(self.text_vector(text))
    }

    fn encode_image(&self, bytes: &[u8]) -> PrismResult<Vec<f32>> {
        self.image_vector(bytes)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn version(&self) -> &str {
        "hash-v1"
    }

    fn name(&self) -> &str {
        "hash-encoder"
    }

    fn is_available(&self) -> bool {
        true // No model files needed.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(rgb: [u8; 3]) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(8, 8, image::Rgb(rgb));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn empty_text_returns_zero_vector() {
        let p = HashEncoder::new(128);
        let v = p.encode_text("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn produces_correct_dimensions() {
        let p = HashEncoder::new(384);
        let v = p.encode_text("hello world test embedding").unwrap();
        assert_eq!(v.len(), 384);
    }

    #[test]
    fn output_is_normalized() {
        let p = HashEncoder::new(256);
        let v = p.encode_text("rust programming language systems").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = HashEncoder::new(256);
        let a = p.encode_text("deterministic test").unwrap();
        let b = p.encode_text("deterministic test").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn similar_texts_have_higher_cosine() {
        let p = HashEncoder::new(256);
        let a = p.encode_text("rust programming language").unwrap();
        let b = p.encode_text("rust programming systems").unwrap();
        let c = p.encode_text("cooking recipes pasta").unwrap();

        let cos_ab: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let cos_ac: f32 = a.iter().zip(&c).map(|(x, y)| x * y).sum();
        assert!(
            cos_ab > cos_ac,
            "similar texts should have higher cosine similarity"
        );
    }

    #[test]
    fn image_vector_is_normalized() {
        let p = HashEncoder::new(256);
        let v = p.encode_image(&png_bytes([200, 30, 90])).unwrap();
        assert_eq!(v.len(), 256);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn same_color_images_match_exactly() {
        let p = HashEncoder::new(256);
        let a = p.encode_image(&png_bytes([10, 20, 30])).unwrap();
        let b = p.encode_image(&png_bytes([10, 20, 30])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_color_images_differ() {
        let p = HashEncoder::new(256);
        let a = p.encode_image(&png_bytes([255, 0, 0])).unwrap();
        let b = p.encode_image(&png_bytes([0, 0, 255])).unwrap();
        let cos: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        assert!(cos < 0.99, "distinct colors should not be identical");
    }

    #[test]
    fn corrupt_image_bytes_error() {
        let p = HashEncoder::new(128);
        assert!(p.encode_image(&[0xde, 0xad, 0xbe, 0xef]).is_err());
    }

    #[test]
    fn is_always_available() {
        let p = HashEncoder::new(64);
        assert!(p.is_available());
    }
}
