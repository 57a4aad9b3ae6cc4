//! Query input validation.
//!
//! Runs before fingerprinting and encoding, so rejected inputs never
//! touch the cache or the encoder. Size is checked before the format
//! sniff to avoid inspecting oversized payloads.

use image::ImageFormat;
use prism_core::errors::InputError;

/// Validate query text. Whitespace-only text counts as empty.
pub fn validate_text(text: &str) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyText);
    }
    Ok(())
}

/// Validate raw query image bytes against the size limit and the
/// supported format set (JPEG, PNG, WebP, BMP).
///
/// Only the magic bytes are inspected here; full decoding happens later
/// in preprocessing and reports `InputError::CorruptImage` on failure.
pub fn validate_image(bytes: &[u8], max_bytes: usize) -> Result<(), InputError> {
    if bytes.is_empty() {
        return Err(InputError::EmptyImage);
    }

    if bytes.len() > max_bytes {
        return Err(InputError::ImageTooLarge {
            size_bytes: bytes.len(),
            max_bytes,
        });
    }

    match image::guess_format(bytes) {
        Ok(ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP | ImageFormat::Bmp) => Ok(()),
        Ok(other) => Err(InputError::UnsupportedImageFormat {
            detected: format!("{other:?}").to_lowercase(),
        }),
        Err(_) => Err(InputError::UnsupportedImageFormat {
            detected: "unknown".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 10 * 1024 * 1024;

    // Smallest valid PNG header (signature + start of IHDR).
    fn png_magic() -> Vec<u8> {
        vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 13]
    }

    #[test]
    fn accepts_plain_text() {
        assert!(validate_text("a dog running").is_ok());
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(validate_text(""), Err(InputError::EmptyText)));
        assert!(matches!(validate_text("   \n\t"), Err(InputError::EmptyText)));
    }

    #[test]
    fn rejects_empty_image() {
        assert!(matches!(validate_image(&[], MAX), Err(InputError::EmptyImage)));
    }

    #[test]
    fn rejects_oversized_image_before_sniffing() {
        // Garbage bytes past the limit must fail on size, not format.
        let huge = vec![0u8; MAX + 1];
        match validate_image(&huge, MAX) {
            Err(InputError::ImageTooLarge {
                size_bytes,
                max_bytes,
            }) => {
                assert_eq!(size_bytes, MAX + 1);
                assert_eq!(max_bytes, MAX);
            }
            other => panic!("expected ImageTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn accepts_png_magic() {
        assert!(validate_image(&png_magic(), MAX).is_ok());
    }

    #[test]
    fn accepts_jpeg_magic() {
        let jpeg = vec![0xff, 0xd8, 0xff, 0xe0, 0, 0, 0, 0];
        assert!(validate_image(&jpeg, MAX).is_ok());
    }

    #[test]
    fn rejects_gif_as_unsupported() {
        let gif = b"GIF89a\x00\x00".to_vec();
        match validate_image(&gif, MAX) {
            Err(InputError::UnsupportedImageFormat { detected }) => {
                assert_eq!(detected, "gif");
            }
            other => panic!("expected UnsupportedImageFormat, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unrecognizable_bytes() {
        let noise = vec![0x00, 0x01, 0x02, 0x03];
        match validate_image(&noise, MAX) {
            Err(InputError::UnsupportedImageFormat { detected }) => {
                assert_eq!(detected, "unknown");
            }
            other => panic!("expected UnsupportedImageFormat, got {other:?}"),
        }
    }
}
