//! Content fingerprinting for cache keys.
//!
//! A fingerprint covers both the raw content bytes and the encoder
//! version, so upgrading the encoder invalidates every cached vector
//! without any explicit flush.

/// Compute the cache fingerprint for a piece of content.
///
/// The encoder version is hashed first, separated from the content by a
/// zero byte so `("v1", "ab")` and `("v1a", "b")` cannot collide.
pub fn fingerprint(encoder_version: &str, content: &[u8]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(encoder_version.as_bytes());
    hasher.update(&[0]);
    hasher.update(content);
    hasher.finalize().to_hex().to_string()
}
