/// Query input validation errors.
///
/// Raised before any encoding work is attempted; all variants are
/// user-correctable.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InputError {
    #[error("image too large: {size_bytes} bytes exceeds the {max_bytes} byte limit")]
    ImageTooLarge { size_bytes: usize, max_bytes: usize },

    #[error("unsupported image format: {detected}")]
    UnsupportedImageFormat { detected: String },

    #[error("query text is empty")]
    EmptyText,

    #[error("query image is empty")]
    EmptyImage,

    #[error("corrupt image data: {reason}")]
    CorruptImage { reason: String },
}
