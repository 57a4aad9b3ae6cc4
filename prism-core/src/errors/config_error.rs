/// Configuration loading errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed for {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("config parse failed: {message}")]
    ParseFailed { message: String },
}
