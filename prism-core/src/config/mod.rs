//! Configuration for all Prism subsystems.
//!
//! Every section defaults sensibly and deserializes from TOML with
//! `#[serde(default)]`, so a partial config file only overrides what it
//! names.

pub mod defaults;

mod corpus_config;
mod embedding_config;
mod retrieval_config;

pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PrismResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub embedding: EmbeddingConfig,
    pub corpus: CorpusConfig,
    pub retrieval: RetrievalConfig,
}

impl PrismConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml_str(s: &str) -> PrismResult<Self> {
        toml::from_str(s).map_err(|e| {
            ConfigError::ParseFailed {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> PrismResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_consistent_with_constants() {
        let config = PrismConfig::default();
        assert_eq!(config.embedding.dimensions, crate::constants::EMBEDDING_DIMENSIONS);
        assert_eq!(config.retrieval.top_k, crate::constants::DEFAULT_TOP_K);
        assert_eq!(
            config.retrieval.similarity_threshold,
            crate::constants::DEFAULT_SIMILARITY_THRESHOLD
        );
        assert_eq!(config.corpus.min_definition_len, crate::constants::MIN_DEFINITION_LEN);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = PrismConfig::from_toml_str("").unwrap();
        assert_eq!(config.embedding.provider, "clip-onnx");
        assert_eq!(config.embedding.l1_cache_size, 10_000);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = PrismConfig::from_toml_str(
            r#"
            [retrieval]
            top_k = 10

            [embedding]
            provider = "hash"
            "#,
        )
        .unwrap();
        assert_eq!(config.retrieval.top_k, 10);
        // Unnamed fields keep their defaults.
        assert_eq!(config.retrieval.similarity_threshold, 0.1);
        assert_eq!(config.embedding.provider, "hash");
        assert_eq!(config.embedding.dimensions, 512);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PrismConfig::from_toml_str("retrieval = nonsense").unwrap_err();
        assert!(matches!(
            err,
            crate::errors::PrismError::Config(ConfigError::ParseFailed { .. })
        ));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = PrismConfig::default();
        config.retrieval.top_k = 7;
        config.embedding.cache_path = Some("/tmp/prism-cache.db".to_string());

        let raw = toml::to_string(&config).unwrap();
        let back = PrismConfig::from_toml_str(&raw).unwrap();
        assert_eq!(back.retrieval.top_k, 7);
        assert_eq!(back.embedding.cache_path.as_deref(), Some("/tmp/prism-cache.db"));
    }
}
