use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus source paths and ingestion limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Caption corpus file (image → caption, one pair per line).
    pub captions_path: String,
    /// Dictionary corpus file (word → definition, one pair per line).
    pub dictionary_path: String,
    /// Captions kept per image; later captions for the same image are skipped.
    pub max_captions_per_image: usize,
    /// Distinct images kept from the caption corpus.
    pub max_caption_images: usize,
    /// Entries kept from the dictionary corpus.
    pub max_dictionary_entries: usize,
    /// Definitions shorter than this (in characters) are filtered out.
    pub min_definition_len: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            captions_path: defaults::DEFAULT_CAPTIONS_PATH.to_string(),
            dictionary_path: defaults::DEFAULT_DICTIONARY_PATH.to_string(),
            max_captions_per_image: defaults::DEFAULT_MAX_CAPTIONS_PER_IMAGE,
            max_caption_images: defaults::DEFAULT_MAX_CAPTION_IMAGES,
            max_dictionary_entries: defaults::DEFAULT_MAX_DICTIONARY_ENTRIES,
            min_definition_len: defaults::DEFAULT_MIN_DEFINITION_LEN,
        }
    }
}
