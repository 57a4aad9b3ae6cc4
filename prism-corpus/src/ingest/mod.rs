//! Corpus file ingestion.
//!
//! Two tabular sources feed the store: a caption file (image → caption)
//! and a dictionary file (word → definition). Malformed lines are skipped
//! with a warning; unreadable files are fatal. Ingestion caps come from
//! `CorpusConfig`.

mod captions;
mod dictionary;

pub use captions::load_captions;
pub use dictionary::load_dictionary;

use std::path::Path;

use prism_core::config::CorpusConfig;
use prism_core::errors::PrismResult;

use crate::store::CorpusStore;

/// Build a complete store from both corpus sources.
pub fn load_corpus(config: &CorpusConfig) -> PrismResult<CorpusStore> {
    let mut items = load_captions(Path::new(&config.captions_path), config)?;
    items.extend(load_dictionary(Path::new(&config.dictionary_path), config)?);
    CorpusStore::from_items(items)
}
