//! Dictionary corpus ingestion.
//!
//! Line format: `word,definition` with an optional header. The item id is
//! the word itself; `display_text` is `word: definition` so the word is
//! part of what gets embedded. Definitions below the configured minimum
//! length are filtered out; duplicate words keep their first definition.

use std::collections::HashSet;
use std::path::Path;

use prism_core::config::CorpusConfig;
use prism_core::errors::{CorpusError, PrismResult};
use prism_core::item::{CorpusItem, Modality};
use tracing::{debug, info, warn};

pub fn load_dictionary(path: &Path, config: &CorpusConfig) -> PrismResult<Vec<CorpusItem>> {
    let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut items = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut filtered = 0usize;

    for (line_no, line) in raw.lines().enumerate() {
        if items.len() >= config.max_dictionary_entries {
            debug!(cap = config.max_dictionary_entries, "dictionary entry cap reached");
            break;
        }

        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line_no == 0 && line.eq_ignore_ascii_case("word,definition") {
            continue; // header
        }

        let Some((word, definition)) = line.split_once(',') else {
            warn!(line = line_no + 1, path = %path.display(), "skipping malformed dictionary line");
            continue;
        };
        let word = word.trim();
        let definition = definition.trim();

        if word.is_empty() || definition.len() < config.min_definition_len {
            filtered += 1;
            continue;
        }
        if !seen.insert(word.to_string()) {
            // Duplicate word: first definition wins.
            continue;
        }

        items.push(CorpusItem::new(
            word,
            Modality::Text,
            word,
            format!("{word}: {definition}"),
        ));
    }

    info!(
        path = %path.display(),
        entries = items.len(),
        filtered,
        "dictionary corpus loaded"
    );
    Ok(items)
}
