//! Caption corpus ingestion.
//!
//! Accepts two line formats:
//! - CSV with an `image,caption` header: `dog.jpg,a dog running`. The
//!   caption is everything after the first comma, verbatim, so captions
//!   may themselves contain commas.
//! - Legacy tab-separated: `dog.jpg#0<TAB>a dog running`, where the `#n`
//!   suffix on the image name is dropped in favor of our own numbering.
//!
//! Each caption becomes its own item with id `<image_name>#<idx>`, all
//! captions of one image sharing its `content_ref` for display.

use std::collections::HashMap;
use std::path::Path;

use prism_core::config::CorpusConfig;
use prism_core::errors::{CorpusError, PrismResult};
use prism_core::item::{CorpusItem, Modality};
use tracing::{info, warn};

/// Parse the caption file into items, applying the per-image caption cap
/// and the distinct-image cap from `config`.
pub fn load_captions(path: &Path, config: &CorpusConfig) -> PrismResult<Vec<CorpusItem>> {
    let raw = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut items = Vec::new();
    let mut captions_per_image: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for (line_no, line) in raw.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if line_no == 0 && line.eq_ignore_ascii_case("image,caption") {
            continue; // header
        }

        let Some((image_name, caption)) = split_caption_line(line) else {
            warn!(line = line_no + 1, path = %path.display(), "skipping malformed caption line");
            skipped += 1;
            continue;
        };
        if caption.is_empty() {
            warn!(line = line_no + 1, path = %path.display(), "skipping empty caption");
            skipped += 1;
            continue;
        }

        let is_new_image = !captions_per_image.contains_key(image_name);
        if is_new_image && captions_per_image.len() >= config.max_caption_images {
            skipped += 1;
            continue;
        }

        let count = captions_per_image.entry(image_name.to_string()).or_insert(0);
        if *count >= config.max_captions_per_image {
            skipped += 1;
            continue;
        }

        items.push(CorpusItem::new(
            format!("{image_name}#{count}"),
            Modality::Image,
            image_name,
            caption,
        ));
        *count += 1;
    }

    info!(
        path = %path.display(),
        captions = items.len(),
        images = captions_per_image.len(),
        skipped,
        "caption corpus loaded"
    );
    Ok(items)
}

/// Split one caption line into `(image_name, caption)`.
///
/// Returns `None` when no separator is present. Tab beats comma so legacy
/// lines with commas inside the caption parse correctly.
fn split_caption_line(line: &str) -> Option<(&str, &str)> {
    if let Some((name, caption)) = line.split_once('\t') {
        // Legacy form carries its own `#n` suffix on the name.
        let name = name.split_once('#').map_or(name, |(base, _)| base);
        return Some((name.trim(), caption.trim()));
    }
    let (name, caption) = line.split_once(',')?;
    Some((name.trim(), caption.trim()))
}
