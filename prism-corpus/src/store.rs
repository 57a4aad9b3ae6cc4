//! The corpus store: item metadata keyed by id.

use std::collections::HashMap;

use prism_core::errors::{CorpusError, PrismResult};
use prism_core::item::{CorpusItem, Modality};
use tracing::info;

/// Owns display metadata for every corpus item.
///
/// Insertion order is preserved per modality, because the index build
/// embeds items in store order and relies on it for deterministic
/// tie-breaking.
#[derive(Debug, Default)]
pub struct CorpusStore {
    items: HashMap<String, CorpusItem>,
    order: Vec<String>,
}

impl CorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-parsed items. Fails on the first duplicate
    /// id — a duplicate here would corrupt the id mapping of every index
    /// built from this store.
    pub fn from_items(items: Vec<CorpusItem>) -> PrismResult<Self> {
        let mut store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        info!(items = store.len(), "corpus store built");
        Ok(store)
    }

    /// Insert one item. Build phase only; fails on duplicate ids.
    pub fn insert(&mut self, item: CorpusItem) -> PrismResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(CorpusError::DuplicateItem { id: item.id }.into());
        }
        self.order.push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Look up an item. A miss is a consistency violation when the id came
    /// from an index, so it is a typed error rather than an `Option`.
    pub fn get(&self, item_id: &str) -> PrismResult<&CorpusItem> {
        self.items.get(item_id).ok_or_else(|| {
            CorpusError::ItemNotFound {
                id: item_id.to_string(),
            }
            .into()
        })
    }

    /// Ids of all items with the given modality, in insertion order.
    pub fn all_ids_for_modality(&self, modality: Modality) -> Vec<&str> {
        self.order
            .iter()
            .filter(|id| {
                self.items
                    .get(id.as_str())
                    .is_some_and(|item| item.modality == modality)
            })
            .map(|id| id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
