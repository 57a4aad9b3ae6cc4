//! Result feedback capture.
//!
//! Links returned items to user relevance judgments so retrieval
//! quality can be tracked over time. Entries are held in memory with
//! the same ring-buffer behavior as the query log.

use serde::{Deserialize, Serialize};

/// A relevance judgment for one returned item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub query_summary: String,
    pub item_id: String,
    pub helpful: bool,
    pub timestamp_epoch_ms: i64,
}

impl FeedbackEntry {
    pub fn new(query_summary: impl Into<String>, item_id: impl Into<String>, helpful: bool) -> Self {
        Self {
            query_summary: query_summary.into(),
            item_id: item_id.into(),
            helpful,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only feedback log.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    entries: Vec<FeedbackEntry>,
    max_entries: usize,
}

/// Same capacity as [`FeedbackLog::new`] — a default log must retain
/// what it records.
impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            max_entries: 50_000,
        }
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a judgment.
    pub fn record(&mut self, entry: FeedbackEntry) {
        tracing::debug!(
            event = "feedback_logged",
            item_id = %entry.item_id,
            helpful = entry.helpful,
            "feedback logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    /// Get all entries.
    pub fn entries(&self) -> &[FeedbackEntry] {
        &self.entries
    }

    /// Fraction of judgments marked helpful. `None` until any feedback
    /// has been recorded.
    pub fn helpful_rate(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        let helpful = self.entries.iter().filter(|e| e.helpful).count();
        Some(helpful as f64 / self.entries.len() as f64)
    }

    /// All judgments recorded for one item.
    pub fn for_item(&self, item_id: &str) -> Vec<&FeedbackEntry> {
        self.entries.iter().filter(|e| e.item_id == item_id).collect()
    }

    /// Total number of judgments.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Serialize the log as a JSON array for export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}
