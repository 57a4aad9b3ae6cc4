//! Query performance logging: query summary, modality, latency, result
//! count, and top score per retrieval.

use std::time::Duration;

use prism_core::Modality;
use serde::{Deserialize, Serialize};

/// A single query log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    /// Truncated query text or an image byte-count placeholder — never
    /// the raw payload.
    pub query_summary: String,
    pub modality: Modality,
    pub latency: Duration,
    pub result_count: usize,
    /// Best similarity in the result set; `None` when nothing cleared
    /// the threshold.
    pub top_score: Option<f32>,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        query_summary: impl Into<String>,
        modality: Modality,
        latency: Duration,
        result_count: usize,
        top_score: Option<f32>,
    ) -> Self {
        Self {
            query_summary: query_summary.into(),
            modality,
            latency,
            result_count,
            top_score,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only query log for retrieval performance analysis.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: Vec<QueryLogEntry>,
    /// Maximum entries to retain (ring buffer behavior).
    max_entries: usize,
}

/// Same capacity as [`QueryLog::new`] — a default log must retain what
/// it records.
impl Default for QueryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLog {
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

    /// Record a query.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query = %entry.query_summary,
            modality = ?entry.modality,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            top_score = ?entry.top_score,
            "query logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    /// Get all entries.
    pub fn entries(&self) -> &[QueryLogEntry] {
        &self.entries
    }

    /// Average latency across all logged queries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let idx = ((p * (latencies.len() - 1) as f64).round() as usize).min(latencies.len() - 1);
        latencies[idx]
    }

    /// Fraction of logged queries that returned no results.
    pub fn empty_result_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let empty = self.entries.iter().filter(|e| e.result_count == 0).count();
        empty as f64 / self.entries.len() as f64
    }

    /// Total number of logged queries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Serialize the log as a JSON array for export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.entries)
    }
}
