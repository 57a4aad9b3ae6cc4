//! # prism-observability
//!
//! Observability for the Prism retrieval engine: tracing subscriber
//! setup, span definitions per operation, an in-memory query log for
//! latency analysis, and a feedback log linking results to user
//! relevance judgments.

pub mod feedback;
pub mod query_log;
pub mod tracing_setup;

pub use feedback::{FeedbackEntry, FeedbackLog};
pub use query_log::{QueryLog, QueryLogEntry};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
