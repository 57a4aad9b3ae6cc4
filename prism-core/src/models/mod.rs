//! Request and response types for the retrieval pipeline.

mod generation_context;
mod query;
mod retrieval_result;

pub use generation_context::{ContextEntry, GenerationContext};
pub use query::{QueryInput, RetrievalOptions};
pub use retrieval_result::{QueryResult, RetrievalResult};
