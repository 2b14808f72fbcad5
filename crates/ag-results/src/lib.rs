//! ag-results: design memoization and exportable design records.

pub mod cache;
pub mod hash;
pub mod types;

pub use cache::{CacheKey, DesignCache};
pub use hash::compute_design_id;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
