//! Error types for the ag-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the engine crates
/// and gives front-ends one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Design case error: {0}")]
    Case(String),

    #[error("Failed to read design case: {path}")]
    CaseFileRead {
        path: PathBuf,
        #[source]
        source: ag_project::ProjectError,
    },

    #[error("Design case validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Design(#[from] ag_core::AgError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ag-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<ag_project::ProjectError> for AppError {
    fn from(err: ag_project::ProjectError) -> Self {
        AppError::Case(err.to_string())
    }
}

impl From<ag_project::ValidationError> for AppError {
    fn from(err: ag_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ag_results::ResultsError> for AppError {
    fn from(err: ag_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<ag_design::ParseTechnologyError> for AppError {
    fn from(err: ag_design::ParseTechnologyError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
