use thiserror::Error;

pub type AgResult<T> = Result<T, AgError>;

/// Input-validation failures raised by the sizing engine.
///
/// Both kinds are deterministic: retrying with the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgError {
    #[error("Invalid flow unit: '{unit}' (expected MGD, MLD or m3/day)")]
    InvalidUnit { unit: String },

    #[error("Invalid input for {what}: {value} ({reason})")]
    InvalidInput {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl AgError {
    pub fn invalid_input(what: &'static str, value: f64, reason: &'static str) -> Self {
        AgError::InvalidInput {
            what,
            value,
            reason,
        }
    }
}
