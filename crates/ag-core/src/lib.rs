//! ag-core: stable foundation for the AquaGenius sizing engine.
//!
//! Contains:
//! - constants (process-engineering coefficients + unit conversions)
//! - numeric (Real + tolerances + float helpers)
//! - units (uom SI types + constructors)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::Constants;
pub use error::{AgError, AgResult};
pub use numeric::*;
pub use units::*;
