//! Shared application service layer for AquaGenius.
//!
//! This crate provides the interface front-ends call into: loading design
//! cases, running the sizing rules through the result cache, and rendering
//! design reports. It holds no sizing logic of its own.

pub mod case_service;
pub mod design_service;
pub mod error;
pub mod report;

// Re-export key types for convenience
pub use case_service::{CaseSummary, load_case, save_case, summarize_case, validate_case};
pub use design_service::{DesignOptions, DesignService};
pub use error::{AppError, AppResult};
pub use report::{ReportFormat, ReportOptions, UnitSystem, render_report, report_file_name};
