//! ag-influent: influent characterization for the sizing engine.
//!
//! Provides:
//! - `FlowUnit`: the closed set of accepted flow units and their parsing
//! - `Influent`: one validated design condition with a canonical daily flow
//!
//! # Example
//!
//! ```
//! use ag_core::Constants;
//! use ag_influent::{FlowUnit, Influent};
//!
//! let inf = Influent::new(1.0, FlowUnit::Mgd, 250.0, 220.0, 40.0, 7.0).unwrap();
//! assert_eq!(inf.daily_flow_m3d(Constants::standard()), 3785.41);
//! ```

pub mod flow_unit;
pub mod influent;

pub use flow_unit::FlowUnit;
pub use influent::{Influent, InfluentKey, canonical_daily_flow};
