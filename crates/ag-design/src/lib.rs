//! ag-design: sizing rules for biological treatment trains.
//!
//! Evaluates four process configurations against one influent:
//! - CAS: conventional activated sludge with secondary clarifier
//! - IFAS: integrated fixed-film activated sludge with secondary clarifier
//! - MBR: membrane bioreactor (membranes replace the clarifier)
//! - MBBR: moving bed biofilm reactor
//!
//! Every technology is a row in a policy table (`technology::policy`): HRT,
//! zone split, clarifier loading and effluent quality. The rules are pure
//! functions of an `Influent` and a `Constants` table.
//!
//! # Example
//!
//! ```
//! use ag_core::Constants;
//! use ag_design::{Technology, design};
//! use ag_influent::{FlowUnit, Influent};
//!
//! let inf = Influent::new(1.0, FlowUnit::Mgd, 250.0, 220.0, 40.0, 7.0).unwrap();
//! let (sizing, metrics) = design(Technology::Cas, &inf, Constants::standard()).unwrap();
//! println!("{} m³, {:.0} m³/h air", sizing.volume_m3, metrics.required_air_m3h());
//! ```

pub mod aeration;
pub mod effluent;
pub mod geometry;
pub mod rules;
pub mod sizing;
pub mod technology;

// Re-exports
pub use aeration::{AirDemand, air_demand};
pub use effluent::EffluentQuality;
pub use geometry::{CircularBasin, DEFAULT_DEPTH_M, RectBasin, circular, rectangular};
pub use rules::{DesignOutcome, calc_cas, calc_ifas, calc_mbbr, calc_mbr, design, design_all};
pub use sizing::{Metrics, Sizing, Zone, ZoneSizing};
pub use technology::{ClarifierPolicy, ParseTechnologyError, Technology, TechnologyPolicy, ZoneSplit};
