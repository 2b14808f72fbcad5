//! Exportable design data types.

use crate::ResultsResult;
use crate::hash::compute_design_id;
use ag_design::{DesignOutcome, Metrics, Sizing};
use ag_influent::Influent;
use serde::{Deserialize, Serialize};

/// Version stamped into design records and hashed into design IDs.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One technology's design for one influent, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignRecord {
    pub design_id: String,
    pub engine_version: String,
    /// RFC 3339, UTC
    pub generated_at: String,
    pub influent: Influent,
    pub sizing: Sizing,
    pub metrics: Metrics,
}

impl DesignRecord {
    pub fn new(influent: &Influent, outcome: DesignOutcome) -> Self {
        let (sizing, metrics) = outcome;
        Self {
            design_id: compute_design_id(sizing.technology, influent, ENGINE_VERSION),
            engine_version: ENGINE_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            influent: influent.clone(),
            sizing,
            metrics,
        }
    }

    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ResultsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
