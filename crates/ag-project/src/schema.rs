//! Design-case schema definitions.

use ag_core::AgResult;
use ag_design::{ParseTechnologyError, Technology};
use ag_influent::Influent;
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignCase {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub influent: InfluentDef,
    /// Empty means every technology.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
}

/// Influent as written in a case file. The unit stays text until validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfluentDef {
    pub flow: f64,
    pub unit: String,
    pub bod: f64,
    pub tss: f64,
    pub tkn: f64,
    pub tp: f64,
}

impl InfluentDef {
    pub fn to_influent(&self) -> AgResult<Influent> {
        Influent::parse(self.flow, &self.unit, self.bod, self.tss, self.tkn, self.tp)
    }

    pub fn from_influent(influent: &Influent) -> Self {
        Self {
            flow: influent.flow(),
            unit: influent.unit().label().to_string(),
            bod: influent.bod(),
            tss: influent.tss(),
            tkn: influent.tkn(),
            tp: influent.tp(),
        }
    }
}

impl DesignCase {
    pub fn new(name: impl Into<String>, influent: &Influent) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            description: None,
            influent: InfluentDef::from_influent(influent),
            technologies: Vec::new(),
        }
    }

    /// Selected technologies in table order; all of them when none are listed.
    pub fn selected_technologies(&self) -> Result<Vec<Technology>, ParseTechnologyError> {
        if self.technologies.is_empty() {
            return Ok(Technology::ALL.to_vec());
        }
        let mut selected = self
            .technologies
            .iter()
            .map(|t| t.parse::<Technology>())
            .collect::<Result<Vec<_>, _>>()?;
        selected.sort();
        selected.dedup();
        Ok(selected)
    }
}
