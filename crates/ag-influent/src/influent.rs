//! Influent design condition.

use crate::flow_unit::FlowUnit;
use ag_core::numeric::{ensure_non_negative, ensure_positive};
use ag_core::units::{VolumeRate, m3_per_day};
use ag_core::{AgResult, Constants};
use serde::{Deserialize, Serialize};

/// Flow in `unit` converted to m³/day.
pub fn canonical_daily_flow(flow: f64, unit: FlowUnit, constants: &Constants) -> f64 {
    flow * unit.factor(constants)
}

/// One influent characterization. Immutable once built.
///
/// TSS and TP are carried for reporting; no current design rule consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInfluent")]
pub struct Influent {
    flow: f64,
    unit: FlowUnit,
    bod: f64,
    tss: f64,
    tkn: f64,
    tp: f64,
}

impl Influent {
    /// Validated constructor. Concentrations are mg/L.
    pub fn new(flow: f64, unit: FlowUnit, bod: f64, tss: f64, tkn: f64, tp: f64) -> AgResult<Self> {
        Ok(Self {
            flow: ensure_positive(flow, "flow")?,
            unit,
            bod: ensure_non_negative(bod, "BOD")?,
            tss: ensure_non_negative(tss, "TSS")?,
            tkn: ensure_non_negative(tkn, "TKN")?,
            tp: ensure_non_negative(tp, "TP")?,
        })
    }

    /// Same as [`Influent::new`] with the unit given as text.
    pub fn parse(flow: f64, unit: &str, bod: f64, tss: f64, tkn: f64, tp: f64) -> AgResult<Self> {
        let unit = unit.parse::<FlowUnit>()?;
        Self::new(flow, unit, bod, tss, tkn, tp)
    }

    pub fn flow(&self) -> f64 {
        self.flow
    }

    pub fn unit(&self) -> FlowUnit {
        self.unit
    }

    pub fn bod(&self) -> f64 {
        self.bod
    }

    pub fn tss(&self) -> f64 {
        self.tss
    }

    pub fn tkn(&self) -> f64 {
        self.tkn
    }

    pub fn tp(&self) -> f64 {
        self.tp
    }

    /// Canonical daily flow (m³/day).
    pub fn daily_flow_m3d(&self, constants: &Constants) -> f64 {
        canonical_daily_flow(self.flow, self.unit, constants)
    }

    pub fn daily_flow(&self, constants: &Constants) -> VolumeRate {
        m3_per_day(self.daily_flow_m3d(constants))
    }

    /// Structural key: equal keys iff every field is bit-identical.
    pub fn key(&self) -> InfluentKey {
        InfluentKey {
            flow: self.flow.to_bits(),
            unit: self.unit,
            bod: self.bod.to_bits(),
            tss: self.tss.to_bits(),
            tkn: self.tkn.to_bits(),
            tp: self.tp.to_bits(),
        }
    }
}

#[derive(Deserialize)]
struct RawInfluent {
    flow: f64,
    unit: FlowUnit,
    bod: f64,
    tss: f64,
    tkn: f64,
    tp: f64,
}

impl TryFrom<RawInfluent> for Influent {
    type Error = ag_core::AgError;

    fn try_from(raw: RawInfluent) -> Result<Self, Self::Error> {
        Influent::new(raw.flow, raw.unit, raw.bod, raw.tss, raw.tkn, raw.tp)
    }
}

/// Hashable projection of an [`Influent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfluentKey {
    flow: u64,
    unit: FlowUnit,
    bod: u64,
    tss: u64,
    tkn: u64,
    tp: u64,
}
