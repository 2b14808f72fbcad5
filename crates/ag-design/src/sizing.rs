//! Sizing and metrics value types produced by the design rules.

use crate::aeration::AirDemand;
use crate::effluent::EffluentQuality;
use crate::geometry::{CircularBasin, RectBasin};
use crate::technology::Technology;
use ag_core::units::{Volume, m3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Named process unit within a treatment train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    Anoxic,
    Aerobic,
    #[serde(rename = "IFAS")]
    Ifas,
    #[serde(rename = "MBR")]
    Mbr,
    #[serde(rename = "MBBR")]
    Mbbr,
    Clarifier,
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Self::Anoxic => "Anoxic",
            Self::Aerobic => "Aerobic",
            Self::Ifas => "IFAS",
            Self::Mbr => "MBR",
            Self::Mbbr => "MBBR",
            Self::Clarifier => "Clarifier",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geometry of one zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ZoneSizing {
    /// Reactor basin
    Basin { volume_m3: f64, basin: RectBasin },
    /// Secondary clarifier
    Clarifier { area_m2: f64, basin: CircularBasin },
}

impl ZoneSizing {
    /// Reactor volume; `None` for clarifiers, which are not part of the process volume.
    pub fn volume_m3(&self) -> Option<f64> {
        match self {
            Self::Basin { volume_m3, .. } => Some(*volume_m3),
            Self::Clarifier { .. } => None,
        }
    }

    pub fn display_map(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Basin { basin, .. } => basin.display_map(),
            Self::Clarifier { basin, .. } => basin.display_map(),
        }
    }
}

/// Sizing outcome for one technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sizing {
    pub technology: Technology,
    pub hrt_h: f64,
    /// Total process volume (m³)
    pub volume_m3: f64,
    pub zones: BTreeMap<Zone, ZoneSizing>,
}

impl Sizing {
    pub fn volume(&self) -> Volume {
        m3(self.volume_m3)
    }

    pub fn zone(&self, zone: Zone) -> Option<&ZoneSizing> {
        self.zones.get(&zone)
    }

    pub fn zone_volume_m3(&self, zone: Zone) -> Option<f64> {
        self.zone(zone).and_then(ZoneSizing::volume_m3)
    }

    /// Sum of reactor zone volumes; equals `volume_m3` up to rounding.
    pub fn reactor_volume_m3(&self) -> f64 {
        self.zones.values().filter_map(ZoneSizing::volume_m3).sum()
    }

    /// Zone label -> dimension label -> one-decimal string, in process order.
    pub fn dims(&self) -> Vec<(&'static str, Vec<(&'static str, String)>)> {
        self.zones
            .iter()
            .map(|(zone, sizing)| (zone.label(), sizing.display_map()))
            .collect()
    }
}

/// Effluent and aeration figures for one technology.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub effluent: EffluentQuality,
    pub air: AirDemand,
}

impl Metrics {
    pub const EFFLUENT_BOD: &'static str = "Effluent BOD (mg/L)";
    pub const EFFLUENT_TSS: &'static str = "Effluent TSS (mg/L)";
    pub const EFFLUENT_TKN: &'static str = "Effluent TKN (mg/L)";
    pub const EFFLUENT_TP: &'static str = "Effluent TP (mg/L)";
    pub const REQUIRED_AIR: &'static str = "Required Air (m³/h)";

    pub fn required_air_m3h(&self) -> f64 {
        self.air.air_m3_per_hour
    }

    /// Ordered label/value listing: four effluent entries, then air.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            (Self::EFFLUENT_BOD, self.effluent.bod),
            (Self::EFFLUENT_TSS, self.effluent.tss),
            (Self::EFFLUENT_TKN, self.effluent.tkn),
            (Self::EFFLUENT_TP, self.effluent.tp),
            (Self::REQUIRED_AIR, self.air.air_m3_per_hour),
        ]
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == label)
            .map(|(_, v)| v)
    }
}
