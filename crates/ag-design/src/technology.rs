//! Per-technology design policy.
//!
//! What distinguishes one treatment train from another lives in a single
//! table. Adding a process is a new row, not new control flow.

use crate::effluent::EffluentQuality;
use crate::geometry::DEFAULT_DEPTH_M;
use crate::sizing::Zone;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Treatment process configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Technology {
    #[serde(rename = "CAS")]
    Cas,
    #[serde(rename = "IFAS")]
    Ifas,
    #[serde(rename = "MBR")]
    Mbr,
    #[serde(rename = "MBBR")]
    Mbbr,
}

impl Technology {
    pub const ALL: [Technology; 4] = [
        Technology::Cas,
        Technology::Ifas,
        Technology::Mbr,
        Technology::Mbbr,
    ];

    /// Short identifier ("CAS", "IFAS", ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Cas => "CAS",
            Self::Ifas => "IFAS",
            Self::Mbr => "MBR",
            Self::Mbbr => "MBBR",
        }
    }

    pub fn long_name(self) -> &'static str {
        match self {
            Self::Cas => "Conventional Activated Sludge",
            Self::Ifas => "Integrated Fixed-Film Activated Sludge",
            Self::Mbr => "Membrane Bioreactor",
            Self::Mbbr => "Moving Bed Biofilm Reactor",
        }
    }

    pub fn policy(self) -> &'static TechnologyPolicy {
        match self {
            Self::Cas => &POLICIES[0],
            Self::Ifas => &POLICIES[1],
            Self::Mbr => &POLICIES[2],
            Self::Mbbr => &POLICIES[3],
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown technology: '{0}' (expected CAS, IFAS, MBR or MBBR)")]
pub struct ParseTechnologyError(pub String);

impl FromStr for Technology {
    type Err = ParseTechnologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Technology::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTechnologyError(trimmed.to_string()))
    }
}

/// Share of the process volume assigned to one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneSplit {
    pub zone: Zone,
    pub fraction: f64,
}

/// Secondary clarifier sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClarifierPolicy {
    /// Surface area (m²) = daily flow (m³/d) / divisor
    pub loading_divisor: f64,
    pub swd_m: f64,
}

/// Fixed design choices for one technology.
#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyPolicy {
    pub technology: Technology,
    /// Hydraulic retention time (h)
    pub hrt_h: f64,
    /// Fractions sum to one.
    pub zones: &'static [ZoneSplit],
    pub clarifier: Option<ClarifierPolicy>,
    pub depth_m: f64,
    pub effluent: EffluentQuality,
}

const SECONDARY_CLARIFIER_SWD_M: f64 = 4.5;

static POLICIES: [TechnologyPolicy; 4] = [
    TechnologyPolicy {
        technology: Technology::Cas,
        hrt_h: 6.0,
        zones: &[
            ZoneSplit {
                zone: Zone::Anoxic,
                fraction: 0.3,
            },
            ZoneSplit {
                zone: Zone::Aerobic,
                fraction: 0.7,
            },
        ],
        clarifier: Some(ClarifierPolicy {
            loading_divisor: 24.0,
            swd_m: SECONDARY_CLARIFIER_SWD_M,
        }),
        depth_m: DEFAULT_DEPTH_M,
        effluent: EffluentQuality::new(10.0, 12.0, 8.0, 2.0),
    },
    TechnologyPolicy {
        technology: Technology::Ifas,
        hrt_h: 6.0,
        zones: &[
            ZoneSplit {
                zone: Zone::Anoxic,
                fraction: 0.3,
            },
            ZoneSplit {
                zone: Zone::Ifas,
                fraction: 0.7,
            },
        ],
        clarifier: Some(ClarifierPolicy {
            loading_divisor: 28.0,
            swd_m: SECONDARY_CLARIFIER_SWD_M,
        }),
        depth_m: DEFAULT_DEPTH_M,
        effluent: EffluentQuality::new(8.0, 10.0, 5.0, 1.5),
    },
    TechnologyPolicy {
        technology: Technology::Mbr,
        hrt_h: 5.0,
        zones: &[
            ZoneSplit {
                zone: Zone::Anoxic,
                fraction: 0.4,
            },
            ZoneSplit {
                zone: Zone::Mbr,
                fraction: 0.6,
            },
        ],
        clarifier: None,
        depth_m: DEFAULT_DEPTH_M,
        effluent: EffluentQuality::new(5.0, 1.0, 4.0, 1.0),
    },
    TechnologyPolicy {
        technology: Technology::Mbbr,
        hrt_h: 4.0,
        zones: &[ZoneSplit {
            zone: Zone::Mbbr,
            fraction: 1.0,
        }],
        clarifier: None,
        depth_m: DEFAULT_DEPTH_M,
        effluent: EffluentQuality::new(15.0, 20.0, 10.0, 2.5),
    },
];
