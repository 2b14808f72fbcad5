//! Accepted influent flow units.

use ag_core::{AgError, Constants};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed enumeration of flow units a design condition may be entered in.
///
/// Serialized as its label; deserialized through `FromStr`, so files accept
/// the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FlowUnit {
    /// Million US gallons per day
    Mgd,
    /// Megalitres per day
    Mld,
    /// Cubic metres per day (canonical)
    CubicMetersPerDay,
}

impl FlowUnit {
    pub const ALL: [FlowUnit; 3] = [FlowUnit::Mgd, FlowUnit::Mld, FlowUnit::CubicMetersPerDay];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mgd => "MGD",
            Self::Mld => "MLD",
            Self::CubicMetersPerDay => "m³/day",
        }
    }

    /// Multiplier taking a flow in this unit to m³/day.
    pub fn factor(self, constants: &Constants) -> f64 {
        match self {
            Self::Mgd => constants.mgd_to_m3d,
            Self::Mld => constants.mld_to_m3d,
            Self::CubicMetersPerDay => 1.0,
        }
    }
}

impl fmt::Display for FlowUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<FlowUnit> for String {
    fn from(unit: FlowUnit) -> Self {
        unit.label().to_string()
    }
}

impl TryFrom<String> for FlowUnit {
    type Error = AgError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for FlowUnit {
    type Err = AgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "mgd" => Ok(Self::Mgd),
            "mld" => Ok(Self::Mld),
            "m3/d" | "m3/day" | "m³/d" | "m³/day" | "cmd" | "cubic-meters-per-day" => {
                Ok(Self::CubicMetersPerDay)
            }
            _ => Err(AgError::InvalidUnit {
                unit: trimmed.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_units() {
        assert_eq!("MGD".parse::<FlowUnit>().unwrap(), FlowUnit::Mgd);
        assert_eq!(" mld ".parse::<FlowUnit>().unwrap(), FlowUnit::Mld);
        assert_eq!(
            "m³/day".parse::<FlowUnit>().unwrap(),
            FlowUnit::CubicMetersPerDay
        );
        assert_eq!(
            "cubic-meters-per-day".parse::<FlowUnit>().unwrap(),
            FlowUnit::CubicMetersPerDay
        );
    }

    #[test]
    fn parse_unknown_unit() {
        let err = "GPD".parse::<FlowUnit>().unwrap_err();
        assert_eq!(
            err,
            AgError::InvalidUnit {
                unit: "GPD".to_string()
            }
        );
    }

    #[test]
    fn label_round_trips_through_parse() {
        for unit in FlowUnit::ALL {
            assert_eq!(unit.label().parse::<FlowUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn serde_uses_the_same_spellings_as_parse() {
        for text in ["mgd", "Mld", "m3/d", "CMD", "m³/day"] {
            let json = format!("\"{text}\"");
            let unit: FlowUnit = serde_json::from_str(&json).unwrap();
            assert_eq!(unit, text.parse::<FlowUnit>().unwrap());
        }
        assert!(serde_json::from_str::<FlowUnit>("\"GPD\"").is_err());
        assert_eq!(
            serde_json::to_string(&FlowUnit::CubicMetersPerDay).unwrap(),
            "\"m³/day\""
        );
    }

    #[test]
    fn factors() {
        let c = Constants::default();
        assert_eq!(FlowUnit::Mgd.factor(&c), 3785.41);
        assert_eq!(FlowUnit::Mld.factor(&c), 1000.0);
        assert_eq!(FlowUnit::CubicMetersPerDay.factor(&c), 1.0);
    }
}
