//! Process air requirement from carbonaceous and nitrogenous oxygen demand.

use crate::effluent::EffluentQuality;
use ag_core::units::{HOURS_PER_DAY, VolumeRate, m3_per_hour};
use ag_core::{AgError, AgResult, Constants};
use ag_influent::Influent;
use serde::{Deserialize, Serialize};

/// Oxygen requirement and the airflow that delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirDemand {
    /// kg O2/day
    pub oxygen_kg_per_day: f64,
    /// m³/h of air at standard conditions
    pub air_m3_per_hour: f64,
}

impl AirDemand {
    pub fn airflow(&self) -> VolumeRate {
        m3_per_hour(self.air_m3_per_hour)
    }
}

/// Air needed to take `influent` down to `effluent`.
///
/// Fails with `InvalidInput` when any effluent concentration exceeds the
/// influent one: a treatment train cannot add load.
pub fn air_demand(
    influent: &Influent,
    effluent: &EffluentQuality,
    constants: &Constants,
) -> AgResult<AirDemand> {
    check_removal("effluent BOD", influent.bod(), effluent.bod)?;
    check_removal("effluent TSS", influent.tss(), effluent.tss)?;
    check_removal("effluent TKN", influent.tkn(), effluent.tkn)?;
    check_removal("effluent TP", influent.tp(), effluent.tp)?;

    let bod_removed = influent.bod() - effluent.bod;
    let n_removed = influent.tkn() - effluent.tkn;

    // mg/L * m³/d / 1000 = kg/d
    let oxygen_kg_per_day = (bod_removed * constants.o2_per_bod + n_removed * constants.o2_per_n)
        * influent.daily_flow_m3d(constants)
        / 1000.0;
    let air_m3_per_hour = oxygen_kg_per_day / constants.o2_delivered_per_m3_air() / HOURS_PER_DAY;

    Ok(AirDemand {
        oxygen_kg_per_day,
        air_m3_per_hour,
    })
}

fn check_removal(what: &'static str, influent: f64, effluent: f64) -> AgResult<()> {
    if !effluent.is_finite() || effluent < 0.0 {
        return Err(AgError::invalid_input(what, effluent, "must be finite and >= 0"));
    }
    if effluent > influent {
        return Err(AgError::invalid_input(
            what,
            effluent,
            "exceeds influent concentration",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ag_core::numeric::{Tolerances, nearly_equal};
    use ag_influent::FlowUnit;

    fn typical() -> Influent {
        Influent::new(1.0, FlowUnit::Mgd, 250.0, 220.0, 40.0, 7.0).unwrap()
    }

    #[test]
    fn cas_air_demand() {
        let c = Constants::default();
        let eff = EffluentQuality::new(10.0, 12.0, 8.0, 2.0);
        let air = air_demand(&typical(), &eff, &c).unwrap();

        let o2 = (240.0 * 1.5 + 32.0 * 4.57) * 3785.41 / 1000.0;
        assert_eq!(air.oxygen_kg_per_day, o2);
        assert_eq!(air.air_m3_per_hour, o2 / (0.30 * 0.232 * 1.225) / 24.0);

        let tol = Tolerances {
            abs: 1e-6,
            rel: 1e-9,
        };
        assert!(nearly_equal(air.oxygen_kg_per_day, 1916.3259584, tol));
        assert!(nearly_equal(air.air_m3_per_hour, 936.5108483853311, tol));
    }

    #[test]
    fn zero_removal_needs_no_air() {
        let c = Constants::default();
        let inf = Influent::new(1.0, FlowUnit::Mld, 10.0, 12.0, 8.0, 2.0).unwrap();
        let eff = EffluentQuality::new(10.0, 12.0, 8.0, 2.0);
        let air = air_demand(&inf, &eff, &c).unwrap();
        assert_eq!(air.air_m3_per_hour, 0.0);
    }

    #[test]
    fn effluent_above_influent_is_rejected() {
        let c = Constants::default();
        let inf = Influent::new(1.0, FlowUnit::Mld, 5.0, 220.0, 40.0, 7.0).unwrap();
        let eff = EffluentQuality::new(10.0, 12.0, 8.0, 2.0);
        let err = air_demand(&inf, &eff, &c).unwrap_err();
        assert!(matches!(
            err,
            AgError::InvalidInput {
                what: "effluent BOD",
                ..
            }
        ));

        let inf = Influent::new(1.0, FlowUnit::Mld, 250.0, 220.0, 40.0, 1.0).unwrap();
        let err = air_demand(&inf, &eff, &c).unwrap_err();
        assert!(matches!(err, AgError::InvalidInput { what: "effluent TP", .. }));
    }

    #[test]
    fn weak_tss_or_tkn_is_rejected() {
        let c = Constants::default();
        let eff = EffluentQuality::new(10.0, 12.0, 8.0, 2.0);

        let inf = Influent::new(1.0, FlowUnit::Mld, 250.0, 11.0, 40.0, 7.0).unwrap();
        let err = air_demand(&inf, &eff, &c).unwrap_err();
        assert!(matches!(
            err,
            AgError::InvalidInput {
                what: "effluent TSS",
                value,
                ..
            } if value == 12.0
        ));

        let inf = Influent::new(1.0, FlowUnit::Mld, 250.0, 220.0, 7.5, 7.0).unwrap();
        let err = air_demand(&inf, &eff, &c).unwrap_err();
        assert!(matches!(
            err,
            AgError::InvalidInput {
                what: "effluent TKN",
                value,
                ..
            } if value == 8.0
        ));
    }
}
