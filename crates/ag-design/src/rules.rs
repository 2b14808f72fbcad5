//! Design-rule evaluation.

use crate::aeration::air_demand;
use crate::geometry::{circular, rectangular};
use crate::sizing::{Metrics, Sizing, Zone, ZoneSizing};
use crate::technology::{Technology, TechnologyPolicy};
use ag_core::units::HOURS_PER_DAY;
use ag_core::{AgResult, Constants};
use ag_influent::Influent;
use std::collections::BTreeMap;

/// Result of one design-rule evaluation.
pub type DesignOutcome = (Sizing, Metrics);

impl TechnologyPolicy {
    /// Size this train for `influent`.
    pub fn evaluate(&self, influent: &Influent, constants: &Constants) -> AgResult<DesignOutcome> {
        let daily_flow = influent.daily_flow_m3d(constants);
        let volume_m3 = daily_flow * self.hrt_h / HOURS_PER_DAY;

        let mut zones = BTreeMap::new();
        for split in self.zones {
            let zone_volume = volume_m3 * split.fraction;
            zones.insert(
                split.zone,
                ZoneSizing::Basin {
                    volume_m3: zone_volume,
                    basin: rectangular(zone_volume, self.depth_m)?,
                },
            );
        }

        if let Some(clarifier) = self.clarifier {
            let area_m2 = daily_flow / clarifier.loading_divisor;
            zones.insert(
                Zone::Clarifier,
                ZoneSizing::Clarifier {
                    area_m2,
                    basin: circular(area_m2, clarifier.swd_m)?,
                },
            );
        }

        let air = air_demand(influent, &self.effluent, constants)?;

        Ok((
            Sizing {
                technology: self.technology,
                hrt_h: self.hrt_h,
                volume_m3,
                zones,
            },
            Metrics {
                effluent: self.effluent,
                air,
            },
        ))
    }
}

/// Evaluate one technology's design rule.
pub fn design(
    technology: Technology,
    influent: &Influent,
    constants: &Constants,
) -> AgResult<DesignOutcome> {
    technology.policy().evaluate(influent, constants)
}

/// Evaluate every technology, in `Technology::ALL` order.
pub fn design_all(influent: &Influent, constants: &Constants) -> AgResult<Vec<DesignOutcome>> {
    Technology::ALL
        .iter()
        .map(|&tech| design(tech, influent, constants))
        .collect()
}

pub fn calc_cas(influent: &Influent, constants: &Constants) -> AgResult<DesignOutcome> {
    design(Technology::Cas, influent, constants)
}

pub fn calc_ifas(influent: &Influent, constants: &Constants) -> AgResult<DesignOutcome> {
    design(Technology::Ifas, influent, constants)
}

pub fn calc_mbr(influent: &Influent, constants: &Constants) -> AgResult<DesignOutcome> {
    design(Technology::Mbr, influent, constants)
}

pub fn calc_mbbr(influent: &Influent, constants: &Constants) -> AgResult<DesignOutcome> {
    design(Technology::Mbbr, influent, constants)
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
    fn zone_keys_per_technology() {
        let c = Constants::default();
        let expected: [(Technology, &[Zone]); 4] = [
            (Technology::Cas, &[Zone::Anoxic, Zone::Aerobic, Zone::Clarifier]),
            (Technology::Ifas, &[Zone::Anoxic, Zone::Ifas, Zone::Clarifier]),
            (Technology::Mbr, &[Zone::Anoxic, Zone::Mbr]),
            (Technology::Mbbr, &[Zone::Mbbr]),
        ];
        for (tech, zones) in expected {
            let (sizing, _) = design(tech, &typical(), &c).unwrap();
            let keys: Vec<Zone> = sizing.zones.keys().copied().collect();
            assert_eq!(keys, zones, "{tech}");
        }
    }

    #[test]
    fn volume_is_flow_times_hrt() {
        let c = Constants::default();
        for tech in Technology::ALL {
            let (sizing, _) = design(tech, &typical(), &c).unwrap();
            let expected = 3785.41 * tech.policy().hrt_h / 24.0;
            assert!(nearly_equal(sizing.volume_m3, expected, Tolerances::default()));
        }
    }

    #[test]
    fn mbr_dims() {
        let c = Constants::default();
        let (sizing, metrics) = calc_mbr(&typical(), &c).unwrap();
        let dims = sizing.dims();
        assert_eq!(dims[0].0, "Anoxic");
        assert_eq!(dims[0].1[0], ("Length (m)", "14.5".to_string()));
        assert_eq!(dims[1].0, "MBR");
        assert_eq!(dims[1].1[1], ("Width (m)", "5.9".to_string()));
        assert_eq!(metrics.get("Effluent TSS (mg/L)"), Some(1.0));
    }

    #[test]
    fn ifas_clarifier_uses_its_own_loading() {
        let c = Constants::default();
        let (sizing, _) = calc_ifas(&typical(), &c).unwrap();
        match sizing.zone(Zone::Clarifier) {
            Some(ZoneSizing::Clarifier { area_m2, basin }) => {
                assert!(nearly_equal(*area_m2, 3785.41 / 28.0, Tolerances::default()));
                assert_eq!(format!("{:.1}", basin.diameter_m), "13.1");
            }
            other => panic!("expected clarifier, got {other:?}"),
        }
    }

    #[test]
    fn design_all_in_table_order() {
        let c = Constants::default();
        let all = design_all(&typical(), &c).unwrap();
        let techs: Vec<_> = all.iter().map(|(s, _)| s.technology).collect();
        assert_eq!(techs, Technology::ALL);
    }

    #[test]
    fn weak_influent_fails_air_demand() {
        // TKN below every technology's effluent target
        let c = Constants::default();
        let inf = Influent::new(1.0, FlowUnit::Mld, 250.0, 220.0, 3.0, 7.0).unwrap();
        assert!(calc_cas(&inf, &c).is_err());
        assert!(design_all(&inf, &c).is_err());
    }
}
