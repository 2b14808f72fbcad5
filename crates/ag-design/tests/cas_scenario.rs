//! End-to-end sizing of a typical municipal influent.

use ag_core::Constants;
use ag_core::numeric::{Tolerances, nearly_equal};
use ag_design::{Metrics, Technology, Zone, calc_cas, design};
use ag_influent::Influent;

fn tol(abs: f64) -> Tolerances {
    Tolerances { abs, rel: 1e-9 }
}

#[test]
fn cas_one_mgd() {
    let c = Constants::standard();
    let inf = Influent::parse(1.0, "MGD", 250.0, 220.0, 40.0, 7.0).unwrap();
    let (sizing, metrics) = calc_cas(&inf, c).unwrap();

    assert_eq!(sizing.technology, Technology::Cas);
    assert!(nearly_equal(sizing.volume_m3, 946.35, tol(0.01)));
    assert!(nearly_equal(
        sizing.zone_volume_m3(Zone::Anoxic).unwrap(),
        283.9,
        tol(0.01)
    ));
    assert!(nearly_equal(
        sizing.zone_volume_m3(Zone::Aerobic).unwrap(),
        662.4,
        tol(0.05)
    ));

    assert_eq!(metrics.get(Metrics::EFFLUENT_BOD), Some(10.0));
    assert_eq!(metrics.get(Metrics::EFFLUENT_TSS), Some(12.0));
    assert_eq!(metrics.get(Metrics::EFFLUENT_TKN), Some(8.0));
    assert_eq!(metrics.get(Metrics::EFFLUENT_TP), Some(2.0));

    let o2 = (240.0 * c.o2_per_bod + 32.0 * c.o2_per_n) * 3785.41 / 1000.0;
    let air = o2 / (c.sote * c.o2_in_air * c.air_density) / 24.0;
    assert!(nearly_equal(metrics.required_air_m3h(), air, Tolerances::default()));

    let dims = sizing.dims();
    let labels: Vec<_> = dims.iter().map(|(zone, _)| *zone).collect();
    assert_eq!(labels, ["Anoxic", "Aerobic", "Clarifier"]);
    assert_eq!(
        dims[2].1,
        vec![
            ("Diameter (m)", "14.2".to_string()),
            ("SWD (m)", "4.5".to_string())
        ]
    );
}

#[test]
fn every_technology_reports_five_metrics() {
    let c = Constants::standard();
    let inf = Influent::parse(10.0, "MLD", 300.0, 250.0, 45.0, 8.0).unwrap();
    for tech in Technology::ALL {
        let (_, metrics) = design(tech, &inf, c).unwrap();
        let labels: Vec<_> = metrics.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            labels,
            [
                "Effluent BOD (mg/L)",
                "Effluent TSS (mg/L)",
                "Effluent TKN (mg/L)",
                "Effluent TP (mg/L)",
                "Required Air (m³/h)",
            ]
        );
    }
}

#[test]
fn better_effluent_needs_more_air() {
    let c = Constants::standard();
    let inf = Influent::parse(1.0, "MGD", 250.0, 220.0, 40.0, 7.0).unwrap();
    let air = |tech| design(tech, &inf, c).unwrap().1.required_air_m3h();
    assert!(air(Technology::Mbr) > air(Technology::Ifas));
    assert!(air(Technology::Ifas) > air(Technology::Cas));
    assert!(air(Technology::Cas) > air(Technology::Mbbr));
}

#[test]
fn sizing_serializes_with_zone_names() {
    let c = Constants::standard();
    let inf = Influent::parse(1.0, "MGD", 250.0, 220.0, 40.0, 7.0).unwrap();
    let (sizing, _) = design(Technology::Ifas, &inf, c).unwrap();
    let json = serde_json::to_value(&sizing).unwrap();
    assert_eq!(json["technology"], "IFAS");
    assert!(json["zones"]["IFAS"]["basin"]["length_m"].is_number());
    assert_eq!(json["zones"]["Clarifier"]["kind"], "Clarifier");
}
