//! Process-engineering coefficients and unit conversions.
//!
//! A single [`Constants`] value is shared read-only by every calculation.
//! Nothing in the engine mutates it; callers that need different defaults
//! build their own instance and pass it explicitly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable table of sizing coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constants {
    // Conversions
    /// Million US gallons per day -> m³/day
    pub mgd_to_m3d: f64,
    /// Megalitres per day -> m³/day
    pub mld_to_m3d: f64,
    /// m³/h -> US gallons per minute
    pub m3h_to_gpm: f64,
    /// m³ -> US gallons
    pub m3_to_gal: f64,
    /// m² -> ft²
    pub m2_to_ft2: f64,
    /// m -> ft
    pub m_to_ft: f64,

    // Kinetics
    /// Heterotrophic yield (kg VSS / kg BOD)
    pub yield_coeff: f64,
    /// Endogenous decay (1/day)
    pub decay_coeff: f64,
    pub tss_per_vss: f64,
    pub vss_per_tss: f64,

    // Aeration
    /// kg O2 per kg BOD removed
    pub o2_per_bod: f64,
    /// kg O2 per kg TKN nitrified
    pub o2_per_n: f64,
    /// Standard oxygen transfer efficiency (fraction)
    pub sote: f64,
    /// Mass fraction of O2 in air
    pub o2_in_air: f64,
    /// Air density (kg/m³)
    pub air_density: f64,

    // Chemicals
    pub alum_per_p: f64,
    pub methanol_per_n: f64,
    pub naoh_per_h2s: f64,
    pub naocl_per_h2s: f64,
    pub h2so4_per_nh3: f64,
}

static STANDARD: Constants = Constants::new();

impl Constants {
    /// Process defaults.
    pub const fn new() -> Self {
        Self {
            mgd_to_m3d: 3785.41,
            mld_to_m3d: 1000.0,
            m3h_to_gpm: 4.40287,
            m3_to_gal: 264.172,
            m2_to_ft2: 10.7639,
            m_to_ft: 3.28084,

            yield_coeff: 0.60,
            decay_coeff: 0.06,
            tss_per_vss: 1.25,
            vss_per_tss: 0.8,

            o2_per_bod: 1.5,
            o2_per_n: 4.57,
            sote: 0.30,
            o2_in_air: 0.232,
            air_density: 1.225,

            alum_per_p: 9.7,
            methanol_per_n: 2.86,
            naoh_per_h2s: 2.5,
            naocl_per_h2s: 4.5,
            h2so4_per_nh3: 0.6,
        }
    }

    /// Process-wide read-only instance.
    pub fn standard() -> &'static Constants {
        &STANDARD
    }

    /// kg O2 delivered per m³ of air blown, at standard transfer efficiency.
    pub fn o2_delivered_per_m3_air(&self) -> f64 {
        self.sote * self.o2_in_air * self.air_density
    }

    /// Labelled view of every coefficient, in table order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("MGD to m³/d", self.mgd_to_m3d),
            ("MLD to m³/d", self.mld_to_m3d),
            ("m³/h to gpm", self.m3h_to_gpm),
            ("m³ to gal", self.m3_to_gal),
            ("m² to ft²", self.m2_to_ft2),
            ("m to ft", self.m_to_ft),
            ("Yield Y (kg VSS/kg BOD)", self.yield_coeff),
            ("Decay kd (1/d)", self.decay_coeff),
            ("TSS/VSS", self.tss_per_vss),
            ("VSS/TSS", self.vss_per_tss),
            ("O2 per BOD (kg/kg)", self.o2_per_bod),
            ("O2 per N (kg/kg)", self.o2_per_n),
            ("SOTE", self.sote),
            ("O2 in air (mass fraction)", self.o2_in_air),
            ("Air density (kg/m³)", self.air_density),
            ("Alum per P (kg/kg)", self.alum_per_p),
            ("Methanol per N (kg/kg)", self.methanol_per_n),
            ("NaOH per H2S (kg/kg)", self.naoh_per_h2s),
            ("NaOCl per H2S (kg/kg)", self.naocl_per_h2s),
            ("H2SO4 per NH3 (kg/kg)", self.h2so4_per_nh3),
        ]
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}
