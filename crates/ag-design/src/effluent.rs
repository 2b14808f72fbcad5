//! Expected effluent quality of a treatment train.

use serde::{Deserialize, Serialize};

/// Effluent concentrations (mg/L).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffluentQuality {
    pub bod: f64,
    pub tss: f64,
    pub tkn: f64,
    pub tp: f64,
}

impl EffluentQuality {
    pub const fn new(bod: f64, tss: f64, tkn: f64, tp: f64) -> Self {
        Self { bod, tss, tkn, tp }
    }

    /// Pollutant name and concentration, in report order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("BOD", self.bod),
            ("TSS", self.tss),
            ("TKN", self.tkn),
            ("TP", self.tp),
        ]
    }
}
