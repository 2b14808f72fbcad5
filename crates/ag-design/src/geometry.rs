//! Basin proportioning conventions.
//!
//! Rectangular basins are laid out at 3:1 length:width at a fixed side depth.
//! Circular clarifiers are sized from a required surface area.

use ag_core::AgResult;
use ag_core::numeric::ensure_positive;
use ag_core::units::{Area, Length, Volume, m, m2, m3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default side-water depth for every basin (m).
pub const DEFAULT_DEPTH_M: f64 = 4.5;

/// Length:width ratio of rectangular basins.
pub const LENGTH_TO_WIDTH: f64 = 3.0;

/// Rectangular basin dimensions (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectBasin {
    pub length_m: f64,
    pub width_m: f64,
    pub depth_m: f64,
}

impl RectBasin {
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.depth_m
    }

    pub fn length(&self) -> Length {
        m(self.length_m)
    }

    pub fn width(&self) -> Length {
        m(self.width_m)
    }

    pub fn depth(&self) -> Length {
        m(self.depth_m)
    }

    pub fn volume(&self) -> Volume {
        m3(self.volume_m3())
    }

    /// Labelled one-decimal strings, in display order. Ties round on the
    /// exact binary value, so 2.25 shows as 2.2 and 1.45 as 1.4.
    pub fn display_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Length (m)", format!("{:.1}", self.length_m)),
            ("Width (m)", format!("{:.1}", self.width_m)),
            ("Depth (m)", format!("{:.1}", self.depth_m)),
        ]
    }
}

/// Circular clarifier dimensions (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularBasin {
    pub diameter_m: f64,
    /// Side-water depth
    pub swd_m: f64,
}

impl CircularBasin {
    pub fn area_m2(&self) -> f64 {
        PI * (self.diameter_m / 2.0).powi(2)
    }

    pub fn diameter(&self) -> Length {
        m(self.diameter_m)
    }

    pub fn area(&self) -> Area {
        m2(self.area_m2())
    }

    pub fn display_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Diameter (m)", format!("{:.1}", self.diameter_m)),
            ("SWD (m)", format!("{:.1}", self.swd_m)),
        ]
    }
}

/// Rectangular basin holding `volume_m3` at `depth_m`, 3:1 aspect ratio.
pub fn rectangular(volume_m3: f64, depth_m: f64) -> AgResult<RectBasin> {
    let volume_m3 = ensure_positive(volume_m3, "basin volume")?;
    let depth_m = ensure_positive(depth_m, "basin depth")?;

    let width_m = (volume_m3 / depth_m / LENGTH_TO_WIDTH).sqrt();
    Ok(RectBasin {
        length_m: LENGTH_TO_WIDTH * width_m,
        width_m,
        depth_m,
    })
}

/// Circular basin with plan area `area_m2`.
pub fn circular(area_m2: f64, depth_m: f64) -> AgResult<CircularBasin> {
    let area_m2 = ensure_positive(area_m2, "clarifier area")?;
    let swd_m = ensure_positive(depth_m, "clarifier depth")?;

    Ok(CircularBasin {
        diameter_m: 2.0 * (area_m2 / PI).sqrt(),
        swd_m,
    })
}
