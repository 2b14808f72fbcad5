use crate::AgError;

/// Floating point type used throughout the engine
pub type Real = f64;

/// Absolute and relative comparison bounds for volumes, areas and flows.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AgError::invalid_input(what, v, "must be finite"))
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, AgError> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(AgError::invalid_input(what, v, "must be >= 0"));
    }
    Ok(v)
}

/// Finite and `> 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, AgError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(AgError::invalid_input(what, v, "must be > 0"));
    }
    Ok(v)
}
