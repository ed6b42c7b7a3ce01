use crate::PnError;

/// Scalar type for every hydraulic quantity.
pub type Real = f64;

/// Absolute and relative slack for comparing computed values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    /// Tight enough for sums of flows in m³/s.
    pub const FLOW: Tolerances = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };

    /// For heads and losses in meters.
    pub const HEAD: Tolerances = Tolerances {
        abs: 1e-9,
        rel: 1e-6,
    };
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::FLOW
    }
}

/// `true` when `a` and `b` differ by at most `tol.abs`, or by at most
/// `tol.rel` times the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

/// Pass `v` through, or name it in a `NonFinite` error.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PnError::NonFinite { what, value: v })
    }
}
