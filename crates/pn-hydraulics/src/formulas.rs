//! Pipe-flow formulas.
//!
//! All inputs and outputs are plain SI `f64` values so each function can be
//! checked against hand calculations.

use pn_core::units::constants::{G_MPS2, RE_TRANSITION, WATER_NU_20C_M2PS};
use std::f64::consts::PI;

/// Flow regime implied by a Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// Reynolds number of zero; the pipe carries no flow.
    NoFlow,
    Laminar,
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(re: f64) -> Self {
        if re <= 0.0 {
            FlowRegime::NoFlow
        } else if re < RE_TRANSITION {
            FlowRegime::Laminar
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FlowRegime::NoFlow => "no_flow",
            FlowRegime::Laminar => "laminar",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

/// Fluid constants that enter the formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Kinematic viscosity (m²/s)
    pub kinematic_viscosity: f64,
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
}

impl FluidProperties {
    /// Water at 20 °C under standard gravity.
    pub const WATER_20C: Self = Self {
        kinematic_viscosity: WATER_NU_20C_M2PS,
        gravity: G_MPS2,
    };

    pub fn reynolds(&self, velocity_ms: f64, diameter_m: f64) -> f64 {
        if diameter_m <= 0.0 || self.kinematic_viscosity <= 0.0 {
            return 0.0;
        }
        velocity_ms * diameter_m / self.kinematic_viscosity
    }

    /// Dynamic pressure expressed as head, v²/(2g).
    pub fn velocity_head(&self, velocity_ms: f64) -> f64 {
        velocity_ms.powi(2) / (2.0 * self.gravity)
    }

    pub fn friction_head_loss(
        &self,
        friction_factor: f64,
        length_m: f64,
        diameter_m: f64,
        velocity_ms: f64,
    ) -> f64 {
        if diameter_m <= 0.0 {
            return 0.0;
        }
        friction_factor * (length_m / diameter_m) * self.velocity_head(velocity_ms)
    }

    pub fn minor_head_loss<S: AsRef<str>>(&self, fittings: &[S], velocity_ms: f64) -> f64 {
        crate::fittings::total_k(fittings) * self.velocity_head(velocity_ms)
    }
}

impl Default for FluidProperties {
    fn default() -> Self {
        Self::WATER_20C
    }
}

/// Mean velocity of `flow_m3s` through a circular bore.
pub fn velocity(flow_m3s: f64, diameter_m: f64) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    let area = PI * diameter_m.powi(2) / 4.0;
    flow_m3s / area
}

/// Reynolds number for water at 20 °C.
pub fn reynolds(velocity_ms: f64, diameter_m: f64) -> f64 {
    FluidProperties::WATER_20C.reynolds(velocity_ms, diameter_m)
}

/// Darcy friction factor.
///
/// Laminar below Re = 2300 (64/Re), Swamee-Jain explicit approximation of
/// Colebrook above it. Returns 0 for a zero diameter or a non-positive
/// Reynolds number.
pub fn friction_factor(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    if diameter_m <= 0.0 {
        return 0.0;
    }
    match FlowRegime::from_reynolds(reynolds) {
        FlowRegime::NoFlow => 0.0,
        FlowRegime::Laminar => 64.0 / reynolds,
        FlowRegime::Turbulent => {
            let a = roughness_m / (3.7 * diameter_m);
            let b = 5.74 / reynolds.powf(0.9);
            0.25 / (a + b).log10().powi(2)
        }
    }
}

/// Darcy-Weisbach friction loss (m) under standard gravity.
pub fn friction_head_loss(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    velocity_ms: f64,
) -> f64 {
    FluidProperties::WATER_20C.friction_head_loss(
        friction_factor,
        length_m,
        diameter_m,
        velocity_ms,
    )
}

/// Fitting loss (m): sum of K over `fittings` times v²/(2g).
///
/// Unknown labels contribute nothing.
pub fn minor_head_loss<S: AsRef<str>>(fittings: &[S], velocity_ms: f64) -> f64 {
    FluidProperties::WATER_20C.minor_head_loss(fittings, velocity_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(
            a,
            b,
            Tolerances {
                abs: 1e-9,
                rel: 1e-6,
            },
        )
    }

    #[test]
    fn velocity_matches_hand_calculation() {
        // 35 l/s through 75 mm: A = 4.41786e-3 m²
        let v = velocity(0.035, 0.075);
        assert!((v - 7.922_379).abs() < 1e-5, "v = {v}");
    }

    #[test]
    fn reynolds_uses_water_viscosity() {
        let re = reynolds(2.0, 0.05);
        assert!(close(re, 2.0 * 0.05 / 1.004e-6));
    }

    #[test]
    fn laminar_branch_below_transition() {
        let f = friction_factor(2299.0, 4.5e-5, 0.05);
        assert!(close(f, 64.0 / 2299.0));
        assert!(f.is_finite() && f > 0.0);
    }

    #[test]
    fn turbulent_branch_above_transition() {
        let f = friction_factor(2301.0, 4.5e-5, 0.05);
        assert!(f.is_finite() && f > 0.0);
        assert!(!close(f, 64.0 / 2301.0));
        // Exactly at the threshold the turbulent formula applies.
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Turbulent);
    }

    #[test]
    fn swamee_jain_reference_value() {
        // Re = 1e5, e/D = 1e-3 -> f ≈ 0.0222 (Moody chart)
        let f = friction_factor(1.0e5, 5.0e-5, 0.05);
        assert!((f - 0.0222).abs() < 5e-4, "f = {f}");
    }

    #[test]
    fn zero_diameter_is_degenerate_not_an_error() {
        assert_eq!(velocity(0.01, 0.0), 0.0);
        assert_eq!(reynolds(1.0, 0.0), 0.0);
        assert_eq!(friction_factor(5000.0, 4.5e-5, 0.0), 0.0);
        assert_eq!(friction_factor(1000.0, 4.5e-5, 0.0), 0.0);
        assert_eq!(friction_head_loss(0.02, 10.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn zero_reynolds_does_not_divide_by_zero() {
        assert_eq!(friction_factor(0.0, 4.5e-5, 0.05), 0.0);
        assert_eq!(FlowRegime::from_reynolds(0.0), FlowRegime::NoFlow);
    }

    #[test]
    fn darcy_weisbach_matches_hand_calculation() {
        // f=0.02, L=100, D=0.1, v=2 -> 0.02 * 1000 * 4 / 19.62
        let hf = friction_head_loss(0.02, 100.0, 0.1, 2.0);
        assert!(close(hf, 0.02 * 1000.0 * 4.0 / 19.62));
    }

    #[test]
    fn minor_loss_sums_known_fittings() {
        let v = 3.0;
        let h = minor_head_loss(&["elbow_90", "check_valve"], v);
        assert!(close(h, 3.4 * 9.0 / 19.62));
    }

    #[test]
    fn unknown_fitting_contributes_nothing() {
        let v = 2.0;
        let with_unknown = minor_head_loss(&["elbow_45", "flux_capacitor"], v);
        let without = minor_head_loss(&["elbow_45"], v);
        assert_eq!(with_unknown, without);
        assert_eq!(minor_head_loss::<&str>(&[], v), 0.0);
    }

    #[test]
    fn custom_fluid_properties_scale_results() {
        let fluid = FluidProperties {
            kinematic_viscosity: 2.0e-6,
            gravity: 9.81,
        };
        assert!(close(fluid.reynolds(1.0, 0.1), 0.5 * reynolds(1.0, 0.1) * 1.004));
    }

    proptest! {
        #[test]
        fn friction_factor_is_positive_and_finite(
            re in 1.0_f64..1.0e8,
            eps in 0.0_f64..1.0e-3,
            d in 0.005_f64..1.0,
        ) {
            let f = friction_factor(re, eps, d);
            prop_assert!(f.is_finite());
            prop_assert!(f > 0.0);
        }

        #[test]
        fn friction_loss_grows_with_length(
            f in 0.008_f64..0.1,
            l in 1.0_f64..1000.0,
            d in 0.01_f64..0.5,
            v in 0.1_f64..5.0,
        ) {
            prop_assert!(friction_head_loss(f, 2.0 * l, d, v) > friction_head_loss(f, l, d, v));
        }
    }
}
