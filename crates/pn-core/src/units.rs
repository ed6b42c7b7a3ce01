// pn-core/src/units.rs

use uom::si::f64::{
    Acceleration as UomAcceleration, Area as UomArea, Length as UomLength,
    Velocity as UomVelocity, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Area = UomArea;
pub type Length = UomLength;
pub type Velocity = UomVelocity;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn lps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_second;
    VolumeRate::new::<liter_per_second>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

/// Read a length back in meters.
#[inline]
pub fn as_m(l: Length) -> f64 {
    use uom::si::length::meter;
    l.get::<meter>()
}

/// Read a length back in millimeters.
#[inline]
pub fn as_mm(l: Length) -> f64 {
    use uom::si::length::millimeter;
    l.get::<millimeter>()
}

/// Read a volume rate back in liters per second.
#[inline]
pub fn as_lps(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::liter_per_second;
    q.get::<liter_per_second>()
}

/// Read a volume rate back in cubic meters per second.
#[inline]
pub fn as_m3ps(q: VolumeRate) -> f64 {
    use uom::si::volume_rate::cubic_meter_per_second;
    q.get::<cubic_meter_per_second>()
}

pub mod constants {
    use super::*;

    /// Gravitational acceleration used for head calculations.
    pub const G_MPS2: f64 = 9.81;

    /// Kinematic viscosity of water at 20 °C (m²/s).
    pub const WATER_NU_20C_M2PS: f64 = 1.004e-6;

    /// Laminar/turbulent transition Reynolds number.
    pub const RE_TRANSITION: f64 = 2300.0;

    #[inline]
    pub fn g() -> Accel {
        use uom::si::acceleration::meter_per_second_squared;
        Accel::new::<meter_per_second_squared>(G_MPS2)
    }
}
