//! pn-hydraulics: closed-form pipe-flow formulas and lookup catalogs.
//!
//! Provides:
//! - Velocity, Reynolds number, Darcy friction factor (laminar / Swamee-Jain)
//! - Darcy-Weisbach friction loss and fitting (minor) loss
//! - Wall roughness per pipe material
//! - Loss coefficients per fitting type
//!
//! Formulas never fail. Degenerate inputs (zero diameter, zero Reynolds
//! number) yield 0, and unknown catalog keys resolve to documented
//! fallbacks.
//!
//! # Example
//!
//! ```
//! use pn_hydraulics::formulas::{friction_factor, friction_head_loss, reynolds, velocity};
//! use pn_hydraulics::materials::roughness;
//!
//! let d = 0.075;
//! let v = velocity(0.035, d);
//! let re = reynolds(v, d);
//! let f = friction_factor(re, roughness("Steel"), d);
//! let hf = friction_head_loss(f, 50.0, d, v);
//! assert!(hf > 0.0);
//! ```

pub mod fittings;
pub mod formulas;
pub mod materials;

pub use fittings::{Fitting, FittingEntry, k_coefficient, total_k};
pub use formulas::{FlowRegime, FluidProperties};
pub use materials::{Material, MaterialEntry, roughness};
