//! pn-core: shared foundation for the pipenet crates.
//!
//! Unit aliases and constructors over `uom`, the physical constants the
//! formulas use, dense node/pipe handles, float comparison helpers and the
//! common error type.

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{PnError, PnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
