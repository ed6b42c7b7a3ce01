//! Branching-network solver for pump sizing.
//!
//! Given a validated tree network, the solver
//! 1. propagates demand upstream to get the flow in every pipe,
//! 2. evaluates friction and fitting losses per pipe,
//! 3. sums losses and static head along every source-to-demand path and
//!    picks the path needing the most head.
//!
//! The pump must deliver the total network demand at the critical path's head.

pub mod analysis;
pub mod critical_path;
pub mod error;
pub mod flow;
pub mod losses;

pub use analysis::{AnalysisOptions, AnalysisResult, PumpRequirement, analyze, analyze_with};
pub use critical_path::{PathResult, evaluate_paths, select_critical, trace_path};
pub use error::{SolverError, SolverResult};
pub use flow::{PipeFlows, conservation_residuals, propagate_flows, total_demand};
pub use losses::{PipeHydraulics, evaluate_losses};
