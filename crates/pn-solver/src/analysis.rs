//! End-to-end analysis: flows, losses, paths, pump duty point.

use pn_core::units::{VolumeRate, as_lps};
use pn_graph::PipeNetwork;
use pn_hydraulics::FluidProperties;
use tracing::{debug, info};

use crate::critical_path::{PathResult, evaluate_paths, select_critical};
use crate::error::{SolverError, SolverResult};
use crate::flow::{propagate_flows, total_demand};
use crate::losses::{PipeHydraulics, evaluate_losses};

/// Separator used when rendering a path as text.
pub const PATH_SEPARATOR: &str = " -> ";

/// Analysis configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    pub fluid: FluidProperties,
}

/// Flow and head the pump must deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpRequirement {
    /// Sum of all node demands.
    pub flow: VolumeRate,
    /// Total head of the critical path (m).
    pub head_m: f64,
}

/// Everything one analysis produces.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub pump: PumpRequirement,
    /// One entry per demand node, in node order.
    pub paths: Vec<PathResult>,
    /// Index into `paths` of the critical path.
    pub critical: usize,
    /// One entry per pipe, in pipe order.
    pub pipes: Vec<PipeHydraulics>,
}

impl AnalysisResult {
    pub fn critical_path(&self) -> &PathResult {
        &self.paths[self.critical]
    }

    /// Critical path as node names joined by an arrow.
    pub fn critical_path_label(&self, network: &PipeNetwork) -> String {
        self.critical_path().label(network, PATH_SEPARATOR)
    }
}

/// Analyze with water at 20 °C.
pub fn analyze(network: &PipeNetwork) -> SolverResult<AnalysisResult> {
    analyze_with(network, &AnalysisOptions::default())
}

/// Size the pump for `network`.
pub fn analyze_with(
    network: &PipeNetwork,
    options: &AnalysisOptions,
) -> SolverResult<AnalysisResult> {
    let flows = propagate_flows(network);
    let pipes = evaluate_losses(network, &flows, &options.fluid);

    let paths = evaluate_paths(network, &pipes)?;
    debug!(paths = paths.len(), "evaluated demand paths");

    let critical = select_critical(network, &paths).ok_or(SolverError::NoDemand)?;
    let pump = PumpRequirement {
        flow: total_demand(network),
        head_m: paths[critical].total_head_m,
    };

    info!(
        flow_lps = as_lps(pump.flow),
        head_m = pump.head_m,
        critical_path = %paths[critical].label(network, PATH_SEPARATOR),
        "pump duty point"
    );

    Ok(AnalysisResult {
        pump,
        paths,
        critical,
        pipes,
    })
}
