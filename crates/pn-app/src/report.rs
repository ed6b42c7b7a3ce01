//! Output shapes handed to frontends.

use std::fmt::Write as _;

use pn_core::units::as_lps;
use pn_graph::PipeNetwork;
use pn_solver::analysis::PATH_SEPARATOR;
use pn_solver::{AnalysisResult, PathResult, PipeHydraulics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PumpReport {
    pub flow_lps: f64,
    pub head_m: f64,
    /// Node ids from source to the governing demand node, joined by " -> ".
    pub critical_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipeReport {
    pub id: String,
    pub flow_lps: f64,
    pub velocity_ms: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    /// "laminar", "turbulent" or "no_flow"
    pub regime: String,
    pub friction_loss_m: f64,
    pub minor_loss_m: f64,
    pub total_loss_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathReport {
    pub demand_node: String,
    pub path: String,
    pub pipes: Vec<String>,
    pub head_loss_m: f64,
    pub static_head_m: f64,
    pub total_head_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub pump: PumpReport,
    pub pipes: Vec<PipeReport>,
    pub paths: Vec<PathReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorReport {
    pub error: String,
}

/// Either a full report or a single error message; never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Report(AnalysisReport),
    Error(ErrorReport),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

impl AnalysisReport {
    pub fn from_result(network: &PipeNetwork, result: &AnalysisResult) -> Self {
        Self {
            pump: PumpReport {
                flow_lps: as_lps(result.pump.flow),
                head_m: result.pump.head_m,
                critical_path: result.critical_path_label(network),
            },
            pipes: result
                .pipes
                .iter()
                .map(|h| pipe_report(network, h))
                .collect(),
            paths: result
                .paths
                .iter()
                .map(|p| path_report(network, p))
                .collect(),
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Pump requirement");
        let _ = writeln!(out, "  flow:          {:.2} l/s", self.pump.flow_lps);
        let _ = writeln!(out, "  head:          {:.3} m", self.pump.head_m);
        let _ = writeln!(out, "  critical path: {}", self.pump.critical_path);
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "{:<12} {:>10} {:>10} {:>12} {:>9} {:>10} {:>10} {:>10}",
            "pipe", "Q [l/s]", "v [m/s]", "Re", "f", "hf [m]", "hm [m]", "h [m]"
        );
        for p in &self.pipes {
            let _ = writeln!(
                out,
                "{:<12} {:>10.2} {:>10.3} {:>12.0} {:>9.5} {:>10.3} {:>10.3} {:>10.3}",
                p.id,
                p.flow_lps,
                p.velocity_ms,
                p.reynolds,
                p.friction_factor,
                p.friction_loss_m,
                p.minor_loss_m,
                p.total_loss_m
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Paths");
        for path in &self.paths {
            let marker = if path.path == self.pump.critical_path { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "{} {:<40} loss {:>9.3} m  static {:>8.3} m  total {:>9.3} m",
                marker, path.path, path.head_loss_m, path.static_head_m, path.total_head_m
            );
        }
        out
    }
}

fn pipe_report(network: &PipeNetwork, h: &PipeHydraulics) -> PipeReport {
    PipeReport {
        id: network
            .pipe(h.pipe)
            .map_or_else(|| h.pipe.to_string(), |p| p.name.clone()),
        flow_lps: as_lps(h.flow),
        velocity_ms: h.velocity_ms,
        reynolds: h.reynolds,
        friction_factor: h.friction_factor,
        regime: h.regime().as_str().to_string(),
        friction_loss_m: h.friction_loss_m,
        minor_loss_m: h.minor_loss_m,
        total_loss_m: h.total_loss_m,
    }
}

fn path_report(network: &PipeNetwork, p: &PathResult) -> PathReport {
    PathReport {
        demand_node: network
            .node(p.demand_node)
            .map_or_else(|| p.demand_node.to_string(), |n| n.name.clone()),
        path: p.label(network, PATH_SEPARATOR),
        pipes: p
            .pipes
            .iter()
            .filter_map(|&id| network.pipe(id).map(|pipe| pipe.name.clone()))
            .collect(),
        head_loss_m: p.head_loss_m,
        static_head_m: p.static_head_m,
        total_head_m: p.total_head_m,
    }
}
