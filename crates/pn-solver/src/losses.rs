//! Per-pipe loss evaluation.
//!
//! Each stage consumes the previous stage's output type, so the sequence
//! velocity -> Reynolds -> friction factor -> friction loss -> minor loss
//! is fixed by the signatures.

use pn_core::PipeId;
use pn_core::units::{VolumeRate, as_m, as_m3ps};
use pn_graph::{Pipe, PipeNetwork};
use pn_hydraulics::formulas::{self, FlowRegime, FluidProperties};
use pn_hydraulics::{fittings, materials};
use tracing::{debug, warn};

use crate::flow::PipeFlows;

/// Velocity and Reynolds number for one pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Kinematics {
    velocity_ms: f64,
    reynolds: f64,
}

/// Friction factor and the friction loss it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Friction {
    factor: f64,
    loss_m: f64,
}

fn kinematics(flow_m3s: f64, diameter_m: f64, fluid: &FluidProperties) -> Kinematics {
    let velocity_ms = formulas::velocity(flow_m3s, diameter_m);
    Kinematics {
        velocity_ms,
        reynolds: fluid.reynolds(velocity_ms, diameter_m),
    }
}

fn friction(
    k: Kinematics,
    roughness_m: f64,
    length_m: f64,
    diameter_m: f64,
    fluid: &FluidProperties,
) -> Friction {
    let factor = formulas::friction_factor(k.reynolds, roughness_m, diameter_m);
    Friction {
        factor,
        loss_m: fluid.friction_head_loss(factor, length_m, diameter_m, k.velocity_ms),
    }
}

fn minor_loss(k: Kinematics, fittings: &[String], fluid: &FluidProperties) -> f64 {
    fluid.minor_head_loss(fittings, k.velocity_ms)
}

/// Hydraulic result for one pipe, written once per analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeHydraulics {
    pub pipe: PipeId,
    pub flow: VolumeRate,
    pub velocity_ms: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub friction_loss_m: f64,
    pub minor_loss_m: f64,
    pub total_loss_m: f64,
}

impl PipeHydraulics {
    /// A pipe that carries no flow has no loss.
    fn idle(pipe: PipeId, flow: VolumeRate) -> Self {
        Self {
            pipe,
            flow,
            velocity_ms: 0.0,
            reynolds: 0.0,
            friction_factor: 0.0,
            friction_loss_m: 0.0,
            minor_loss_m: 0.0,
            total_loss_m: 0.0,
        }
    }

    /// Run the loss pipeline for `pipe` carrying `flow`.
    ///
    /// Zero or negative flow skips the pipeline and reports zero loss.
    pub fn evaluate(pipe: &Pipe, flow: VolumeRate, fluid: &FluidProperties) -> Self {
        let flow_m3s = as_m3ps(flow);
        if flow_m3s <= 0.0 {
            return Self::idle(pipe.id, flow);
        }

        let diameter_m = as_m(pipe.diameter);
        let k = kinematics(flow_m3s, diameter_m, fluid);
        let f = friction(
            k,
            materials::roughness(&pipe.material),
            as_m(pipe.length),
            diameter_m,
            fluid,
        );
        let minor_m = minor_loss(k, &pipe.fittings, fluid);

        Self {
            pipe: pipe.id,
            flow,
            velocity_ms: k.velocity_ms,
            reynolds: k.reynolds,
            friction_factor: f.factor,
            friction_loss_m: f.loss_m,
            minor_loss_m: minor_m,
            total_loss_m: f.loss_m + minor_m,
        }
    }

    pub fn regime(&self) -> FlowRegime {
        FlowRegime::from_reynolds(self.reynolds)
    }
}

/// Evaluate losses for every pipe, in pipe ID order.
pub fn evaluate_losses(
    network: &PipeNetwork,
    flows: &PipeFlows,
    fluid: &FluidProperties,
) -> Vec<PipeHydraulics> {
    network
        .pipes()
        .iter()
        .map(|pipe| {
            report_catalog_misses(pipe);
            let result = PipeHydraulics::evaluate(pipe, flows.get(pipe.id), fluid);
            debug!(
                pipe = %pipe.name,
                velocity_ms = result.velocity_ms,
                reynolds = result.reynolds,
                total_loss_m = result.total_loss_m,
                "evaluated pipe losses"
            );
            result
        })
        .collect()
}

fn report_catalog_misses(pipe: &Pipe) {
    if materials::lookup(&pipe.material).is_none() {
        warn!(
            pipe = %pipe.name,
            material = %pipe.material,
            "unknown material, using steel roughness"
        );
    }
    for label in &pipe.fittings {
        if fittings::lookup(label).is_none() {
            warn!(pipe = %pipe.name, fitting = %label, "unknown fitting, K = 0");
        }
    }
}
