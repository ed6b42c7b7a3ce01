//! Description -> solver network.
//!
//! Converts external units (millimeters, liters per second) into the
//! core's SI quantities while building the tree.

use pn_core::units::{lps, m, mm};
use pn_graph::{GraphError, NetworkBuilder, PipeNetwork, PipeSpec};
use pn_project::NetworkDef;
use tracing::debug;

pub fn compile_network(def: &NetworkDef) -> Result<PipeNetwork, GraphError> {
    let mut builder = NetworkBuilder::new();

    for node in &def.nodes {
        builder.add_node(node.id.clone(), m(node.elevation_m), lps(node.demand_lps));
    }

    for pipe in &def.pipes {
        let resolve = |node: &str| {
            builder.node_id(node).ok_or_else(|| GraphError::UnknownNode {
                pipe: pipe.id.clone(),
                node: node.to_string(),
            })
        };
        let inlet = resolve(&pipe.start_node_id)?;
        let outlet = resolve(&pipe.end_node_id)?;

        let spec = PipeSpec::new(m(pipe.length_m), mm(pipe.diameter_mm), pipe.material.clone())
            .with_fittings(pipe.fittings.iter().cloned());
        builder.add_pipe(pipe.id.clone(), inlet, outlet, spec);
    }

    let network = builder.build()?;
    debug!(
        nodes = network.nodes().len(),
        pipes = network.pipes().len(),
        "compiled network"
    );
    Ok(network)
}
