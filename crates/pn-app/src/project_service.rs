//! Network description loading and introspection.

use std::path::Path;

use pn_project::NetworkDef;
use tracing::info;

use crate::error::AppResult;

/// Summary of a description for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    pub name: String,
    pub node_count: usize,
    pub pipe_count: usize,
    pub demand_node_count: usize,
    pub total_demand_lps: f64,
}

/// Load and validate a description from a YAML or JSON file.
pub fn load_network(path: &Path) -> AppResult<NetworkDef> {
    let network = pn_project::load_network(path)?;
    info!(
        path = %path.display(),
        nodes = network.nodes.len(),
        pipes = network.pipes.len(),
        "loaded network description"
    );
    Ok(network)
}

pub fn summarize(network: &NetworkDef) -> NetworkSummary {
    NetworkSummary {
        name: network.name.clone(),
        node_count: network.nodes.len(),
        pipe_count: network.pipes.len(),
        demand_node_count: network.nodes.iter().filter(|n| n.demand_lps > 0.0).count(),
        total_demand_lps: network.total_demand_lps(),
    }
}
