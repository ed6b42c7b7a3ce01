//! Source-to-demand path loads and critical path selection.

use pn_core::units::as_m;
use pn_core::{NodeId, PipeId, ensure_finite};
use pn_graph::PipeNetwork;

use crate::error::{SolverError, SolverResult};
use crate::losses::PipeHydraulics;

/// Head requirement along the path from the source to one demand node.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    pub demand_node: NodeId,
    /// Source first, demand node last.
    pub nodes: Vec<NodeId>,
    /// Pipes traversed, in flow order.
    pub pipes: Vec<PipeId>,
    /// Sum of total pipe losses along the path (m)
    pub head_loss_m: f64,
    /// Destination elevation minus source elevation (m); negative downhill.
    pub static_head_m: f64,
    /// `head_loss_m + static_head_m`
    pub total_head_m: f64,
}

impl PathResult {
    /// Node names joined with `separator`.
    pub fn label(&self, network: &PipeNetwork, separator: &str) -> String {
        self.nodes
            .iter()
            .filter_map(|&id| network.node(id).map(|n| n.name.as_str()))
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Walk inlet pipes from `target` back to the source.
///
/// Returns the node and pipe sequences in flow order. A walk that does not
/// reach the source within one step per node is reported as unreachable.
pub fn trace_path(
    network: &PipeNetwork,
    target: NodeId,
) -> SolverResult<(Vec<NodeId>, Vec<PipeId>)> {
    let unreachable = || SolverError::Unreachable {
        node: network
            .node(target)
            .map_or_else(|| target.to_string(), |n| n.name.clone()),
    };

    let mut nodes = vec![target];
    let mut pipes = Vec::new();
    let mut current = target;

    while current != network.source() {
        if pipes.len() >= network.nodes().len() {
            return Err(unreachable());
        }
        let pipe_id = network.inlet_pipe(current).ok_or_else(unreachable)?;
        let pipe = network.pipe(pipe_id).ok_or_else(unreachable)?;
        pipes.push(pipe_id);
        nodes.push(pipe.inlet);
        current = pipe.inlet;
    }

    nodes.reverse();
    pipes.reverse();
    Ok((nodes, pipes))
}

/// Head requirement for the path ending at `target`.
///
/// A non-finite total head is an error, so no path drops out of the
/// critical path selection.
pub fn evaluate_path(
    network: &PipeNetwork,
    losses: &[PipeHydraulics],
    target: NodeId,
) -> SolverResult<PathResult> {
    let (nodes, pipes) = trace_path(network, target)?;

    let head_loss_m = pipes
        .iter()
        .filter_map(|p| losses.get(p.slot()))
        .map(|h| h.total_loss_m)
        .sum::<f64>();

    let elevation = |id: NodeId| network.node(id).map_or(0.0, |n| as_m(n.elevation));
    let static_head_m = elevation(target) - elevation(network.source());

    let total_head_m = ensure_finite(head_loss_m + static_head_m, "path total head")?;

    Ok(PathResult {
        demand_node: target,
        nodes,
        pipes,
        head_loss_m,
        static_head_m,
        total_head_m,
    })
}

/// Path results for every demand node, in node order.
pub fn evaluate_paths(
    network: &PipeNetwork,
    losses: &[PipeHydraulics],
) -> SolverResult<Vec<PathResult>> {
    network
        .demand_nodes()
        .map(|node| evaluate_path(network, losses, node.id))
        .collect()
}

/// Index of the path needing the most head.
///
/// Exactly equal totals are broken by the lexicographically smallest demand
/// node name, so the choice does not depend on input order.
pub fn select_critical(network: &PipeNetwork, paths: &[PathResult]) -> Option<usize> {
    let name = |p: &PathResult| network.node(p.demand_node).map(|n| n.name.as_str());

    paths
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.total_head_m
                .total_cmp(&b.total_head_m)
                .then_with(|| name(b).cmp(&name(a)))
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::propagate_flows;
    use crate::losses::evaluate_losses;
    use pn_core::PnError;
    use pn_core::units::{lps, m, mm};
    use pn_graph::{NetworkBuilder, PipeSpec};
    use pn_hydraulics::FluidProperties;

    fn symmetric_network(names: [&str; 2]) -> PipeNetwork {
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(0.0), lps(0.0));
        let x = b.add_node(names[0], m(3.0), lps(5.0));
        let y = b.add_node(names[1], m(3.0), lps(5.0));
        b.add_pipe("PX", s, x, PipeSpec::new(m(10.0), mm(50.0), "PVC"));
        b.add_pipe("PY", s, y, PipeSpec::new(m(10.0), mm(50.0), "PVC"));
        b.build().unwrap()
    }

    fn paths_for(network: &PipeNetwork) -> Vec<PathResult> {
        let flows = propagate_flows(network);
        let losses = evaluate_losses(network, &flows, &FluidProperties::default());
        evaluate_paths(network, &losses).unwrap()
    }

    #[test]
    fn trace_returns_flow_order() {
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(0.0), lps(0.0));
        let a = b.add_node("A", m(0.0), lps(0.0));
        let c = b.add_node("C", m(0.0), lps(1.0));
        let p1 = b.add_pipe("P1", s, a, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let p2 = b.add_pipe("P2", a, c, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let network = b.build().unwrap();

        let (nodes, pipes) = trace_path(&network, c).unwrap();
        assert_eq!(nodes, vec![s, a, c]);
        assert_eq!(pipes, vec![p1, p2]);

        let (nodes, pipes) = trace_path(&network, s).unwrap();
        assert_eq!(nodes, vec![s]);
        assert!(pipes.is_empty());
    }

    #[test]
    fn downhill_static_head_is_negative() {
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(50.0), lps(0.0));
        let low = b.add_node("Low", m(40.0), lps(1.0));
        b.add_pipe("P", s, low, PipeSpec::new(m(5.0), mm(80.0), "PVC"));
        let network = b.build().unwrap();

        let paths = paths_for(&network);
        assert_eq!(paths.len(), 1);
        assert!((paths[0].static_head_m + 10.0).abs() < 1e-12);
        assert!(paths[0].total_head_m < 0.0);
        assert_eq!(paths[0].label(&network, " -> "), "S -> Low");
    }

    #[test]
    fn ties_go_to_smallest_name_regardless_of_order() {
        for names in [["Alpha", "Beta"], ["Beta", "Alpha"]] {
            let network = symmetric_network(names);
            let paths = paths_for(&network);
            assert_eq!(paths[0].total_head_m, paths[1].total_head_m);

            let idx = select_critical(&network, &paths).unwrap();
            let winner = network.node(paths[idx].demand_node).unwrap();
            assert_eq!(winner.name, "Alpha");
        }
    }

    #[test]
    fn no_paths_no_critical() {
        let network = symmetric_network(["A", "B"]);
        assert_eq!(select_critical(&network, &[]), None);
    }

    #[test]
    fn negative_nan_elevation_is_not_skipped() {
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(0.0), lps(0.0));
        let good = b.add_node("Good", m(3.0), lps(1.0));
        let bad = b.add_node("Bad", m(-f64::NAN), lps(1.0));
        b.add_pipe("PG", s, good, PipeSpec::new(m(10.0), mm(50.0), "PVC"));
        b.add_pipe("PB", s, bad, PipeSpec::new(m(10.0), mm(50.0), "PVC"));
        let network = b.build().unwrap();

        let flows = propagate_flows(&network);
        let losses = evaluate_losses(&network, &flows, &FluidProperties::default());
        assert!(matches!(
            evaluate_paths(&network, &losses),
            Err(SolverError::Numeric(PnError::NonFinite { .. }))
        ));
    }
}
