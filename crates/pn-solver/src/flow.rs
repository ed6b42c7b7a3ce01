//! Demand propagation.
//!
//! Flows are accumulated leaves first: each node passes its own demand plus
//! everything leaving it to the single pipe feeding it. One pass over the
//! reverse topological order, O(V + E).

use pn_core::units::{VolumeRate, lps};
use pn_core::{NodeId, PipeId};
use pn_graph::PipeNetwork;
use tracing::debug;

/// Flow carried by every pipe, indexed by pipe ID.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeFlows {
    flows: Vec<VolumeRate>,
}

impl PipeFlows {
    pub fn get(&self, pipe: PipeId) -> VolumeRate {
        self.flows.get(pipe.slot()).copied().unwrap_or_else(|| lps(0.0))
    }

    pub fn as_slice(&self) -> &[VolumeRate] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

/// Compute the flow in every pipe from node demands.
pub fn propagate_flows(network: &PipeNetwork) -> PipeFlows {
    let mut flows = vec![lps(0.0); network.pipes().len()];

    for node_id in network.reverse_topological_order() {
        let Some(node) = network.node(node_id) else {
            continue;
        };
        let leaving = network
            .outlet_pipes(node_id)
            .iter()
            .fold(node.demand, |acc, p| acc + flows[p.slot()]);

        if let Some(inlet) = network.inlet_pipe(node_id) {
            flows[inlet.slot()] = leaving;
        }
    }

    debug!(pipes = flows.len(), "propagated demand to pipe flows");
    PipeFlows { flows }
}

/// Total demand over all nodes.
pub fn total_demand(network: &PipeNetwork) -> VolumeRate {
    network
        .nodes()
        .iter()
        .fold(lps(0.0), |acc, n| acc + n.demand)
}

/// Per-node mass balance: inflow − demand − outflow.
///
/// The source's inflow is the pump delivery, i.e. the total demand. Every
/// entry is zero (to rounding) for flows produced by [`propagate_flows`].
pub fn conservation_residuals(
    network: &PipeNetwork,
    flows: &PipeFlows,
) -> Vec<(NodeId, VolumeRate)> {
    let pump = total_demand(network);
    network
        .nodes()
        .iter()
        .map(|node| {
            let inflow = match network.inlet_pipe(node.id) {
                Some(pipe) => flows.get(pipe),
                None => pump,
            };
            let outflow = network
                .outlet_pipes(node.id)
                .iter()
                .fold(lps(0.0), |acc, &p| acc + flows.get(p));
            (node.id, inflow - node.demand - outflow)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::units::{as_lps, m, mm};
    use pn_graph::{NetworkBuilder, PipeSpec};

    #[test]
    fn chain_carries_downstream_demand() {
        // S -> A(2) -> B(3)
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(0.0), lps(0.0));
        let a = b.add_node("A", m(0.0), lps(2.0));
        let c = b.add_node("B", m(0.0), lps(3.0));
        let p1 = b.add_pipe("P1", s, a, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let p2 = b.add_pipe("P2", a, c, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let network = b.build().unwrap();

        let flows = propagate_flows(&network);
        assert!((as_lps(flows.get(p1)) - 5.0).abs() < 1e-12);
        assert!((as_lps(flows.get(p2)) - 3.0).abs() < 1e-12);
        assert!((as_lps(total_demand(&network)) - 5.0).abs() < 1e-12);

        for (_, residual) in conservation_residuals(&network, &flows) {
            assert!(as_lps(residual).abs() < 1e-12);
        }
    }

    #[test]
    fn branch_without_demand_carries_nothing() {
        let mut b = NetworkBuilder::new();
        let s = b.add_node("S", m(0.0), lps(0.0));
        let a = b.add_node("A", m(0.0), lps(4.0));
        let dead = b.add_node("Dead", m(0.0), lps(0.0));
        b.add_pipe("P1", s, a, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let p2 = b.add_pipe("P2", s, dead, PipeSpec::new(m(1.0), mm(50.0), "PVC"));
        let network = b.build().unwrap();

        let flows = propagate_flows(&network);
        assert_eq!(as_lps(flows.get(p2)), 0.0);
        assert_eq!(flows.len(), 2);
    }
}
