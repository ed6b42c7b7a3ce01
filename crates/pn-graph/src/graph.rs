//! Core network data structures.

use pn_core::units::{Length, VolumeRate};
use pn_core::{NodeId, PipeId};

use crate::indexing::NameIndex;

/// A junction, source, or draw-off point.
///
/// Nodes are read-only inputs to the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// External identifier.
    pub name: String,
    pub elevation: Length,
    /// Draw-off at this node. Zero means "not a demand point".
    pub demand: VolumeRate,
}

impl Node {
    /// A node with strictly positive demand.
    pub fn is_demand(&self) -> bool {
        self.demand.value > 0.0
    }
}

/// A pipe carrying flow from `inlet` to `outlet`.
///
/// Holds only input data; computed hydraulics live in per-pipe result
/// records owned by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub id: PipeId,
    /// External identifier.
    pub name: String,
    pub inlet: NodeId,
    pub outlet: NodeId,
    pub length: Length,
    /// Inner diameter.
    pub diameter: Length,
    /// Material key, resolved against the roughness catalog.
    pub material: String,
    /// Fitting labels, resolved against the loss-coefficient table.
    pub fittings: Vec<String>,
}

/// A validated, immutable tree of nodes and pipes.
///
/// The network stores:
/// - All nodes and pipes in vectors (indexed by their IDs).
/// - The single inlet pipe of every node (`None` only for the source).
/// - Compact child adjacency: for each node, its outlet pipes.
/// - A topological order starting at the source.
#[derive(Debug, Clone)]
pub struct PipeNetwork {
    pub(crate) nodes: Vec<Node>,
    pub(crate) pipes: Vec<Pipe>,

    /// Inlet pipe per node, indexed by node slot.
    pub(crate) inlet_pipe: Vec<Option<PipeId>>,

    /// Offsets for node->outlet pipes: node i's pipes are in
    /// child_pipes[child_offsets[i]..child_offsets[i+1]].
    pub(crate) child_offsets: Vec<usize>,

    /// Flat list of outlet pipe IDs, grouped by node, in insertion order.
    pub(crate) child_pipes: Vec<PipeId>,

    pub(crate) source: NodeId,

    /// Source first; every node appears after its upstream node.
    pub(crate) order: Vec<NodeId>,

    pub(crate) names: NameIndex,
}

impl PipeNetwork {
    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all pipes.
    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    /// Get a pipe by ID (returns None if ID out of bounds).
    pub fn pipe(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.get(id.slot())
    }

    /// The unique node without an inlet pipe.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The pipe feeding `node`, or `None` for the source.
    pub fn inlet_pipe(&self, node: NodeId) -> Option<PipeId> {
        self.inlet_pipe.get(node.slot()).copied().flatten()
    }

    /// Pipes leaving `node`.
    pub fn outlet_pipes(&self, node: NodeId) -> &[PipeId] {
        let idx = node.slot();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.child_offsets[idx];
        let end = self.child_offsets[idx + 1];
        &self.child_pipes[start..end]
    }

    /// Nodes ordered source first, each after its upstream node.
    pub fn topological_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Nodes ordered leaves first, source last.
    pub fn reverse_topological_order(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().rev().copied()
    }

    /// Nodes with strictly positive demand, in insertion order.
    pub fn demand_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(|n| n.is_demand())
    }

    /// Look up a node by its external id.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.names.node(name).and_then(|id| self.node(id))
    }

    /// Look up a pipe by its external id.
    pub fn pipe_by_name(&self, name: &str) -> Option<&Pipe> {
        self.names.pipe(name).and_then(|id| self.pipe(id))
    }
}
