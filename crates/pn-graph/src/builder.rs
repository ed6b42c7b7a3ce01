//! Incremental network builder.

use pn_core::units::{Length, VolumeRate};
use pn_core::{NodeId, PipeId};

use crate::error::GraphError;
use crate::graph::{Node, Pipe, PipeNetwork};
use crate::indexing::NameIndex;
use crate::validate;

/// Physical description of a pipe, independent of its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeSpec {
    pub length: Length,
    pub diameter: Length,
    pub material: String,
    pub fittings: Vec<String>,
}

impl PipeSpec {
    pub fn new(length: Length, diameter: Length, material: impl Into<String>) -> Self {
        Self {
            length,
            diameter,
            material: material.into(),
            fittings: Vec::new(),
        }
    }

    pub fn with_fittings<I, S>(mut self, fittings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fittings = fittings.into_iter().map(Into::into).collect();
        self
    }
}

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_pipe` to build up the network,
/// then call `build()` to validate the tree shape and freeze it into an
/// immutable `PipeNetwork`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    pipes: Vec<Pipe>,
    names: NameIndex,
    /// First duplicate name seen, reported by `build`.
    duplicate: Option<GraphError>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        elevation: Length,
        demand: VolumeRate,
    ) -> NodeId {
        let name = name.into();
        let id = NodeId::from_index(self.nodes.len() as u32);
        if !self.names.insert_node(&name, id) && self.duplicate.is_none() {
            self.duplicate = Some(GraphError::DuplicateNode { id: name.clone() });
        }
        self.nodes.push(Node {
            id,
            name,
            elevation,
            demand,
        });
        id
    }

    /// Add a pipe carrying flow from `inlet` to `outlet` and return its ID.
    pub fn add_pipe(
        &mut self,
        name: impl Into<String>,
        inlet: NodeId,
        outlet: NodeId,
        spec: PipeSpec,
    ) -> PipeId {
        let name = name.into();
        let id = PipeId::from_index(self.pipes.len() as u32);
        if !self.names.insert_pipe(&name, id) && self.duplicate.is_none() {
            self.duplicate = Some(GraphError::DuplicatePipe { id: name.clone() });
        }
        self.pipes.push(Pipe {
            id,
            name,
            inlet,
            outlet,
            length: spec.length,
            diameter: spec.diameter,
            material: spec.material,
            fittings: spec.fittings,
        });
        id
    }

    /// Resolve a node name registered so far.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.node(name)
    }

    /// Build and validate the network, returning an immutable `PipeNetwork`.
    ///
    /// Fails if the nodes and pipes do not form a tree oriented away from a
    /// single source.
    pub fn build(self) -> Result<PipeNetwork, GraphError> {
        if let Some(err) = self.duplicate {
            return Err(err);
        }
        if self.nodes.is_empty() {
            return Err(GraphError::EmptyNetwork);
        }

        validate::validate_refs(&self.nodes, &self.pipes)?;
        let inlet_pipe = validate::inlet_pipes(&self.nodes, &self.pipes)?;
        let source = validate::find_source(&self.nodes, &inlet_pipe)?;

        let (child_offsets, child_pipes) = Self::build_adjacency(&self.nodes, &self.pipes);
        let order = validate::topological_order(
            &self.nodes,
            &self.pipes,
            source,
            &child_offsets,
            &child_pipes,
        )?;

        Ok(PipeNetwork {
            nodes: self.nodes,
            pipes: self.pipes,
            inlet_pipe,
            child_offsets,
            child_pipes,
            source,
            order,
            names: self.names,
        })
    }

    /// Build compact adjacency lists: for each node, collect its outlet pipes.
    fn build_adjacency(nodes: &[Node], pipes: &[Pipe]) -> (Vec<usize>, Vec<PipeId>) {
        let mut per_node: Vec<Vec<PipeId>> = vec![Vec::new(); nodes.len()];
        for pipe in pipes {
            per_node[pipe.inlet.slot()].push(pipe.id);
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(pipes.len());
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
