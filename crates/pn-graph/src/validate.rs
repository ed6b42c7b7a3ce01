//! Tree validation logic.

use std::collections::VecDeque;

use pn_core::{NodeId, PipeId};

use crate::error::GraphError;
use crate::graph::{Node, Pipe};

/// Check that every pipe endpoint refers to an existing node.
pub(crate) fn validate_refs(nodes: &[Node], pipes: &[Pipe]) -> Result<(), GraphError> {
    for pipe in pipes {
        for end in [pipe.inlet, pipe.outlet] {
            if end.slot() >= nodes.len() {
                return Err(GraphError::UnknownNode {
                    pipe: pipe.name.clone(),
                    node: end.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Map each node to its single inlet pipe.
///
/// A node fed by two or more pipes makes the network a non-tree.
pub(crate) fn inlet_pipes(
    nodes: &[Node],
    pipes: &[Pipe],
) -> Result<Vec<Option<PipeId>>, GraphError> {
    let mut inlet: Vec<Option<PipeId>> = vec![None; nodes.len()];
    for pipe in pipes {
        let slot = pipe.outlet.slot();
        if inlet[slot].is_some() {
            let feeding = pipes
                .iter()
                .filter(|p| p.outlet == pipe.outlet)
                .map(|p| p.name.clone())
                .collect();
            return Err(GraphError::MultipleInlets {
                node: nodes[slot].name.clone(),
                pipes: feeding,
            });
        }
        inlet[slot] = Some(pipe.id);
    }
    Ok(inlet)
}

/// Identify the unique node without an inlet pipe.
pub(crate) fn find_source(
    nodes: &[Node],
    inlet: &[Option<PipeId>],
) -> Result<NodeId, GraphError> {
    let candidates: Vec<&Node> = nodes
        .iter()
        .filter(|n| inlet[n.id.slot()].is_none())
        .collect();

    match candidates.as_slice() {
        [] => Err(GraphError::NoSource),
        [source] => Ok(source.id),
        many => Err(GraphError::AmbiguousSource {
            candidates: many.iter().map(|n| n.name.clone()).collect(),
        }),
    }
}

/// Breadth-first order from the source along outlet pipes.
///
/// Nodes left unvisited can only sit on a directed cycle (every other node
/// has exactly one inlet and there is one source), so they are reported as
/// such.
pub(crate) fn topological_order(
    nodes: &[Node],
    pipes: &[Pipe],
    source: NodeId,
    child_offsets: &[usize],
    child_pipes: &[PipeId],
) -> Result<Vec<NodeId>, GraphError> {
    let mut visited = vec![false; nodes.len()];
    let mut order = Vec::with_capacity(nodes.len());
    let mut queue = VecDeque::from([source]);
    visited[source.slot()] = true;

    while let Some(node) = queue.pop_front() {
        order.push(node);
        let idx = node.slot();
        for &pipe_id in &child_pipes[child_offsets[idx]..child_offsets[idx + 1]] {
            let next = pipes[pipe_id.slot()].outlet;
            if !visited[next.slot()] {
                visited[next.slot()] = true;
                queue.push_back(next);
            }
        }
    }

    if order.len() < nodes.len() {
        let stranded = nodes
            .iter()
            .filter(|n| !visited[n.id.slot()])
            .map(|n| n.name.clone())
            .collect();
        return Err(GraphError::Cycle { nodes: stranded });
    }

    Ok(order)
}
