//! Structural error types.

use pn_core::PnError;

/// Network construction and topology errors.
///
/// Every variant means the description is not a tree oriented away from a
/// single source, so no hydraulic result can be derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The network has no nodes.
    EmptyNetwork,

    /// Two nodes share the same external id.
    DuplicateNode { id: String },

    /// Two pipes share the same external id.
    DuplicatePipe { id: String },

    /// A pipe refers to a node that doesn't exist.
    UnknownNode { pipe: String, node: String },

    /// A node is fed by more than one pipe.
    MultipleInlets { node: String, pipes: Vec<String> },

    /// Every node has an inlet pipe, so there is nowhere for flow to start.
    NoSource,

    /// More than one node has no inlet pipe.
    AmbiguousSource { candidates: Vec<String> },

    /// Nodes that the source cannot reach because they lie on a directed cycle.
    Cycle { nodes: Vec<String> },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::EmptyNetwork => write!(f, "Network has no nodes"),
            GraphError::DuplicateNode { id } => write!(f, "Duplicate node id '{}'", id),
            GraphError::DuplicatePipe { id } => write!(f, "Duplicate pipe id '{}'", id),
            GraphError::UnknownNode { pipe, node } => {
                write!(f, "Pipe '{}' refers to non-existent node '{}'", pipe, node)
            }
            GraphError::MultipleInlets { node, pipes } => write!(
                f,
                "Node '{}' is fed by more than one pipe ({}); network must be a tree",
                node,
                pipes.join(", ")
            ),
            GraphError::NoSource => write!(f, "No source node: every node has an incoming pipe"),
            GraphError::AmbiguousSource { candidates } => write!(
                f,
                "Ambiguous source: nodes without an incoming pipe are {}",
                candidates.join(", ")
            ),
            GraphError::Cycle { nodes } => write!(
                f,
                "Cycle detected: nodes {} are not reachable from the source",
                nodes.join(", ")
            ),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PnError {
    fn from(err: GraphError) -> Self {
        PnError::Invariant {
            what: err.to_string(),
        }
    }
}
