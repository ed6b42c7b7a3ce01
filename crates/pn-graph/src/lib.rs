//! pn-graph: network model layer for pipenet.
//!
//! Provides:
//! - Core data structures (Node, Pipe, PipeNetwork)
//! - Incremental network builder with tree validation
//! - Name index for mapping external string ids to compact ids
//!
//! A built [`PipeNetwork`] is always a tree oriented away from a single
//! source: every node except the source has exactly one inlet pipe and every
//! node is reachable from the source.
//!
//! # Example
//!
//! ```
//! use pn_core::units::{lps, m, mm};
//! use pn_graph::{NetworkBuilder, PipeSpec};
//!
//! let mut builder = NetworkBuilder::new();
//! let pump = builder.add_node("Pump", m(100.0), lps(0.0));
//! let head = builder.add_node("Head", m(104.0), lps(5.0));
//! builder.add_pipe("P1", pump, head, PipeSpec::new(m(20.0), mm(50.0), "PVC"));
//! let network = builder.build().unwrap();
//!
//! assert_eq!(network.source(), pump);
//! assert_eq!(network.pipes().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{NetworkBuilder, PipeSpec};
pub use error::GraphError;
pub use graph::{Node, Pipe, PipeNetwork};
pub use indexing::NameIndex;
