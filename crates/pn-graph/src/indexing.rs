//! Name index.
//!
//! Maps external string identifiers to compact `NodeId`/`PipeId` values.

use std::collections::HashMap;

use pn_core::{NodeId, PipeId};

/// Bidirectional lookup between external names and compact IDs.
///
/// The first registration of a name wins; later duplicates are rejected
/// so the caller can report them.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    nodes: HashMap<String, NodeId>,
    pipes: HashMap<String, PipeId>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node name. Returns `false` if the name was already taken.
    pub fn insert_node(&mut self, name: &str, id: NodeId) -> bool {
        if self.nodes.contains_key(name) {
            return false;
        }
        self.nodes.insert(name.to_owned(), id);
        true
    }

    /// Register a pipe name. Returns `false` if the name was already taken.
    pub fn insert_pipe(&mut self, name: &str, id: PipeId) -> bool {
        if self.pipes.contains_key(name) {
            return false;
        }
        self.pipes.insert(name.to_owned(), id);
        true
    }

    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    pub fn pipe(&self, name: &str) -> Option<PipeId> {
        self.pipes.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::Id;

    #[test]
    fn first_registration_wins() {
        let mut index = NameIndex::new();
        assert!(index.insert_node("A", Id::from_index(0)));
        assert!(!index.insert_node("A", Id::from_index(1)));
        assert_eq!(index.node("A"), Some(Id::from_index(0)));
        assert_eq!(index.node_count(), 1);
    }

    #[test]
    fn nodes_and_pipes_are_separate_namespaces() {
        let mut index = NameIndex::new();
        assert!(index.insert_node("X", Id::from_index(0)));
        assert!(index.insert_pipe("X", Id::from_index(3)));
        assert_eq!(index.pipe("X"), Some(Id::from_index(3)));
        assert_eq!(index.pipe("missing"), None);
    }
}
