//! Dense handles for nodes and pipes.
//!
//! Nodes and pipes live in vectors owned by the network, so a handle is just
//! a slot number. It is stored shifted by one so `Option<NodeId>` (used for
//! the parent map) costs nothing extra.

use core::fmt;
use core::num::NonZeroU32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Handle for the object at position `index` of its owning vector.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Position in the owning vector.
    pub fn slot(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Handle into `PipeNetwork::nodes`.
pub type NodeId = Id;
/// Handle into `PipeNetwork::pipes`.
pub type PipeId = Id;
