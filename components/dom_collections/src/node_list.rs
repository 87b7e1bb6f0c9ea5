//! `NodeList`: an ordered, live-independent snapshot of node ids.
//!
//! Every producer in this workspace (`querySelectorAll`, `childNodes`)
//! collects its result into a `Vec<NodeId>` before returning, so there is
//! nothing here to keep "live" — per the data model's invariant 8,
//! collections are snapshots taken at call time.

use dom_storage::NodeId;

/// A snapshot of node ids, in document order.
#[derive(Debug, Clone, Default)]
pub struct NodeList {
    nodes: Vec<NodeId>,
}

impl NodeList {
    /// Wraps an already-ordered vector of ids.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn length(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for NodeList {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::new(nodes)
    }
}

impl IntoIterator for NodeList {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
