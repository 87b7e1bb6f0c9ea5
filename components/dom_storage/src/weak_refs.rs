//! Non-owning references into a [`NodeArena`].
//!
//! With generational-index storage, a stale [`NodeId`] already behaves
//! like a weak reference: looking it up after its slot has been recycled
//! fails the generation check and returns nothing. `WeakNodeRef` packages
//! an arena handle with an id so callers (parent back-pointers, observer
//! subscriptions) have a named type to hold instead of passing an arena
//! and an id around separately.

use crate::arena::{NodeArena, NodeId};

/// A non-owning reference to a node that may have been freed.
///
/// `upgrade` re-validates the id against the arena's current generation
/// for that slot; it never keeps the node alive by itself.
#[derive(Clone)]
pub struct WeakNodeRef<T> {
    arena: NodeArena<T>,
    node_id: NodeId,
}

impl<T> WeakNodeRef<T> {
    /// Builds a weak reference to `node_id` within `arena`.
    pub fn new(arena: &NodeArena<T>, node_id: NodeId) -> Self {
        Self {
            arena: arena.clone(),
            node_id,
        }
    }

    /// Returns the id this reference points to if the slot is still live,
    /// `None` if it has been freed or recycled under a different
    /// generation.
    pub fn upgrade(&self) -> Option<NodeId> {
        self.arena.contains(self.node_id).then_some(self.node_id)
    }

    /// The id this reference points to, regardless of liveness.
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// `true` if the referenced slot is still live.
    pub fn is_valid(&self) -> bool {
        self.arena.contains(self.node_id)
    }
}

impl<T> PartialEq for WeakNodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

impl<T> Eq for WeakNodeRef<T> {}

impl<T> std::fmt::Debug for WeakNodeRef<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeakNodeRef")
            .field("node_id", &self.node_id)
            .field("valid", &self.is_valid())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upgrade_succeeds_while_live() {
        let arena: NodeArena<String> = NodeArena::new();
        let id = arena.insert("test".to_string());
        let weak = WeakNodeRef::new(&arena, id);
        assert_eq!(weak.upgrade(), Some(id));
    }

    #[test]
    fn upgrade_fails_after_removal() {
        let arena: NodeArena<String> = NodeArena::new();
        let id = arena.insert("test".to_string());
        let weak = WeakNodeRef::new(&arena, id);
        arena.remove(id);
        assert_eq!(weak.upgrade(), None);
        assert!(!weak.is_valid());
    }
}
