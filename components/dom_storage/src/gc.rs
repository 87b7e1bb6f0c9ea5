//! Mark-and-sweep collection of arena slots unreachable from a root set.
//!
//! Detaching a subtree only re-points one `parent` field (see
//! [`crate::arena`]); it does not free anything. `collect` reclaims arena
//! slots that are not reachable from the document root or from any
//! additional externally-retained [`NodeId`], given a caller-supplied
//! `children_of` callback — this crate does not know what a "child" means
//! for the caller's `T`.

use crate::arena::{NodeArena, NodeId};
use std::collections::HashSet;

/// Outcome of one [`collect`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GcStats {
    /// Slots that were live before the sweep.
    pub visited: usize,
    /// Slots freed because they were unreachable from any root.
    pub swept: usize,
    /// Slots left allocated after the sweep.
    pub retained: usize,
}

impl GcStats {
    /// Fraction of previously-live slots that were swept, in `[0.0, 1.0]`.
    pub fn collection_rate(&self) -> f64 {
        if self.visited == 0 {
            0.0
        } else {
            self.swept as f64 / self.visited as f64
        }
    }
}

/// Marks every node reachable from `roots` (transitively, via
/// `children_of`) and frees every other live slot in `arena`.
pub fn collect<T>(
    arena: &NodeArena<T>,
    roots: &[NodeId],
    children_of: impl Fn(&T) -> Vec<NodeId>,
) -> GcStats {
    let all = arena.ids();
    let visited = all.len();

    let mut reachable: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = roots.to_vec();
    while let Some(id) = stack.pop() {
        if !reachable.insert(id) {
            continue;
        }
        if let Some(children) = arena.with(id, |node| children_of(node)) {
            stack.extend(children);
        }
    }

    let mut swept = 0;
    for id in all {
        if !reachable.contains(&id) && arena.remove(id).is_some() {
            swept += 1;
        }
    }

    GcStats {
        visited,
        swept,
        retained: visited - swept,
    }
}
