//! Configuration for a `very_happy_dom` document.

use serde::{Deserialize, Serialize};

/// Tuning knobs for a document's arena and optional hooks. None of these
/// are enforced by `dom_core` itself (the arena grows unbounded, per
/// §5's "bounded only by input size"); they exist for embedders that
/// want to pre-size the arena or gate `dom_hooks` wiring without
/// threading extra constructor arguments through every crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomConfig {
    /// Advisory maximum depth of the DOM tree. Not enforced by `dom_core`.
    pub max_tree_depth: usize,

    /// Advisory maximum number of children per node. Not enforced by `dom_core`.
    pub max_children: usize,

    /// Whether `very_happy_dom::Document::new` wires up a default
    /// `dom_hooks::MutationObserver` sink.
    pub enable_mutation_observers: bool,

    /// Garbage collection threshold (number of nodes) before
    /// `dom_storage::gc` is invoked automatically.
    pub gc_threshold: usize,

    /// Initial arena capacity for node storage.
    pub arena_capacity: usize,
}

impl Default for DomConfig {
    fn default() -> Self {
        DomConfig {
            max_tree_depth: 512,
            max_children: 10000,
            enable_mutation_observers: true,
            gc_threshold: 100000,
            arena_capacity: 50000,
        }
    }
}
