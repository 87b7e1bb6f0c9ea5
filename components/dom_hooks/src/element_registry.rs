//! `ElementRegistry`: the §6 custom-element simulation hook. Lets a
//! host register an upgrade callback for a canonical tag name, invoked
//! by `Document::create_element` immediately after the element is
//! built.

use dom_core::ElementUpgradeRegistry;
use dom_storage::NodeId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type UpgradeCallback = Arc<dyn Fn(NodeId) + Send + Sync>;

/// A `Document`'s registry of tag-name upgrade callbacks. Install with
/// `Document::set_element_registry`.
#[derive(Default)]
pub struct ElementRegistry {
    callbacks: RwLock<HashMap<String, UpgradeCallback>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` to run whenever an element with
    /// `canonical_tag` is created. Replaces any previous registration
    /// for that tag.
    pub fn define(&self, canonical_tag: impl Into<String>, callback: impl Fn(NodeId) + Send + Sync + 'static) {
        self.callbacks.write().insert(canonical_tag.into(), Arc::new(callback));
    }

    /// `true` if `canonical_tag` has a registered upgrade callback.
    pub fn is_defined(&self, canonical_tag: &str) -> bool {
        self.callbacks.read().contains_key(canonical_tag)
    }
}

impl ElementUpgradeRegistry for ElementRegistry {
    fn upgrade_callback_for(&self, canonical_tag: &str) -> Option<UpgradeCallback> {
        self.callbacks.read().get(canonical_tag).cloned()
    }
}
