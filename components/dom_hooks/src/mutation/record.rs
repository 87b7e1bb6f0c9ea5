//! `MutationRecord` and related types: the snapshot handed to a
//! [`super::MutationObserver`] callback, derived from a
//! `dom_core::event::MutationEvent`.

use dom_core::event::MutationEvent;
use dom_storage::NodeId;
pub use dom_types::MutationType;

/// What to watch for and how, mirroring the DOM's `MutationObserverInit`
/// dictionary.
#[derive(Debug, Clone, Default)]
pub struct MutationObserverInit {
    pub child_list: bool,
    pub attributes: bool,
    pub character_data: bool,
    pub subtree: bool,
    pub attribute_filter: Option<Vec<String>>,
}

impl MutationObserverInit {
    fn selects_nothing(&self) -> bool {
        !self.child_list && !self.attributes && !self.character_data
    }
}

/// Returned by [`super::MutationObserver::observe`] when `options`
/// selects none of `child_list`/`attributes`/`character_data`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("MutationObserverInit must enable at least one of child_list, attributes, or character_data")]
pub struct ObserveOptionsError;

pub(super) fn validate(options: &MutationObserverInit) -> Result<(), ObserveOptionsError> {
    if options.selects_nothing() {
        Err(ObserveOptionsError)
    } else {
        Ok(())
    }
}

/// One delivered mutation, derived from a `dom_core::event::MutationEvent`.
#[derive(Debug, Clone)]
pub struct MutationRecord {
    pub record_type: MutationType,
    pub target: NodeId,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
    pub attribute_name: Option<String>,
}

impl From<MutationEvent> for MutationRecord {
    fn from(event: MutationEvent) -> Self {
        Self {
            record_type: event.mutation_type,
            target: event.target,
            added_nodes: event.added_nodes,
            removed_nodes: event.removed_nodes,
            attribute_name: event.attribute_name,
        }
    }
}

/// `true` if `options` accepts a mutation of `record_type`, given the
/// attribute name it carries (ignored for non-attribute mutations).
pub(super) fn accepts(options: &MutationObserverInit, record_type: MutationType, attribute_name: Option<&str>) -> bool {
    match record_type {
        MutationType::ChildList => options.child_list,
        MutationType::CharacterData => options.character_data,
        MutationType::Attributes => {
            if !options.attributes {
                return false;
            }
            match (&options.attribute_filter, attribute_name) {
                (Some(filter), Some(name)) => filter.iter().any(|f| f == name),
                (Some(_), None) => false,
                (None, _) => true,
            }
        }
    }
}
