//! `classList` cursor (C5).
//!
//! `ClassList<'a>` borrows the owning [`Document`] and holds the
//! element's `NodeId`; every method does its read-modify-write inside a
//! single `Document` call so no arena lock is ever held across two
//! method invocations.

use crate::document::Document;
use dom_storage::NodeId;

/// A live-feeling view over an element's `class` attribute.
pub struct ClassList<'a> {
    document: &'a Document,
    node: NodeId,
}

impl<'a> ClassList<'a> {
    pub(crate) fn new(document: &'a Document, node: NodeId) -> Self {
        Self { document, node }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.document.class_tokens(self.node).iter().any(|t| t == token)
    }

    pub fn add(&self, token: &str) {
        self.document.add_class_token(self.node, token);
    }

    pub fn remove(&self, token: &str) {
        self.document.remove_class_token(self.node, token);
    }

    /// Adds `token` if absent, removes it if present; returns the
    /// resulting membership state.
    pub fn toggle(&self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.document.class_tokens(self.node).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tokens(&self) -> Vec<String> {
        self.document.class_tokens(self.node)
    }
}
