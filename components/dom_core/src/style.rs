//! Inline `style` cursor (C5).
//!
//! Same cursor shape as [`crate::class_list::ClassList`]: a borrowed
//! `Document` plus a `NodeId`, delegating each call to a `Document`
//! method that does its work inside one arena access.

use crate::document::Document;
use dom_storage::NodeId;

/// A live-feeling view over an element's `style` attribute.
pub struct Style<'a> {
    document: &'a Document,
    node: NodeId,
}

impl<'a> Style<'a> {
    pub(crate) fn new(document: &'a Document, node: NodeId) -> Self {
        Self { document, node }
    }

    pub fn get_property_value(&self, property: &str) -> String {
        self.document
            .style_declarations(self.node)
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_property(&self, property: &str, value: &str) {
        self.document.set_style_property(self.node, property, value);
    }

    /// Removes `property`, returning its prior value (empty string if it
    /// wasn't set), matching `CSSStyleDeclaration.removeProperty`.
    pub fn remove_property(&self, property: &str) -> String {
        self.document.remove_style_property(self.node, property)
    }

    pub fn css_text(&self) -> String {
        crate::attr::serialize_style_declarations(&self.document.style_declarations(self.node))
    }
}
