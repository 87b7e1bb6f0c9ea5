//! Element node data (C4, C5).
//!
//! `ElementData` is stored inside [`crate::node::NodeKind::Element`]; it
//! carries no arena/tree fields of its own (those live on `NodeRecord`).
//! The `class`/`style` caches implement the "derive-on-read, invalidate
//! on write" redesign: no independent `classList`/`style` object is kept
//! around, only a generation-stamped cache of the last parse of the
//! corresponding attribute.

use crate::attr::{is_valid_attribute_name, parse_style_declarations, split_class_tokens};
use crate::event::ListenerTable;
use crate::interner::canon_tag;
use dom_types::DomError;
use indexmap::IndexMap;

/// An element's data: canonical tag name, attributes, derived-view
/// caches, listeners, and the custom-validity override string set
/// through `set_custom_validity`.
#[derive(Debug, Clone)]
pub struct ElementData {
    tag_name: String,
    attributes: IndexMap<String, String>,
    pub(crate) listeners: ListenerTable,
    custom_validity: Option<String>,
    attr_generation: u64,
    class_cache: Option<(u64, Vec<String>)>,
    style_cache: Option<(u64, IndexMap<String, String>)>,
}

impl ElementData {
    /// Creates element data with `tag_name` canonicalized to lowercase.
    pub fn new(tag_name: impl AsRef<str>) -> Self {
        Self {
            tag_name: canon_tag(tag_name.as_ref()),
            attributes: IndexMap::new(),
            listeners: ListenerTable::default(),
            custom_validity: None,
            attr_generation: 0,
            class_cache: None,
            style_cache: None,
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Sets `name` to `value`. An existing key keeps its original
    /// position: `IndexMap::insert` on a present key updates in place
    /// rather than moving the entry to the end, matching the "attribute
    /// order reflects first write" invariant.
    pub fn set_attribute(&mut self, name: String, value: String) -> Result<(), DomError> {
        if !is_valid_attribute_name(&name) {
            return Err(DomError::malformed_html(format!(
                "invalid attribute name: {name}"
            )));
        }
        self.attributes.insert(name, value);
        self.attr_generation += 1;
        Ok(())
    }

    /// `true` if the attribute was present and removed.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let removed = self.attributes.shift_remove(name).is_some();
        if removed {
            self.attr_generation += 1;
        }
        removed
    }

    /// The deduplicated, order-preserving class token set, recomputed
    /// from the `class` attribute only when it has changed since the
    /// last call.
    pub fn class_tokens(&mut self) -> &[String] {
        let current = self.attributes.get("class").map(String::as_str).unwrap_or("");
        let stale = !matches!(&self.class_cache, Some((gen, _)) if *gen == self.attr_generation);
        if stale {
            self.class_cache = Some((self.attr_generation, split_class_tokens(current)));
        }
        &self.class_cache.as_ref().unwrap().1
    }

    /// The parsed `style` declaration map, recomputed from the `style`
    /// attribute only when it has changed since the last call.
    pub fn style_declarations(&mut self) -> &IndexMap<String, String> {
        let current = self.attributes.get("style").map(String::as_str).unwrap_or("");
        let stale = !matches!(&self.style_cache, Some((gen, _)) if *gen == self.attr_generation);
        if stale {
            self.style_cache = Some((self.attr_generation, parse_style_declarations(current)));
        }
        &self.style_cache.as_ref().unwrap().1
    }

    pub fn custom_validity(&self) -> Option<&str> {
        self.custom_validity.as_deref()
    }

    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.custom_validity = if message.is_empty() { None } else { Some(message) };
    }
}
