//! The `Document`: arena-backed tree, attribute/class/style operations,
//! HTML parsing/serialization entry points, and event dispatch (C4, C6,
//! C9).
//!
//! `Document` is the one type every other crate in this workspace talks
//! to. Every tree/attribute mutation takes `&self` (the arena is
//! lock-guarded internally, per [`dom_storage::NodeArena`]) so callers
//! never need `&mut Document` just to mutate a node deep in the tree —
//! the "cursor" types in [`crate::class_list`] and [`crate::style`] rely
//! on this to stay ergonomic across crate boundaries.

use crate::attr::is_valid_attribute_name;
use crate::class_list::ClassList;
use crate::element::ElementData;
use crate::event::{
    Event, EventPhase, ListenerEntry, ListenerTable, MutationEvent, MutationSink,
};
use crate::interner::canon_tag;
use crate::node::{CommentData, NodeKind, NodeRecord, TextData};
use crate::style::Style;
use crate::validity::{compute_validity, ValidationInput, ValidityState};
use dom_storage::{NodeArena, NodeId};
use dom_types::{DomError, MutationType, NodeType};
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// Consulted at element-creation time; see [`crate::event::ElementUpgradeRegistry`].
pub use crate::event::ElementUpgradeRegistry;

/// The document tree plus its ambient hooks.
pub struct Document {
    arena: NodeArena<NodeRecord>,
    root: NodeId,
    url: RwLock<String>,
    mutation_sink: RwLock<Option<MutationSink>>,
    element_registry: RwLock<Option<Arc<dyn ElementUpgradeRegistry>>>,
}

impl Document {
    /// Builds a document pre-populated with the usual `html > head, body`
    /// skeleton, matching what every real page already has by the time
    /// scripts run against it.
    pub fn new() -> Self {
        let arena = NodeArena::new();
        let root = arena.insert(NodeRecord::new(NodeKind::Document(ListenerTable::default())));
        let doc = Self {
            arena,
            root,
            url: RwLock::new("about:blank".to_string()),
            mutation_sink: RwLock::new(None),
            element_registry: RwLock::new(None),
        };
        let html = doc.create_element("html").expect("html is a valid tag name");
        let head = doc.create_element("head").expect("head is a valid tag name");
        let body = doc.create_element("body").expect("body is a valid tag name");
        doc.append_child(root, html).expect("root accepts html");
        doc.append_child(html, head).expect("html accepts head");
        doc.append_child(html, body).expect("html accepts body");
        doc
    }

    /// The root `#document` node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn url(&self) -> String {
        self.url.read().clone()
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.write() = url.into();
    }

    /// Installs the §6 mutation-notification hook, replacing any
    /// previous subscriber.
    pub fn set_mutation_sink(&self, sink: Option<MutationSink>) {
        *self.mutation_sink.write() = sink;
    }

    /// Installs the §6 custom-element upgrade hook.
    pub fn set_element_registry(&self, registry: Option<Arc<dyn ElementUpgradeRegistry>>) {
        *self.element_registry.write() = registry;
    }

    fn notify(&self, event: MutationEvent) {
        if let Some(sink) = self.mutation_sink.read().as_ref() {
            sink(event);
        }
    }

    // ---- node creation ----------------------------------------------

    pub fn create_element(&self, tag_name: &str) -> Result<NodeId, DomError> {
        if !is_valid_tag_name(tag_name) {
            return Err(DomError::malformed_html(format!(
                "invalid tag name: {tag_name}"
            )));
        }
        let canonical = canon_tag(tag_name);
        let id = self
            .arena
            .insert(NodeRecord::new(NodeKind::Element(ElementData::new(&canonical))));
        if let Some(registry) = self.element_registry.read().as_ref() {
            if let Some(callback) = registry.upgrade_callback_for(&canonical) {
                callback(id);
            }
        }
        Ok(id)
    }

    pub fn create_text_node(&self, data: impl Into<String>) -> NodeId {
        self.arena
            .insert(NodeRecord::new(NodeKind::Text(TextData { data: data.into() })))
    }

    pub fn create_comment(&self, data: impl Into<String>) -> NodeId {
        self.arena
            .insert(NodeRecord::new(NodeKind::Comment(CommentData { data: data.into() })))
    }

    // ---- tree shape ---------------------------------------------------

    pub fn node_type(&self, node: NodeId) -> Option<NodeType> {
        self.arena.with(node, |record| record.node_type())
    }

    /// A cloned snapshot of the node's data; used by the serializer,
    /// which needs to match on `NodeKind` without holding the arena lock
    /// across recursive child writes.
    pub fn node_kind_snapshot(&self, node: NodeId) -> Option<NodeKind> {
        self.arena.with(node, |record| record.kind.clone())
    }

    pub fn parent_node(&self, node: NodeId) -> Option<NodeId> {
        self.arena.with(node, |record| record.parent).flatten()
    }

    /// All children, regardless of kind.
    pub fn child_nodes(&self, node: NodeId) -> Vec<NodeId> {
        self.arena.with(node, |record| record.children.clone()).unwrap_or_default()
    }

    /// Element-only children (the `HTMLCollection`-style view).
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.child_nodes(node)
            .into_iter()
            .filter(|&child| matches!(self.node_type(child), Some(NodeType::Element)))
            .collect()
    }

    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_node(node)?;
        let siblings = self.child_nodes(parent);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    pub fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent_node(node)?;
        let siblings = self.child_nodes(parent);
        let pos = siblings.iter().position(|&id| id == node)?;
        pos.checked_sub(1).and_then(|i| siblings.get(i).copied())
    }

    pub fn next_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let mut cur = self.next_sibling(node);
        while let Some(id) = cur {
            if matches!(self.node_type(id), Some(NodeType::Element)) {
                return Some(id);
            }
            cur = self.next_sibling(id);
        }
        None
    }

    pub fn previous_element_sibling(&self, node: NodeId) -> Option<NodeId> {
        let mut cur = self.previous_sibling(node);
        while let Some(id) = cur {
            if matches!(self.node_type(id), Some(NodeType::Element)) {
                return Some(id);
            }
            cur = self.previous_sibling(id);
        }
        None
    }

    /// `true` if `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent_node(id);
        }
        false
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    pub fn insert_before(
        &self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: Option<NodeId>,
    ) -> Result<(), DomError> {
        if self.is_inclusive_ancestor(new_child, parent) {
            return Err(DomError::hierarchy_error("cannot insert an ancestor as a child"));
        }
        if let Some(old_parent) = self.parent_node(new_child) {
            self.detach(old_parent, new_child)?;
        }
        let inserted = self.arena.with_mut(parent, |record| {
            let index = match ref_child {
                Some(r) => record
                    .children
                    .iter()
                    .position(|&id| id == r)
                    .unwrap_or(record.children.len()),
                None => record.children.len(),
            };
            record.children.insert(index, new_child);
            true
        });
        if inserted != Some(true) {
            return Err(DomError::not_found("parent node does not exist"));
        }
        self.arena.with_mut(new_child, |record| record.parent = Some(parent));
        self.notify(MutationEvent {
            mutation_type: MutationType::ChildList,
            target: parent,
            attribute_name: None,
            added_nodes: vec![new_child],
            removed_nodes: vec![],
        });
        Ok(())
    }

    pub fn replace_child(&self, parent: NodeId, new_child: NodeId, old_child: NodeId) -> Result<(), DomError> {
        let next = self.next_sibling(old_child);
        self.detach(parent, old_child)?;
        self.insert_before(parent, new_child, next)?;
        self.notify(MutationEvent {
            mutation_type: MutationType::ChildList,
            target: parent,
            attribute_name: None,
            added_nodes: vec![new_child],
            removed_nodes: vec![old_child],
        });
        Ok(())
    }

    pub fn remove_child(&self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.detach(parent, child)?;
        self.notify(MutationEvent {
            mutation_type: MutationType::ChildList,
            target: parent,
            attribute_name: None,
            added_nodes: vec![],
            removed_nodes: vec![child],
        });
        Ok(child)
    }

    fn detach(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let removed = self
            .arena
            .with_mut(parent, |record| {
                let before = record.children.len();
                record.children.retain(|&id| id != child);
                before != record.children.len()
            })
            .unwrap_or(false);
        if !removed {
            return Err(DomError::not_found("child not found under parent"));
        }
        self.arena.with_mut(child, |record| record.parent = None);
        Ok(())
    }

    pub fn clone_node(&self, node: NodeId, deep: bool) -> Option<NodeId> {
        let kind = self.node_kind_snapshot(node)?;
        let cloned = self.arena.insert(NodeRecord::new(kind));
        if deep {
            for child in self.child_nodes(node) {
                if let Some(cloned_child) = self.clone_node(child, true) {
                    self.append_child(cloned, cloned_child).ok();
                }
            }
        }
        Some(cloned)
    }

    // ---- attributes ----------------------------------------------------

    pub fn tag_name(&self, node: NodeId) -> Option<String> {
        self.arena
            .with(node, |record| record.kind.as_element().map(|e| e.tag_name().to_string()))
            .flatten()
    }

    pub fn get_attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.arena
            .with(node, |record| {
                record
                    .kind
                    .as_element()
                    .and_then(|e| e.get_attribute(name))
                    .map(str::to_string)
            })
            .flatten()
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.arena
            .with(node, |record| record.kind.as_element().map(|e| e.has_attribute(name)))
            .flatten()
            .unwrap_or(false)
    }

    /// All attributes, in insertion order.
    pub fn attributes(&self, node: NodeId) -> Vec<(String, String)> {
        self.arena
            .with(node, |record| {
                record
                    .kind
                    .as_element()
                    .map(|e| e.attributes().iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            })
            .flatten()
            .unwrap_or_default()
    }

    pub fn set_attribute(&self, node: NodeId, name: String, value: String) -> Result<(), DomError> {
        if !is_valid_attribute_name(&name) {
            return Err(DomError::malformed_html(format!("invalid attribute name: {name}")));
        }
        let name = name.to_ascii_lowercase();
        let set = self
            .arena
            .with_mut(node, |record| match record.kind.as_element_mut() {
                Some(e) => e.set_attribute(name.clone(), value).map(|_| true),
                None => Ok(false),
            })
            .unwrap_or(Ok(false))?;
        if !set {
            return Err(DomError::hierarchy_error("node is not an element"));
        }
        self.notify(MutationEvent {
            mutation_type: MutationType::Attributes,
            target: node,
            attribute_name: Some(name),
            added_nodes: vec![],
            removed_nodes: vec![],
        });
        Ok(())
    }

    pub fn remove_attribute(&self, node: NodeId, name: &str) -> bool {
        let removed = self
            .arena
            .with_mut(node, |record| {
                record.kind.as_element_mut().map(|e| e.remove_attribute(name)).unwrap_or(false)
            })
            .unwrap_or(false);
        if removed {
            self.notify(MutationEvent {
                mutation_type: MutationType::Attributes,
                target: node,
                attribute_name: Some(name.to_string()),
                added_nodes: vec![],
                removed_nodes: vec![],
            });
        }
        removed
    }

    // ---- class / style / validity cursors ------------------------------

    pub fn class_list(&self, node: NodeId) -> ClassList<'_> {
        ClassList::new(self, node)
    }

    pub(crate) fn class_tokens(&self, node: NodeId) -> Vec<String> {
        self.arena
            .with_mut(node, |record| {
                record.kind.as_element_mut().map(|e| e.class_tokens().to_vec())
            })
            .flatten()
            .unwrap_or_default()
    }

    pub(crate) fn add_class_token(&self, node: NodeId, token: &str) {
        let current = self.get_attribute(node, "class").unwrap_or_default();
        if current.split_ascii_whitespace().any(|t| t == token) {
            return;
        }
        let updated = if current.is_empty() {
            token.to_string()
        } else {
            format!("{current} {token}")
        };
        let _ = self.set_attribute(node, "class".to_string(), updated);
    }

    pub(crate) fn remove_class_token(&self, node: NodeId, token: &str) {
        let current = self.get_attribute(node, "class").unwrap_or_default();
        let updated: Vec<&str> = current.split_ascii_whitespace().filter(|&t| t != token).collect();
        if updated.is_empty() {
            self.remove_attribute(node, "class");
        } else {
            let _ = self.set_attribute(node, "class".to_string(), updated.join(" "));
        }
    }

    pub fn style(&self, node: NodeId) -> Style<'_> {
        Style::new(self, node)
    }

    pub(crate) fn style_declarations(&self, node: NodeId) -> IndexMap<String, String> {
        self.arena
            .with_mut(node, |record| {
                record.kind.as_element_mut().map(|e| e.style_declarations().clone())
            })
            .flatten()
            .unwrap_or_default()
    }

    pub(crate) fn set_style_property(&self, node: NodeId, property: &str, value: &str) {
        let mut declarations = self.style_declarations(node);
        declarations.insert(property.to_ascii_lowercase(), value.to_string());
        let serialized = crate::attr::serialize_style_declarations(&declarations);
        let _ = self.set_attribute(node, "style".to_string(), serialized);
    }

    pub(crate) fn remove_style_property(&self, node: NodeId, property: &str) -> String {
        let mut declarations = self.style_declarations(node);
        let removed = declarations.shift_remove(property).unwrap_or_default();
        if declarations.is_empty() {
            self.remove_attribute(node, "style");
        } else {
            let serialized = crate::attr::serialize_style_declarations(&declarations);
            let _ = self.set_attribute(node, "style".to_string(), serialized);
        }
        removed
    }

    pub fn custom_validity(&self, node: NodeId) -> Option<String> {
        self.arena
            .with(node, |record| record.kind.as_element().and_then(|e| e.custom_validity().map(str::to_string)))
            .flatten()
    }

    pub fn set_custom_validity(&self, node: NodeId, message: impl Into<String>) {
        self.arena.with_mut(node, |record| {
            if let Some(e) = record.kind.as_element_mut() {
                e.set_custom_validity(message);
            }
        });
    }

    /// Computes validity for `node` from its `type`/`required`/`pattern`/
    /// `minlength`/`maxlength`/`min`/`max`/`value` attributes plus any
    /// `setCustomValidity` override.
    pub fn validity(&self, node: NodeId) -> ValidityState {
        let input_type = self.get_attribute(node, "type").unwrap_or_else(|| "text".to_string());
        let value = self.get_attribute(node, "value").unwrap_or_default();
        let required = self.has_attribute(node, "required");
        let pattern = self.get_attribute(node, "pattern");
        let min_length = self.get_attribute(node, "minlength").and_then(|s| s.parse().ok());
        let max_length = self.get_attribute(node, "maxlength").and_then(|s| s.parse().ok());
        let min = self.get_attribute(node, "min").and_then(|s| s.parse().ok());
        let max = self.get_attribute(node, "max").and_then(|s| s.parse().ok());
        let custom = self.custom_validity(node);
        compute_validity(ValidationInput {
            input_type: &input_type,
            value: &value,
            required,
            pattern: pattern.as_deref(),
            min_length,
            max_length,
            min,
            max,
            custom_message: custom.as_deref(),
        })
    }

    pub fn check_validity(&self, node: NodeId) -> bool {
        self.validity(node).valid()
    }

    /// `checkValidity` plus, on failure, dispatch of a non-bubbling,
    /// cancelable `invalid` event at `node`.
    pub fn report_validity(&self, node: NodeId) -> bool {
        let validity = self.validity(node);
        if !validity.valid() {
            let event = Event::new("invalid", crate::event::EventInit { bubbles: false, cancelable: true });
            self.dispatch_event(node, event);
        }
        validity.valid()
    }

    // ---- text content ---------------------------------------------------

    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.node_kind_snapshot(node) {
            Some(NodeKind::Text(text)) => out.push_str(&text.data),
            Some(NodeKind::Comment(_)) => {}
            _ => {
                for child in self.child_nodes(node) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    pub fn set_text_content(&self, node: NodeId, text: impl Into<String>) -> Result<(), DomError> {
        for child in self.child_nodes(node) {
            self.detach(node, child)?;
        }
        let text_node = self.create_text_node(text.into());
        self.append_child(node, text_node)
    }

    // ---- HTML parsing / serialization -----------------------------------

    pub fn inner_html(&self, node: NodeId) -> String {
        crate::serializer::serialize_inner(self, node)
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        crate::serializer::serialize_outer(self, node)
    }

    pub fn set_inner_html(&self, node: NodeId, html: &str) -> Result<(), DomError> {
        for child in self.child_nodes(node) {
            self.detach(node, child)?;
        }
        crate::tree_builder::parse_fragment(self, node, html)
    }

    // ---- document-level queries ------------------------------------------

    pub fn document_element(&self) -> Option<NodeId> {
        self.children(self.root).into_iter().next()
    }

    fn find_descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        for child in self.children(node) {
            if self.tag_name(child).as_deref() == Some(tag) {
                return Some(child);
            }
            if let Some(found) = self.find_descendant_by_tag(child, tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn head(&self) -> Option<NodeId> {
        self.document_element().and_then(|html| self.find_descendant_by_tag(html, "head"))
    }

    pub fn body(&self) -> Option<NodeId> {
        self.document_element().and_then(|html| self.find_descendant_by_tag(html, "body"))
    }

    pub fn title(&self) -> String {
        self.head()
            .and_then(|head| self.find_descendant_by_tag(head, "title"))
            .map(|title| self.text_content(title))
            .unwrap_or_default()
    }

    pub fn set_title(&self, title: impl Into<String>) -> Result<(), DomError> {
        let head = self.head().ok_or_else(|| DomError::not_found("document has no <head>"))?;
        let title_node = match self.find_descendant_by_tag(head, "title") {
            Some(existing) => existing,
            None => {
                let created = self.create_element("title")?;
                self.append_child(head, created)?;
                created
            }
        };
        self.set_text_content(title_node, title.into())
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_matching(self.root, &|doc, n| doc.get_attribute(n, "id").as_deref() == Some(id))
    }

    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_matching(self.root, &|doc, n| {
            tag_name == "*" || doc.tag_name(n).as_deref() == Some(tag_name)
        }, &mut out);
        out
    }

    pub fn get_elements_by_class_name(&self, class_names: &str) -> Vec<NodeId> {
        let wanted: Vec<&str> = class_names.split_ascii_whitespace().collect();
        let mut out = Vec::new();
        self.collect_matching(self.root, &|doc, n| {
            let tokens = doc.class_tokens(n);
            wanted.iter().all(|w| tokens.iter().any(|t| t == w))
        }, &mut out);
        out
    }

    fn find_matching(&self, node: NodeId, predicate: &dyn Fn(&Document, NodeId) -> bool) -> Option<NodeId> {
        for child in self.children(node) {
            if predicate(self, child) {
                return Some(child);
            }
            if let Some(found) = self.find_matching(child, predicate) {
                return Some(found);
            }
        }
        None
    }

    fn collect_matching(&self, node: NodeId, predicate: &dyn Fn(&Document, NodeId) -> bool, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            if predicate(self, child) {
                out.push(child);
            }
            self.collect_matching(child, predicate, out);
        }
    }

    // ---- events -----------------------------------------------------------

    pub fn add_event_listener(
        &self,
        node: NodeId,
        event_type: &str,
        callback: Arc<dyn Fn(&mut Event) + Send + Sync>,
        capture: bool,
    ) {
        self.arena.with_mut(node, |record| {
            if let Some(table) = record.kind.listeners_mut() {
                table.add(event_type, ListenerEntry::new(callback, capture));
            }
        });
    }

    pub fn remove_event_listener(
        &self,
        node: NodeId,
        event_type: &str,
        callback: &Arc<dyn Fn(&mut Event) + Send + Sync>,
        capture: bool,
    ) {
        self.arena.with_mut(node, |record| {
            if let Some(table) = record.kind.listeners_mut() {
                table.remove(event_type, callback, capture);
            }
        });
    }

    fn invoke_listeners(&self, node: NodeId, event: &mut Event, capture: bool) {
        let snapshot = self
            .arena
            .with(node, |record| {
                record.kind.listeners().map(|t| t.snapshot(event.event_type(), capture))
            })
            .flatten()
            .unwrap_or_default();
        event.set_current_target(node);
        for entry in snapshot {
            if event.immediate_propagation_stopped() {
                break;
            }
            (entry.callback)(event);
        }
    }

    /// Capture → target → bubble dispatch. Returns `true` unless a
    /// cancelable listener called `prevent_default`.
    pub fn dispatch_event(&self, target: NodeId, mut event: Event) -> bool {
        event.set_target(target);

        let mut ancestors = Vec::new();
        let mut cur = self.parent_node(target);
        while let Some(p) = cur {
            ancestors.push(p);
            cur = self.parent_node(p);
        }

        event.set_phase(EventPhase::Capturing);
        for &node in ancestors.iter().rev() {
            if event.propagation_stopped() {
                break;
            }
            self.invoke_listeners(node, &mut event, true);
        }

        if !event.propagation_stopped() {
            event.set_phase(EventPhase::AtTarget);
            self.invoke_listeners(target, &mut event, true);
            self.invoke_listeners(target, &mut event, false);
        }

        if event.bubbles() {
            event.set_phase(EventPhase::Bubbling);
            for &node in ancestors.iter() {
                if event.propagation_stopped() {
                    break;
                }
                self.invoke_listeners(node, &mut event, false);
            }
        }

        !event.default_prevented()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':')
}
