//! The arena record every tree slot stores (C4).
//!
//! `NodeKind` is the tagged variant from the "event target polymorphism"
//! redesign: `Document` and `Element` carry a listener table and children;
//! `Text`/`Comment` carry neither. `parent`/`children` are `NodeId`s, not
//! pointers, making both tree invariants (single parent, acyclicity)
//! properties of one arena slot's fields (see `dom_storage::arena`).

use crate::element::ElementData;
use crate::event::ListenerTable;
use dom_storage::NodeId;
use dom_types::NodeType;

/// One node's data, independent of its arena slot.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The root `#document` node; carries its own listener table since
    /// there is no separate `ElementData` for it to live on.
    Document(ListenerTable),
    Element(ElementData),
    Text(TextData),
    Comment(CommentData),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Document(_) => NodeType::Document,
            NodeKind::Element(_) => NodeType::Element,
            NodeKind::Text(_) => NodeType::Text,
            NodeKind::Comment(_) => NodeType::Comment,
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Whether this node kind carries a listener table (Document, Element).
    pub fn is_event_target(&self) -> bool {
        matches!(self, NodeKind::Document(_) | NodeKind::Element(_))
    }

    pub fn listeners(&self) -> Option<&ListenerTable> {
        match self {
            NodeKind::Document(table) => Some(table),
            NodeKind::Element(e) => Some(&e.listeners),
            _ => None,
        }
    }

    pub fn listeners_mut(&mut self) -> Option<&mut ListenerTable> {
        match self {
            NodeKind::Document(table) => Some(table),
            NodeKind::Element(e) => Some(&mut e.listeners),
            _ => None,
        }
    }
}

/// Plain text content; no children, no attributes.
#[derive(Debug, Clone, Default)]
pub struct TextData {
    pub data: String,
}

/// `<!--…-->` content; excluded from `textContent`.
#[derive(Debug, Clone, Default)]
pub struct CommentData {
    pub data: String,
}

/// An arena slot: node data, parent back-reference, and (for
/// Document/Element) the ordered child list.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeRecord {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }
}
