//! Core DOM nodes and tree operations.
//!
//! This crate provides the fundamental DOM node types and tree
//! manipulation operations: the HTML tokenizer/tree builder (C2, C3), the
//! arena-backed node model (C4), attribute/classList/style/validity
//! derivation (C5, C10), the HTML serializer (C6), and event dispatch data
//! (C9 data model; `dom_events` builds the ergonomic wrapper on top).

pub mod attr;
pub mod class_list;
pub mod document;
pub mod element;
pub mod event;
pub mod interner;
pub mod node;
pub mod serializer;
pub mod style;
pub mod tokenizer;
pub mod tree_builder;
pub mod validity;

pub use document::{Document, ElementUpgradeRegistry};
pub use dom_storage::NodeId;
pub use element::ElementData;
pub use node::{CommentData, NodeKind, NodeRecord, TextData};
pub use tree_builder::{parse_document, parse_fragment};
pub use validity::ValidityState;
