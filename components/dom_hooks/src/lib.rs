//! Optional hooks layered on top of `dom_core`'s tree and event model:
//! a [`MutationObserver`] for watching DOM changes, and an
//! [`ElementRegistry`] for simulating custom-element upgrades.
//!
//! Neither hook is wired into `Document` by default. Both are opt-in:
//! construct one, install it (`MutationObserver::attach`,
//! `Document::set_element_registry`), and it starts participating in
//! the document's single mutation sink / element-creation path.
//!
//! # MutationObserver
//!
//! ```rust
//! use dom_core::Document;
//! use dom_hooks::{MutationObserver, MutationObserverInit};
//! use std::sync::Arc;
//!
//! let doc = Arc::new(Document::new());
//! let observer = MutationObserver::new(doc.clone(), |records| {
//!     for record in records {
//!         println!("mutation: {:?}", record.record_type);
//!     }
//! });
//! observer.attach();
//!
//! let div = doc.create_element("div").unwrap();
//! observer
//!     .observe(div, MutationObserverInit { attributes: true, ..Default::default() })
//!     .unwrap();
//! doc.set_attribute(div, "class".into(), "active".into()).unwrap();
//!
//! observer.deliver();
//! ```
//!
//! ## Mutation Types
//!
//! | Type | Description |
//! |------|-------------|
//! | `ChildList` | Child nodes added or removed |
//! | `Attributes` | Attribute value changed |
//! | `CharacterData` | Text content changed |
//!
//! # ElementRegistry
//!
//! ```rust
//! use dom_core::Document;
//! use dom_hooks::ElementRegistry;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ElementRegistry::new());
//! registry.define("my-widget", |_node| { /* upgrade logic */ });
//!
//! let doc = Document::new();
//! doc.set_element_registry(Some(registry as Arc<dyn dom_core::ElementUpgradeRegistry>));
//! doc.create_element("my-widget").unwrap();
//! ```
//!
//! # Related Crates
//!
//! - [`dom_core`](../dom_core/index.html) - the DOM tree, attributes, and event dispatch
//! - [`dom_types`](../dom_types/index.html) - shared type definitions

#![warn(missing_docs)]

pub mod element_registry;
pub mod mutation;

pub use element_registry::ElementRegistry;
pub use mutation::{MutationObserver, MutationObserverInit, MutationRecord, ObserveOptionsError};
