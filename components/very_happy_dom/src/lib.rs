//! `very_happy_dom` — the public facade for the server-side HTML DOM
//! engine: a tolerant HTML tokenizer and tree builder, an arena-backed
//! node model, a CSS3-subset selector engine, and a capture/bubble event
//! dispatcher, plus the document-level `location`/`history` state none
//! of the lower crates model on their own (§6).
//!
//! Most consumers only need this crate: it re-exports every public type
//! from the component crates below it, so `use very_happy_dom::*` is
//! enough to parse, query, mutate, and dispatch events against a
//! document. [`Document`] here is the facade type from
//! [`document_facade`] (it wraps `dom_core::Document` behind a `Deref`
//! and adds `location`/`history`) — it shadows `dom_core`'s own
//! `Document` in this crate's glob re-export, which is the point of
//! having a facade at all.
//!
//! | Crate | Responsibility |
//! |-------|----------------|
//! | [`dom_types`] | shared ids, node-type enum, mutation records, error taxonomy |
//! | [`dom_storage`] | the generational-index node arena |
//! | [`dom_core`] | tokenizer, tree builder, node model, attributes/classList/style, serializer |
//! | [`dom_collections`] | `NodeList` / `HTMLCollection` snapshots |
//! | [`dom_selectors`] | CSS selector parsing, matching, `querySelector(All)` |
//! | [`dom_events`] | `EventTarget` sugar and `CustomEvent` |
//! | [`dom_hooks`] | `MutationObserver` and the custom-element upgrade registry |
//!
//! # Quick start
//!
//! ```rust
//! use very_happy_dom::Document;
//! use very_happy_dom::Selectable;
//!
//! let doc = Document::new();
//! let body = doc.body().unwrap();
//! let div = doc.create_element("div").unwrap();
//! doc.set_attribute(div, "class".into(), "card".into()).unwrap();
//! doc.append_child(body, div).unwrap();
//!
//! assert_eq!(doc.query_selector(body, "div.card").unwrap(), Some(div));
//! ```

#![warn(missing_docs)]

// Re-export all public APIs from the component crates. `document_facade`'s
// `Document`/`Location`/`History` are exported explicitly below, which
// takes precedence over `dom_core::Document` from this glob per Rust's
// glob-shadowing rule.
pub use dom_collections::*;
pub use dom_core::*;
pub use dom_events::*;
pub use dom_hooks::*;
pub use dom_selectors::*;
pub use dom_storage::*;
pub use dom_types::*;

pub mod config;
pub mod document_facade;
pub mod logging;

pub use config::DomConfig;
pub use document_facade::{Document, History, Location};
