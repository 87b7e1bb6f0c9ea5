//! CSS selector engine for very-happy-dom.
//!
//! This crate provides CSS selector parsing, matching, and querying over
//! the arena-backed tree that `dom_core` owns.
//!
//! # Overview
//!
//! - **Query Methods**: `querySelector`, `querySelectorAll`
//! - **Matching**: `matches()`, `closest()`
//! - **Complex Selectors**: combinators, pseudo-classes, attribute selectors
//!
//! # Quick Start
//!
//! ```rust
//! use dom_core::Document;
//! use dom_selectors::Selectable;
//!
//! let doc = Document::new();
//! let body = doc.body().unwrap();
//! let div = doc.create_element("div").unwrap();
//! doc.set_attribute(div, "class".into(), "card".into()).unwrap();
//! doc.append_child(body, div).unwrap();
//!
//! let found = doc.query_selector(body, "div.card").unwrap();
//! assert_eq!(found, Some(div));
//! ```
//!
//! # Supported Selectors
//!
//! ## Simple Selectors
//!
//! | Selector | Example | Description |
//! |----------|---------|-------------|
//! | Type | `div`, `p` | Element tag name |
//! | Class | `.container` | Class attribute |
//! | ID | `#main` | ID attribute |
//! | Universal | `*` | Any element |
//!
//! ## Attribute Selectors
//!
//! | Selector | Example | Description |
//! |----------|---------|-------------|
//! | Exists | `[href]` | Attribute exists |
//! | Equals | `[type="text"]` | Exact match |
//! | Contains | `[class*="btn"]` | Substring match |
//! | Starts | `[href^="https"]` | Prefix match |
//! | Ends | `[src$=".png"]` | Suffix match |
//! | Includes | `[class~="btn"]` | Whitespace-separated token match |
//!
//! ## Combinators
//!
//! | Combinator | Example | Description |
//! |------------|---------|-------------|
//! | Descendant | `div p` | Any descendant |
//! | Child | `ul > li` | Direct child |
//! | Adjacent | `h1 + p` | Immediate following sibling |
//! | General sibling | `h1 ~ p` | Any following sibling |
//!
//! ## Pseudo-Classes
//!
//! | Pseudo | Example | Description |
//! |--------|---------|-------------|
//! | `:first-child` | `li:first-child` | First element child |
//! | `:last-child` | `li:last-child` | Last element child |
//! | `:nth-child()` | `tr:nth-child(odd)` | Nth child (odd/even/integer) |
//! | `:not()` | `p:not(.intro)` | Negation |
//! | `:empty` | `div:empty` | No element children |
//! | `:checked`, `:disabled`, `:enabled` | `input:checked` | Form-control state |
//!
//! Compiled selectors are cached by their source string so repeated
//! queries with the same text avoid re-parsing.
//!
//! # Related Crates
//!
//! - [`dom_core`](../dom_core/index.html) - the DOM tree and its facade
//! - [`dom_collections`](../dom_collections/index.html) - `NodeList` results

#![warn(missing_docs)]

pub mod cache;
pub mod matcher;
pub mod parser;
pub mod query;

pub use parser::{Combinator, Selector, SelectorList};
pub use query::{Selectable, SelectorQuery};
