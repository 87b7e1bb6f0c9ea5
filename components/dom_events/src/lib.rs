//! DOM event dispatch for very-happy-dom.
//!
//! Dispatch itself — the capture→target→bubble walk, listener snapshotting,
//! `stopPropagation`/`preventDefault` bookkeeping — lives in
//! `dom_core::event` and `dom_core::document::Document::dispatch_event`,
//! next to the arena it needs to walk. This crate is the ergonomic layer
//! on top: DOM-spec-named `EventTarget` sugar and `CustomEvent`'s typed
//! `detail` payload.
//!
//! # Quick Start
//!
//! ```rust
//! use dom_core::Document;
//! use dom_core::event::EventInit;
//! use dom_events::EventTarget;
//! use std::sync::Arc;
//!
//! let doc = Document::new();
//! let button = doc.create_element("button").unwrap();
//!
//! doc.add_event_listener(button, "click", Arc::new(|e| {
//!     e.stop_propagation();
//! }), false);
//!
//! let not_prevented = doc.emit(button, "click", EventInit {
//!     bubbles: true,
//!     cancelable: true,
//! });
//! assert!(not_prevented);
//! ```
//!
//! # Custom events
//!
//! ```rust
//! use dom_events::{custom_event, detail, CustomEventInit};
//!
//! let event = custom_event("app:login", CustomEventInit::default(), "alice".to_string());
//! assert_eq!(detail::<String>(&event).map(String::as_str), Some("alice"));
//! ```

#![warn(missing_docs)]

pub mod custom_event;
pub mod target;

pub use custom_event::{custom_event, detail, CustomEventInit};
pub use dom_core::event::{Event, EventInit, EventPhase};
pub use target::{EventTarget, ListenerCallback};
