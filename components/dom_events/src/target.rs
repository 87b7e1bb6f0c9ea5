//! `EventTarget`-style sugar (§4.9) over `Document`'s per-node listener
//! table and dispatcher. `Document` already exposes
//! `add_event_listener`/`remove_event_listener`/`dispatch_event`
//! directly; this trait gives them DOM-spec names at the crate boundary
//! and adds `emit`, a one-call construct-and-dispatch helper.

use dom_core::event::{Event, EventInit};
use dom_core::Document;
use dom_storage::NodeId;
use std::sync::Arc;

/// A listener callback, kept by the caller so it can later be passed to
/// [`EventTarget::remove_event_listener`] (identity-based removal, see
/// `dom_core::event::ListenerTable`).
pub type ListenerCallback = Arc<dyn Fn(&mut Event) + Send + Sync>;

/// Types that accept listeners and dispatch events against a node in
/// their tree.
pub trait EventTarget {
    fn add_event_listener(&self, node: NodeId, event_type: &str, callback: ListenerCallback, capture: bool);
    fn remove_event_listener(&self, node: NodeId, event_type: &str, callback: &ListenerCallback, capture: bool);
    fn dispatch_event(&self, node: NodeId, event: Event) -> bool;

    /// Builds a plain (detail-less) event and dispatches it in one call.
    fn emit(&self, node: NodeId, event_type: &str, init: EventInit) -> bool {
        self.dispatch_event(node, Event::new(event_type, init))
    }
}

impl EventTarget for Document {
    fn add_event_listener(&self, node: NodeId, event_type: &str, callback: ListenerCallback, capture: bool) {
        Document::add_event_listener(self, node, event_type, callback, capture)
    }

    fn remove_event_listener(&self, node: NodeId, event_type: &str, callback: &ListenerCallback, capture: bool) {
        Document::remove_event_listener(self, node, event_type, callback, capture)
    }

    fn dispatch_event(&self, node: NodeId, event: Event) -> bool {
        Document::dispatch_event(self, node, event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn emit_builds_and_dispatches_in_one_call() {
        let doc = Document::new();
        let div = doc.create_element("div").unwrap();
        let seen = Arc::new(Mutex::new(false));
        let seen_clone = seen.clone();

        EventTarget::add_event_listener(
            &doc,
            div,
            "load",
            Arc::new(move |_e: &mut Event| *seen_clone.lock() = true),
            false,
        );

        let not_prevented = EventTarget::emit(&doc, div, "load", EventInit::default());
        assert!(not_prevented);
        assert!(*seen.lock());
    }

    #[test]
    fn remove_event_listener_drops_it_from_dispatch() {
        let doc = Document::new();
        let div = doc.create_element("div").unwrap();
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = calls.clone();
        let callback: ListenerCallback = Arc::new(move |_e: &mut Event| *calls_clone.lock() += 1);

        EventTarget::add_event_listener(&doc, div, "ping", callback.clone(), false);
        EventTarget::emit(&doc, div, "ping", EventInit::default());
        EventTarget::remove_event_listener(&doc, div, "ping", &callback, false);
        EventTarget::emit(&doc, div, "ping", EventInit::default());

        assert_eq!(*calls.lock(), 1);
    }
}
