//! Event data, listener storage, and mutation/upgrade hook types (C9 data
//! model plus the §6 extension points).
//!
//! Listener storage lives here, next to the node model, rather than in a
//! separate crate: `Document`/`Element` records own their listener tables
//! directly (see [`crate::node::NodeKind`]), and `dispatch_event` needs to
//! walk the tree and read those tables in the same borrow. `dom_events`
//! builds the ergonomic `EventTarget`-style wrapper and `CustomEvent` on
//! top of the primitives defined here; it does not reimplement dispatch.

use dom_storage::NodeId;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Which phase of capture→target→bubble dispatch is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventPhase {
    #[default]
    None,
    Capturing,
    AtTarget,
    Bubbling,
}

/// Construction options for [`Event::new`].
#[derive(Debug, Clone, Default)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
}

/// A DOM event as it flows through `dispatch_event`.
///
/// `detail` carries an opaque payload for custom events (see
/// `dom_events::CustomEvent`); plain events leave it `None`.
#[derive(Clone)]
pub struct Event {
    event_type: String,
    phase: EventPhase,
    target: Option<NodeId>,
    current_target: Option<NodeId>,
    bubbles: bool,
    cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
    immediate_propagation_stopped: bool,
    time_stamp: f64,
    detail: Option<Arc<dyn std::any::Any + Send + Sync>>,
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("event_type", &self.event_type)
            .field("phase", &self.phase)
            .field("target", &self.target)
            .field("bubbles", &self.bubbles)
            .field("cancelable", &self.cancelable)
            .field("default_prevented", &self.default_prevented)
            .finish()
    }
}

impl Event {
    /// Builds a new event of `event_type`, not yet dispatched.
    pub fn new(event_type: impl Into<String>, init: EventInit) -> Self {
        let time_stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
            * 1000.0;
        Self {
            event_type: event_type.into(),
            phase: EventPhase::None,
            target: None,
            current_target: None,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            default_prevented: false,
            propagation_stopped: false,
            immediate_propagation_stopped: false,
            time_stamp,
            detail: None,
        }
    }

    /// Builds a custom event carrying an opaque `detail` payload.
    pub fn with_detail(
        event_type: impl Into<String>,
        init: EventInit,
        detail: Arc<dyn std::any::Any + Send + Sync>,
    ) -> Self {
        let mut event = Self::new(event_type, init);
        event.detail = Some(detail);
        event
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn phase(&self) -> EventPhase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: EventPhase) {
        self.phase = phase;
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub(crate) fn set_target(&mut self, target: NodeId) {
        self.target = Some(target);
    }

    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    pub(crate) fn set_current_target(&mut self, target: NodeId) {
        self.current_target = Some(target);
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped
    }

    pub fn time_stamp(&self) -> f64 {
        self.time_stamp
    }

    pub fn detail(&self) -> Option<&Arc<dyn std::any::Any + Send + Sync>> {
        self.detail.as_ref()
    }

    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
        self.immediate_propagation_stopped = true;
    }
}

/// A registered listener: the callback plus whether it runs during the
/// capture phase. Dedup key is `(identity of callback, capture)` — since
/// Rust closures have no equality, identity is `Arc::ptr_eq` on the boxed
/// callback, which is why callers register an `Arc` they keep around if
/// they intend to remove it later.
#[derive(Clone)]
pub struct ListenerEntry {
    pub(crate) callback: Arc<dyn Fn(&mut Event) + Send + Sync>,
    pub(crate) capture: bool,
    seq: u64,
}

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

impl ListenerEntry {
    pub fn new(callback: Arc<dyn Fn(&mut Event) + Send + Sync>, capture: bool) -> Self {
        Self {
            callback,
            capture,
            seq: NEXT_SEQ.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn capture(&self) -> bool {
        self.capture
    }

    fn same_identity(&self, other: &ListenerEntry) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback) && self.capture == other.capture
    }
}

impl std::fmt::Debug for ListenerEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("capture", &self.capture)
            .field("seq", &self.seq)
            .finish()
    }
}

/// Per-type, insertion-ordered listener table. Lives only on `Document`
/// and `Element` node records (text/comment nodes never receive
/// listeners, per the event-target-polymorphism redesign).
#[derive(Debug, Clone, Default)]
pub struct ListenerTable {
    by_type: std::collections::HashMap<String, Vec<ListenerEntry>>,
}

impl ListenerTable {
    pub fn add(&mut self, event_type: &str, entry: ListenerEntry) {
        let list = self.by_type.entry(event_type.to_string()).or_default();
        if !list.iter().any(|existing| existing.same_identity(&entry)) {
            list.push(entry);
        }
    }

    pub fn remove(
        &mut self,
        event_type: &str,
        callback: &Arc<dyn Fn(&mut Event) + Send + Sync>,
        capture: bool,
    ) {
        if let Some(list) = self.by_type.get_mut(event_type) {
            if let Some(pos) = list
                .iter()
                .position(|e| Arc::ptr_eq(&e.callback, callback) && e.capture == capture)
            {
                list.remove(pos);
            }
        }
    }

    /// A snapshot of listeners for `event_type` registered for the given
    /// phase, taken at the moment of the call (not live) — this is what
    /// makes dispatch's "listeners added mid-dispatch are not invoked"
    /// rule hold.
    pub fn snapshot(&self, event_type: &str, capture: bool) -> Vec<ListenerEntry> {
        self.by_type
            .get(event_type)
            .map(|list| list.iter().filter(|e| e.capture == capture).cloned().collect())
            .unwrap_or_default()
    }
}

/// A mutation batch delivered to the §6 mutation-notification hook.
#[derive(Debug, Clone)]
pub struct MutationEvent {
    pub mutation_type: dom_types::MutationType,
    pub target: NodeId,
    pub attribute_name: Option<String>,
    pub added_nodes: Vec<NodeId>,
    pub removed_nodes: Vec<NodeId>,
}

/// Subscriber signature for the mutation-notification hook (§6). Stored
/// on `Document`; invoked synchronously after each tree/attribute
/// mutation, with draining left to the subscriber (`dom_hooks::MutationObserver`).
pub type MutationSink = Arc<dyn Fn(MutationEvent) + Send + Sync>;

/// Consulted at element-creation time, keyed on canonicalized tag name;
/// returns an optional upgrade callback invoked immediately after the
/// element is created (§6 custom-element simulation hook).
pub trait ElementUpgradeRegistry: Send + Sync {
    fn upgrade_callback_for(&self, canonical_tag: &str) -> Option<Arc<dyn Fn(NodeId) + Send + Sync>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_default_is_noop_when_not_cancelable() {
        let mut event = Event::new("click", EventInit::default());
        event.prevent_default();
        assert!(!event.default_prevented());
    }

    #[test]
    fn prevent_default_sets_flag_when_cancelable() {
        let mut event = Event::new(
            "click",
            EventInit {
                bubbles: true,
                cancelable: true,
            },
        );
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn stop_immediate_propagation_sets_both_flags() {
        let mut event = Event::new("x", EventInit::default());
        event.stop_immediate_propagation();
        assert!(event.propagation_stopped());
        assert!(event.immediate_propagation_stopped());
    }

    #[test]
    fn listener_table_dedupes_by_identity_and_capture() {
        let cb: Arc<dyn Fn(&mut Event) + Send + Sync> = Arc::new(|_e: &mut Event| {});
        let mut table = ListenerTable::default();
        table.add("click", ListenerEntry::new(cb.clone(), false));
        table.add("click", ListenerEntry::new(cb.clone(), false));
        assert_eq!(table.snapshot("click", false).len(), 1);

        table.add("click", ListenerEntry::new(cb.clone(), true));
        assert_eq!(table.snapshot("click", true).len(), 1);
        assert_eq!(table.snapshot("click", false).len(), 1);
    }

    #[test]
    fn listener_table_remove() {
        let cb: Arc<dyn Fn(&mut Event) + Send + Sync> = Arc::new(|_e: &mut Event| {});
        let mut table = ListenerTable::default();
        table.add("click", ListenerEntry::new(cb.clone(), false));
        table.remove("click", &cb, false);
        assert!(table.snapshot("click", false).is_empty());
    }
}
