//! `MutationObserver`: the §6 mutation-notification hook's reference
//! consumer. Installs itself as a `Document`'s single mutation sink and
//! queues matching records for the subscriber to drain at a point of
//! its own choosing (`take_records`/`deliver`).

use super::record::{accepts, validate, MutationObserverInit, MutationRecord, ObserveOptionsError};
use dom_core::event::MutationEvent;
use dom_core::Document;
use dom_storage::NodeId;
use parking_lot::Mutex;
use std::sync::Arc;

type ObserverCallback = Arc<dyn Fn(&[MutationRecord]) + Send + Sync>;

struct ObservedNode {
    node: NodeId,
    options: MutationObserverInit,
}

struct Inner {
    callback: ObserverCallback,
    observed: Vec<ObservedNode>,
    queue: Vec<MutationRecord>,
    active: bool,
}

/// Watches a document for mutations matching one or more `observe()`
/// registrations, queuing [`MutationRecord`]s for later delivery.
#[derive(Clone)]
pub struct MutationObserver {
    document: Arc<Document>,
    inner: Arc<Mutex<Inner>>,
}

impl MutationObserver {
    /// Builds an observer over `document`, not yet installed as its
    /// mutation sink — call [`MutationObserver::attach`] to start
    /// receiving events.
    pub fn new(document: Arc<Document>, callback: impl Fn(&[MutationRecord]) + Send + Sync + 'static) -> Self {
        Self {
            document,
            inner: Arc::new(Mutex::new(Inner {
                callback: Arc::new(callback),
                observed: Vec::new(),
                queue: Vec::new(),
                active: true,
            })),
        }
    }

    /// Installs this observer as `document`'s mutation sink, replacing
    /// any previously installed sink (there is only ever one per
    /// `Document`, per `Document::set_mutation_sink`).
    pub fn attach(&self) {
        let inner = self.inner.clone();
        let document = self.document.clone();
        self.document.set_mutation_sink(Some(Arc::new(move |event: MutationEvent| {
            Self::handle(&inner, &document, event);
        })));
    }

    /// Starts observing `target` under `options`. Re-observing an
    /// already-watched node replaces its options.
    pub fn observe(&self, target: NodeId, options: MutationObserverInit) -> Result<(), ObserveOptionsError> {
        validate(&options)?;
        let mut inner = self.inner.lock();
        if let Some(existing) = inner.observed.iter_mut().find(|o| o.node == target) {
            existing.options = options;
        } else {
            inner.observed.push(ObservedNode { node: target, options });
        }
        Ok(())
    }

    /// Stops observing every node and discards any queued records.
    pub fn disconnect(&self) {
        let mut inner = self.inner.lock();
        inner.observed.clear();
        inner.queue.clear();
        inner.active = false;
    }

    /// `true` while this observer is watching `node` directly (not via
    /// `subtree`).
    pub fn is_observing(&self, node: NodeId) -> bool {
        self.inner.lock().observed.iter().any(|o| o.node == node)
    }

    /// Drains and returns all queued records without invoking the
    /// callback.
    pub fn take_records(&self) -> Vec<MutationRecord> {
        std::mem::take(&mut self.inner.lock().queue)
    }

    /// Invokes the callback with every queued record, then clears the
    /// queue — the "observation point chosen by the subscriber" the §6
    /// hook describes.
    pub fn deliver(&self) {
        let (callback, records) = {
            let mut inner = self.inner.lock();
            if inner.queue.is_empty() || !inner.active {
                return;
            }
            (inner.callback.clone(), std::mem::take(&mut inner.queue))
        };
        callback(&records);
    }

    fn handle(inner: &Mutex<Inner>, document: &Document, event: MutationEvent) {
        let mut guard = inner.lock();
        if !guard.active {
            return;
        }
        let attribute_name = event.attribute_name.clone();
        let mutation_type = event.mutation_type;
        let target = event.target;

        let relevant = guard.observed.iter().any(|observed| {
            let is_target = observed.node == target;
            let is_descendant = observed.options.subtree && is_descendant_of(document, target, observed.node);
            (is_target || is_descendant) && accepts(&observed.options, mutation_type, attribute_name.as_deref())
        });

        if relevant {
            guard.queue.push(MutationRecord::from(event));
        }
    }
}

fn is_descendant_of(document: &Document, node: NodeId, ancestor: NodeId) -> bool {
    let mut cursor = document.parent_node(node);
    while let Some(parent) = cursor {
        if parent == ancestor {
            return true;
        }
        cursor = document.parent_node(parent);
    }
    false
}
