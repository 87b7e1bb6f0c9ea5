//! Generational-index arena for DOM node storage.
//!
//! `NodeArena<T>` stores values of a single type `T` behind generational
//! slots: allocating returns a [`NodeId`] (`{index, generation}`) that is
//! cheap to copy and stays comparable across reallocation. Freeing a slot
//! bumps its generation so a stale `NodeId` minted before the free can
//! never be mistaken for whatever occupies the slot afterwards.
//!
//! Access goes through `with`/`with_mut` closures rather than returned
//! references, since the backing storage lives behind a `parking_lot::RwLock`
//! and there is no sound way to hand out a reference that outlives the
//! read/write guard.

use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies a value stored in a [`NodeArena`].
///
/// `index` names the slot; `generation` names which occupant of that slot
/// this id refers to. A `NodeId` is valid only against the arena that
/// minted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

impl NodeId {
    /// Builds a `NodeId` from its raw parts. Exposed for callers (e.g.
    /// `dom_core`) that need to reconstruct an id from a serialized form;
    /// ordinary code obtains `NodeId`s from [`NodeArena::insert`].
    pub fn from_raw(index: usize, generation: u64) -> Self {
        NodeId { index, generation }
    }

    /// The raw slot index, for diagnostics.
    pub fn index(self) -> usize {
        self.index
    }

    /// The raw generation counter, for diagnostics.
    pub fn generation(self) -> u64 {
        self.generation
    }
}

struct Slot<T> {
    data: T,
    generation: u64,
}

struct Inner<T> {
    slots: Vec<Option<Slot<T>>>,
}

/// Thread-safe generational arena.
///
/// Cloning a `NodeArena` is cheap and shares the same backing storage (it
/// is a handle, like `Arc`), matching the one-arena-per-document ownership
/// model: every cursor/view type in `dom_core` holds a clone of the
/// document's arena rather than a reference with a lifetime.
pub struct NodeArena<T> {
    inner: Arc<RwLock<Inner<T>>>,
    free_list: Arc<Mutex<Vec<usize>>>,
    generation: Arc<AtomicU64>,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena pre-sized for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                slots: Vec::with_capacity(capacity),
            })),
            free_list: Arc::new(Mutex::new(Vec::new())),
            generation: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocates a new slot holding `data`, returning its id.
    pub fn insert(&self, data: T) -> NodeId {
        let mut inner = self.inner.write();
        let mut free_list = self.free_list.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);

        let index = if let Some(index) = free_list.pop() {
            index
        } else {
            let index = inner.slots.len();
            inner.slots.push(None);
            index
        };

        inner.slots[index] = Some(Slot { data, generation });
        NodeId { index, generation }
    }

    /// Returns `true` if `id` still refers to a live slot.
    pub fn contains(&self, id: NodeId) -> bool {
        let inner = self.inner.read();
        matches!(inner.slots.get(id.index), Some(Some(slot)) if slot.generation == id.generation)
    }

    /// Runs `f` with a shared reference to the node, if `id` is live.
    pub fn with<R>(&self, id: NodeId, f: impl FnOnce(&T) -> R) -> Option<R> {
        let inner = self.inner.read();
        match inner.slots.get(id.index) {
            Some(Some(slot)) if slot.generation == id.generation => Some(f(&slot.data)),
            _ => None,
        }
    }

    /// Runs `f` with a mutable reference to the node, if `id` is live.
    pub fn with_mut<R>(&self, id: NodeId, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut inner = self.inner.write();
        match inner.slots.get_mut(id.index) {
            Some(Some(slot)) if slot.generation == id.generation => Some(f(&mut slot.data)),
            _ => None,
        }
    }

    /// Frees the slot `id` refers to, returning its data if it was live.
    /// The slot's index is recycled for a future `insert`, under a fresh
    /// generation, so any remaining copies of `id` become dangling.
    pub fn remove(&self, id: NodeId) -> Option<T> {
        let mut inner = self.inner.write();
        let taken = match inner.slots.get_mut(id.index) {
            Some(slot @ Some(_)) if slot.as_ref().unwrap().generation == id.generation => {
                slot.take().map(|s| s.data)
            }
            _ => None,
        };
        if taken.is_some() {
            self.free_list.lock().push(id.index);
        }
        taken
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.inner.read().slots.iter().filter(|s| s.is_some()).count()
    }

    /// `true` if no nodes are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All currently-live ids, in arbitrary slot order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.inner
            .read()
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|s| NodeId {
                    index,
                    generation: s.generation,
                })
            })
            .collect()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            free_list: self.free_list.clone(),
            generation: self.generation.clone(),
        }
    }
}

// Send + Sync follow automatically: Arc<RwLock<T>> and Arc<Mutex<T>> are
// Send + Sync whenever T is, and AtomicU64 always is. No unsafe impl needed.
