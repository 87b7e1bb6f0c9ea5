//! Generational-index node storage for `very-happy-dom`.
//!
//! Nodes live in a single per-document [`arena::NodeArena`]; parent/child
//! links are `NodeId`s, not pointers. This makes single-parent and
//! acyclicity properties of one arena slot's fields instead of invariants
//! a pointer graph has to maintain by convention, and makes detaching a
//! subtree a single-field write rather than a memory move.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`arena`] | `NodeArena<T>`, `NodeId` |
//! | [`gc`] | Mark-and-sweep collection of slots unreachable from a root set |
//! | [`weak_refs`] | `WeakNodeRef<T>`, a named non-owning reference |

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod arena;
pub mod gc;
pub mod weak_refs;

pub use arena::{NodeArena, NodeId};
pub use gc::GcStats;
pub use weak_refs::WeakNodeRef;
