//! Shared ids, node-type enum, mutation records and error taxonomy for
//! `very-happy-dom`.
//!
//! `dom_types` is a base-level crate with no internal workspace
//! dependencies. Node identity itself lives in `dom_storage` (its
//! generational `NodeId`); this crate holds the smaller pieces every other
//! crate needs to agree on without depending on the storage layer.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `DomError`, the five-variant error taxonomy |
//! | [`ids`] | `DocumentId` |
//! | [`mutation`] | `MutationType` for mutation-observer hooks |
//! | [`node_type`] | `NodeType` for DOM node kinds |

#![warn(missing_docs)]

pub mod error;
pub mod ids;
pub mod mutation;
pub mod node_type;

pub use error::DomError;
pub use ids::DocumentId;
pub use mutation::MutationType;
pub use node_type::NodeType;
