//! Snapshot collections over the arena-backed DOM tree.
//!
//! Both collection types here are live-independent snapshots taken at
//! call time (§4.4, §3 invariant 8) — not the "live" collections a
//! browser DOM exposes. `NodeList` backs `childNodes` and
//! `querySelectorAll`; `HTMLCollection` backs `getElementsByTagName` and
//! `getElementsByClassName`.

pub mod html_collection;
pub mod node_list;

pub use html_collection::HTMLCollection;
pub use node_list::NodeList;
