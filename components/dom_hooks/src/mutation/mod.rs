//! The mutation-notification hook described in §6: a `MutationObserver`
//! that installs itself as a `Document`'s single mutation sink and
//! queues matching [`MutationRecord`]s for later delivery.

mod observer;
mod record;

pub use observer::MutationObserver;
pub use record::{MutationObserverInit, MutationRecord, MutationType, ObserveOptionsError};
