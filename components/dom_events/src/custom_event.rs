//! `CustomEvent`: an [`Event`] carrying an opaque `detail` payload (§6 of
//! the event construction contract).

use dom_core::event::{Event, EventInit};
use std::any::Any;
use std::sync::Arc;

/// Construction options for [`custom_event`], mirroring [`EventInit`]
/// without requiring callers to depend on `dom_core::event` directly.
#[derive(Debug, Clone, Default)]
pub struct CustomEventInit {
    pub bubbles: bool,
    pub cancelable: bool,
}

impl From<CustomEventInit> for EventInit {
    fn from(init: CustomEventInit) -> Self {
        EventInit {
            bubbles: init.bubbles,
            cancelable: init.cancelable,
        }
    }
}

/// Builds an [`Event`] of `event_type` carrying `detail`, retrievable
/// later via [`detail`].
pub fn custom_event<T: Any + Send + Sync>(
    event_type: impl Into<String>,
    init: CustomEventInit,
    detail: T,
) -> Event {
    Event::with_detail(event_type, init.into(), Arc::new(detail))
}

/// Downcasts `event`'s detail payload to `T`, returning `None` if the
/// event carries no detail or carries one of a different type.
pub fn detail<T: Any + Send + Sync>(event: &Event) -> Option<&T> {
    event.detail().and_then(|d| d.downcast_ref::<T>())
}
