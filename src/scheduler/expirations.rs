//! Expirations collected by one tick sweep.

use super::EventHandle;
use crate::event::Callback;

/// An event whose callback is about to run.
#[derive(Debug, Copy, Clone)]
pub struct Expiration {
    /// Event that reached zero
    pub handle: EventHandle,

    /// Callback to run (None = no-op)
    pub callback: Option<Callback>,
}

/// Events that reached zero on one sweep, in registration order.
///
/// Callbacks have not run and no event has been re-armed or stopped yet.
#[must_use = "expired events are not handled until passed to `Scheduler::fire`"]
#[derive(Debug)]
pub struct Expirations<const N: usize> {
    handles: heapless::Vec<EventHandle, N>,
}

impl<const N: usize> Expirations<N> {
    pub(crate) const fn new() -> Self {
        Self {
            handles: heapless::Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, handle: EventHandle) {
        // At most one entry per registered event, and the active set shares N
        let _ = self.handles.push(handle);
    }

    /// Number of expired events.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if nothing expired.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterate expired events in firing order.
    pub fn iter(&self) -> impl Iterator<Item = EventHandle> + '_ {
        self.handles.iter().copied()
    }
}
