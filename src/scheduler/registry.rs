//! Ordered set of registered events.
//!
//! Membership is by handle identity. Order is registration order and drives
//! the order of the tick sweep and of callback invocation.

use super::EventHandle;
use crate::error::TimerError;

/// Insertion-ordered, duplicate-free set of event handles.
#[derive(Debug)]
pub struct ActiveSet<const N: usize> {
    handles: heapless::Vec<EventHandle, N>,
}

impl<const N: usize> ActiveSet<N> {
    /// Create empty set.
    pub const fn new() -> Self {
        Self {
            handles: heapless::Vec::new(),
        }
    }

    /// Append handle unless already present.
    ///
    /// Returns `Ok(true)` if the handle was newly added, `Ok(false)` if it
    /// was already registered.
    pub fn register(&mut self, handle: EventHandle) -> Result<bool, TimerError> {
        if self.contains(handle) {
            return Ok(false);
        }

        self.handles
            .push(handle)
            .map_err(|_| TimerError::CapacityExceeded)?;
        Ok(true)
    }

    /// Identity membership test (linear scan).
    pub fn contains(&self, handle: EventHandle) -> bool {
        self.handles.iter().any(|&h| h == handle)
    }

    /// Handle at position `index` in registration order.
    pub fn get(&self, index: usize) -> Option<EventHandle> {
        self.handles.get(index).copied()
    }

    /// Iterate handles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = EventHandle> + '_ {
        self.handles.iter().copied()
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no handle is registered.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<const N: usize> Default for ActiveSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
