//! Error types for scheduler operations.
//!
//! The `TimerError` enum covers the conditions a caller cannot recover from
//! by retrying the same call. Policy decisions (zero interval, double start,
//! redundant stop) are not errors; see [`crate::outcome`].

use core::fmt;

/// Scheduler error type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// Handle does not name an event slot of this scheduler
    UnknownEvent,

    /// All event slots are in use
    CapacityExceeded,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerError::UnknownEvent => write!(f, "Unknown timer event"),
            TimerError::CapacityExceeded => write!(f, "Timer event capacity exceeded"),
        }
    }
}
