//! Outcome types for start/stop requests.
//!
//! Starting or stopping an event never fails for policy reasons. Instead the
//! operation reports which policy branch it took, so callers and tests can
//! observe decisions rather than infer them from side effects.

/// Result of a start (or restart) request.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Event armed with `remaining = interval` and counted as running
    Started,

    /// Interval is 0; event left inactive
    IgnoredZeroInterval,

    /// Event was already running; countdown left untouched
    AlreadyRunning,
}

impl StartOutcome {
    /// Whether the request armed the event.
    pub const fn is_started(self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}

/// Result of a stop request.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// Event was running and has been deactivated
    Stopped,

    /// Event was not running; nothing changed
    AlreadyStopped,
}
