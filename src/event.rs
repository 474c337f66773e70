//! Timer event record.
//!
//! A `TimerEvent` describes one schedulable action: how often it fires,
//! whether it re-arms, and what it calls. Construction never touches a
//! scheduler; an event only becomes schedulable once it is added to a
//! [`Scheduler`](crate::Scheduler) and started through its handle.

/// Zero-argument action invoked when an event expires.
///
/// Runs in interrupt context. Must be short and must not block or busy-wait,
/// otherwise following ticks are delayed or dropped by the hardware.
pub type Callback = fn();

/// One schedulable timer event.
///
/// `remaining` and `running` are owned by the scheduler and only change
/// through its operations. `interval == 0` means "not configured"; such an
/// event is never scheduled.
#[derive(Debug, Copy, Clone)]
pub struct TimerEvent {
    interval: u32,
    remaining: u32,
    running: bool,
    repeat: bool,
    callback: Option<Callback>,
}

impl TimerEvent {
    /// Create a one-shot event with no interval configured.
    pub const fn new(callback: Callback) -> Self {
        Self {
            interval: 0,
            remaining: 0,
            running: false,
            repeat: false,
            callback: Some(callback),
        }
    }

    /// Create an event with no callback (expiry is a no-op).
    pub const fn without_callback() -> Self {
        Self {
            interval: 0,
            remaining: 0,
            running: false,
            repeat: false,
            callback: None,
        }
    }

    /// Builder method to set the interval in milliseconds (chainable).
    pub const fn with_interval(mut self, interval_ms: u32) -> Self {
        self.interval = interval_ms;
        self
    }

    /// Builder method to make the event re-arm after firing (chainable).
    pub const fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Builder method to set the repeat flag explicitly (chainable).
    pub const fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Update the interval. Does not touch the run state or current countdown.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval = interval_ms;
    }

    /// Interval between firings in milliseconds.
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    /// Milliseconds until the next firing. Only meaningful while running.
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the event is currently counting down.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the event re-arms after firing.
    pub const fn is_repeating(&self) -> bool {
        self.repeat
    }

    /// Callback invoked on expiry, if any.
    pub const fn callback(&self) -> Option<Callback> {
        self.callback
    }

    pub(crate) fn arm(&mut self) {
        self.remaining = self.interval;
        self.running = true;
    }

    pub(crate) fn disarm(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    pub(crate) fn count_down(&mut self, elapsed_ms: u32) {
        if self.running {
            self.remaining = self.remaining.saturating_sub(elapsed_ms);
        }
    }

    pub(crate) fn is_expired(&self) -> bool {
        self.running && self.remaining == 0
    }
}

impl Default for TimerEvent {
    fn default() -> Self {
        Self::without_callback()
    }
}
