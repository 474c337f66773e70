//! Test fixtures and utilities for tick-timer testing.
//!
//! Provides:
//! - `MockTickSource`: Test implementation of TickSource trait
//! - Recording callbacks (`on_a`, `on_b`, ...) that log their name per thread
//! - `fired()` / `take_fired()` to inspect what ran

#![allow(dead_code)]

use std::cell::RefCell;
use tick_timer::TickSource;

// ============================================================================
// MockTickSource - Test Tick Source Implementation
// ============================================================================

/// Mock tick source for testing.
///
/// Tracks whether the interrupt is armed and how often the scheduler
/// toggled it.
#[derive(Debug, Default)]
pub struct MockTickSource {
    /// Interrupt currently armed
    pub armed: bool,

    /// Number of `enable()` calls
    pub enable_calls: usize,

    /// Number of `disable()` calls
    pub disable_calls: usize,
}

impl MockTickSource {
    /// Create new disarmed source.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for MockTickSource {
    fn enable(&mut self) {
        self.armed = true;
        self.enable_calls += 1;
    }

    fn disable(&mut self) {
        self.armed = false;
        self.disable_calls += 1;
    }
}

// ============================================================================
// Recording Callbacks
// ============================================================================

thread_local! {
    static FIRED: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

/// Record a callback invocation on the current thread.
pub fn record(name: &'static str) {
    FIRED.with(|fired| fired.borrow_mut().push(name));
}

/// Callbacks recorded so far on the current thread.
pub fn fired() -> Vec<&'static str> {
    FIRED.with(|fired| fired.borrow().clone())
}

/// Drain recorded callbacks on the current thread.
pub fn take_fired() -> Vec<&'static str> {
    FIRED.with(|fired| std::mem::take(&mut *fired.borrow_mut()))
}

/// Count how often `name` fired on the current thread.
pub fn fire_count(name: &str) -> usize {
    FIRED.with(|fired| fired.borrow().iter().filter(|&&n| n == name).count())
}

/// Callback recording "a".
pub fn on_a() {
    record("a");
}

/// Callback recording "b".
pub fn on_b() {
    record("b");
}

/// Callback recording "c".
pub fn on_c() {
    record("c");
}

/// Callback recording "blink".
pub fn on_blink() {
    record("blink");
}

/// Callback recording "timeout".
pub fn on_timeout() {
    record("timeout");
}
