//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
pub mod fixtures;

use fixtures::MockTickSource;
use tick_timer::{DefaultConfig, EventHandle, Scheduler, TimerEvent};

/// Scheduler type used throughout the integration tests.
pub type TestScheduler = Scheduler<MockTickSource, DefaultConfig, 8>;

// ============================================================================
// Scheduler Creation Helpers
// ============================================================================

/// Create an empty scheduler with a mock tick source.
pub fn create_scheduler() -> TestScheduler {
    // Start every test with a clean callback log
    fixtures::take_fired();
    Scheduler::new(MockTickSource::new())
}

/// Add an event and return its handle.
pub fn add_event(scheduler: &mut TestScheduler, event: TimerEvent) -> EventHandle {
    scheduler.add(event).expect("scheduler has free slots")
}

/// Add an event and start it, asserting it was armed.
pub fn add_started(scheduler: &mut TestScheduler, event: TimerEvent) -> EventHandle {
    let handle = add_event(scheduler, event);
    assert!(
        scheduler.start(handle).unwrap().is_started(),
        "event {} should have started",
        handle
    );
    handle
}

// ============================================================================
// Tick Helpers
// ============================================================================

/// Tick `count` times and return `(tick_number, callback_name)` for every
/// callback that ran. Tick numbers continue from `first_tick`.
pub fn run_ticks(
    scheduler: &mut TestScheduler,
    first_tick: u32,
    count: u32,
) -> Vec<(u32, &'static str)> {
    let mut log = Vec::new();
    for tick in first_tick..first_tick + count {
        scheduler.tick();
        for name in fixtures::take_fired() {
            log.push((tick, name));
        }
    }
    log
}

/// Tick numbers at which `name` fired.
pub fn ticks_for(log: &[(u32, &'static str)], name: &str) -> Vec<u32> {
    log.iter()
        .filter(|(_, n)| *n == name)
        .map(|(tick, _)| *tick)
        .collect()
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert running count, tick flag and mock source agree.
pub fn assert_tick_state(scheduler: &TestScheduler, running: usize, enabled: bool) {
    assert_eq!(
        scheduler.running_count(),
        running,
        "running count mismatch: {:?}",
        scheduler
    );
    assert_eq!(
        scheduler.is_tick_enabled(),
        enabled,
        "tick flag mismatch: {:?}",
        scheduler
    );
    assert_eq!(
        scheduler.tick_source().armed,
        enabled,
        "tick source armed state mismatch: {:?}",
        scheduler.tick_source()
    );
}
