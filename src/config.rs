//! Configuration traits and implementations for scheduler timing and sizing.
//!
//! The `SchedulerConfig` trait allows compile-time configuration of the tick
//! period and default event capacity without runtime overhead.

/// Scheduler configuration trait defining tick period and capacity.
///
/// All values are const (zero runtime cost).
pub trait SchedulerConfig {
    /// Milliseconds elapsed per hardware tick (default: 1)
    ///
    /// Every tick subtracts this from each running event's remaining time.
    const TICK_PERIOD_MS: u32;

    /// Number of event slots used by the `DefaultScheduler` alias (default: 16)
    const MAX_EVENTS: usize;
}

/// Default configuration for typical embedded systems.
///
/// - TICK_PERIOD_MS: 1 ms (1 kHz compare interrupt)
/// - MAX_EVENTS: 16 events
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl SchedulerConfig for DefaultConfig {
    const TICK_PERIOD_MS: u32 = 1;
    const MAX_EVENTS: usize = 16;
}

/// Minimal configuration for resource-constrained systems.
///
/// - TICK_PERIOD_MS: 1 ms
/// - MAX_EVENTS: 4 events
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl SchedulerConfig for MinimalConfig {
    const TICK_PERIOD_MS: u32 = 1;
    const MAX_EVENTS: usize = 4;
}
