//! Interrupt-safe wrapper around `Scheduler`.
//!
//! Foreground code and the tick interrupt both mutate the registry and the
//! running count. `SharedScheduler` puts every access behind a
//! `critical_section::Mutex`, so the tick interrupt can never observe a
//! half-finished `start()`/`stop()`.
//!
//! The tick interrupt is held off for at most one scheduler operation: a
//! linear scan of the registered events for `start()` or the countdown
//! sweep, constant time for everything else. Callbacks run with the critical
//! section released and do not count toward the hold-off.

use super::{EventHandle, Expirations, Scheduler};
use crate::config::SchedulerConfig;
use crate::error::TimerError;
use crate::event::TimerEvent;
use crate::outcome::{StartOutcome, StopOutcome};
use crate::tick::TickSource;
use core::cell::RefCell;
use core::fmt;
use critical_section::Mutex;

/// Scheduler shared between foreground code and the tick interrupt.
///
/// Typically placed in a `static` and driven from the timer ISR:
///
/// ```ignore
/// static TIMERS: SharedScheduler<Timer1, DefaultConfig, 16> = SharedScheduler::new(Timer1);
///
/// #[interrupt]
/// fn TIMER1_COMPA() {
///     TIMERS.on_tick();
/// }
/// ```
pub struct SharedScheduler<S, C, const N: usize>
where
    S: TickSource,
    C: SchedulerConfig,
{
    inner: Mutex<RefCell<Scheduler<S, C, N>>>,
}

impl<S, C, const N: usize> fmt::Debug for SharedScheduler<S, C, N>
where
    S: TickSource,
    C: SchedulerConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedScheduler").finish_non_exhaustive()
    }
}

impl<S, C, const N: usize> SharedScheduler<S, C, N>
where
    S: TickSource,
    C: SchedulerConfig,
{
    /// Create shared scheduler with the tick source disabled.
    pub const fn new(source: S) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Scheduler::new(source))),
        }
    }

    /// Run `f` with exclusive access to the scheduler inside a critical section.
    ///
    /// Must not be nested: calling back into this `SharedScheduler` from `f`
    /// panics.
    pub fn with<R>(&self, f: impl FnOnce(&mut Scheduler<S, C, N>) -> R) -> R {
        critical_section::with(|cs| {
            let mut scheduler = self.inner.borrow_ref_mut(cs);
            f(&mut *scheduler)
        })
    }

    /// Interrupt entry point for one hardware tick.
    ///
    /// Counts down inside the critical section. Then, per expired event in
    /// registration order, runs its callback outside the critical section and
    /// re-enters it to re-arm or stop the event as the callback left it.
    ///
    /// Callbacks may start, stop or re-configure events on this scheduler,
    /// including their own. Events they start are first counted down on the
    /// next tick.
    pub fn on_tick(&self) -> usize {
        let expired: Expirations<N> = self.with(|scheduler| scheduler.sweep());

        let mut fired = 0;
        for handle in expired.iter() {
            let Some(expiration) = self.with(|scheduler| scheduler.begin_expiry(handle)) else {
                continue;
            };
            if let Some(callback) = expiration.callback {
                callback();
            }
            self.with(|scheduler| scheduler.finish_expiry(handle));
            fired += 1;
        }
        fired
    }

    /// See [`Scheduler::add`].
    pub fn add(&self, event: TimerEvent) -> Result<EventHandle, TimerError> {
        self.with(|scheduler| scheduler.add(event))
    }

    /// See [`Scheduler::start`].
    pub fn start(&self, handle: EventHandle) -> Result<StartOutcome, TimerError> {
        self.with(|scheduler| scheduler.start(handle))
    }

    /// See [`Scheduler::start_with_interval`].
    pub fn start_with_interval(
        &self,
        handle: EventHandle,
        interval_ms: u32,
    ) -> Result<StartOutcome, TimerError> {
        self.with(|scheduler| scheduler.start_with_interval(handle, interval_ms))
    }

    /// See [`Scheduler::stop`].
    pub fn stop(&self, handle: EventHandle) -> Result<StopOutcome, TimerError> {
        self.with(|scheduler| scheduler.stop(handle))
    }

    /// See [`Scheduler::restart`].
    pub fn restart(&self, handle: EventHandle) -> Result<StartOutcome, TimerError> {
        self.with(|scheduler| scheduler.restart(handle))
    }

    /// See [`Scheduler::set_interval`].
    pub fn set_interval(&self, handle: EventHandle, interval_ms: u32) -> Result<(), TimerError> {
        self.with(|scheduler| scheduler.set_interval(handle, interval_ms))
    }

    /// Snapshot of an event's state.
    pub fn event(&self, handle: EventHandle) -> Option<TimerEvent> {
        self.with(|scheduler| scheduler.event(handle).copied())
    }

    /// Number of events currently running.
    pub fn running_count(&self) -> usize {
        self.with(|scheduler| scheduler.running_count())
    }

    /// Check if the tick source is armed.
    pub fn is_tick_enabled(&self) -> bool {
        self.with(|scheduler| scheduler.is_tick_enabled())
    }
}
