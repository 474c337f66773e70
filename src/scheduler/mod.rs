//! Timer event registry and tick-driven expiration sweep.
//!
//! The `Scheduler` owns event slots, the ordered set of registered events,
//! the running count, and the tick source. Events are addressed through
//! index-stable [`EventHandle`]s, so the scheduler never holds references
//! into application memory.
//!
//! Per-event state machine:
//!
//! ```text
//! Added -> Registered & Stopped <-> Registered & Running
//!          Registered & Running --(expires)--> Running (repeat) | Stopped (one-shot)
//! ```
//!
//! `stop()` keeps an event registered; the sweep skips it until it is
//! started again. Slots are never reclaimed.

use crate::config::{DefaultConfig, MinimalConfig, SchedulerConfig};
use crate::error::TimerError;
use crate::event::TimerEvent;
use crate::logging::{log_debug, log_trace, log_warn};
use crate::outcome::{StartOutcome, StopOutcome};
use crate::tick::TickSource;
use core::fmt;
use core::marker::PhantomData;

// Sub-modules
pub mod expirations;
pub mod registry;
pub mod shared;

// Re-export key types
pub use expirations::{Expiration, Expirations};
pub use registry::ActiveSet;
pub use shared::SharedScheduler;

/// Stable identity of an event slot.
///
/// Returned by [`Scheduler::add`]. Only meaningful for the scheduler that
/// issued it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EventHandle {
    index: usize,
}

impl EventHandle {
    pub(crate) const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Slot index.
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for EventHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Scheduler with `DefaultConfig` timing and capacity.
pub type DefaultScheduler<S> = Scheduler<S, DefaultConfig, { DefaultConfig::MAX_EVENTS }>;

/// Scheduler with `MinimalConfig` timing and capacity.
pub type MinimalScheduler<S> = Scheduler<S, MinimalConfig, { MinimalConfig::MAX_EVENTS }>;

/// Software timer scheduler.
///
/// Generic over:
/// - `S`: TickSource implementation
/// - `C`: SchedulerConfig implementation
/// - `N`: number of event slots
///
/// Not interrupt-safe by itself. Share it between foreground code and the
/// tick interrupt through [`SharedScheduler`].
pub struct Scheduler<S, C, const N: usize>
where
    S: TickSource,
    C: SchedulerConfig,
{
    /// Event storage, indexed by handle
    events: heapless::Vec<TimerEvent, N>,

    /// Registered events in registration order
    active: ActiveSet<N>,

    /// Number of events with `running = true`
    running: usize,

    /// Whether the tick source is armed
    tick_enabled: bool,

    /// Hardware tick source
    source: S,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<S, C, const N: usize> fmt::Debug for Scheduler<S, C, N>
where
    S: TickSource,
    C: SchedulerConfig,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("events", &self.events.len())
            .field("active", &self.active)
            .field("running", &self.running)
            .field("tick_enabled", &self.tick_enabled)
            .finish_non_exhaustive()
    }
}

impl<S, C, const N: usize> Scheduler<S, C, N>
where
    S: TickSource,
    C: SchedulerConfig,
{
    /// Create an empty scheduler. The tick source starts disabled.
    pub const fn new(source: S) -> Self {
        Self {
            events: heapless::Vec::new(),
            active: ActiveSet::new(),
            running: 0,
            tick_enabled: false,
            source,
            _config: PhantomData,
        }
    }

    // ========================================
    // Event slots
    // ========================================

    /// Store an event and return its handle.
    ///
    /// The event is not registered or started; call [`start`](Self::start).
    pub fn add(&mut self, event: TimerEvent) -> Result<EventHandle, TimerError> {
        let handle = EventHandle::new(self.events.len());
        if self.events.push(event).is_err() {
            log_warn!("timer: no free event slot (capacity {})", N);
            return Err(TimerError::CapacityExceeded);
        }
        Ok(handle)
    }

    /// Look up an event.
    pub fn event(&self, handle: EventHandle) -> Option<&TimerEvent> {
        self.events.get(handle.index)
    }

    fn event_mut(&mut self, handle: EventHandle) -> Result<&mut TimerEvent, TimerError> {
        self.events
            .get_mut(handle.index)
            .ok_or(TimerError::UnknownEvent)
    }

    /// Update an event's interval without touching its run state or countdown.
    pub fn set_interval(&mut self, handle: EventHandle, interval_ms: u32) -> Result<(), TimerError> {
        self.event_mut(handle)?.set_interval(interval_ms);
        Ok(())
    }

    // ========================================
    // Start / stop
    // ========================================

    /// Start an event.
    ///
    /// Registers the event on first start. Ignored if the interval is 0 or
    /// the event is already running. Otherwise arms it with
    /// `remaining = interval` and enables the tick source if needed.
    pub fn start(&mut self, handle: EventHandle) -> Result<StartOutcome, TimerError> {
        let event = self.event_mut(handle)?;
        if event.interval() == 0 {
            log_trace!("timer {}: start ignored, interval is 0", handle);
            return Ok(StartOutcome::IgnoredZeroInterval);
        }
        let already_running = event.is_running();

        if self.active.contains(handle) {
            if already_running {
                return Ok(StartOutcome::AlreadyRunning);
            }
        } else {
            self.active.register(handle)?;
        }

        let event = self.event_mut(handle)?;
        event.arm();
        log_trace!("timer {}: started, {} ms", handle, event.interval());

        self.running += 1;
        self.enable_tick();
        Ok(StartOutcome::Started)
    }

    /// Set the interval, then start the event.
    pub fn start_with_interval(
        &mut self,
        handle: EventHandle,
        interval_ms: u32,
    ) -> Result<StartOutcome, TimerError> {
        self.set_interval(handle, interval_ms)?;
        self.start(handle)
    }

    /// Stop an event.
    ///
    /// Clears `running` and `remaining`. The event stays registered. Disables
    /// the tick source when no event is left running.
    pub fn stop(&mut self, handle: EventHandle) -> Result<StopOutcome, TimerError> {
        let event = self.event_mut(handle)?;
        let was_running = event.is_running();
        event.disarm();

        if was_running {
            self.running = self.running.saturating_sub(1);
            log_trace!("timer {}: stopped", handle);
        }

        if self.running == 0 {
            self.disable_tick();
        }

        Ok(if was_running {
            StopOutcome::Stopped
        } else {
            StopOutcome::AlreadyStopped
        })
    }

    /// Stop, then start the event again with a full interval.
    pub fn restart(&mut self, handle: EventHandle) -> Result<StartOutcome, TimerError> {
        let _ = self.stop(handle)?;
        self.start(handle)
    }

    // ========================================
    // Registry
    // ========================================

    /// Register an event without starting it. Idempotent.
    pub fn register(&mut self, handle: EventHandle) -> Result<(), TimerError> {
        self.event_mut(handle)?;
        self.active.register(handle)?;
        Ok(())
    }

    /// Check if an event is registered (running or stopped).
    pub fn contains(&self, handle: EventHandle) -> bool {
        self.active.contains(handle)
    }

    /// Iterate registered events in registration order.
    pub fn active_events(&self) -> impl Iterator<Item = EventHandle> + '_ {
        self.active.iter()
    }

    /// Number of events currently running.
    pub fn running_count(&self) -> usize {
        self.running
    }

    /// Number of occupied event slots.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no event has been added.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Total number of event slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    // ========================================
    // Tick handling
    // ========================================

    /// Handle one hardware tick.
    ///
    /// Counts every running event down, then handles expired events in
    /// registration order: run the callback, then re-arm (repeating) or stop
    /// (one-shot). Returns the number of events that expired on this tick.
    pub fn tick(&mut self) -> usize {
        let expired = self.sweep();
        self.fire(expired)
    }

    /// Phase 1 of a tick: count down every running event.
    ///
    /// Returns the events that reached zero, in registration order. No
    /// callback has run and no event has been re-armed or stopped yet; pass
    /// the result to [`fire`](Self::fire) or step through it with
    /// [`begin_expiry`](Self::begin_expiry) and
    /// [`finish_expiry`](Self::finish_expiry).
    pub fn sweep(&mut self) -> Expirations<N> {
        let mut expired = Expirations::new();

        for position in 0..self.active.len() {
            let Some(handle) = self.active.get(position) else {
                continue;
            };
            let Some(event) = self.events.get_mut(handle.index) else {
                continue;
            };
            event.count_down(C::TICK_PERIOD_MS);
            if event.is_expired() {
                expired.push(handle);
            }
        }

        expired
    }

    /// Phase 2 of a tick: handle each expired event in order.
    ///
    /// Returns how many events were still expired when their turn came.
    pub fn fire(&mut self, expired: Expirations<N>) -> usize {
        let mut fired = 0;
        for handle in expired.iter() {
            let Some(expiration) = self.begin_expiry(handle) else {
                continue;
            };
            if let Some(callback) = expiration.callback {
                callback();
            }
            self.finish_expiry(handle);
            fired += 1;
        }
        fired
    }

    /// Check that `handle` is still running with nothing remaining and hand
    /// out its callback.
    ///
    /// Returns `None` if an earlier callback of this tick stopped or
    /// restarted the event.
    pub fn begin_expiry(&self, handle: EventHandle) -> Option<Expiration> {
        let event = self.events.get(handle.index)?;
        if !event.is_expired() {
            return None;
        }
        Some(Expiration {
            handle,
            callback: event.callback(),
        })
    }

    /// Re-arm or stop an event after its callback ran.
    ///
    /// Reads interval, repeat and run state as the callback left them. An
    /// event the callback already stopped is left alone.
    pub fn finish_expiry(&mut self, handle: EventHandle) {
        let Some(event) = self.events.get_mut(handle.index) else {
            return;
        };
        if !event.is_running() {
            return;
        }

        // A repeating event re-armed to 0 would fire on every tick
        if event.is_repeating() && event.interval() > 0 {
            event.arm();
        } else {
            let _ = self.stop(handle);
        }
    }

    /// Arm the tick source. No-op if already enabled.
    pub fn enable_tick(&mut self) {
        if !self.tick_enabled {
            self.source.enable();
            self.tick_enabled = true;
            log_debug!("timer: tick source enabled");
        }
    }

    /// Disarm the tick source unconditionally.
    pub fn disable_tick(&mut self) {
        self.source.disable();
        if self.tick_enabled {
            log_debug!("timer: tick source disabled");
        }
        self.tick_enabled = false;
    }

    /// Check if the tick source is armed.
    pub fn is_tick_enabled(&self) -> bool {
        self.tick_enabled
    }

    /// Get reference to the tick source.
    pub fn tick_source(&self) -> &S {
        &self.source
    }

    /// Get mutable reference to the tick source.
    pub fn tick_source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    // ========================================
    // Diagnostics
    // ========================================

    /// Write one line per registered event, in registration order.
    ///
    /// ```text
    /// timer events: 2 registered, 1 running
    ///   #0 running 40/250 ms repeat
    ///   #1 stopped 0/100 ms
    /// ```
    pub fn write_instances<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            "timer events: {} registered, {} running",
            self.active.len(),
            self.running
        )?;

        for handle in self.active.iter() {
            let Some(event) = self.event(handle) else {
                continue;
            };
            writeln!(
                out,
                "  {} {} {}/{} ms{}",
                handle,
                if event.is_running() { "running" } else { "stopped" },
                event.remaining(),
                event.interval(),
                if event.is_repeating() { " repeat" } else { "" }
            )?;
        }
        Ok(())
    }
}
