//! # tick-timer
//!
//! Interrupt-driven software timer events for embedded systems with zero heap
//! allocation.
//!
//! **Key features:**
//! - **Static allocation** - Fixed-capacity event slots, no heap usage
//! - **Const initialization** - Schedulers can live in a `static`
//! - **Tick gating** - Hardware tick source armed only while an event is running
//! - **Interrupt safety** - `SharedScheduler` guards every mutation with a critical section
//! - **Observable policy** - Start/stop report what they did instead of failing silently
//!
//! ## Usage
//!
//! ```ignore
//! use tick_timer::{DefaultConfig, SharedScheduler, TickSource, TimerEvent};
//!
//! struct Timer1;
//!
//! impl TickSource for Timer1 {
//!     fn enable(&mut self) { /* unmask 1 ms compare interrupt */ }
//!     fn disable(&mut self) { /* mask it */ }
//! }
//!
//! static TIMERS: SharedScheduler<Timer1, DefaultConfig, 16> = SharedScheduler::new(Timer1);
//!
//! fn toggle_led() { /* ... */ }
//!
//! fn main() -> ! {
//!     let blink = TIMERS
//!         .add(TimerEvent::new(toggle_led).with_interval(250).repeating())
//!         .unwrap();
//!     let _ = TIMERS.start(blink);
//!     loop {}
//! }
//!
//! #[interrupt]
//! fn TIMER1_COMPA() {
//!     TIMERS.on_tick();
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `log` - Forward scheduler diagnostics to the `log` facade
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// ============================================================================
// Module Declarations
// ============================================================================

mod logging;

pub mod config;
pub mod error;
pub mod event;
pub mod outcome;
pub mod scheduler;
pub mod tick;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Configuration
pub use config::{DefaultConfig, MinimalConfig, SchedulerConfig};

// Error types
pub use error::TimerError;

// Event types
pub use event::{Callback, TimerEvent};

// Outcome types
pub use outcome::{StartOutcome, StopOutcome};

// Tick source
pub use tick::TickSource;

// Scheduler types
pub use scheduler::{
    DefaultScheduler, EventHandle, Expiration, Expirations, MinimalScheduler, Scheduler,
    SharedScheduler,
};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
