//! Tick source abstraction for the periodic hardware interrupt.
//!
//! The `TickSource` trait is the only hardware seam of the scheduler: it arms
//! and disarms the fixed-period interrupt that drives
//! [`Scheduler::tick`](crate::Scheduler::tick). Register programming
//! (prescaler, compare value, interrupt mask) lives in the implementation.

/// Platform-agnostic periodic tick source.
///
/// While enabled, the platform must call the scheduler's tick entry point
/// exactly once per period. Both methods are called from inside the
/// scheduler's critical section when used through
/// [`SharedScheduler`](crate::SharedScheduler), so they must be short and
/// must not block.
pub trait TickSource {
    /// Arm the periodic interrupt.
    ///
    /// Only called when the scheduler believes the source is disabled.
    fn enable(&mut self);

    /// Disarm the periodic interrupt.
    ///
    /// May be called while already disabled; must be idempotent.
    fn disable(&mut self);
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn enable(&mut self) {
        (**self).enable();
    }

    fn disable(&mut self) {
        (**self).disable();
    }
}
