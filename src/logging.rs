//! Internal logging macros.
//!
//! With the `log` feature enabled these forward to the `log` facade. Without
//! it they expand to dead code, so arguments are still type-checked but
//! nothing ends up in the binary.

macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
        #[cfg(not(feature = "log"))]
        if false {
            ::core::mem::drop(::core::format_args!($($arg)*));
        }
    }};
}

macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
        #[cfg(not(feature = "log"))]
        if false {
            ::core::mem::drop(::core::format_args!($($arg)*));
        }
    }};
}

macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
        #[cfg(not(feature = "log"))]
        if false {
            ::core::mem::drop(::core::format_args!($($arg)*));
        }
    }};
}

pub(crate) use log_debug;
pub(crate) use log_trace;
pub(crate) use log_warn;
