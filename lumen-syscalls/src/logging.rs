//! Unified logging support for lumen-syscalls
//!
//! Thin wrappers over the `log` crate that compile to nothing when the `log`
//! feature is off, so call sites need no repetitive `#[cfg]` attributes.

/// Unified trace-level logging
#[macro_export]
macro_rules! svc_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }
}

/// Unified debug-level logging
#[macro_export]
macro_rules! svc_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    }
}

/// Unified warn-level logging
#[macro_export]
macro_rules! svc_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    }
}
