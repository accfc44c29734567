//! Debug collaborator interfaces

use crate::debug::types::ThreadSelector;

/// Thread-state dump renderer interface
///
/// Implemented by the kernel object dumper. Dumping reads another thread's
/// live state, potentially while that thread runs on a different core; the
/// implementor takes whatever snapshot or synchronization it needs. The
/// caller does none.
pub trait ThreadDumper: Send + Sync {
    /// Render the state of the selected thread to the diagnostic sink.
    ///
    /// A selector that does not name a live thread must not fault the
    /// caller; whether it dumps nothing or reports the miss is up to the
    /// implementor.
    fn dump_thread(&self, selector: ThreadSelector);

    /// Render the call stack of the selected thread to the diagnostic sink.
    fn dump_thread_call_stack(&self, selector: ThreadSelector);
}

/// Trace recorder control interface
///
/// Owns the process-wide trace-capture state. `resume` and `pause` must be
/// atomic and idempotent under concurrent calls from multiple cores:
/// resuming while resumed or pausing while paused leaves the state unchanged
/// and must not fault.
pub trait TraceRecorder: Send + Sync {
    /// Resume trace capture.
    fn resume(&self);

    /// Pause trace capture.
    fn pause(&self);
}
