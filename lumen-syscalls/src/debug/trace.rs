//! Trace capture state control
//!
//! Translates a trace command tag into a resume or pause request on the
//! trace recorder. The recorder owns the process-wide capture state; this
//! layer never reads or caches it, it only issues transition requests.

use lumen_api::{TraceCommand, TraceRecorder};

/// Controller for the kernel trace capture state
pub struct TraceStateController<'a> {
    enabled: bool,
    recorder: &'a dyn TraceRecorder,
}

impl<'a> TraceStateController<'a> {
    /// Create a controller gated by the build configuration
    pub fn new(recorder: &'a dyn TraceRecorder) -> Self {
        Self::with_gate(crate::DEBUG_INSTRUMENTATION, recorder)
    }

    /// Create a controller with an explicit gate state
    pub fn with_gate(enabled: bool, recorder: &'a dyn TraceRecorder) -> Self {
        Self { enabled, recorder }
    }

    /// Handle a trace state change request
    ///
    /// Enable resumes capture, disable pauses it, anything else is inert.
    /// Idempotence (enabling while resumed, disabling while paused) is the
    /// recorder's contract. Always returns normally.
    pub fn set_trace_capture_state(&self, command_raw: u32) {
        if !self.enabled {
            return;
        }

        match TraceCommand::from_raw(command_raw) {
            TraceCommand::Enable => {
                crate::svc_trace!("kernel trace: resume");
                self.recorder.resume();
            }
            TraceCommand::Disable => {
                crate::svc_trace!("kernel trace: pause");
                self.recorder.pause();
            }
            TraceCommand::Unrecognized(raw) => {
                crate::svc_debug!("kernel trace: unrecognized command {:#x}, ignored", raw);
            }
        }
    }
}
