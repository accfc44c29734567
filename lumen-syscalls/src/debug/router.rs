//! Kernel debug request routing
//!
//! Interprets the operation tag of a kernel debug request, resolves the
//! thread-selector argument, and invokes the dump collaborator. Everything
//! here is read-only introspection; scheduling and thread state are never
//! affected.

use lumen_api::{DebugOperation, ThreadDumper, ThreadSelector};

/// Router for kernel debug requests
///
/// Holds the build-gate state and the injected dump collaborator. One
/// instance serves both calling conventions; the ABI adapters forward into
/// [`request_debug_action`](Self::request_debug_action) unmodified.
pub struct KernelDebugRouter<'a> {
    enabled: bool,
    dumper: &'a dyn ThreadDumper,
}

impl<'a> KernelDebugRouter<'a> {
    /// Create a router gated by the build configuration
    pub fn new(dumper: &'a dyn ThreadDumper) -> Self {
        Self::with_gate(crate::DEBUG_INSTRUMENTATION, dumper)
    }

    /// Create a router with an explicit gate state
    ///
    /// Production instances come from [`new`](Self::new); this constructor
    /// exists so the disabled path is exercisable in an instrumented build.
    pub fn with_gate(enabled: bool, dumper: &'a dyn ThreadDumper) -> Self {
        Self { enabled, dumper }
    }

    /// Handle a kernel debug request
    ///
    /// `kind_raw` is the operation tag; any bit pattern is accepted.
    /// `arg0` carries the thread selector for the recognized operations;
    /// `arg1` and `arg2` are reserved for future operation kinds and are
    /// ignored. Always returns normally, never returns a value to the
    /// caller.
    pub fn request_debug_action(&self, kind_raw: u32, arg0: u64, _arg1: u64, _arg2: u64) {
        // Gate first: a disabled build interprets nothing.
        if !self.enabled {
            return;
        }

        match DebugOperation::from_raw(kind_raw) {
            DebugOperation::ThreadDump => {
                let selector = ThreadSelector::from_raw(arg0);
                crate::svc_trace!("kernel debug: thread dump {:?}", selector);
                self.dumper.dump_thread(selector);
            }
            DebugOperation::ThreadCallStackDump => {
                let selector = ThreadSelector::from_raw(arg0);
                crate::svc_trace!("kernel debug: call stack dump {:?}", selector);
                self.dumper.dump_thread_call_stack(selector);
            }
            DebugOperation::Unrecognized(raw) => {
                // Unknown tags are inert by policy, not an error.
                crate::svc_debug!("kernel debug: unrecognized operation {:#x}, ignored", raw);
            }
        }
    }
}

#[cfg(test)]
#[cfg(feature = "alloc")]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum DumpCall {
        Thread(ThreadSelector),
        CallStack(ThreadSelector),
    }

    #[derive(Default)]
    struct RecordingDumper {
        calls: RefCell<Vec<DumpCall>>,
    }

    // Test-only; the RefCell is never shared across threads.
    unsafe impl Sync for RecordingDumper {}

    impl ThreadDumper for RecordingDumper {
        fn dump_thread(&self, selector: ThreadSelector) {
            self.calls.borrow_mut().push(DumpCall::Thread(selector));
        }

        fn dump_thread_call_stack(&self, selector: ThreadSelector) {
            self.calls.borrow_mut().push(DumpCall::CallStack(selector));
        }
    }

    #[test]
    fn test_thread_dump_sentinel_resolves_to_current() {
        let dumper = RecordingDumper::default();
        let router = KernelDebugRouter::with_gate(true, &dumper);

        router.request_debug_action(0, u64::MAX, 7, 9);

        assert_eq!(
            *dumper.calls.borrow(),
            [DumpCall::Thread(ThreadSelector::Current)]
        );
    }

    #[test]
    fn test_thread_dump_explicit_id_passes_through() {
        let dumper = RecordingDumper::default();
        let router = KernelDebugRouter::with_gate(true, &dumper);

        router.request_debug_action(0, 42, 0, 0);

        assert_eq!(
            *dumper.calls.borrow(),
            [DumpCall::Thread(ThreadSelector::Explicit(42))]
        );
    }

    #[test]
    fn test_call_stack_dump_routes_to_call_stack_collaborator() {
        let dumper = RecordingDumper::default();
        let router = KernelDebugRouter::with_gate(true, &dumper);

        router.request_debug_action(1, u64::MAX, 0, 0);
        router.request_debug_action(1, 1234, 0, 0);

        assert_eq!(
            *dumper.calls.borrow(),
            [
                DumpCall::CallStack(ThreadSelector::Current),
                DumpCall::CallStack(ThreadSelector::Explicit(1234)),
            ]
        );
    }

    #[test]
    fn test_unrecognized_kind_is_inert() {
        let dumper = RecordingDumper::default();
        let router = KernelDebugRouter::with_gate(true, &dumper);

        for kind in [2, 3, 0x7fff_ffff, u32::MAX] {
            router.request_debug_action(kind, u64::MAX, u64::MAX, u64::MAX);
        }

        assert!(dumper.calls.borrow().is_empty());
    }

    #[test]
    fn test_gate_off_interprets_nothing() {
        let dumper = RecordingDumper::default();
        let router = KernelDebugRouter::with_gate(false, &dumper);

        router.request_debug_action(0, u64::MAX, 0, 0);
        router.request_debug_action(1, 42, 0, 0);
        router.request_debug_action(u32::MAX, u64::MAX, u64::MAX, u64::MAX);

        assert!(dumper.calls.borrow().is_empty());
    }
}
