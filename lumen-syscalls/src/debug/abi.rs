//! ABI entry points and dispatch-table wiring
//!
//! Two entry-point pairs, one per calling convention (native 64-bit and
//! 64-from-32 compatibility). Each entry point does nothing of its own
//! beyond forwarding its arguments unmodified to the common handler, so for
//! fixed arguments both conventions produce identical collaborator calls.
//! Narrow-to-wide argument normalization happens at the trap entry, before
//! this layer runs.

use spin::Once;
use static_assertions::const_assert;

use lumen_api::{ThreadDumper, TraceRecorder};

use super::router::KernelDebugRouter;
use super::trace::TraceStateController;

/// Syscall slot of the kernel debug operation
pub const SVC_KERNEL_DEBUG: u32 = 0x3c;

/// Syscall slot of the trace state operation
pub const SVC_SET_KERNEL_TRACE_STATE: u32 = 0x3d;

// Slots live in the 7-bit svc number space and must stay distinct.
const_assert!(SVC_KERNEL_DEBUG < 0x80);
const_assert!(SVC_SET_KERNEL_TRACE_STATE < 0x80);
const_assert!(SVC_KERNEL_DEBUG != SVC_SET_KERNEL_TRACE_STATE);

/// The kernel debug facility behind the four entry points
///
/// Groups the router and the trace controller so both conventions share one
/// set of collaborators.
pub struct DebugFacility<'a> {
    router: KernelDebugRouter<'a>,
    trace: TraceStateController<'a>,
}

impl<'a> DebugFacility<'a> {
    /// Create a facility gated by the build configuration
    pub fn new(dumper: &'a dyn ThreadDumper, recorder: &'a dyn TraceRecorder) -> Self {
        Self {
            router: KernelDebugRouter::new(dumper),
            trace: TraceStateController::new(recorder),
        }
    }

    /// Create a facility with an explicit gate state (see
    /// [`KernelDebugRouter::with_gate`])
    pub fn with_gate(
        enabled: bool,
        dumper: &'a dyn ThreadDumper,
        recorder: &'a dyn TraceRecorder,
    ) -> Self {
        Self {
            router: KernelDebugRouter::with_gate(enabled, dumper),
            trace: TraceStateController::with_gate(enabled, recorder),
        }
    }

    // ---- 64-bit ABI ----

    /// `KernelDebug`, native 64-bit convention
    pub fn kernel_debug_64(&self, kind_raw: u32, arg0: u64, arg1: u64, arg2: u64) {
        self.router.request_debug_action(kind_raw, arg0, arg1, arg2);
    }

    /// `SetKernelTraceState`, native 64-bit convention
    pub fn set_kernel_trace_state_64(&self, command_raw: u32) {
        self.trace.set_trace_capture_state(command_raw);
    }

    // ---- 64-from-32 ABI ----

    /// `KernelDebug`, 64-from-32 compatibility convention
    pub fn kernel_debug_64_from_32(&self, kind_raw: u32, arg0: u64, arg1: u64, arg2: u64) {
        self.router.request_debug_action(kind_raw, arg0, arg1, arg2);
    }

    /// `SetKernelTraceState`, 64-from-32 compatibility convention
    pub fn set_kernel_trace_state_64_from_32(&self, command_raw: u32) {
        self.trace.set_trace_capture_state(command_raw);
    }
}

static FACILITY: Once<DebugFacility<'static>> = Once::new();

/// Install the debug facility collaborators
///
/// Called once during kernel bring-up, after the dump renderer and trace
/// recorder exist. A second call is ignored; before the first call every
/// entry point below is inert, consistent with the facility-wide tolerance
/// policy.
pub fn init_debug_facility(
    dumper: &'static dyn ThreadDumper,
    recorder: &'static dyn TraceRecorder,
) {
    FACILITY.call_once(|| DebugFacility::new(dumper, recorder));
}

fn facility() -> Option<&'static DebugFacility<'static>> {
    FACILITY.get()
}

/// `KernelDebug` entry point, native 64-bit convention
pub fn kernel_debug_64(kind_raw: u32, arg0: u64, arg1: u64, arg2: u64) {
    if let Some(facility) = facility() {
        facility.kernel_debug_64(kind_raw, arg0, arg1, arg2);
    }
}

/// `KernelDebug` entry point, 64-from-32 compatibility convention
pub fn kernel_debug_64_from_32(kind_raw: u32, arg0: u64, arg1: u64, arg2: u64) {
    if let Some(facility) = facility() {
        facility.kernel_debug_64_from_32(kind_raw, arg0, arg1, arg2);
    }
}

/// `SetKernelTraceState` entry point, native 64-bit convention
pub fn set_kernel_trace_state_64(command_raw: u32) {
    if let Some(facility) = facility() {
        facility.set_kernel_trace_state_64(command_raw);
    }
}

/// `SetKernelTraceState` entry point, 64-from-32 compatibility convention
pub fn set_kernel_trace_state_64_from_32(command_raw: u32) {
    if let Some(facility) = facility() {
        facility.set_kernel_trace_state_64_from_32(command_raw);
    }
}

#[cfg(feature = "alloc")]
mod registration {
    use alloc::boxed::Box;

    use lumen_api::Result;

    use crate::core::table::{Abi, SyscallTable};
    use crate::core::traits::SyscallHandler;

    use super::{SVC_KERNEL_DEBUG, SVC_SET_KERNEL_TRACE_STATE};

    /// Handler wiring a kernel debug slot to the convention-matching entry
    /// point
    struct KernelDebugHandler {
        abi: Abi,
    }

    impl SyscallHandler for KernelDebugHandler {
        fn handle(&self, args: &[u64]) {
            let kind_raw = args.first().copied().unwrap_or(0) as u32;
            let arg0 = args.get(1).copied().unwrap_or(0);
            let arg1 = args.get(2).copied().unwrap_or(0);
            let arg2 = args.get(3).copied().unwrap_or(0);
            match self.abi {
                Abi::Native64 => super::kernel_debug_64(kind_raw, arg0, arg1, arg2),
                Abi::Compat32 => super::kernel_debug_64_from_32(kind_raw, arg0, arg1, arg2),
            }
        }

        fn name(&self) -> &str {
            "kernel_debug"
        }

        fn id(&self) -> u32 {
            SVC_KERNEL_DEBUG
        }
    }

    /// Handler wiring the trace state slot to the convention-matching entry
    /// point
    struct TraceStateHandler {
        abi: Abi,
    }

    impl SyscallHandler for TraceStateHandler {
        fn handle(&self, args: &[u64]) {
            let command_raw = args.first().copied().unwrap_or(0) as u32;
            match self.abi {
                Abi::Native64 => super::set_kernel_trace_state_64(command_raw),
                Abi::Compat32 => super::set_kernel_trace_state_64_from_32(command_raw),
            }
        }

        fn name(&self) -> &str {
            "set_kernel_trace_state"
        }

        fn id(&self) -> u32 {
            SVC_SET_KERNEL_TRACE_STATE
        }
    }

    /// Register the debug facility handlers into a dispatch table
    ///
    /// Both conventions use the same logical slots; the table's ABI decides
    /// which entry points get wired.
    pub fn register_handlers(table: &mut SyscallTable) -> Result<()> {
        let abi = table.abi();
        table.register(SVC_KERNEL_DEBUG, Box::new(KernelDebugHandler { abi }))?;
        table.register(
            SVC_SET_KERNEL_TRACE_STATE,
            Box::new(TraceStateHandler { abi }),
        )?;
        Ok(())
    }
}

#[cfg(feature = "alloc")]
pub use registration::register_handlers;
