//! Kernel debug facility
//!
//! The privileged-call boundary for the kernel's debug tooling. A debug
//! request reaches this module from the trap entry through one of four ABI
//! entry points (two operations, two calling conventions) and is routed to
//! one of two sub-facilities:
//!
//! - [`router`]: execution-state introspection, dumping a thread or its
//!   call stack via the [`ThreadDumper`](lumen_api::ThreadDumper)
//!   collaborator;
//! - [`trace`]: trace-capture control, pausing and resuming kernel event
//!   recording via the [`TraceRecorder`](lumen_api::TraceRecorder)
//!   collaborator.
//!
//! Every operation is fire-and-forget: nothing is returned to the caller on
//! any path, unrecognized tags are inert, and with the
//! `debug_instrumentation` feature off the whole surface is a guaranteed
//! no-op. All operations run synchronously on the calling thread and return
//! before the trap returns to user mode.

pub mod abi;
pub mod router;
pub mod trace;

pub use abi::{
    DebugFacility, SVC_KERNEL_DEBUG, SVC_SET_KERNEL_TRACE_STATE, init_debug_facility,
    kernel_debug_64, kernel_debug_64_from_32, set_kernel_trace_state_64,
    set_kernel_trace_state_64_from_32,
};
#[cfg(feature = "alloc")]
pub use abi::register_handlers;
pub use router::KernelDebugRouter;
pub use trace::TraceStateController;
