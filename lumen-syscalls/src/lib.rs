//! Lumen System Calls
//!
//! This crate provides the privileged debug call surface of the Lumen kernel:
//! the syscall-facing boundary that receives a debug request from the trap
//! entry and routes it to execution-state introspection (thread and call
//! stack dumps) or trace-capture control (pausing and resuming kernel event
//! recording).
//!
//! # Architecture
//!
//! - **Core**: Syscall handler trait and per-ABI dispatch tables
//! - **Debug**: Request routing, trace-state control, and the four ABI entry
//!   points (64-bit and 64-from-32 conventions)
//!
//! Only a small fixed set of operation tags is recognized; everything else is
//! defined as inert. The whole surface collapses to a no-op when the
//! `debug_instrumentation` feature is off.
//!
//! # Usage
//!
//! ```ignore
//! // During kernel bring-up, after the dumper and recorder exist:
//! lumen_syscalls::debug::init_debug_facility(&DUMPER, &RECORDER);
//! lumen_syscalls::debug::register_handlers(&mut table)?;
//! ```

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod core;
pub mod debug;
pub mod logging;

// Re-export commonly used items
#[cfg(feature = "alloc")]
pub use crate::core::{Abi, SyscallTable};
pub use crate::core::SyscallHandler;
pub use crate::debug::{DebugFacility, KernelDebugRouter, TraceStateController};

/// Whether the kernel debug syscall surface is compiled in.
///
/// Resolved at build time from the `debug_instrumentation` feature. When
/// `false`, every entry point in [`debug`] returns immediately without
/// interpreting its arguments or touching a collaborator.
pub const DEBUG_INSTRUMENTATION: bool = cfg!(feature = "debug_instrumentation");
