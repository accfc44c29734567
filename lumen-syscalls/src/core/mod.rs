//! Core syscall infrastructure
//!
//! This module provides common system call infrastructure: the handler trait
//! and the per-ABI dispatch tables the trap entry indexes into.

pub mod traits;

#[cfg(feature = "alloc")]
pub mod table;

pub use traits::SyscallHandler;

#[cfg(feature = "alloc")]
pub use table::{Abi, SyscallTable};
