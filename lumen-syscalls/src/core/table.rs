//! Per-ABI system call tables
//!
//! The trap entry selects a table by caller convention and indexes it by slot
//! number. Both conventions carry the same logical slots; a handler pair
//! registered at the same slot in both tables must behave identically.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;

use lumen_api::{Error, Result};

use super::traits::SyscallHandler;

/// Caller calling convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Abi {
    /// Native 64-bit callers
    Native64,
    /// Compatibility-width (32-bit) callers; arguments are already
    /// normalized to 64 bits by the trap entry
    Compat32,
}

/// System call dispatch table for one calling convention
pub struct SyscallTable {
    abi: Abi,
    /// Registered system call handlers, keyed by slot number
    handlers: BTreeMap<u32, Box<dyn SyscallHandler>>,
}

impl SyscallTable {
    /// Create an empty table for the given convention
    pub fn new(abi: Abi) -> Self {
        Self {
            abi,
            handlers: BTreeMap::new(),
        }
    }

    /// The convention this table serves
    pub fn abi(&self) -> Abi {
        self.abi
    }

    /// Register a handler at a slot
    ///
    /// Slots are part of the syscall ABI; registering over an occupied slot
    /// is a wiring bug, not a runtime condition, and is rejected.
    pub fn register(&mut self, slot: u32, handler: Box<dyn SyscallHandler>) -> Result<()> {
        if self.handlers.contains_key(&slot) {
            return Err(Error::AlreadyExists("syscall slot already registered"));
        }
        self.handlers.insert(slot, handler);
        Ok(())
    }

    /// Look up the handler registered at a slot
    pub fn handler(&self, slot: u32) -> Option<&dyn SyscallHandler> {
        self.handlers.get(&slot).map(|h| h.as_ref())
    }

    /// Dispatch a system call
    ///
    /// An unpopulated slot is inert: nothing is invoked and nothing is
    /// reported to the caller.
    pub fn dispatch(&self, slot: u32, args: &[u64]) {
        match self.handlers.get(&slot) {
            Some(handler) => {
                crate::svc_trace!("syscall {:#x} ({}) dispatched", slot, handler.name());
                handler.handle(args);
            }
            None => {
                crate::svc_debug!("syscall {:#x}: no handler, ignored", slot);
            }
        }
    }
}
