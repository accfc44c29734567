//! Debug syscall tag and selector types
//!
//! Raw tags arrive from user mode as small integers and are decoded exactly
//! once at the syscall boundary. Decoding is total: every bit pattern maps to
//! a variant, unrecognized values landing in an explicit catch-all. This is a
//! deliberate tolerance-of-unknown-input policy, not a validation gap.

use static_assertions::const_assert_eq;

use crate::core::types::{CURRENT_THREAD, ThreadId};

/// Raw tag value selecting a thread-state dump.
pub const DEBUG_OP_THREAD: u32 = 0;

/// Raw tag value selecting a thread call-stack dump.
pub const DEBUG_OP_THREAD_CALL_STACK: u32 = 1;

/// Raw tag value requesting trace capture pause.
pub const TRACE_CMD_DISABLE: u32 = 0;

/// Raw tag value requesting trace capture resume.
pub const TRACE_CMD_ENABLE: u32 = 1;

// Tag values are part of the syscall ABI and must not drift.
const_assert_eq!(DEBUG_OP_THREAD, 0);
const_assert_eq!(DEBUG_OP_THREAD_CALL_STACK, 1);
const_assert_eq!(TRACE_CMD_DISABLE, 0);
const_assert_eq!(TRACE_CMD_ENABLE, 1);

/// Debug operation tag
///
/// Closed tag set for the kernel debug syscall. Passed by value per call; no
/// persistent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugOperation {
    /// Dump the state of a thread
    ThreadDump,
    /// Dump the call stack of a thread
    ThreadCallStackDump,
    /// Any other tag value; defined as inert
    Unrecognized(u32),
}

impl DebugOperation {
    /// Decodes a raw tag. Total over `u32`; never faults.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            DEBUG_OP_THREAD => DebugOperation::ThreadDump,
            DEBUG_OP_THREAD_CALL_STACK => DebugOperation::ThreadCallStackDump,
            other => DebugOperation::Unrecognized(other),
        }
    }
}

/// Trace capture command tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceCommand {
    /// Pause trace capture
    Disable,
    /// Resume trace capture
    Enable,
    /// Any other tag value; defined as inert
    Unrecognized(u32),
}

impl TraceCommand {
    /// Decodes a raw tag. Total over `u32`; never faults.
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            TRACE_CMD_DISABLE => TraceCommand::Disable,
            TRACE_CMD_ENABLE => TraceCommand::Enable,
            other => TraceCommand::Unrecognized(other),
        }
    }
}

/// Target of a thread introspection request
///
/// Decoded once from the raw 64-bit syscall argument: the reserved all-ones
/// sentinel ([`CURRENT_THREAD`]) denotes the calling thread, any other value
/// an explicit identifier. Downstream code never re-inspects the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadSelector {
    /// The calling thread
    Current,
    /// An explicit thread identifier, passed through uninterpreted
    Explicit(ThreadId),
}

impl ThreadSelector {
    /// Resolves the raw selector argument. Total over `u64`.
    ///
    /// Identifier validity is not checked here; a value that does not name a
    /// live thread is the dump collaborator's problem.
    pub fn from_raw(raw: u64) -> Self {
        if raw == CURRENT_THREAD {
            ThreadSelector::Current
        } else {
            ThreadSelector::Explicit(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_operation_decode() {
        assert_eq!(DebugOperation::from_raw(0), DebugOperation::ThreadDump);
        assert_eq!(
            DebugOperation::from_raw(1),
            DebugOperation::ThreadCallStackDump
        );
        assert_eq!(
            DebugOperation::from_raw(7),
            DebugOperation::Unrecognized(7)
        );
        assert_eq!(
            DebugOperation::from_raw(u32::MAX),
            DebugOperation::Unrecognized(u32::MAX)
        );
    }

    #[test]
    fn test_trace_command_decode() {
        assert_eq!(TraceCommand::from_raw(0), TraceCommand::Disable);
        assert_eq!(TraceCommand::from_raw(1), TraceCommand::Enable);
        assert_eq!(TraceCommand::from_raw(2), TraceCommand::Unrecognized(2));
    }

    #[test]
    fn test_selector_sentinel() {
        assert_eq!(ThreadSelector::from_raw(u64::MAX), ThreadSelector::Current);
        assert_eq!(
            ThreadSelector::from_raw(42),
            ThreadSelector::Explicit(42)
        );
        assert_eq!(ThreadSelector::from_raw(0), ThreadSelector::Explicit(0));
        // One below the sentinel is still an explicit identifier.
        assert_eq!(
            ThreadSelector::from_raw(u64::MAX - 1),
            ThreadSelector::Explicit(u64::MAX - 1)
        );
    }
}
