//! Debug facility interface definitions
//!
//! Tag sets, the thread selector encoding, and the collaborator interfaces
//! behind the kernel debug syscall surface. The syscall layer depends only on
//! the abstractions defined here; the thread-state dump renderer and the
//! trace recorder live elsewhere in the kernel and implement these traits.

pub mod interface;
pub mod types;

pub use interface::{ThreadDumper, TraceRecorder};
pub use types::{DebugOperation, ThreadSelector, TraceCommand};
