//! System call traits
//!
//! This module provides common traits for system calls.

/// System call handler trait
///
/// The debug surface exposes only fire-and-forget operations, so handling
/// takes the raw argument words and returns nothing. Nothing is ever
/// surfaced to the caller, on any path.
pub trait SyscallHandler: Send + Sync {
    /// Execute the system call
    fn handle(&self, args: &[u64]);

    /// Get the system call name
    fn name(&self) -> &str;

    /// Get the system call slot number
    fn id(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestHandler {
        name: &'static str,
        id: u32,
    }

    impl SyscallHandler for TestHandler {
        fn handle(&self, _args: &[u64]) {}

        fn name(&self) -> &str {
            self.name
        }

        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn test_syscall_handler() {
        let handler = TestHandler {
            name: "test",
            id: 0x3c,
        };

        assert_eq!(handler.name(), "test");
        assert_eq!(handler.id(), 0x3c);
    }
}
