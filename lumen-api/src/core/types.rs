//! Core types used throughout the Lumen kernel

use static_assertions::const_assert;

/// Process identifier type
pub type Pid = u32;

/// Thread identifier type
///
/// Thread identifiers travel through the syscall ABI as full 64-bit values.
/// The allocator that owns thread identity hands them out from
/// `0..THREAD_ID_LIMIT`, which keeps the upper range free for reserved
/// encodings such as [`CURRENT_THREAD`].
pub type ThreadId = u64;

/// Upper bound (exclusive) of the thread identifier space.
pub const THREAD_ID_LIMIT: ThreadId = 1 << 48;

/// Reserved selector value meaning "the calling thread".
///
/// The all-ones bit pattern is fixed by the syscall ABI and must never
/// collide with an allocated [`ThreadId`].
pub const CURRENT_THREAD: u64 = u64::MAX;

// The sentinel lives strictly outside the identifier space.
const_assert!(THREAD_ID_LIMIT < CURRENT_THREAD);

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, crate::error::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_thread_is_all_ones() {
        assert_eq!(CURRENT_THREAD, 0xFFFF_FFFF_FFFF_FFFF);
    }
}
