//! Error handling module for the Lumen kernel

use core::fmt;

/// Common error type used throughout the Lumen kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument
    InvalidArgument(&'static str),
    /// Invalid state
    InvalidState(&'static str),
    /// Resource not found
    NotFound(&'static str),
    /// Resource already exists
    AlreadyExists(&'static str),
    /// Not implemented
    NotImplemented(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            Error::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
        }
    }
}

/// Result type for operations that can fail
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    // Fixed-buffer writer; Display must work without alloc.
    struct Buf {
        data: [u8; 64],
        len: usize,
    }

    impl Write for Buf {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            let end = self.len + s.len();
            self.data[self.len..end].copy_from_slice(s.as_bytes());
            self.len = end;
            Ok(())
        }
    }

    #[test]
    fn test_error_display() {
        let mut buf = Buf {
            data: [0; 64],
            len: 0,
        };
        write!(buf, "{}", Error::AlreadyExists("slot 0x3c")).unwrap();
        assert_eq!(&buf.data[..buf.len], b"Already exists: slot 0x3c");
    }
}
