//! Error types for eddy.

use std::fmt;
use std::io;

/// Result type alias for eddy operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for eddy operations.
///
/// Every variant is fatal: the caller clears the screen, restores the
/// terminal and exits. Timeouts and short escape sequences never surface here.
#[derive(Debug)]
pub enum Error {
    /// I/O error from terminal output.
    Io(io::Error),
    /// A named terminal call failed (`tcgetattr`, `tcsetattr`, `read`, ...).
    Terminal {
        op: &'static str,
        source: io::Error,
    },
    /// The reply to a cursor position request was not `ESC [ row ; col R`.
    CursorReport(Vec<u8>),
}

impl Error {
    /// Attach the failing call name to an I/O error.
    pub(crate) fn terminal(op: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| Self::Terminal { op, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Terminal { op, source } => write!(f, "{op}: {source}"),
            Self::CursorReport(reply) => {
                write!(f, "malformed cursor position report: \"{}\"", reply.escape_ascii())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::Terminal { source: e, .. } => Some(e),
            Self::CursorReport(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::Terminal {
            op: "tcsetattr",
            source: io::Error::from_raw_os_error(libc::ENOTTY),
        };
        assert!(err.to_string().starts_with("tcsetattr: "));

        let err = Error::CursorReport(b"40;120".to_vec());
        assert!(err.to_string().contains("40;120"));

        let err = Error::CursorReport(vec![0x1b, b'[', b'R']);
        assert!(err.to_string().contains("\\x1b["));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_terminal_helper_keeps_op() {
        let make = Error::terminal("read");
        let err = make(io::Error::new(io::ErrorKind::Other, "boom"));
        match &err {
            Error::Terminal { op, .. } => assert_eq!(*op, "read"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(err.source().is_some());
        assert!(Error::CursorReport(Vec::new()).source().is_none());
    }
}
