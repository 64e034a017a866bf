//! Harness error types
//!
//! Every failure in this harness ultimately terminates in a human-readable
//! status line on the console; these enums give the intermediate layers a
//! typed result to propagate with `?` before the client actor renders them.

use std::io;

use thiserror::Error;

/// Errors surfaced by [`crate::client::ProbeClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Read/Write issued while the client is not connected. No I/O happens.
    #[error("{op} Request but no connection")]
    NotConnected { op: &'static str },

    /// Read byte count below the lower bound. No I/O happens.
    #[error("Error in read command: byte count must be at least 1")]
    InvalidByteCount,

    /// Read byte count above the configured bound. No I/O happens.
    #[error("Too many bytes requested ({requested} > {max})")]
    TooManyBytes { requested: usize, max: usize },

    /// Resolve, connect, or transfer failure. The connection (if any) is
    /// dropped and the state transitions to `Disconnected`.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// Precondition errors are rejected before any I/O is issued and leave
    /// the connection state untouched.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotConnected { .. } | Self::InvalidByteCount | Self::TooManyBytes { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_classification() {
        assert!(ClientError::NotConnected { op: "Read" }.is_precondition());
        assert!(ClientError::InvalidByteCount.is_precondition());
        assert!(ClientError::TooManyBytes {
            requested: 99999,
            max: 1024,
        }
        .is_precondition());
        assert!(!ClientError::Io(io::Error::other("boom")).is_precondition());
    }

    #[test]
    fn status_line_texts() {
        assert_eq!(
            ClientError::NotConnected { op: "Read" }.to_string(),
            "Read Request but no connection"
        );
        assert_eq!(
            ClientError::TooManyBytes {
                requested: 99999,
                max: 1024,
            }
            .to_string(),
            "Too many bytes requested (99999 > 1024)"
        );
    }
}
