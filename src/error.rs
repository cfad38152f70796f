//! Error handling for chain operations.
//!
//! This module defines the error type returned by the controller façade and
//! a Result alias for use throughout the crate.
//!
//! Only *domain* conditions are represented here: situations an operation
//! can legitimately report, like peeking at an empty channel. Protocol
//! misuse (message-shape mismatch, invalid channel indices, sending on a
//! busy connector) is a programmer error and panics inside the offending
//! thread instead of surfacing as an `Err`.

use crate::types::{ChannelId, Word};
use thiserror::Error;

/// Domain errors reported by chain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The operation requires a non-empty channel.
    #[error("channel {channel} is empty")]
    Empty {
        /// Channel the operation was issued on.
        channel: ChannelId,
    },

    /// The requested index lies past the end of the channel contents.
    #[error("index {index} is out of range on channel {channel}")]
    IndexOutOfRange {
        /// Channel the operation was issued on.
        channel: ChannelId,
        /// The offending index.
        index: Word,
    },

    /// The requested word does not occur in the channel contents.
    #[error("word {word} not found on channel {channel}")]
    NotFound {
        /// Channel the operation was issued on.
        channel: ChannelId,
        /// The word that was searched for.
        word: Word,
    },
}

/// Result type alias for chain operations.
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ChainError::Empty { channel: 1 };
        assert_eq!(err.to_string(), "channel 1 is empty");

        let err = ChainError::IndexOutOfRange { channel: 0, index: 5 };
        assert_eq!(err.to_string(), "index 5 is out of range on channel 0");

        let err = ChainError::NotFound { channel: 2, word: 9 };
        assert_eq!(err.to_string(), "word 9 not found on channel 2");
    }
}
