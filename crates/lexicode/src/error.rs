//! # Error Types

use thiserror::Error;

/// Result alias for fallible lexicode operations.
pub type LcResult<T> = Result<T, LexicodeError>;

/// Error taxonomy for the lexicode crates.
///
/// Unresolved values during decoding are deliberately absent: the decoder
/// degrades them to a visible bracketed literal and keeps going.
#[derive(Debug, Error)]
pub enum LexicodeError {
    /// Underlying file or stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A binary dictionary record could not be read back whole.
    #[error("corrupt dictionary: {reason}")]
    CorruptDictionary {
        /// What the reader was expecting when the record ran out.
        reason: String,
    },

    /// The vocabulary reached its distinct-word capacity.
    #[error("dictionary full: capacity of {capacity} distinct words reached")]
    DictionaryFull {
        /// The configured capacity limit.
        capacity: usize,
    },

    /// A word exceeded the vocabulary's byte-length limit.
    #[error("word of {len} bytes exceeds the {max} byte limit")]
    WordTooLong {
        /// Length of the offending word.
        len: usize,
        /// The configured limit.
        max: usize,
    },

    /// A value does not fit in the representable range.
    #[error("value {value} exceeds the representable limit {limit}")]
    OutOfRange {
        /// The offending value.
        value: u64,
        /// The largest representable value.
        limit: u64,
    },
}

impl LexicodeError {
    /// Shorthand for a [`LexicodeError::CorruptDictionary`].
    pub fn corrupt<S: Into<String>>(reason: S) -> Self {
        Self::CorruptDictionary {
            reason: reason.into(),
        }
    }
}
