//! Runtime Error Handling
//!
//! Reads never fail: out-of-range and unset lookups resolve to absent
//! (`None`). The conditions below are the ones surfaced to callers.
//!
//! Errors raised by a caller-supplied callback are not represented here.
//! The fallible operations are generic over the callback's error type and
//! hand it back unmodified.

/// Error raised by the sequence runtime
#[derive(Debug, Clone, PartialEq)]
pub enum SeqError {
    /// `join` was given a separator that is not a string (carries the type name)
    SeparatorNotString(String),
    /// A dynamic operand expected to be a sequence was not
    NotASequence(String),
    /// A dynamic index operand was not an integer
    NotAnIndex(String),
    /// Assignment beyond the addressable range
    IndexTooLarge(u64),
    /// Growing a sequence to this many slots failed to allocate
    CapacityExceeded(u64),
    /// A sequence literal could not be parsed
    Literal(String),
    /// Snapshot encoding or decoding failed
    Snapshot(String),
}

impl std::fmt::Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqError::SeparatorNotString(ty) => {
                write!(f, "join: separator must be a string, got {}", ty)
            }
            SeqError::NotASequence(ty) => write!(f, "expected a sequence, got {}", ty),
            SeqError::NotAnIndex(found) => write!(f, "expected an integer index, got {}", found),
            SeqError::IndexTooLarge(index) => {
                write!(f, "index {} exceeds the maximum sequence length", index)
            }
            SeqError::CapacityExceeded(slots) => {
                write!(f, "cannot allocate a sequence of {} slots", slots)
            }
            SeqError::Literal(msg) => write!(f, "invalid literal: {}", msg),
            SeqError::Snapshot(msg) => write!(f, "snapshot error: {}", msg),
        }
    }
}

impl std::error::Error for SeqError {}
