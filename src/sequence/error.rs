//! Sequence error type.

use std::convert::Infallible;

use thiserror::Error;

/// Failure of a single-element sequence operation.
///
/// `E` is the error type of the caller-supplied callback, if the operation
/// takes one. Operations without a callback use the default `Infallible`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError<E = Infallible> {
    /// Index at or past the end of the sequence.
    #[error("out of sequence bounds (length={length}, index={index})")]
    OutOfRange {
        /// Length of the sequence.
        length: usize,
        /// Requested index.
        index: usize,
    },
    /// Patch window reaching the end of the sequence.
    #[error("out of sequence bounds (length={length}, index={index}, amount={amount})")]
    PatchOutOfRange {
        /// Length of the sequence.
        length: usize,
        /// Start of the patch.
        index: usize,
        /// Number of slots to patch.
        amount: usize,
    },
    /// No element satisfied the search predicate.
    #[error("no element matched the predicate")]
    NotFound,
    /// The callback failed.
    #[error("{0}")]
    Callback(E),
}

impl<E> SeqError<E> {
    /// Returns `true` for the index errors.
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::PatchOutOfRange { .. })
    }

    /// Returns the callback error, if this is one.
    pub fn into_callback(self) -> Option<E> {
        match self {
            Self::Callback(error) => Some(error),
            _ => None,
        }
    }
}

impl SeqError {
    /// Re-types an error raised by an operation without a callback.
    pub fn widen<E>(self) -> SeqError<E> {
        match self {
            Self::OutOfRange { length, index } => SeqError::OutOfRange { length, index },
            Self::PatchOutOfRange {
                length,
                index,
                amount,
            } => SeqError::PatchOutOfRange {
                length,
                index,
                amount,
            },
            Self::NotFound => SeqError::NotFound,
            Self::Callback(never) => match never {},
        }
    }
}
