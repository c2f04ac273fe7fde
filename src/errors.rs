use thiserror::Error;

/// Shorthand for the result of a fallible [`Sequence`](crate::Sequence) operation.
pub type Result<T,> = std::result::Result<T, SequenceError,>;

/// Errors returned by [`Sequence`](crate::Sequence) operations.
///
/// A failed operation never modifies the sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq,)]
pub enum SequenceError {
    /// An end of the sequence was requested but it holds no values.
    #[error("the sequence is empty")]
    Empty,
    /// The index does not refer to a valid position for the operation.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The index that was passed.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },
}
