//! Error type for fallible list operations

use thiserror::Error;

/// Errors returned by index-based [`TodoList`](crate::TodoList) operations
///
/// Bounds are checked before any mutation, so a failed call leaves the
/// list exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TodoError {
    /// The supplied index is outside `[0, len)`
    #[error("index {index} is out of bounds for a list of {len} item(s)")]
    OutOfBounds {
        /// The index that was requested
        index: usize,
        /// The list length at the time of the call
        len: usize,
    },
}
