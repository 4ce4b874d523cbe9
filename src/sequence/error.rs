//! Error types for sequence operations.

use thiserror::Error;

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Errors returned by explicitly indexed sequence operations.
///
/// Cursor-relative operations never fail; an empty sequence, a full backing
/// store or a missing current element are ordinary branches, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The requested index is not below the number of live elements.
    #[error("Index {index} out of bounds for sequence of length {length}.")]
    IndexOutOfBounds { index: usize, length: usize },
}
