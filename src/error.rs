//! Errors reported by [`ArrayList`](crate::ArrayList) and its iterator.
//!
//! Every failing call leaves the list exactly as it was before the call:
//! checks happen before any element is moved.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ListError> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A positional operation received an index outside its valid range.
    ///
    /// For `get`, `set` and `remove` the range is `0..len`; for `insert` it is
    /// `0..=len`.
    #[error("index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The operation needs at least one element.
    #[error("list is empty")]
    Empty,

    /// The value (or insertion target) is not present in the list.
    #[error("element not found")]
    NotFound,

    /// The list was structurally modified after the iterator took its snapshot.
    #[error("list modified during iteration (expected modification count {expected}, found {actual})")]
    ConcurrentModification { expected: u64, actual: u64 },

    /// `Iter::remove` was called without a preceding successful `next`.
    #[error("no element eligible for removal; call next() first")]
    IllegalState,

    /// `Iter::try_next` was called after the last element.
    #[error("iterator exhausted")]
    Exhausted,

    /// The requested capability is not implemented by this list.
    #[error("{0} is not supported")]
    Unsupported(&'static str),

    /// The list's storage is borrowed through a `Ref` returned by the list.
    #[error("list storage is currently borrowed")]
    Borrowed,

    /// The iterator outlived the list it was created from.
    #[error("list was dropped while an iterator was still alive")]
    Detached,
}

impl ListError {
    /// Whether this error comes from the fail-fast check.
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, ListError::ConcurrentModification { .. })
    }
}
