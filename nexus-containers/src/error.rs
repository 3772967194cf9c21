//! Error types shared by all containers.

use thiserror::Error;

/// Result alias used by fallible container operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Failure of a container operation.
///
/// A failed operation never partially modifies the container: the state
/// observed after an `Err` is the state before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A positional argument is outside the range the operation accepts.
    ///
    /// Insertion accepts `[0, len]`, reads and deletes accept `[0, len)`,
    /// and [`DynArray::put`](crate::DynArray::put) accepts `[0, capacity)`.
    /// `len` is the exclusive upper bound that was violated.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Exclusive upper bound at the time of the call.
        len: usize,
    },

    /// An iterator was advanced past its last element.
    #[error("no such element")]
    NoSuchElement,

    /// The operation is not supported by this container.
    #[error("unsupported operation")]
    UnsupportedOperation,

    /// No node holds the requested value.
    #[error("value {0} not found")]
    NotFound(i32),

    /// The backing storage shrank below a live cursor's position.
    #[error("container modified during iteration")]
    ConcurrentModification,

    /// A constructor was given an absent input sequence.
    #[error("input sequence is absent")]
    NullInput,

    /// The operation requires at least one element.
    #[error("list is empty")]
    EmptyList,
}

impl Error {
    /// Checks `index < len`, the bound for reads and deletes.
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, len })
        }
    }

    /// Checks `index <= len`, the bound for insertion.
    #[inline]
    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: len + 1,
            })
        }
    }
}
