//! Error type shared by every container in this crate.

use std::collections::TryReserveError;
use std::fmt;

/// Error type for container operations
///
/// There are exactly two failure modes in this crate: asking a container for
/// an element it does not have, and failing to obtain memory while growing an
/// array-backed container. Every other operation is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The container has no elements to remove or inspect
    Empty,
    /// Growing the backing storage could not obtain memory
    Allocation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "container is empty"),
            Error::Allocation => write!(f, "unable to allocate backing storage"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Error {
        Error::Allocation
    }
}
