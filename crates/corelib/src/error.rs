//! Error types for the core library.

use crate::id::ReplicaId;
use std::fmt;

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core library.
///
/// All of these are usage errors surfaced eagerly by input validation;
/// once validation passes, ranking cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The replica set was empty
    EmptyReplicas,
    /// The same replica identifier appeared more than once in the input
    DuplicateReplica(ReplicaId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyReplicas => write!(f, "replica set is empty"),
            Error::DuplicateReplica(id) => write!(f, "duplicate replica id: {}", id),
        }
    }
}

impl std::error::Error for Error {}
