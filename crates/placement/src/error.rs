//! Error types for placement operations.

use thiserror::Error;

/// Errors that can occur when selecting replicas.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Replica-set validation failed in the core library
    #[error(transparent)]
    Core(#[from] corelib::Error),

    /// Explicit redundancy count outside `1..=n`
    #[error("redundancy count {k} out of range for {n} replicas")]
    KOutOfRange { k: usize, n: usize },
}
