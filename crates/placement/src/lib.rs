//! Replica placement for rendezvous hashing.
//!
//! This crate turns a ranking into a placement decision:
//! - How many replicas should hold a piece of content (redundancy policies)
//! - Which replicas those are, and in what fallback order (selection)
//!
//! Like the core, everything is a pure function of its inputs.

pub mod error;
pub mod policy;
pub mod select;

pub use error::PlacementError;
pub use policy::{FixedRedundancy, LogRedundancy, RedundancyPolicy};
pub use select::{calculate_k, choose, choose_default, choose_with, Selection};

/// Result type alias for placement operations.
pub type Result<T> = std::result::Result<T, PlacementError>;
