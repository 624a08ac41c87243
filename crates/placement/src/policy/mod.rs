//! Redundancy policy abstractions.
//!
//! A redundancy policy decides how many replicas should hold a piece of
//! content, given only the size of the replica set. Different policies
//! optimize for different goals:
//!
//! - **LogRedundancy**: sub-linear growth, more copies for larger pools
//! - **FixedRedundancy**: a constant operator-chosen count

pub mod fixed;
pub mod log;

pub use fixed::FixedRedundancy;
pub use log::LogRedundancy;

/// Trait for redundancy policies.
///
/// A policy maps the replica-set size `n` to a redundancy count `k`. It
/// must depend on nothing but `n`, so that every node evaluating the same
/// replica set arrives at the same count without coordination.
///
/// # Contract
///
/// - `1 <= redundancy(n) <= n` for all `n >= 1`
/// - `redundancy` is non-decreasing in `n`
///
/// # Thread Safety
///
/// Implementations must be thread-safe (Send + Sync) as they may be
/// shared across threads.
pub trait RedundancyPolicy: Send + Sync {
    /// Get the redundancy count for a replica set of size `n`.
    fn redundancy(&self, n: usize) -> usize;

    /// Get the policy name (for logging/debugging).
    fn name(&self) -> &'static str;
}
