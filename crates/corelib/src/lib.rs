//! Core library for rendezvous (highest-random-weight) hashing.
//!
//! This crate provides the fundamental abstractions for rendezvous hashing:
//! - Replica identifiers
//! - Pluggable digest functions
//! - Per-replica weights
//! - Total-order ranking of a replica set for a content identifier
//!
//! Everything here is a pure function of its inputs: no shared state, no
//! I/O, no configuration beyond the digest function passed into each call.

pub mod digest;
pub mod error;
pub mod id;
pub mod rank;
pub mod weight;

pub use digest::{HashFunction, Sha256};
pub use error::{Error, Result};
pub use id::ReplicaId;
pub use rank::{rank, rank_default, validate_replicas};
pub use weight::Weight;
