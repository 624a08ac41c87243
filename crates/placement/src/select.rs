//! Chosen/fallback selection.
//!
//! Selection slices the full ranking into a chosen prefix (the replicas
//! that should hold the content) and a remaining suffix (the ordered
//! fallback list to try when chosen replicas are unreachable).

use crate::error::PlacementError;
use crate::policy::{LogRedundancy, RedundancyPolicy};
use crate::Result;
use corelib::digest::{HashFunction, Sha256};
use corelib::{rank, validate_replicas, ReplicaId};
use serde::{Deserialize, Serialize};

/// Result of selecting replicas for a piece of content.
///
/// `chosen` holds the top-`k` replicas in descending-weight order;
/// `remaining` holds every other replica, also in descending-weight order.
/// Together they are a partition of the input replica set.
///
/// The library never shuffles `chosen`: determinism is the contract.
/// Callers that spread read load across the chosen replicas should shuffle
/// on their side before dispatching requests; `remaining` must be tried in
/// the order given.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Selection {
    /// Replicas that should hold the content, highest weight first.
    pub chosen: Vec<ReplicaId>,
    /// Ordered fallback replicas, highest weight first.
    pub remaining: Vec<ReplicaId>,
}

impl Selection {
    /// Total number of replicas in the selection.
    pub fn len(&self) -> usize {
        self.chosen.len() + self.remaining.len()
    }

    /// True if the selection holds no replicas.
    ///
    /// Cannot occur for a selection produced by `choose`; validation
    /// rejects empty replica sets.
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty() && self.remaining.is_empty()
    }
}

/// Selects `k` replicas for `content`, with the rest as ordered fallback.
///
/// Computes the full ranking and splits it at `k`.
///
/// # Errors
///
/// Validation errors from the core (empty set, duplicate identifier), or
/// `PlacementError::KOutOfRange` unless `1 <= k <= n`.
pub fn choose<H: HashFunction + ?Sized>(
    content: &[u8],
    replicas: &[ReplicaId],
    k: usize,
    hash: &H,
) -> Result<Selection> {
    let n = replicas.len();
    validate_replicas(replicas)?;
    if k < 1 || k > n {
        return Err(PlacementError::KOutOfRange { k, n });
    }

    let mut chosen = rank(content, replicas, hash)?;
    let remaining = chosen.split_off(k);
    Ok(Selection { chosen, remaining })
}

/// Selects replicas with `k` taken from a redundancy policy.
pub fn choose_with<H, P>(
    content: &[u8],
    replicas: &[ReplicaId],
    policy: &P,
    hash: &H,
) -> Result<Selection>
where
    H: HashFunction + ?Sized,
    P: RedundancyPolicy + ?Sized,
{
    let k = policy.redundancy(replicas.len());
    choose(content, replicas, k, hash)
}

/// Selects replicas with the default digest (SHA-256) and the default
/// redundancy policy.
pub fn choose_default(content: &[u8], replicas: &[ReplicaId]) -> Result<Selection> {
    choose_with(content, replicas, &LogRedundancy, &Sha256)
}

/// Computes the default redundancy count for a replica set.
///
/// Validates the set the same way `rank` does, then applies the default
/// policy. The count depends only on the set size, never on content or on
/// specific replica identities.
pub fn calculate_k(replicas: &[ReplicaId]) -> Result<usize> {
    validate_replicas(replicas)?;
    Ok(LogRedundancy.redundancy(replicas.len()))
}
