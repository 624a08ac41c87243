//! Total-order ranking of a replica set.
//!
//! Ranking is the primary artifact of rendezvous hashing: every replica in
//! the input appears exactly once, ordered by descending weight for the
//! given content identifier. Any two callers with the same replica set
//! compute the same ranking, regardless of how they ordered their input.

use crate::digest::{HashFunction, Sha256};
use crate::error::{Error, Result};
use crate::id::ReplicaId;
use crate::weight::Weight;
use std::collections::HashSet;

/// Validates a replica set: non-empty, no duplicate identifiers.
///
/// Shared by every public operation that takes a replica set; validation
/// is eager so nothing downstream can fail.
pub fn validate_replicas(replicas: &[ReplicaId]) -> Result<()> {
    if replicas.is_empty() {
        return Err(Error::EmptyReplicas);
    }
    let mut seen = HashSet::with_capacity(replicas.len());
    for replica in replicas {
        if !seen.insert(replica.as_bytes()) {
            return Err(Error::DuplicateReplica(replica.clone()));
        }
    }
    Ok(())
}

/// Ranks `replicas` for `content` by descending weight.
///
/// Weight ties (possible in principle, astronomically rare with a
/// collision-resistant digest) are broken by ascending lexicographic
/// comparison of the raw replica identifier bytes, so the ranking is a
/// fully deterministic permutation of the input.
///
/// # Errors
///
/// `Error::EmptyReplicas` if the set is empty, `Error::DuplicateReplica`
/// if an identifier appears twice.
///
/// # Performance
///
/// O(n) digest evaluations plus O(n log n) comparisons. Weights carry no
/// data dependency on each other; callers ranking very large sets can
/// parallelize above this layer.
pub fn rank<H: HashFunction + ?Sized>(
    content: &[u8],
    replicas: &[ReplicaId],
    hash: &H,
) -> Result<Vec<ReplicaId>> {
    validate_replicas(replicas)?;

    let mut weighted: Vec<(Weight, &ReplicaId)> = replicas
        .iter()
        .map(|replica| (Weight::of(content, replica, hash), replica))
        .collect();

    weighted.sort_unstable_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    Ok(weighted.into_iter().map(|(_, r)| r.clone()).collect())
}

/// Ranks `replicas` for `content` with the default SHA-256 digest.
pub fn rank_default(content: &[u8], replicas: &[ReplicaId]) -> Result<Vec<ReplicaId>> {
    rank(content, replicas, &Sha256)
}
