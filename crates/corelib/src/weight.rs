//! Per-replica weights.
//!
//! A weight is the digest of `content_id ++ replica_id`. Weights are only
//! ever compared against weights produced by the same digest function, so
//! all digests in one ranking share a length and byte-wise lexicographic
//! order coincides with unsigned big-endian integer order.

use crate::digest::HashFunction;
use crate::id::ReplicaId;
use std::cmp::Ordering;
use std::fmt;

/// Weight of a replica for a piece of content.
///
/// Newtype over the raw digest bytes. Higher weight means higher affinity;
/// the replica with the greatest weight is the primary location for the
/// content.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Weight(Vec<u8>);

impl Weight {
    /// Computes the weight of `replica` for `content`.
    ///
    /// The preimage is the content identifier followed by the replica
    /// identifier, in that order. Evaluations for different replicas are
    /// independent and may run concurrently.
    pub fn of<H: HashFunction + ?Sized>(content: &[u8], replica: &ReplicaId, hash: &H) -> Self {
        let mut preimage = Vec::with_capacity(content.len() + replica.as_bytes().len());
        preimage.extend_from_slice(content);
        preimage.extend_from_slice(replica.as_bytes());
        Weight(hash.digest(&preimage))
    }

    /// The raw digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
