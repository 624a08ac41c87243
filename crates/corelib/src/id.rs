//! Replica identifiers.
//!
//! A replica is identified by an opaque byte sequence. The algorithm never
//! inspects the bytes; it only hashes them and, on weight ties, compares
//! them lexicographically. An alias minted to give a replica extra
//! selection probability (e.g. `id ++ "2"`) is indistinguishable from a
//! primary identifier at this level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a replica.
///
/// Newtype over a byte vector so identifiers of any origin (hostnames,
/// UUIDs, raw hashes, synthetic aliases) share one representation. Ordering
/// is plain lexicographic byte order, which is what the ranking tie-break
/// relies on.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ReplicaId(Vec<u8>);

impl ReplicaId {
    /// Construct an identifier from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The raw identifier bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ReplicaId {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ReplicaId {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ReplicaId {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for ReplicaId {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for ReplicaId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ReplicaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}
