//! SHA-256 digest implementation (the default).

use crate::digest::traits::HashFunction;
use sha2::{Digest, Sha256 as Sha256Hasher};

/// SHA-256 digest function, 32-byte output.
///
/// This is the default digest for ranking: collision resistance makes tie
/// weights astronomically rare, and independent callers agree on the
/// result without negotiating anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl HashFunction for Sha256 {
    fn digest(&self, preimage: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256Hasher::new();
        hasher.update(preimage);
        hasher.finalize().to_vec()
    }

    fn output_len(&self) -> usize {
        32
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let d = Sha256.digest(b"abc");
        assert_eq!(
            hex::encode(d),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_output_len_matches() {
        assert_eq!(Sha256.digest(b"").len(), Sha256.output_len());
    }
}
