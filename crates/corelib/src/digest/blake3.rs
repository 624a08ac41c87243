//! BLAKE3 digest implementation.

use crate::digest::traits::HashFunction;

/// BLAKE3 digest function, 32-byte output.
///
/// Same collision margin as SHA-256 with substantially higher throughput
/// on large preimages; rankings differ from the SHA-256 default, so all
/// participants must agree on the digest choice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3;

impl HashFunction for Blake3 {
    fn digest(&self, preimage: &[u8]) -> Vec<u8> {
        blake3::hash(preimage).as_bytes().to_vec()
    }

    fn output_len(&self) -> usize {
        32
    }

    fn name(&self) -> &'static str {
        "blake3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(Blake3.digest(b"abc"), Blake3.digest(b"abc"));
        assert_ne!(Blake3.digest(b"abc"), Blake3.digest(b"abd"));
    }

    #[test]
    fn test_output_len_matches() {
        assert_eq!(Blake3.digest(b"").len(), Blake3.output_len());
    }
}
