//! XXH3 digest implementation (non-cryptographic).

use crate::digest::traits::HashFunction;
use xxhash_rust::xxh3::xxh3_64;

/// XXH3 digest function, 8-byte output.
///
/// Orders of magnitude faster than the cryptographic digests, at the cost
/// of no collision resistance against adversarial inputs. Suitable when
/// every participant supplying content and replica identifiers is trusted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3;

impl HashFunction for Xxh3 {
    fn digest(&self, preimage: &[u8]) -> Vec<u8> {
        // Big-endian so byte-wise weight comparison matches numeric order.
        xxh3_64(preimage).to_be_bytes().to_vec()
    }

    fn output_len(&self) -> usize {
        8
    }

    fn name(&self) -> &'static str {
        "xxh3"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(Xxh3.digest(b"abc"), Xxh3.digest(b"abc"));
        assert_ne!(Xxh3.digest(b"abc"), Xxh3.digest(b"abd"));
    }

    #[test]
    fn test_output_len_matches() {
        assert_eq!(Xxh3.digest(b"key").len(), Xxh3.output_len());
    }

    #[test]
    fn test_big_endian_encoding() {
        let raw = xxh3_64(b"key");
        let digest = Xxh3.digest(b"key");
        assert_eq!(digest, raw.to_be_bytes());
    }
}
