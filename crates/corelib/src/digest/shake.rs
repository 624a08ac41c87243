//! SHAKE-128 digest implementation with caller-chosen output length.

use crate::digest::traits::HashFunction;
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake128 as ShakeHasher;

/// SHAKE-128 extendable-output digest, truncated to a fixed length.
///
/// The length is fixed at construction so every digest from one instance
/// is comparable; shorter digests trade collision margin for weight size.
#[derive(Clone, Copy, Debug)]
pub struct Shake128 {
    len: usize,
}

impl Shake128 {
    /// Creates a SHAKE-128 digest function with the given output length.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Default for Shake128 {
    /// 20-byte output, a common compact-digest configuration.
    fn default() -> Self {
        Self::new(20)
    }
}

impl HashFunction for Shake128 {
    fn digest(&self, preimage: &[u8]) -> Vec<u8> {
        let mut hasher = ShakeHasher::default();
        hasher.update(preimage);
        let mut out = vec![0u8; self.len];
        hasher.finalize_xof().read(&mut out);
        out
    }

    fn output_len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "shake128"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        let d = Shake128::new(20).digest(b"abc");
        assert_eq!(hex::encode(d), "5881092dd818bf5cf8a3ddb793fbcba74097d5c5");
    }

    #[test]
    fn test_truncation_is_a_prefix() {
        let short = Shake128::new(8).digest(b"same input");
        let long = Shake128::new(32).digest(b"same input");
        assert_eq!(short, long[..8]);
    }

    #[test]
    fn test_output_len_matches() {
        let f = Shake128::new(20);
        assert_eq!(f.digest(b"x").len(), f.output_len());
    }
}
