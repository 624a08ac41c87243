//! Core digest trait definition.

/// A digest function usable for weight computation.
///
/// Implementations are stateless and thread-safe, allowing concurrent
/// weight evaluation without synchronization overhead.
///
/// # Contract
///
/// - Deterministic: the same preimage always yields the same digest
/// - Fixed length: every digest from one instance has `output_len()` bytes
/// - No side effects
///
/// An implementation that varies its output length between calls breaks
/// weight comparison; that is a caller contract violation, not a handled
/// error.
pub trait HashFunction: Send + Sync {
    /// Digests a byte preimage.
    ///
    /// # Arguments
    ///
    /// * `preimage` - The bytes to digest
    ///
    /// # Returns
    ///
    /// A digest of exactly `output_len()` bytes
    fn digest(&self, preimage: &[u8]) -> Vec<u8>;

    /// Returns the digest length in bytes, constant for this instance.
    fn output_len(&self) -> usize;

    /// Returns the name of this digest function.
    fn name(&self) -> &'static str;
}
