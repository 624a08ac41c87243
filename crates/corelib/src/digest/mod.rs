//! Digest function abstraction for rendezvous hashing.
//!
//! Digest functions turn a byte preimage into a fixed-length digest that
//! the weight comparison treats as an unsigned big-endian integer.

pub mod blake3;
pub mod sha256;
pub mod shake;
pub mod traits;
pub mod xxh3;

pub use blake3::Blake3;
pub use sha256::Sha256;
pub use shake::Shake128;
pub use traits::HashFunction;
pub use xxh3::Xxh3;
