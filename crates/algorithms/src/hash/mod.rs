//! Hash function implementations
//!
//! Only the fixed-output SHA-3 members used by Saber are provided:
//! SHA3-256 hashes public keys, ciphertexts and the encapsulation seed,
//! SHA3-512 derives the pre-key and the encryption coins.

use crate::error::Result;

pub mod sha3;

pub use sha3::{Sha3_256, Sha3_256Algorithm, Sha3_512, Sha3_512Algorithm};

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;
    /// Rate of the underlying sponge in bytes
    const BLOCK_SIZE: usize;
    /// Human-readable algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Streaming interface for cryptographic hash functions
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;

    /// Digest type returned by [`finalize`](Self::finalize)
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input; may be called any number of times
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finishes the computation and resets the engine for reuse
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        <Self::Algorithm as HashAlgorithm>::ALGORITHM_ID
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
