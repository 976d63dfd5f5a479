//! Block cipher implementations
//!
//! AES-256 in the forward direction is the only cipher needed here: it is
//! the core of the CTR-DRBG that regenerates NIST Known Answer Tests.

use crate::error::Result;

pub mod aes;

pub use aes::{Aes256, Aes256Algorithm};

/// Compile-time description of a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers used in the forward direction
pub trait BlockCipher: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: CipherAlgorithm;

    /// Expand `key`, which must be exactly `KEY_SIZE` bytes
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypt one block in place; `block` must be exactly `BLOCK_SIZE` bytes
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        <Self::Algorithm as CipherAlgorithm>::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as CipherAlgorithm>::BLOCK_SIZE
    }

    /// Returns the algorithm name
    fn name() -> &'static str {
        <Self::Algorithm as CipherAlgorithm>::name()
    }
}
