//! SHA-3 hash function implementations
//!
//! Constant-time Keccak sponge (FIPS 202) with the `01` domain suffix.

use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::keccak::{KeccakSponge, SHA3_SUFFIX};
use crate::types::Digest;

use saber_params::utils::hash::{
    SHA3_256_BLOCK_SIZE, SHA3_256_OUTPUT_SIZE, SHA3_512_BLOCK_SIZE, SHA3_512_OUTPUT_SIZE,
};

/// Marker type for **SHA3-256**.
pub enum Sha3_256Algorithm {}
/// Marker type for **SHA3-512**.
pub enum Sha3_512Algorithm {}

impl HashAlgorithm for Sha3_256Algorithm {
    const OUTPUT_SIZE: usize = SHA3_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA3-256";
}
impl HashAlgorithm for Sha3_512Algorithm {
    const OUTPUT_SIZE: usize = SHA3_512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA3-512";
}

/// Streaming **SHA3-256** engine.
#[derive(Clone, Zeroize)]
pub struct Sha3_256 {
    sponge: KeccakSponge<SHA3_256_BLOCK_SIZE>,
}

/// Streaming **SHA3-512** engine.
#[derive(Clone, Zeroize)]
pub struct Sha3_512 {
    sponge: KeccakSponge<SHA3_512_BLOCK_SIZE>,
}

macro_rules! impl_sha3_variant {
    ($name:ident, $out:expr, $alg:ty) => {
        impl $name {
            /// Hash the concatenation of `parts` without building it in memory.
            pub fn digest_parts(parts: &[&[u8]]) -> [u8; $out] {
                let mut engine = Self {
                    sponge: KeccakSponge::new(),
                };
                for part in parts {
                    engine.sponge.absorb(part);
                }
                engine.finish()
            }

            fn finish(&mut self) -> [u8; $out] {
                self.sponge.pad(SHA3_SUFFIX);
                let mut out = [0u8; $out];
                self.sponge.squeeze(&mut out);
                self.sponge.reset();
                out
            }
        }

        impl HashFunction for $name {
            type Algorithm = $alg;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self {
                    sponge: KeccakSponge::new(),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.sponge.absorb(data);
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                Ok(Digest::new(self.finish()))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as HashFunction>::new()
            }
        }
    };
}

impl_sha3_variant!(Sha3_256, SHA3_256_OUTPUT_SIZE, Sha3_256Algorithm);
impl_sha3_variant!(Sha3_512, SHA3_512_OUTPUT_SIZE, Sha3_512Algorithm);
