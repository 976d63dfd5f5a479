//! SHAKE extendable output functions (FIPS 202)
//!
//! Both variants share the Keccak sponge; they differ only in rate.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{ExtendableOutputFunction, Shake128Algorithm, Shake256Algorithm, XofAlgorithm};
use crate::error::{validate, Error, Result};
use crate::keccak::{KeccakSponge, SHAKE_SUFFIX};

use saber_params::utils::hash::{SHAKE128_BLOCK_SIZE, SHAKE256_BLOCK_SIZE};

/// SHAKE-128 extendable output function
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ShakeXof128 {
    sponge: KeccakSponge<SHAKE128_BLOCK_SIZE>,
    is_finalized: bool,
}

/// SHAKE-256 extendable output function
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ShakeXof256 {
    sponge: KeccakSponge<SHAKE256_BLOCK_SIZE>,
    is_finalized: bool,
}

macro_rules! impl_shake_variant {
    ($name:ident, $alg:ty) => {
        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    sponge: KeccakSponge::new(),
                    is_finalized: false,
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                if self.is_finalized {
                    return Err(Error::xof_squeezing());
                }
                self.sponge.absorb(data);
                Ok(())
            }

            fn finalize(&mut self) -> Result<()> {
                if !self.is_finalized {
                    self.sponge.pad(SHAKE_SUFFIX);
                    self.is_finalized = true;
                }
                Ok(())
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                validate::parameter(
                    !output.is_empty(),
                    "output_length",
                    "Output buffer must not be empty",
                )?;
                self.finalize()?;
                self.sponge.squeeze(output);
                Ok(())
            }

            fn reset(&mut self) -> Result<()> {
                self.sponge.reset();
                self.is_finalized = false;
                Ok(())
            }

            fn security_level() -> usize {
                <$alg as XofAlgorithm>::SECURITY_LEVEL
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as ExtendableOutputFunction>::new()
            }
        }
    };
}

impl_shake_variant!(ShakeXof128, Shake128Algorithm);
impl_shake_variant!(ShakeXof256, Shake256Algorithm);
