//! Extendable Output Functions (XOF)
//!
//! SHAKE128 expands the public matrix seed and the secret sampling seed;
//! SHAKE256 is provided alongside it for completeness of the FIPS 202 set.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::error::{validate, Error, Result};

pub mod shake;

pub use shake::{ShakeXof128, ShakeXof256};

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input; fails once squeezing has begun
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Pads the input and switches to squeezing; idempotent
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer, finalizing first if needed
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    #[cfg(feature = "alloc")]
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = alloc::vec![0u8; len];
        self.squeeze(&mut out)?;
        Ok(out)
    }

    /// Returns to the initial absorbing state
    fn reset(&mut self) -> Result<()>;

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Absorb `data` and fill `output` in a single call
    fn generate_into(data: &[u8], output: &mut [u8]) -> Result<()>
    where
        Self: Sized,
    {
        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze(output)
    }

    /// Convenience method to generate output in a single call
    #[cfg(feature = "alloc")]
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(
            len > 0,
            "output_length",
            "XOF output length must be greater than 0",
        )?;

        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}

/// Trait for XOF algorithms with compile-time guarantees
pub trait XofAlgorithm {
    /// Security level in bits
    const SECURITY_LEVEL: usize;

    /// Sponge rate in bytes
    const RATE: usize;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }
}

/// Type-level constants for SHAKE-128
pub enum Shake128Algorithm {}

impl XofAlgorithm for Shake128Algorithm {
    const SECURITY_LEVEL: usize = 128;
    const RATE: usize = saber_params::utils::hash::SHAKE128_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHAKE-128";
}

/// Type-level constants for SHAKE-256
pub enum Shake256Algorithm {}

impl XofAlgorithm for Shake256Algorithm {
    const SECURITY_LEVEL: usize = 256;
    const RATE: usize = saber_params::utils::hash::SHAKE256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHAKE-256";
}

impl Error {
    /// Create an XOF squeezing error
    pub(crate) fn xof_squeezing() -> Self {
        Error::Processing {
            operation: "XOF",
            details: "Cannot update after squeezing has begun",
        }
    }
}
