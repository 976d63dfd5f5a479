//! Centered binomial sampling from pseudorandom bytes

use super::params::{Modulus, RING_DEGREE};
use super::polynomial::Polynomial;
use crate::error::{validate, Result};
use saber_internal::endian::u64_from_le_partial;

/// Trait for sampling polynomials from a Centered Binomial Distribution (CBD)
pub trait CbdSampler<M: Modulus> {
    /// Samples a polynomial with coefficients from β_μ.
    ///
    /// `buf` must hold exactly `μ * N / 8` bytes of XOF output; each
    /// coefficient is the difference of two μ/2-bit popcounts, stored as a
    /// wrapping `u16` in [-μ/2, μ/2].
    fn sample_cbd(buf: &[u8], mu: usize) -> Result<Polynomial<M>>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

/// Number of input bytes consumed by one call with parameter `mu`
pub const fn cbd_bytes(mu: usize) -> usize {
    mu * RING_DEGREE / 8
}

/// One bit set at the bottom of each of the eight `half`-bit fields
const fn field_mask(half: usize) -> u64 {
    let mut mask = 0u64;
    let mut k = 0;
    while k < 8 {
        mask |= 1 << (k * half);
        k += 1;
    }
    mask
}

impl<M: Modulus> CbdSampler<M> for DefaultSamplers {
    fn sample_cbd(buf: &[u8], mu: usize) -> Result<Polynomial<M>> {
        validate::parameter(
            matches!(mu, 6 | 8 | 10),
            "cbd mu",
            "must be 6, 8 or 10",
        )?;
        validate::length("cbd input", buf.len(), cbd_bytes(mu))?;

        let half = mu / 2;
        let mask = field_mask(half);
        let field = (1u64 << half) - 1;
        let mut poly = Polynomial::<M>::zero();

        // Four coefficients use 4 * mu bits, i.e. `half` bytes.
        for (group, chunk) in buf.chunks_exact(half).enumerate() {
            let t = u64_from_le_partial(chunk);
            let mut d = 0u64;
            for j in 0..half {
                d += (t >> j) & mask;
            }
            for m in 0..4 {
                let a = ((d >> (2 * m * half)) & field) as u16;
                let b = ((d >> ((2 * m + 1) * half)) & field) as u16;
                poly.coeffs[4 * group + m] = a.wrapping_sub(b);
            }
        }

        Ok(poly)
    }
}
