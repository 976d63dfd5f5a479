//! Polynomial coefficient packing and unpacking
//!
//! Coefficients are written as a little-endian bitstream: coefficient `i`
//! occupies bits `[i * k, (i + 1) * k)` and bit `b` of the stream is bit
//! `b % 8` of byte `b / 8`. The 13-, 10-, 3/4/6- and 1-bit encodings used by
//! Saber are all instances of this layout.

#[cfg(feature = "alloc")]
use alloc::vec;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::params::{Modulus, RING_DEGREE};
use super::polynomial::Polynomial;
use crate::error::{validate, Result};

/// Number of bytes needed to pack one polynomial at `bits` per coefficient
pub const fn bytes_required(bits: usize) -> usize {
    (RING_DEGREE * bits + 7) / 8
}

/// Trait for packing polynomial coefficients into a byte array
pub trait CoefficientPacker<M: Modulus> {
    /// Packs the low `bits_per_coeff` bits of each coefficient into `out`
    fn pack_coeffs_into(poly: &Polynomial<M>, bits_per_coeff: usize, out: &mut [u8]) -> Result<()>;

    /// Packs the polynomial's coefficients into a byte vector
    #[cfg(feature = "alloc")]
    fn pack_coeffs(poly: &Polynomial<M>, bits_per_coeff: usize) -> Result<Vec<u8>> {
        validate_bits(bits_per_coeff)?;
        let mut packed = vec![0u8; bytes_required(bits_per_coeff)];
        Self::pack_coeffs_into(poly, bits_per_coeff, &mut packed)?;
        Ok(packed)
    }
}

/// Trait for unpacking polynomial coefficients from a byte array
pub trait CoefficientUnpacker<M: Modulus> {
    /// Unpacks coefficients from `bytes` into a new polynomial
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn validate_bits(bits_per_coeff: usize) -> Result<()> {
    validate::parameter(
        (1..=16).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 16]",
    )
}

impl<M: Modulus> CoefficientPacker<M> for DefaultCoefficientSerde {
    fn pack_coeffs_into(poly: &Polynomial<M>, bits_per_coeff: usize, out: &mut [u8]) -> Result<()> {
        validate_bits(bits_per_coeff)?;
        validate::length("packed polynomial", out.len(), bytes_required(bits_per_coeff))?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut acc = 0u32;
        let mut acc_bits = 0usize;
        let mut pos = 0usize;

        for &coeff in poly.as_coeffs_slice() {
            acc |= (coeff as u32 & mask) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        if acc_bits > 0 {
            out[pos] = acc as u8;
        }

        Ok(())
    }
}

impl<M: Modulus> CoefficientUnpacker<M> for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: usize) -> Result<Polynomial<M>> {
        validate_bits(bits_per_coeff)?;
        validate::length("packed polynomial", bytes.len(), bytes_required(bits_per_coeff))?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut poly = Polynomial::<M>::zero();
        let mut acc = 0u32;
        let mut acc_bits = 0usize;
        let mut input = bytes.iter();

        for coeff in poly.as_mut_coeffs_slice() {
            while acc_bits < bits_per_coeff {
                // Length was checked above, so the stream cannot run dry.
                let byte = input.next().copied().unwrap_or(0);
                acc |= (byte as u32) << acc_bits;
                acc_bits += 8;
            }
            *coeff = (acc & mask) as u16;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }

        Ok(poly)
    }
}
