//! Polynomials in Z_Q[X]/(X^256 + 1) for power-of-two Q

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Sub};

use zeroize::Zeroize;

use super::params::{Modulus, RING_DEGREE};
use super::toom::poly_mul_acc;
use crate::error::{validate, Result};

/// A polynomial in R_Q = Z_Q[X]/(X^N + 1)
///
/// Coefficients are `u16` residues modulo 2^16 (see [`Modulus`]); the
/// modulus parameter fixes how many low bits are significant.
pub struct Polynomial<M: Modulus> {
    /// Coefficients, lowest degree first
    pub coeffs: [u16; RING_DEGREE],
    _marker: PhantomData<M>,
}

impl<M: Modulus> Polynomial<M> {
    /// Creates a new polynomial with all coefficients set to zero
    pub fn zero() -> Self {
        Self::from_array([0u16; RING_DEGREE])
    }

    /// Wraps an existing coefficient array
    pub fn from_array(coeffs: [u16; RING_DEGREE]) -> Self {
        Self {
            coeffs,
            _marker: PhantomData,
        }
    }

    /// Creates a polynomial from a slice of exactly N coefficients
    pub fn from_coeffs(coeffs_slice: &[u16]) -> Result<Self> {
        validate::length("polynomial coefficients", coeffs_slice.len(), M::N)?;
        let mut poly = Self::zero();
        poly.coeffs.copy_from_slice(coeffs_slice);
        Ok(poly)
    }

    /// Returns the degree N of the polynomial
    pub fn degree() -> usize {
        M::N
    }

    /// Returns the modulus Q for coefficient arithmetic
    pub fn modulus_q() -> u32 {
        M::Q
    }

    /// Returns a slice view of the coefficients
    pub fn as_coeffs_slice(&self) -> &[u16] {
        &self.coeffs
    }

    /// Returns a mutable slice view of the coefficients
    pub fn as_mut_coeffs_slice(&mut self) -> &mut [u16] {
        &mut self.coeffs
    }

    /// Polynomial addition
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..RING_DEGREE {
            result.coeffs[i] = self.coeffs[i].wrapping_add(other.coeffs[i]);
        }
        result
    }

    /// Polynomial subtraction
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..RING_DEGREE {
            result.coeffs[i] = self.coeffs[i].wrapping_sub(other.coeffs[i]);
        }
        result
    }

    /// `acc += self * other` using Toom-Cook 4-way multiplication
    pub fn mul_acc(&self, other: &Self, acc: &mut Self) {
        poly_mul_acc(&self.coeffs, &other.coeffs, &mut acc.coeffs);
    }

    /// Schoolbook negacyclic product (for correctness testing)
    pub fn schoolbook_mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for i in 0..RING_DEGREE {
            for j in 0..RING_DEGREE {
                let prod = self.coeffs[i].wrapping_mul(other.coeffs[j]);
                let idx = i + j;
                if idx < RING_DEGREE {
                    result.coeffs[idx] = result.coeffs[idx].wrapping_add(prod);
                } else {
                    // X^N = -1
                    let reduced = idx - RING_DEGREE;
                    result.coeffs[reduced] = result.coeffs[reduced].wrapping_sub(prod);
                }
            }
        }
        result
    }

    /// Reduce every coefficient into [0, Q)
    pub fn reduce_coeffs(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c &= M::MASK;
        }
    }

    /// Map each coefficient to `(c + offset) >> shift`, moving into the ring of `M2`.
    ///
    /// This is Saber's rounding step, e.g. from q = 2^13 to p = 2^10 with
    /// `offset = h1` and `shift = 3`.
    pub fn round_shift<M2: Modulus>(&self, offset: u16, shift: u32) -> Polynomial<M2> {
        let mut result = Polynomial::<M2>::zero();
        for i in 0..RING_DEGREE {
            result.coeffs[i] = self.coeffs[i].wrapping_add(offset) >> shift;
        }
        result
    }

    /// View the same residues as an element of another power-of-two ring.
    ///
    /// Valid whenever the target modulus divides 2^16, which every
    /// [`Modulus`] does; small signed secrets are shared this way between
    /// the q and p rings.
    pub fn lift<M2: Modulus>(&self) -> Polynomial<M2> {
        Polynomial::from_array(self.coeffs)
    }
}

impl<M: Modulus> Clone for Polynomial<M> {
    fn clone(&self) -> Self {
        Self::from_array(self.coeffs)
    }
}

impl<M: Modulus> PartialEq for Polynomial<M> {
    /// Equality in R_Q, ignoring bits above LOG_Q
    fn eq(&self, other: &Self) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(a, b)| (a ^ b) & M::MASK == 0)
    }
}

impl<M: Modulus> Eq for Polynomial<M> {}

impl<M: Modulus> Zeroize for Polynomial<M> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<M: Modulus> Default for Polynomial<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Modulus> fmt::Debug for Polynomial<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial<2^{}>({:?}..)", M::LOG_Q, &self.coeffs[..4])
    }
}

impl<M: Modulus> Add for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn add(self, other: Self) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl<M: Modulus> Sub for &Polynomial<M> {
    type Output = Polynomial<M>;

    fn sub(self, other: Self) -> Self::Output {
        Polynomial::sub(self, other)
    }
}
