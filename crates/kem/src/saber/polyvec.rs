//! Polynomial vectors and the matrix layer of Saber.

use alloc::vec;
use alloc::vec::Vec;

use saber_algorithms::poly::prelude::*;
use saber_algorithms::xof::{ExtendableOutputFunction, ShakeXof128};
use zeroize::{Zeroize, Zeroizing};

use super::params::{SaberParams, SABER_EP, SABER_EQ, SABER_H1, SABER_POLY_BYTES};
use crate::error::Result;

/// A vector of `l` polynomials over the ring of `M`.
pub struct PolyVec<M: Modulus> {
    /// The polynomials in this vector.
    pub(crate) polys: Vec<Polynomial<M>>,
}

impl<M: Modulus> Clone for PolyVec<M> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
        }
    }
}

impl<M: Modulus> PartialEq for PolyVec<M> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<M: Modulus> core::fmt::Debug for PolyVec<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolyVec").field("rank", &self.polys.len()).finish()
    }
}

impl<M: Modulus> Zeroize for PolyVec<M> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<M: Modulus> PolyVec<M> {
    /// Creates a new zero vector of rank `l`.
    pub fn zero(l: usize) -> Self {
        Self {
            polys: vec![Polynomial::<M>::zero(); l],
        }
    }

    /// Returns the rank of this vector.
    pub fn rank(&self) -> usize {
        self.polys.len()
    }

    /// Reinterpret every polynomial in another power-of-two ring.
    pub fn lift<M2: Modulus>(&self) -> PolyVec<M2> {
        PolyVec {
            polys: self.polys.iter().map(|p| p.lift()).collect(),
        }
    }

    /// Round every coefficient from q down to p: `(c + h1) >> (εq - εp)`.
    pub fn round_to_p(&self) -> PolyVec<SaberP> {
        PolyVec {
            polys: self
                .polys
                .iter()
                .map(|p| p.round_shift(SABER_H1, (SABER_EQ - SABER_EP) as u32))
                .collect(),
        }
    }

    /// `Σ self[j] * other[j]`
    pub fn inner_prod(&self, other: &Self) -> Polynomial<M> {
        let mut acc = Polynomial::<M>::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            a.mul_acc(b, &mut acc);
        }
        acc
    }
}

/// The public matrix A, stored row-major.
pub type Matrix = Vec<PolyVec<SaberQ>>;

/// Expand `seed` into the l×l matrix A.
///
/// One SHAKE-128 call produces `l * l * 416` bytes; entry (i, j) is the
/// 13-bit little-endian decoding of bytes `[(i*l + j) * 416, ..)`.
pub fn gen_matrix<P: SaberParams>(seed: &[u8]) -> Result<Matrix> {
    let mut buf = vec![0u8; P::L * P::POLYVEC_BYTES];
    ShakeXof128::generate_into(seed, &mut buf)?;

    let mut a = Vec::with_capacity(P::L);
    for row_bytes in buf.chunks_exact(P::POLYVEC_BYTES) {
        let mut row = PolyVec::<SaberQ>::zero(P::L);
        for (poly, bytes) in row.polys.iter_mut().zip(row_bytes.chunks_exact(SABER_POLY_BYTES)) {
            *poly = DefaultCoefficientSerde::unpack_coeffs(bytes, SABER_EQ)?;
        }
        a.push(row);
    }
    Ok(a)
}

/// Sample a secret vector from β_μ with coins SHAKE-128(seed).
pub fn gen_secret<P: SaberParams>(seed: &[u8]) -> Result<PolyVec<SaberQ>> {
    let mut buf = Zeroizing::new(vec![0u8; P::L * P::POLY_COIN_BYTES]);
    ShakeXof128::generate_into(seed, &mut buf)?;

    let mut s = PolyVec::<SaberQ>::zero(P::L);
    for (poly, coins) in s.polys.iter_mut().zip(buf.chunks_exact(P::POLY_COIN_BYTES)) {
        *poly = <DefaultSamplers as CbdSampler<SaberQ>>::sample_cbd(coins, P::MU)?;
    }
    Ok(s)
}

/// `A·s`, or `Aᵀ·s` when `transpose` is set, without rounding.
pub fn matrix_vector_mul(a: &Matrix, s: &PolyVec<SaberQ>, transpose: bool) -> PolyVec<SaberQ> {
    let l = s.rank();
    let mut res = PolyVec::<SaberQ>::zero(l);
    for i in 0..l {
        for j in 0..l {
            let entry = if transpose {
                &a[j].polys[i]
            } else {
                &a[i].polys[j]
            };
            entry.mul_acc(&s.polys[j], &mut res.polys[i]);
        }
    }
    res
}
