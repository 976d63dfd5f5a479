//! Byte encodings of Saber keys, ciphertexts and messages.
//!
//! Every polynomial is a little-endian bitstream of fixed-width fields
//! (13 bits for `s`, 10 bits for `b`/`b'`, εT bits for `cm`, 1 bit for the
//! message). Unpacking is the exact inverse and performs no validation
//! beyond the buffer length.

use alloc::vec::Vec;

use saber_algorithms::poly::prelude::*;

use super::params::{
    SaberParams, SABER_EP, SABER_EQ, SABER_KEY_BYTES, SABER_POLY_BYTES,
    SABER_POLY_COMPRESSED_BYTES, SABER_SEED_BYTES,
};
use super::polyvec::PolyVec;
use crate::error::{validate, Result};

/// Single-bit ring used for the message encoding.
pub type MessageRing = PowerOfTwo<1>;

/// Pack a vector at `bits` per coefficient into `out`.
pub fn pack_polyvec<M: Modulus>(v: &PolyVec<M>, bits: usize, out: &mut [u8]) -> Result<()> {
    let poly_bytes = bytes_required(bits);
    validate::length("packed polynomial vector", out.len(), v.rank() * poly_bytes)?;
    for (p, chunk) in v.polys.iter().zip(out.chunks_exact_mut(poly_bytes)) {
        DefaultCoefficientSerde::pack_coeffs_into(p, bits, chunk)?;
    }
    Ok(())
}

/// Inverse of [`pack_polyvec`].
pub fn unpack_polyvec<M: Modulus>(bytes: &[u8], bits: usize, l: usize) -> Result<PolyVec<M>> {
    let poly_bytes = bytes_required(bits);
    validate::length("packed polynomial vector", bytes.len(), l * poly_bytes)?;
    let mut v = PolyVec::<M>::zero(l);
    for (p, chunk) in v.polys.iter_mut().zip(bytes.chunks_exact(poly_bytes)) {
        *p = DefaultCoefficientSerde::unpack_coeffs(chunk, bits)?;
    }
    Ok(v)
}

/// `pk = pack10(b) ‖ seedA`
pub fn pack_pk<P: SaberParams>(b: &PolyVec<SaberP>, seed_a: &[u8; SABER_SEED_BYTES]) -> Result<Vec<u8>> {
    let mut pk = alloc::vec![0u8; P::PUBLIC_KEY_BYTES];
    let (packed, seed) = pk.split_at_mut(P::POLYVEC_COMPRESSED_BYTES);
    pack_polyvec(b, SABER_EP, packed)?;
    seed.copy_from_slice(seed_a);
    Ok(pk)
}

/// Split a public key into `b` and `seedA`.
pub fn unpack_pk<P: SaberParams>(pk: &[u8]) -> Result<(PolyVec<SaberP>, [u8; SABER_SEED_BYTES])> {
    validate::length("Saber public key", pk.len(), P::PUBLIC_KEY_BYTES)?;
    let (packed, seed) = pk.split_at(P::POLYVEC_COMPRESSED_BYTES);
    let b = unpack_polyvec(packed, SABER_EP, P::L)?;
    let mut seed_a = [0u8; SABER_SEED_BYTES];
    seed_a.copy_from_slice(seed);
    Ok((b, seed_a))
}

/// `sk_cpa = pack13(s)`; negative coefficients are stored as their lift mod q.
pub fn pack_sk<P: SaberParams>(s: &PolyVec<SaberQ>, out: &mut [u8]) -> Result<()> {
    validate::length("Saber IND-CPA secret key", out.len(), P::POLYVEC_BYTES)?;
    pack_polyvec(s, SABER_EQ, out)
}

/// Inverse of [`pack_sk`].
pub fn unpack_sk<P: SaberParams>(bytes: &[u8]) -> Result<PolyVec<SaberQ>> {
    validate::length("Saber IND-CPA secret key", bytes.len(), P::POLYVEC_BYTES)?;
    unpack_polyvec(bytes, SABER_EQ, P::L)
}

/// `ct = pack10(b') ‖ pack_εT(cm)` written into `out`.
pub fn pack_ciphertext<P: SaberParams>(
    b_prime: &PolyVec<SaberP>,
    cm: &Polynomial<SaberP>,
    out: &mut [u8],
) -> Result<()> {
    validate::length("Saber ciphertext", out.len(), P::CIPHERTEXT_BYTES)?;
    let (packed, scaled) = out.split_at_mut(P::POLYVEC_COMPRESSED_BYTES);
    pack_polyvec(b_prime, SABER_EP, packed)?;
    DefaultCoefficientSerde::pack_coeffs_into(cm, P::ET, scaled)?;
    Ok(())
}

/// Split a ciphertext into `b'` and `cm`.
pub fn unpack_ciphertext<P: SaberParams>(ct: &[u8]) -> Result<(PolyVec<SaberP>, Polynomial<SaberP>)> {
    validate::length("Saber ciphertext", ct.len(), P::CIPHERTEXT_BYTES)?;
    let (packed, scaled) = ct.split_at(P::POLYVEC_COMPRESSED_BYTES);
    let b_prime = unpack_polyvec(packed, SABER_EP, P::L)?;
    let cm = DefaultCoefficientSerde::unpack_coeffs(scaled, P::ET)?;
    Ok((b_prime, cm))
}

/// Bit `i` of byte `j` becomes coefficient `8j + i`.
pub fn message_to_poly(m: &[u8; SABER_KEY_BYTES]) -> Result<Polynomial<MessageRing>> {
    DefaultCoefficientSerde::unpack_coeffs(m, 1).map_err(Into::into)
}

/// Inverse of [`message_to_poly`]; only bit 0 of each coefficient is kept.
pub fn poly_to_message(p: &Polynomial<MessageRing>, out: &mut [u8; SABER_KEY_BYTES]) -> Result<()> {
    DefaultCoefficientSerde::pack_coeffs_into(p, 1, out).map_err(Into::into)
}

const _: () = assert!(bytes_required(SABER_EQ) == SABER_POLY_BYTES);
const _: () = assert!(bytes_required(SABER_EP) == SABER_POLY_COMPRESSED_BYTES);
