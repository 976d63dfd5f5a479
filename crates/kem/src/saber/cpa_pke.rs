//! Saber IND-CPA public key encryption.
//!
//! All three operations are deterministic in their seed arguments; the
//! IND-CCA layer decides where the randomness comes from.

use alloc::vec::Vec;

use saber_algorithms::poly::prelude::*;
use saber_algorithms::xof::{ExtendableOutputFunction, ShakeXof128};
use zeroize::Zeroizing;

use super::params::{
    SaberParams, SABER_EP, SABER_H1, SABER_KEY_BYTES, SABER_N, SABER_NOISE_SEED_BYTES,
    SABER_SEED_BYTES,
};
use super::polyvec::{gen_matrix, gen_secret, matrix_vector_mul};
use super::serialize::{
    message_to_poly, pack_ciphertext, pack_pk, pack_sk, poly_to_message, unpack_ciphertext,
    unpack_pk, unpack_sk, MessageRing,
};
use crate::error::Result;

/// Saber CPA PKE Key Generation.
///
/// `seed_a` is hashed with SHAKE-128 before use, so the public key carries
/// SHAKE-128(seed_a) rather than the raw draw.
pub(crate) fn keypair_cpa<P: SaberParams>(
    seed_a: &[u8; SABER_SEED_BYTES],
    seed_s: &[u8; SABER_NOISE_SEED_BYTES],
    sk_out: &mut [u8],
) -> Result<Vec<u8>> {
    let mut public_seed = [0u8; SABER_SEED_BYTES];
    ShakeXof128::generate_into(seed_a, &mut public_seed)?;

    let a = gen_matrix::<P>(&public_seed)?;
    let s = Zeroizing::new(gen_secret::<P>(seed_s)?);

    // b = round(Aᵀ·s)
    let b = matrix_vector_mul(&a, &s, true).round_to_p();

    let pk = pack_pk::<P>(&b, &public_seed)?;
    pack_sk::<P>(&s, sk_out)?;

    Ok(pk)
}

/// Saber CPA PKE Encryption.
pub(crate) fn encrypt_cpa<P: SaberParams>(
    pk: &[u8],
    msg: &[u8; SABER_KEY_BYTES],
    coins: &[u8; SABER_NOISE_SEED_BYTES],
    ct_out: &mut [u8],
) -> Result<()> {
    let (b, seed_a) = unpack_pk::<P>(pk)?;
    let a = gen_matrix::<P>(&seed_a)?;
    let sp = Zeroizing::new(gen_secret::<P>(coins)?);

    // b' = round(A·s')
    let b_prime = matrix_vector_mul(&a, &sp, false).round_to_p();

    // v' = bᵀ·s' mod p
    let sp_p = Zeroizing::new(sp.lift::<SaberP>());
    let vp = Zeroizing::new(b.inner_prod(&sp_p));

    // cm = (v' - m·2^(εp-1) + h1) >> (εp - εT)
    let mp = Zeroizing::new(message_to_poly(msg)?);
    let mut cm = Zeroizing::new(Polynomial::<SaberP>::zero());
    for i in 0..SABER_N {
        cm.coeffs[i] = vp.coeffs[i]
            .wrapping_sub(mp.coeffs[i] << (SABER_EP - 1))
            .wrapping_add(SABER_H1)
            >> (SABER_EP - P::ET);
    }

    pack_ciphertext::<P>(&b_prime, &cm, ct_out)
}

/// Saber CPA PKE Decryption.
pub(crate) fn decrypt_cpa<P: SaberParams>(
    sk_cpa: &[u8],
    ct: &[u8],
) -> Result<Zeroizing<[u8; SABER_KEY_BYTES]>> {
    let s = Zeroizing::new(unpack_sk::<P>(sk_cpa)?);
    let (b_prime, cm) = unpack_ciphertext::<P>(ct)?;

    // v = b'ᵀ·s mod p
    let s_p = Zeroizing::new(s.lift::<SaberP>());
    let v = Zeroizing::new(b_prime.inner_prod(&s_p));

    // m = ((v + h2 - cm·2^(εp-εT)) >> (εp - 1)) mod 2
    let mut mp = Zeroizing::new(Polynomial::<MessageRing>::zero());
    for i in 0..SABER_N {
        mp.coeffs[i] = (v.coeffs[i]
            .wrapping_add(P::H2)
            .wrapping_sub(cm.coeffs[i] << (SABER_EP - P::ET))
            >> (SABER_EP - 1))
            & 1;
    }

    let mut msg = Zeroizing::new([0u8; SABER_KEY_BYTES]);
    poly_to_message(&mp, &mut msg)?;
    Ok(msg)
}
