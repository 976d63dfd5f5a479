//! Saber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform.
//!
//! Secret key layout: `sk_cpa ‖ pk ‖ SHA3-256(pk) ‖ z`. Decapsulation always
//! re-encrypts and selects between the re-derived pre-key and `z` with a
//! byte mask, so a tampered ciphertext costs exactly as much as a valid one
//! and is answered with a pseudorandom key instead of an error.

use alloc::vec;

use log::debug;
use rand::{CryptoRng, RngCore};
use saber_algorithms::hash::{Sha3_256, Sha3_512};
use saber_common::security::barrier;
use saber_internal::constant_time::{ct_eq_mask, ct_select_bytes};
use zeroize::{Zeroize, Zeroizing};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{
    SaberParams, SABER_HASH_BYTES, SABER_KEY_BYTES, SABER_NOISE_SEED_BYTES, SABER_SEED_BYTES,
    SABER_SS_BYTES,
};
use crate::error::{validate, Result};

/// Offsets of the four secret key components.
pub(crate) struct SecretKeyLayout {
    pub pk: usize,
    pub hpk: usize,
    pub z: usize,
}

impl SecretKeyLayout {
    pub(crate) const fn of<P: SaberParams>() -> Self {
        let pk = P::POLYVEC_BYTES;
        let hpk = pk + P::PUBLIC_KEY_BYTES;
        Self {
            pk,
            hpk,
            z: hpk + SABER_HASH_BYTES,
        }
    }
}

/// Key generation from explicit seeds.
///
/// `seed_a` and `seed_s` feed the IND-CPA key pair, `z` is the implicit
/// rejection secret.
pub(crate) fn kem_keygen_derand<P: SaberParams>(
    seed_a: &[u8; SABER_SEED_BYTES],
    seed_s: &[u8; SABER_NOISE_SEED_BYTES],
    z: &[u8; SABER_KEY_BYTES],
    pk_out: &mut [u8],
    sk_out: &mut [u8],
) -> Result<()> {
    validate::length("Saber public key", pk_out.len(), P::PUBLIC_KEY_BYTES)?;
    validate::length("Saber secret key", sk_out.len(), P::SECRET_KEY_BYTES)?;
    let layout = SecretKeyLayout::of::<P>();

    let pk = keypair_cpa::<P>(seed_a, seed_s, &mut sk_out[..layout.pk])?;
    pk_out.copy_from_slice(&pk);

    let hpk = Sha3_256::digest_parts(&[&pk[..]]);
    sk_out[layout.pk..layout.hpk].copy_from_slice(&pk);
    sk_out[layout.hpk..layout.z].copy_from_slice(&hpk);
    sk_out[layout.z..].copy_from_slice(z);
    Ok(())
}

/// IND-CCA2 Key Generation
///
/// Draws `seedA`, `seedS` and `z` from `rng`, in that order.
pub(crate) fn kem_keygen<P: SaberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    pk_out: &mut [u8],
    sk_out: &mut [u8],
) -> Result<()> {
    debug!("Generating keypair for {}", P::NAME);

    let mut seed_a = [0u8; SABER_SEED_BYTES];
    let mut seed_s = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
    let mut z = Zeroizing::new([0u8; SABER_KEY_BYTES]);
    rng.fill_bytes(&mut seed_a);
    rng.fill_bytes(&mut seed_s[..]);
    rng.fill_bytes(&mut z[..]);

    kem_keygen_derand::<P>(&seed_a, &seed_s, &z, pk_out, sk_out)
}

/// Encapsulation from an explicit 32-byte seed; `m = SHA3-256(seed)`.
pub(crate) fn kem_encaps_derand<P: SaberParams>(
    pk: &[u8],
    seed: &[u8; SABER_KEY_BYTES],
    ct_out: &mut [u8],
    ss_out: &mut [u8; SABER_SS_BYTES],
) -> Result<()> {
    validate::length("Saber public key", pk.len(), P::PUBLIC_KEY_BYTES)?;
    validate::length("Saber ciphertext", ct_out.len(), P::CIPHERTEXT_BYTES)?;

    let m = Zeroizing::new(Sha3_256::digest_parts(&[&seed[..]]));
    let hpk = Sha3_256::digest_parts(&[pk]);

    // (K̂, r) = SHA3-512(m ‖ H(pk))
    let kr = Zeroizing::new(Sha3_512::digest_parts(&[&m[..], &hpk[..]]));
    let (k_hat, coins) = kr.split_at(SABER_KEY_BYTES);
    let mut r = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
    r.copy_from_slice(coins);

    encrypt_cpa::<P>(pk, &m, &r, ct_out)?;

    // K = SHA3-256(K̂ ‖ SHA3-256(ct))
    let hct = Sha3_256::digest_parts(&[&ct_out[..]]);
    *ss_out = Sha3_256::digest_parts(&[k_hat, &hct[..]]);
    Ok(())
}

/// IND-CCA2 Encapsulation
///
/// Draws the 32-byte message seed from `rng`.
pub(crate) fn kem_encaps<P: SaberParams, R: RngCore + CryptoRng>(
    rng: &mut R,
    pk: &[u8],
    ct_out: &mut [u8],
    ss_out: &mut [u8; SABER_SS_BYTES],
) -> Result<()> {
    debug!("Encapsulating with {}", P::NAME);

    let mut seed = Zeroizing::new([0u8; SABER_KEY_BYTES]);
    rng.fill_bytes(&mut seed[..]);
    kem_encaps_derand::<P>(pk, &seed, ct_out, ss_out)
}

/// IND-CCA2 Decapsulation
///
/// Never fails on correctly sized input. The re-encryption check is a
/// byte mask; no branch depends on whether `ct` was honestly generated.
pub(crate) fn kem_decaps<P: SaberParams>(
    sk: &[u8],
    ct: &[u8],
    ss_out: &mut [u8; SABER_SS_BYTES],
) -> Result<()> {
    debug!("Decapsulating with {}", P::NAME);
    validate::length("Saber secret key", sk.len(), P::SECRET_KEY_BYTES)?;
    validate::length("Saber ciphertext", ct.len(), P::CIPHERTEXT_BYTES)?;

    let layout = SecretKeyLayout::of::<P>();
    let sk_cpa = &sk[..layout.pk];
    let pk = &sk[layout.pk..layout.hpk];
    let hpk = &sk[layout.hpk..layout.z];
    let z = &sk[layout.z..];

    // m' = Dec(sk, ct)
    let m_prime = decrypt_cpa::<P>(sk_cpa, ct)?;

    // (K̂', r') = SHA3-512(m' ‖ H(pk))
    let kr = Zeroizing::new(Sha3_512::digest_parts(&[&m_prime[..], hpk]));
    let (k_hat, coins) = kr.split_at(SABER_KEY_BYTES);
    let mut r = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
    r.copy_from_slice(coins);

    // ct' = Enc(pk, m', r')
    let mut ct_prime = vec![0u8; P::CIPHERTEXT_BYTES];
    encrypt_cpa::<P>(pk, &m_prime, &r, &mut ct_prime)?;

    // 0xFF selects K̂', 0x00 selects z
    let mut selected = Zeroizing::new([0u8; SABER_KEY_BYTES]);
    barrier::with_barriers(|| {
        let mask = ct_eq_mask(ct, &ct_prime);
        ct_select_bytes(&mut selected[..], z, k_hat, mask);
    });

    let hct = Sha3_256::digest_parts(&[ct]);
    *ss_out = Sha3_256::digest_parts(&[&selected[..], &hct[..]]);

    ct_prime.zeroize();
    Ok(())
}
