//! NIST harness entry points over the process-wide generator.
//!
//! These mirror `crypto_kem_keypair` / `_enc` / `_dec` and draw from the
//! generator seeded by [`randombytes_init`], so a `.rsp` file can be
//! replayed byte for byte. Calls from different threads are serialised by
//! the generator lock but interleave their draws; KAT replay should run
//! on one thread.

use saber_algorithms::rng::KatRng;

pub use saber_algorithms::rng::{randombytes, randombytes_init};

use super::params::SABER_SS_BYTES;
use super::variant::SaberVariant;
use crate::error::Result;

/// `crypto_kem_keypair`
pub fn keypair(variant: SaberVariant, pk: &mut [u8], sk: &mut [u8]) -> Result<()> {
    variant.keypair(&mut KatRng, pk, sk)
}

/// `crypto_kem_enc`
pub fn encapsulate(
    variant: SaberVariant,
    ct: &mut [u8],
    ss: &mut [u8; SABER_SS_BYTES],
    pk: &[u8],
) -> Result<()> {
    variant.encapsulate(&mut KatRng, pk, ct, ss)
}

/// `crypto_kem_dec`
pub fn decapsulate(
    variant: SaberVariant,
    ss: &mut [u8; SABER_SS_BYTES],
    ct: &[u8],
    sk: &[u8],
) -> Result<()> {
    variant.decapsulate(sk, ct, ss)
}
