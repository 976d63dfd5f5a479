//! Runtime selection of a Saber parameter set.
//!
//! The typed [`SaberKem`](super::kem::SaberKem) API fixes the parameter set
//! at compile time. [`SaberVariant`] covers callers that only learn it at
//! run time (from a name or a config value) and work on raw byte buffers.

use core::fmt;
use core::str::FromStr;

use rand::{CryptoRng, RngCore};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{FireSaberParams, LightSaberParams, SaberParams, SaberParamsImpl, SABER_SS_BYTES};
use crate::error::{Error, Result};

/// One of the three Saber parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaberVariant {
    /// l = 2, μ = 10, εT = 3
    LightSaber,
    /// l = 3, μ = 8, εT = 4
    #[default]
    Saber,
    /// l = 4, μ = 6, εT = 6
    FireSaber,
}

macro_rules! dispatch {
    ($variant:expr, $p:ident => $body:expr) => {
        match $variant {
            SaberVariant::LightSaber => {
                type $p = LightSaberParams;
                $body
            }
            SaberVariant::Saber => {
                type $p = SaberParamsImpl;
                $body
            }
            SaberVariant::FireSaber => {
                type $p = FireSaberParams;
                $body
            }
        }
    };
}

impl SaberVariant {
    /// All variants, weakest first.
    pub const ALL: [SaberVariant; 3] = [Self::LightSaber, Self::Saber, Self::FireSaber];

    /// Algorithm name, as used in KAT files.
    pub fn name(self) -> &'static str {
        dispatch!(self, P => P::NAME)
    }

    /// Module rank l.
    pub fn rank(self) -> usize {
        dispatch!(self, P => P::L)
    }

    /// Public key size in bytes.
    pub fn public_key_bytes(self) -> usize {
        dispatch!(self, P => P::PUBLIC_KEY_BYTES)
    }

    /// Secret key size in bytes.
    pub fn secret_key_bytes(self) -> usize {
        dispatch!(self, P => P::SECRET_KEY_BYTES)
    }

    /// Ciphertext size in bytes.
    pub fn ciphertext_bytes(self) -> usize {
        dispatch!(self, P => P::CIPHERTEXT_BYTES)
    }

    /// Shared secret size in bytes (32 for every variant).
    pub fn shared_secret_bytes(self) -> usize {
        SABER_SS_BYTES
    }

    /// Fill `pk` and `sk` with a fresh key pair.
    pub fn keypair<R: RngCore + CryptoRng>(self, rng: &mut R, pk: &mut [u8], sk: &mut [u8]) -> Result<()> {
        dispatch!(self, P => kem_keygen::<P, R>(rng, pk, sk))
    }

    /// Encapsulate to `pk`, writing the ciphertext into `ct` and the key into `ss`.
    pub fn encapsulate<R: RngCore + CryptoRng>(
        self,
        rng: &mut R,
        pk: &[u8],
        ct: &mut [u8],
        ss: &mut [u8; SABER_SS_BYTES],
    ) -> Result<()> {
        dispatch!(self, P => kem_encaps::<P, R>(rng, pk, ct, ss))
    }

    /// Recover the shared key from `ct` into `ss`.
    ///
    /// A well-sized but invalid ciphertext is not an error; `ss` then holds
    /// the implicit-rejection key.
    pub fn decapsulate(self, sk: &[u8], ct: &[u8], ss: &mut [u8; SABER_SS_BYTES]) -> Result<()> {
        dispatch!(self, P => kem_decaps::<P>(sk, ct, ss))
    }
}

impl fmt::Display for SaberVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SaberVariant {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are ignored, so `light_saber` parses.
    fn from_str(s: &str) -> Result<Self> {
        let mut normalized = [0u8; 16];
        let mut len = 0;
        for b in s.bytes().filter(|b| *b != b'-' && *b != b'_') {
            if len == normalized.len() {
                len = 0;
                break;
            }
            normalized[len] = b.to_ascii_lowercase();
            len += 1;
        }

        match &normalized[..len] {
            b"lightsaber" => Ok(Self::LightSaber),
            b"saber" => Ok(Self::Saber),
            b"firesaber" => Ok(Self::FireSaber),
            _ => Err(Error::Parameter {
                name: "SaberVariant",
                reason: "expected LightSaber, Saber or FireSaber",
            }),
        }
    }
}
