//! Saber parameter definitions.

use saber_params::pqc::saber as global_params;

pub use global_params::{
    SABER_EP, SABER_EQ, SABER_HASH_BYTES, SABER_KEY_BYTES, SABER_N, SABER_NOISE_SEED_BYTES,
    SABER_POLY_BYTES, SABER_POLY_COMPRESSED_BYTES, SABER_SEED_BYTES,
};

/// Shared secret size for all Saber variants.
pub const SABER_SS_BYTES: usize = global_params::SABER_KEY_BYTES;

/// Rounding constant h1 = 2^(εq - εp - 1), added before every q → p shift.
pub const SABER_H1: u16 = 1 << (SABER_EQ - SABER_EP - 1);

/// Trait defining parameters for a specific Saber variant.
pub trait SaberParams: Send + Sync + 'static {
    /// Module rank l (dimension of vectors and matrices).
    const L: usize;
    /// Centered binomial parameter μ of the secret distribution.
    const MU: usize;
    /// log2 of the message-embedding modulus T.
    const ET: usize;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the KEM secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;

    /// Packed secret vector `s` at 13 bits per coefficient.
    const POLYVEC_BYTES: usize = Self::L * SABER_POLY_BYTES;
    /// Packed rounded vector (`b` or `b'`) at 10 bits per coefficient.
    const POLYVEC_COMPRESSED_BYTES: usize = Self::L * SABER_POLY_COMPRESSED_BYTES;
    /// Packed `cm` polynomial at εT bits per coefficient.
    const SCALE_BYTES: usize = Self::ET * SABER_N / 8;
    /// CBD input for one polynomial.
    const POLY_COIN_BYTES: usize = Self::MU * SABER_N / 8;

    /// Decryption rounding constant h2 = 2^(εp-2) - 2^(εp-εT-1) + 2^(εq-εp-1).
    const H2: u16 = (1 << (SABER_EP - 2)) - (1 << (SABER_EP - Self::ET - 1)) + SABER_H1;
}

macro_rules! saber_params_impl {
    ($name:ident, $set:expr) => {
        impl SaberParams for $name {
            const L: usize = $set.l;
            const MU: usize = $set.mu;
            const ET: usize = $set.et;
            const NAME: &'static str = $set.name;
            const PUBLIC_KEY_BYTES: usize = $set.public_key_size;
            const SECRET_KEY_BYTES: usize = $set.secret_key_size;
            const CIPHERTEXT_BYTES: usize = $set.ciphertext_size;
        }
    };
}

/// LightSaber: l = 2, μ = 10, εT = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSaberParams;
saber_params_impl!(LightSaberParams, global_params::LIGHTSABER);

/// Saber: l = 3, μ = 8, εT = 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberParamsImpl;
saber_params_impl!(SaberParamsImpl, global_params::SABER);

/// FireSaber: l = 4, μ = 6, εT = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireSaberParams;
saber_params_impl!(FireSaberParams, global_params::FIRESABER);
