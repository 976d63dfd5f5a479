//! Saber Key Encapsulation Mechanism (KEM).
//!
//! Saber is a module-lattice KEM whose hardness rests on Module Learning
//! With Rounding: errors come from rounding between the power-of-two moduli
//! q = 2^13, p = 2^10 and T = 2^εT rather than from sampled noise. An
//! IND-CPA public key encryption scheme is turned into an IND-CCA2 KEM with
//! the Fujisaki-Okamoto transform and implicit rejection.

mod params;
mod polyvec;
mod serialize;
mod cpa_pke;
mod ind_cca;
mod kem;
mod variant;

mod lightsaber;
#[allow(clippy::module_inception)]
mod saber;
mod firesaber;

#[cfg(feature = "kat-rng")]
pub mod kat;

pub use self::firesaber::FireSaber;
pub use self::lightsaber::LightSaber;
pub use self::saber::Saber;

pub use self::kem::{
    SaberCiphertext, SaberKem, SaberKeyPair, SaberPublicKey, SaberSecretKey, SaberSharedSecret,
};
pub use self::params::{
    FireSaberParams, LightSaberParams, SaberParams, SaberParamsImpl, SABER_SS_BYTES,
};
pub use self::variant::SaberVariant;
