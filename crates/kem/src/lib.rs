//! Saber Key Encapsulation Mechanisms
//!
//! This crate implements the Saber family of module-lattice KEMs
//! (LightSaber, Saber, FireSaber) on top of the primitives in
//! `saber-algorithms`. Keys and ciphertexts are typed per parameter set and
//! every variant implements [`saber_api::Kem`]; [`SaberVariant`] offers the
//! same operations over raw byte buffers when the parameter set is only
//! known at run time.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod saber;

// Re-exports
pub use error::{Error, Result};
pub use saber::{
    FireSaber, LightSaber, Saber, SaberCiphertext, SaberKem, SaberKeyPair, SaberPublicKey,
    SaberSecretKey, SaberSharedSecret, SaberVariant,
};
