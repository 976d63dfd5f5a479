//! # saber
//!
//! Pure Rust implementation of the Saber module-lattice key encapsulation
//! mechanisms: LightSaber, Saber and FireSaber.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! saber = "0.4"
//! ```
//!
//! ```rust,ignore
//! use saber::prelude::*;
//!
//! let mut rng = rand::rngs::OsRng;
//! let kp = Saber::keypair(&mut rng)?;
//! let (ct, ss) = Saber::encapsulate(&mut rng, &kp.public_key)?;
//! assert_eq!(Saber::decapsulate(&kp.secret_key, &ct)?, ss);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `kem` (default): the Saber KEMs
//! - `algorithms`: Keccak, SHA-3, SHAKE-128, AES-256 and the CTR-DRBG
//! - `kat-rng`: process-wide CTR-DRBG and NIST harness entry points
//! - `serde`: serde support for public keys and ciphertexts
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! - [`saber-api`]: error type and the `Kem` / `Serialize` traits
//! - [`saber-common`]: zeroizing secret buffers
//! - [`saber-internal`]: constant-time helpers
//! - [`saber-params`]: parameter constants
//! - [`saber-algorithms`]: sponge functions, AES, DRBG and ring arithmetic
//! - [`saber-kem`]: LightSaber, Saber and FireSaber

#![cfg_attr(not(feature = "std"), no_std)]

pub use saber_api as api;
pub use saber_common as common;
pub use saber_internal as internal;
pub use saber_params as params;

#[cfg(feature = "algorithms")]
pub use saber_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use saber_kem as kem;

/// Common imports for saber users
pub mod prelude {
    pub use crate::api::{Error, Result};
    pub use crate::api::{FixedSize, Kem, Serialize, SerializeSecret};

    pub use crate::common::SecretBuffer;

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        FireSaber, LightSaber, Saber, SaberCiphertext, SaberKeyPair, SaberPublicKey,
        SaberSecretKey, SaberSharedSecret, SaberVariant,
    };
}
