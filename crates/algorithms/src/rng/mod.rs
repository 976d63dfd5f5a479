//! Deterministic random bit generators
//!
//! [`CtrDrbg`] is the AES-256 CTR-DRBG (no derivation function) used by the
//! NIST post-quantum Known Answer Tests. It is a reproducibility tool: seed
//! it from a real entropy source or from a KAT file, never from a constant.

pub mod ctr_drbg;

pub use ctr_drbg::CtrDrbg;

#[cfg(feature = "kat-rng")]
pub use ctr_drbg::global::{randombytes, randombytes_init, KatRng};
