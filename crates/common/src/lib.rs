//! Common security primitives for the saber workspace
//!
//! Buffers that hold key material (AES round keys, DRBG state, sponge
//! state) are built from the types in this crate so that they are wiped
//! when dropped and never printed.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{barrier, SecretBuffer};
