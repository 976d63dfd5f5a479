//! Symmetric primitives and ring arithmetic for the Saber KEM
//!
//! This crate provides the building blocks the Saber KEM is assembled from:
//! the Keccak sponge with SHA3-256, SHA3-512, SHAKE128 and SHAKE256 on top,
//! AES-256 and the CTR-DRBG used to reproduce NIST Known Answer Tests, and
//! polynomial arithmetic over Z_{2^k}[X]/(X^256 + 1).
//! The library is designed to be usable in both `std` and `no_std` environments.
//!
//! # Security Features
//!
//! - Secret state (round keys, DRBG state, sponge state) is zeroized on drop
//! - Table-free AES S-box and fixed-iteration polynomial multiplication
//! - No secret-dependent branches in sampling or packing

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Keccak-f[1600] and the generic sponge
pub mod keccak;
pub use keccak::{keccak_f1600, KeccakSponge};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha3_256, Sha3_512};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher};

// Deterministic random bit generators
pub mod rng;
pub use rng::CtrDrbg;

// Type system
pub mod types;
pub use types::{Digest, SecretBuffer};

// Polynomial arithmetic
pub mod poly;
