//! Type-safe wrappers for cryptographic values

pub mod digest;

pub use digest::Digest;

pub use saber_common::security::SecretBuffer;
