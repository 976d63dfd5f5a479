// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! The trait is generic over the randomness source so that the same code
//! path serves production use (an OS-backed CSPRNG) and Known Answer Test
//! reproduction (a seeded deterministic generator).

use super::serialize::{FixedSize, Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Key Encapsulation Mechanism with domain-specific key and ciphertext types.
pub trait Kem {
    /// Public key type.
    type PublicKey: Clone + Serialize + FixedSize;

    /// Secret key type; wiped from memory when dropped.
    type SecretKey: Zeroize + Clone + SerializeSecret + FixedSize;

    /// Shared secret type; wiped from memory when dropped.
    type SharedSecret: Zeroize + Clone + SerializeSecret + FixedSize;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize + FixedSize;

    /// Keypair type holding both halves.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair, drawing every random byte from `rng`.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret to `public_key`.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Recover the shared secret carried by `ciphertext`.
    ///
    /// # Security Requirements
    /// - Must run in time independent of the secret key and of whether the
    ///   ciphertext is valid.
    /// - Must use implicit rejection: a tampered ciphertext yields a
    ///   pseudorandom secret, never an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
