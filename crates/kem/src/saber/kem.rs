//! Core Saber KEM logic and typed keys.
//!
//! Every type is generic over the parameter set, so a LightSaber key can
//! never be handed to FireSaber decapsulation. Byte access goes through
//! `to_bytes` / `from_bytes`, which enforce the exact encoded length.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use saber_algorithms::hash::Sha3_256;
use saber_api::error::Result as ApiResult;
use saber_api::{FixedSize, Kem, Serialize, SerializeSecret};
use saber_common::security::SecretBuffer;
use saber_internal::constant_time::ct_eq;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{
    kem_decaps, kem_encaps, kem_encaps_derand, kem_keygen, kem_keygen_derand, SecretKeyLayout,
};
use super::params::{
    SaberParams, SABER_HASH_BYTES, SABER_KEY_BYTES, SABER_NOISE_SEED_BYTES, SABER_SEED_BYTES,
    SABER_SS_BYTES,
};
use crate::error::{validate, Result};

/// Saber public key: `pack10(b) ‖ seedA`.
pub struct SaberPublicKey<P: SaberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// Saber secret key: `pack13(s) ‖ pk ‖ SHA3-256(pk) ‖ z`.
pub struct SaberSecretKey<P: SaberParams> {
    bytes: Zeroizing<Vec<u8>>,
    _params: PhantomData<P>,
}

/// Saber ciphertext: `pack10(b') ‖ pack_εT(cm)`.
pub struct SaberCiphertext<P: SaberParams> {
    bytes: Vec<u8>,
    _params: PhantomData<P>,
}

/// 32-byte shared secret. Equality is constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaberSharedSecret(SecretBuffer<SABER_SS_BYTES>);

/// A matching public and secret key.
pub struct SaberKeyPair<P: SaberParams> {
    /// Public half.
    pub public_key: SaberPublicKey<P>,
    /// Secret half.
    pub secret_key: SaberSecretKey<P>,
}

impl<P: SaberParams> SaberPublicKey<P> {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// The encoded key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// SHA3-256 of the encoded key, as embedded in the matching secret key.
    pub fn hash(&self) -> [u8; SABER_HASH_BYTES] {
        Sha3_256::digest_parts(&[&self.bytes[..]])
    }

    /// The 32-byte seed the public matrix is expanded from.
    pub fn seed(&self) -> &[u8] {
        &self.bytes[P::POLYVEC_COMPRESSED_BYTES..]
    }
}

impl<P: SaberParams> SaberSecretKey<P> {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
            _params: PhantomData,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The public key stored inside the secret key.
    pub fn public_key(&self) -> SaberPublicKey<P> {
        let layout = SecretKeyLayout::of::<P>();
        SaberPublicKey::from_vec(self.bytes[layout.pk..layout.hpk].to_vec())
    }

    /// The stored `SHA3-256(pk)`.
    pub fn public_key_hash(&self) -> [u8; SABER_HASH_BYTES] {
        let layout = SecretKeyLayout::of::<P>();
        let mut out = [0u8; SABER_HASH_BYTES];
        out.copy_from_slice(&self.bytes[layout.hpk..layout.z]);
        out
    }
}

impl<P: SaberParams> SaberCiphertext<P> {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            _params: PhantomData,
        }
    }

    /// The encoded ciphertext.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl SaberSharedSecret {
    pub(crate) fn new(bytes: [u8; SABER_SS_BYTES]) -> Self {
        Self(SecretBuffer::new(bytes))
    }

    /// Export the shared secret in a buffer that is wiped on drop.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_slice().to_vec())
    }

    /// Borrow the secret as a fixed-size array.
    pub fn as_array(&self) -> &[u8; SABER_SS_BYTES] {
        self.0.as_array()
    }
}

impl<P: SaberParams> Clone for SaberPublicKey<P> {
    fn clone(&self) -> Self {
        Self::from_vec(self.bytes.clone())
    }
}

impl<P: SaberParams> Clone for SaberSecretKey<P> {
    fn clone(&self) -> Self {
        Self::from_vec(self.bytes.to_vec())
    }
}

impl<P: SaberParams> Clone for SaberCiphertext<P> {
    fn clone(&self) -> Self {
        Self::from_vec(self.bytes.clone())
    }
}

impl<P: SaberParams> Clone for SaberKeyPair<P> {
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            secret_key: self.secret_key.clone(),
        }
    }
}

impl<P: SaberParams> PartialEq for SaberPublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}
impl<P: SaberParams> Eq for SaberPublicKey<P> {}

impl<P: SaberParams> PartialEq for SaberCiphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}
impl<P: SaberParams> Eq for SaberCiphertext<P> {}

impl ConstantTimeEq for SaberSharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.as_slice().ct_eq(other.0.as_slice())
    }
}

impl PartialEq for SaberSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ConstantTimeEq::ct_eq(self, other).into()
    }
}
impl Eq for SaberSharedSecret {}

impl<P: SaberParams> Zeroize for SaberSecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

// `Zeroizing` wipes the bytes when the key is dropped.
impl<P: SaberParams> ZeroizeOnDrop for SaberSecretKey<P> {}

impl<P: SaberParams> fmt::Debug for SaberPublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberPublicKey")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl<P: SaberParams> fmt::Debug for SaberSecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberSecretKey")
            .field("algorithm", &P::NAME)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl<P: SaberParams> fmt::Debug for SaberCiphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberCiphertext")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl fmt::Debug for SaberSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SaberSharedSecret([REDACTED])")
    }
}

impl<P: SaberParams> fmt::Debug for SaberKeyPair<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberKeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key)
            .finish()
    }
}

impl<P: SaberParams> FixedSize for SaberPublicKey<P> {
    const SIZE: usize = P::PUBLIC_KEY_BYTES;
}

impl<P: SaberParams> FixedSize for SaberSecretKey<P> {
    const SIZE: usize = P::SECRET_KEY_BYTES;
}

impl<P: SaberParams> FixedSize for SaberCiphertext<P> {
    const SIZE: usize = P::CIPHERTEXT_BYTES;
}

impl FixedSize for SaberSharedSecret {
    const SIZE: usize = SABER_SS_BYTES;
}

impl<P: SaberParams> Serialize for SaberPublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len("SaberPublicKey::from_bytes", bytes)?;
        Ok(Self::from_vec(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<P: SaberParams> SerializeSecret for SaberSecretKey<P> {
    /// Rejects keys whose stored `H(pk)` does not match the stored public key.
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len("SaberSecretKey::from_bytes", bytes)?;
        let key = Self::from_vec(bytes.to_vec());
        let hpk = key.public_key().hash();
        validate::key(
            ct_eq(hpk, key.public_key_hash()),
            P::NAME,
            "embedded public key hash does not match",
        )?;
        Ok(key)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.to_vec())
    }
}

impl<P: SaberParams> Serialize for SaberCiphertext<P> {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len("SaberCiphertext::from_bytes", bytes)?;
        Ok(Self::from_vec(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl SerializeSecret for SaberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::check_len("SaberSharedSecret::from_bytes", bytes)?;
        let mut ss = [0u8; SABER_SS_BYTES];
        ss.copy_from_slice(bytes);
        let out = Self::new(ss);
        ss.zeroize();
        Ok(out)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_bytes()
    }
}

/// Generic Saber KEM over a parameter set.
pub struct SaberKem<P: SaberParams> {
    _params: PhantomData<P>,
}

impl<P: SaberParams> SaberKem<P> {
    /// Key generation from explicit seeds instead of an RNG.
    ///
    /// Produces the same key pair as [`Kem::keypair`] with an RNG that
    /// yields `seed_a`, `seed_s` and `z` in that order.
    pub fn keypair_derand(
        seed_a: &[u8; SABER_SEED_BYTES],
        seed_s: &[u8; SABER_NOISE_SEED_BYTES],
        z: &[u8; SABER_KEY_BYTES],
    ) -> Result<SaberKeyPair<P>> {
        let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
        let mut sk = vec![0u8; P::SECRET_KEY_BYTES];
        kem_keygen_derand::<P>(seed_a, seed_s, z, &mut pk, &mut sk)?;
        Ok(SaberKeyPair {
            public_key: SaberPublicKey::from_vec(pk),
            secret_key: SaberSecretKey::from_vec(sk),
        })
    }

    /// Encapsulation from an explicit 32-byte seed instead of an RNG.
    pub fn encapsulate_derand(
        public_key: &SaberPublicKey<P>,
        seed: &[u8; SABER_KEY_BYTES],
    ) -> Result<(SaberCiphertext<P>, SaberSharedSecret)> {
        let mut ct = vec![0u8; P::CIPHERTEXT_BYTES];
        let mut ss = Zeroizing::new([0u8; SABER_SS_BYTES]);
        kem_encaps_derand::<P>(public_key.as_bytes(), seed, &mut ct, &mut ss)?;
        Ok((SaberCiphertext::from_vec(ct), SaberSharedSecret::new(*ss)))
    }

    fn keypair_inner<R: CryptoRng + RngCore>(rng: &mut R) -> Result<SaberKeyPair<P>> {
        let mut pk = vec![0u8; P::PUBLIC_KEY_BYTES];
        let mut sk = vec![0u8; P::SECRET_KEY_BYTES];
        if let Err(e) = kem_keygen::<P, R>(rng, &mut pk, &mut sk) {
            sk.zeroize();
            return Err(e);
        }
        Ok(SaberKeyPair {
            public_key: SaberPublicKey::from_vec(pk),
            secret_key: SaberSecretKey::from_vec(sk),
        })
    }
}

impl<P: SaberParams> Kem for SaberKem<P> {
    type PublicKey = SaberPublicKey<P>;
    type SecretKey = SaberSecretKey<P>;
    type SharedSecret = SaberSharedSecret;
    type Ciphertext = SaberCiphertext<P>;
    type KeyPair = SaberKeyPair<P>;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(Self::keypair_inner(rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut ct = vec![0u8; P::CIPHERTEXT_BYTES];
        let mut ss = Zeroizing::new([0u8; SABER_SS_BYTES]);
        kem_encaps::<P, R>(rng, public_key.as_bytes(), &mut ct, &mut ss)?;
        Ok((SaberCiphertext::from_vec(ct), SaberSharedSecret::new(*ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let mut ss = Zeroizing::new([0u8; SABER_SS_BYTES]);
        kem_decaps::<P>(secret_key.as_bytes(), ciphertext.as_bytes(), &mut ss)?;
        Ok(SaberSharedSecret::new(*ss))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    impl<P: SaberParams> serde::Serialize for SaberPublicKey<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: SaberParams> Deserialize<'de> for SaberPublicKey<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }

    impl<P: SaberParams> serde::Serialize for SaberCiphertext<P> {
        fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    impl<'de, P: SaberParams> Deserialize<'de> for SaberCiphertext<P> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            <Self as Serialize>::from_bytes(&bytes).map_err(D::Error::custom)
        }
    }
}
