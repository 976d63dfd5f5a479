//! AES-256 CTR-DRBG as used by the NIST PQC `rng.c`
//!
//! State is a 32-byte key and a 16-byte counter block `V`. Every request
//! is followed by an update, so two 32-byte requests differ from one
//! 64-byte request.

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Aes256;
use crate::types::SecretBuffer;
use saber_internal::endian::increment_be;
use saber_params::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE, CTR_DRBG_SEED_SIZE};

/// NIST AES-256 CTR-DRBG without derivation function
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CtrDrbg {
    key: SecretBuffer<AES256_KEY_SIZE>,
    v: SecretBuffer<AES_BLOCK_SIZE>,
    reseed_counter: u64,
}

impl CtrDrbg {
    /// Instantiate from 48 bytes of entropy and an optional personalization string.
    ///
    /// `security_strength` is accepted for interface parity with the NIST
    /// harness and does not affect the output.
    pub fn new(
        entropy: &[u8; CTR_DRBG_SEED_SIZE],
        personalization: Option<&[u8; CTR_DRBG_SEED_SIZE]>,
        security_strength: u32,
    ) -> Self {
        let _ = security_strength;
        let mut seed_material = *entropy;
        if let Some(p) = personalization {
            for (s, b) in seed_material.iter_mut().zip(p.iter()) {
                *s ^= b;
            }
        }

        let mut drbg = Self::uninstantiated();
        drbg.update(Some(&seed_material));
        drbg.reseed_counter = 1;
        seed_material.zeroize();
        drbg
    }

    /// Instantiate from a 48-byte KAT seed with no personalization.
    pub fn from_seed(seed: &[u8; CTR_DRBG_SEED_SIZE]) -> Self {
        Self::new(seed, None, 256)
    }

    /// All-zero key and counter, the state before any instantiation.
    pub(crate) fn uninstantiated() -> Self {
        Self {
            key: SecretBuffer::zeroed(),
            v: SecretBuffer::zeroed(),
            reseed_counter: 0,
        }
    }

    /// Fill `out` with generator output, then ratchet the state.
    pub fn randombytes(&mut self, out: &mut [u8]) {
        let cipher = Aes256::from_key(self.key.as_array());
        for chunk in out.chunks_mut(AES_BLOCK_SIZE) {
            increment_be(self.v.as_mut_slice());
            let mut block = *self.v.as_array();
            cipher.encrypt(&mut block);
            chunk.copy_from_slice(&block[..chunk.len()]);
            block.zeroize();
        }
        self.update(None);
        self.reseed_counter = self.reseed_counter.wrapping_add(1);
    }

    /// Number of requests served since instantiation.
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    fn update(&mut self, provided: Option<&[u8; CTR_DRBG_SEED_SIZE]>) {
        let cipher = Aes256::from_key(self.key.as_array());
        let mut temp = [0u8; CTR_DRBG_SEED_SIZE];
        for block in temp.chunks_exact_mut(AES_BLOCK_SIZE) {
            increment_be(self.v.as_mut_slice());
            let mut out = *self.v.as_array();
            cipher.encrypt(&mut out);
            block.copy_from_slice(&out);
            out.zeroize();
        }
        if let Some(data) = provided {
            for (t, d) in temp.iter_mut().zip(data.iter()) {
                *t ^= d;
            }
        }
        self.key.copy_from_slice(&temp[..AES256_KEY_SIZE]);
        self.v.copy_from_slice(&temp[AES256_KEY_SIZE..]);
        temp.zeroize();
    }
}

impl RngCore for CtrDrbg {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.randombytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.randombytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.randombytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.randombytes(dest);
        Ok(())
    }
}

impl CryptoRng for CtrDrbg {}

impl core::fmt::Debug for CtrDrbg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CtrDrbg")
            .field("reseed_counter", &self.reseed_counter)
            .finish_non_exhaustive()
    }
}

/// Process-wide generator matching the NIST harness `randombytes_init` / `randombytes` pair
#[cfg(feature = "kat-rng")]
pub mod global {
    use super::*;
    use log::trace;
    use std::sync::{Mutex, MutexGuard};

    static DRBG: Mutex<Option<CtrDrbg>> = Mutex::new(None);

    fn lock() -> MutexGuard<'static, Option<CtrDrbg>> {
        // A poisoned lock still holds a usable generator.
        DRBG.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// (Re)seed the shared generator.
    pub fn randombytes_init(
        entropy: &[u8; CTR_DRBG_SEED_SIZE],
        personalization: Option<&[u8; CTR_DRBG_SEED_SIZE]>,
        security_strength: u32,
    ) {
        trace!(
            "seeding shared CTR-DRBG (personalization: {}, strength: {})",
            personalization.is_some(),
            security_strength
        );
        *lock() = Some(CtrDrbg::new(entropy, personalization, security_strength));
    }

    /// Draw from the shared generator.
    ///
    /// Before the first [`randombytes_init`] the generator runs from the
    /// all-zero state, as the NIST harness does.
    pub fn randombytes(out: &mut [u8]) {
        lock()
            .get_or_insert_with(CtrDrbg::uninstantiated)
            .randombytes(out);
    }

    /// Handle implementing `RngCore` over the shared generator
    #[derive(Debug, Clone, Copy, Default)]
    pub struct KatRng;

    impl RngCore for KatRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            randombytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            randombytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            randombytes(dest);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            randombytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for KatRng {}
}
