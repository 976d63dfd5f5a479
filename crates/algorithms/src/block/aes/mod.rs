//! AES-256 block cipher (FIPS 197), encryption direction
//!
//! ## Constant-Time Guarantees
//!
//! - GF(2^8) arithmetic is branchless
//! - The S-box is computed (inversion plus affine map), never looked up
//! - Every round touches the same bytes regardless of key or data

use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBuffer;
use saber_params::utils::symmetric::{AES256_KEY_SIZE, AES256_ROUNDS, AES_BLOCK_SIZE};

/// Words in the expanded AES-256 key schedule
const SCHEDULE_WORDS: usize = 4 * (AES256_ROUNDS + 1);

/// Bytes in the expanded AES-256 key schedule
const SCHEDULE_BYTES: usize = 4 * SCHEDULE_WORDS;

/// Round constants for AES key expansion; AES-256 uses indices 1 through 7
const RCON: [u32; 8] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a <<= 1;
        a ^= hi.wrapping_neg() & 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸), with 0 ↦ 0) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let b = word.to_be_bytes();
    u32::from_be_bytes([sbox(b[0]), sbox(b[1]), sbox(b[2]), sbox(b[3])])
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-256 block cipher with its expanded key schedule
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<SCHEDULE_BYTES>,
}

impl Aes256 {
    /// Expand a 32-byte key
    pub fn from_key(key: &[u8; AES256_KEY_SIZE]) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in 8..SCHEDULE_WORDS {
            let mut temp = w[i - 1];
            if i % 8 == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / 8];
            } else if i % 8 == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - 8] ^ temp;
        }

        let mut round_keys = SecretBuffer::<SCHEDULE_BYTES>::zeroed();
        for (i, word) in w.iter().enumerate() {
            round_keys.as_mut_slice()[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
        }
        w.zeroize();

        Self { round_keys }
    }

    /// Encrypt one 16-byte block in place
    pub fn encrypt(&self, block: &mut [u8; AES_BLOCK_SIZE]) {
        let round_key_bytes = self.round_keys.as_slice();

        Self::add_round_key(block, &round_key_bytes[0..16]);
        for round in 1..AES256_ROUNDS {
            Self::sub_bytes(block);
            Self::shift_rows(block);
            Self::mix_columns(block);
            let offset = round * 16;
            Self::add_round_key(block, &round_key_bytes[offset..offset + 16]);
        }
        Self::sub_bytes(block);
        Self::shift_rows(block);
        let offset = AES256_ROUNDS * 16;
        Self::add_round_key(block, &round_key_bytes[offset..offset + 16]);
    }

    fn sub_bytes(state: &mut [u8; 16]) {
        for byte in state.iter_mut() {
            *byte = sbox(*byte);
        }
        compiler_fence(Ordering::SeqCst);
    }

    fn shift_rows(state: &mut [u8; 16]) {
        let t = *state;
        // Row r of column c lives at index 4c + r and moves left by r columns.
        for c in 0..4 {
            for r in 1..4 {
                state[4 * c + r] = t[4 * ((c + r) % 4) + r];
            }
        }
    }

    #[inline(always)]
    fn mul2(byte: u8) -> u8 {
        let high = byte >> 7;
        (byte << 1) ^ (high * 0x1B)
    }

    fn mix_columns(state: &mut [u8; 16]) {
        for c in 0..4 {
            let i = c * 4;
            let s0 = state[i];
            let s1 = state[i + 1];
            let s2 = state[i + 2];
            let s3 = state[i + 3];
            state[i] = Self::mul2(s0) ^ Self::mul2(s1) ^ s1 ^ s2 ^ s3;
            state[i + 1] = s0 ^ Self::mul2(s1) ^ Self::mul2(s2) ^ s2 ^ s3;
            state[i + 2] = s0 ^ s1 ^ Self::mul2(s2) ^ Self::mul2(s3) ^ s3;
            state[i + 3] = Self::mul2(s0) ^ s0 ^ s1 ^ s2 ^ Self::mul2(s3);
        }
    }

    #[inline(always)]
    fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
        for (s, k) in state.iter_mut().zip(round_key) {
            *s ^= k;
        }
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;

    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut k = [0u8; AES256_KEY_SIZE];
        k.copy_from_slice(key);
        let cipher = Self::from_key(&k);
        k.zeroize();
        Ok(cipher)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let mut state = [0u8; AES_BLOCK_SIZE];
        state.copy_from_slice(block);
        self.encrypt(&mut state);
        block.copy_from_slice(&state);
        state.zeroize();
        Ok(())
    }
}
