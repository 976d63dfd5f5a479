//! Keccak-f[1600] permutation and the byte-oriented sponge (FIPS 202)
//!
//! SHA3-256, SHA3-512, SHAKE128 and SHAKE256 are thin wrappers around
//! [`KeccakSponge`], differing only in rate, domain-separation suffix and
//! how many bytes they read back.

use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::{Zeroize, ZeroizeOnDrop};

use saber_params::utils::hash::KECCAK_ROUNDS;

/// Number of 64-bit lanes in the state
pub const KECCAK_STATE_SIZE: usize = 25;

/// Domain-separation suffix for SHA-3 hashes (`01` followed by pad10*1)
pub const SHA3_SUFFIX: u8 = 0x06;

/// Domain-separation suffix for SHAKE XOFs (`1111` followed by pad10*1)
pub const SHAKE_SUFFIX: u8 = 0x1F;

/// Keccak round constants.
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets for the ρ step, in π traversal order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visited at each step of the π cycle starting from lane 1.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the full 24-round Keccak-f[1600] permutation in place.
pub fn keccak_f1600(state: &mut [u64; KECCAK_STATE_SIZE]) {
    for &rc in RC.iter() {
        // θ
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }
        // ρ + π
        let mut t = state[1];
        for i in 0..24 {
            let j = PI[i];
            let tmp = state[j];
            state[j] = t.rotate_left(RHO[i]);
            t = tmp;
        }
        // χ
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&state[5 * y..5 * y + 5]);
            for x in 0..5 {
                state[x + 5 * y] ^= (!row[(x + 1) % 5]) & row[(x + 2) % 5];
            }
        }
        // ι
        state[0] ^= rc;
    }
}

#[inline(always)]
fn get_byte_from_state(state: &[u64; KECCAK_STATE_SIZE], pos: usize) -> u8 {
    let word = pos / 8;
    let shift = (pos % 8) * 8;
    ((state[word] >> shift) & 0xFF) as u8
}

#[inline(always)]
fn xor_byte_in_state(state: &mut [u64; KECCAK_STATE_SIZE], pos: usize, val: u8) {
    // Unconditional read-modify-write so zero input costs the same as random input.
    let word = pos / 8;
    let shift = (pos % 8) * 8;
    let before = state[word];
    state[word] = before ^ ((val as u64) << shift);
    compiler_fence(Ordering::SeqCst);
}

/// Keccak sponge absorbing and squeezing `RATE` bytes per permutation.
///
/// The sponge itself does not track whether it is absorbing or squeezing;
/// callers call [`pad`](Self::pad) exactly once between the two phases.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakSponge<const RATE: usize> {
    state: [u64; KECCAK_STATE_SIZE],
    pt: usize,
}

impl<const RATE: usize> KeccakSponge<RATE> {
    const RATE_OK: () = assert!(RATE > 0 && RATE < 200 && RATE % 8 == 0);

    /// Sponge with the all-zero initial state.
    pub fn new() -> Self {
        let () = Self::RATE_OK;
        Self {
            state: [0u64; KECCAK_STATE_SIZE],
            pt: 0,
        }
    }

    /// Rate in bytes.
    pub const fn rate() -> usize {
        RATE
    }

    /// XOR `data` into the rate portion, permuting whenever a block fills.
    pub fn absorb(&mut self, data: &[u8]) {
        for &b in data {
            xor_byte_in_state(&mut self.state, self.pt, b);
            self.pt += 1;
            if self.pt == RATE {
                keccak_f1600(&mut self.state);
                self.pt = 0;
            }
        }
    }

    /// Apply the domain suffix and pad10*1, then permute into squeezing mode.
    pub fn pad(&mut self, suffix: u8) {
        xor_byte_in_state(&mut self.state, self.pt, suffix);
        xor_byte_in_state(&mut self.state, RATE - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.pt = 0;
    }

    /// Read `out.len()` bytes, continuing from where the last call stopped.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            if self.pt == RATE {
                keccak_f1600(&mut self.state);
                self.pt = 0;
            }
            *byte = get_byte_from_state(&self.state, self.pt);
            self.pt += 1;
        }
    }

    /// Return to the all-zero initial state.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.pt = 0;
    }
}

impl<const RATE: usize> Default for KeccakSponge<RATE> {
    fn default() -> Self {
        Self::new()
    }
}
