//! Constant-time operations to prevent timing attacks

use core::sync::atomic::{compiler_fence, Ordering};
use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slice lengths are
/// treated as public information.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Accumulator-based equality of two equal-length buffers.
///
/// Returns `0xFF` when every byte matches and `0x00` otherwise. All bytes are
/// always visited; the only data-dependent value is the returned mask.
pub fn ct_eq_mask(a: &[u8], b: &[u8]) -> u8 {
    if a.len() != b.len() {
        return 0;
    }

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    compiler_fence(Ordering::SeqCst);

    // (-acc) >> 63 is 1 exactly when acc != 0
    let diff = (acc as u64).wrapping_neg() >> 63;
    ((diff as u8) ^ 1).wrapping_neg()
}

/// Byte-wise constant-time selection over whole buffers.
///
/// Writes `a ^ (mask & (a ^ b))` into `out`: `b` when `mask == 0xFF`, `a`
/// when `mask == 0x00`.
pub fn ct_select_bytes(out: &mut [u8], a: &[u8], b: &[u8], mask: u8) {
    debug_assert_eq!(out.len(), a.len());
    debug_assert_eq!(a.len(), b.len());

    for ((o, x), y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = x ^ (mask & (x ^ y));
    }
}
