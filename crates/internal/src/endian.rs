//! Endianness utility functions

/// Load up to eight little-endian bytes into the low end of a u64.
///
/// Used by samplers that consume 3, 4 or 5 bytes at a time.
pub fn u64_from_le_partial(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() <= 8);
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

/// Increment a big-endian counter block in place, wrapping on overflow.
///
/// Every byte is touched regardless of where the carry stops.
pub fn increment_be(counter: &mut [u8]) {
    let mut carry = 1u16;
    for byte in counter.iter_mut().rev() {
        let sum = *byte as u16 + carry;
        *byte = sum as u8;
        carry = sum >> 8;
    }
}
