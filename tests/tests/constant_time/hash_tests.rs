//! SHA-3 over fixed-size secret input

use std::hint::black_box;

use saber_algorithms::hash::{Sha3_256, Sha3_512};

use super::{assert_same_timing, TestConfig};

#[test]
fn test_sha3_256_input_independence() {
    let config = TestConfig::for_hash();
    let zeros = [0u8; 64];
    let ones = [0xffu8; 64];

    assert_same_timing(
        "SHA3-256 (zeros vs ones)",
        &config,
        || {
            black_box(Sha3_256::digest_parts(&[black_box(&zeros[..])]));
        },
        || {
            black_box(Sha3_256::digest_parts(&[black_box(&ones[..])]));
        },
    );
}

#[test]
fn test_sha3_512_input_independence() {
    let config = TestConfig::for_hash();
    let m = [0x00u8; 32];
    let hpk = [0xa5u8; 32];
    let m_other = [0xffu8; 32];

    assert_same_timing(
        "SHA3-512 (m || H(pk), two messages)",
        &config,
        || {
            black_box(Sha3_512::digest_parts(&[black_box(&m[..]), &hpk[..]]));
        },
        || {
            black_box(Sha3_512::digest_parts(&[black_box(&m_other[..]), &hpk[..]]));
        },
    );
}
