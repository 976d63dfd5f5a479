//! Decapsulation must not reveal whether re-encryption matched.

use std::hint::black_box;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use saber_api::{Kem, Serialize};
use saber_kem::saber::{FireSaberParams, LightSaberParams, SaberParams, SaberParamsImpl};
use saber_kem::{SaberCiphertext, SaberKem};

use super::{assert_same_timing, TestConfig};

fn decaps_valid_vs_tampered<P: SaberParams>() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5ab3);
    let kp = SaberKem::<P>::keypair(&mut rng).unwrap();
    let (ct, _) = SaberKem::<P>::encapsulate(&mut rng, &kp.public_key).unwrap();

    let mut bytes = ct.to_bytes();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    let tampered = SaberCiphertext::<P>::from_bytes(&bytes).unwrap();

    let sk = &kp.secret_key;
    assert_same_timing(
        &format!("{} decapsulation (valid vs tampered)", P::NAME),
        &TestConfig::for_kem(),
        || {
            black_box(SaberKem::<P>::decapsulate(sk, black_box(&ct)).unwrap());
        },
        || {
            black_box(SaberKem::<P>::decapsulate(sk, black_box(&tampered)).unwrap());
        },
    );
}

#[test]
fn test_lightsaber_decapsulation_timing() {
    decaps_valid_vs_tampered::<LightSaberParams>();
}

#[test]
fn test_saber_decapsulation_timing() {
    decaps_valid_vs_tampered::<SaberParamsImpl>();
}

#[test]
fn test_firesaber_decapsulation_timing() {
    decaps_valid_vs_tampered::<FireSaberParams>();
}
