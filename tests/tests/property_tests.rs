//! Property-based tests for ring arithmetic, coefficient packing and the KEM

use proptest::prelude::*;
use saber_algorithms::poly::prelude::*;
use saber_api::{Kem, Serialize};
use saber_kem::saber::{FireSaberParams, LightSaberParams, SaberParams, SaberParamsImpl};
use saber_kem::{SaberCiphertext, SaberKem};

fn poly_q() -> impl Strategy<Value = Polynomial<SaberQ>> {
    prop::collection::vec(any::<u16>(), RING_DEGREE).prop_map(|v| {
        let mut coeffs = [0u16; RING_DEGREE];
        coeffs.copy_from_slice(&v);
        Polynomial::<SaberQ>::from_array(coeffs)
    })
}

/// Small signed coefficients in [-5, 5], as produced by the widest sampler
fn poly_small() -> impl Strategy<Value = Polynomial<SaberQ>> {
    prop::collection::vec(-5i16..=5, RING_DEGREE).prop_map(|v| {
        let mut coeffs = [0u16; RING_DEGREE];
        for (c, x) in coeffs.iter_mut().zip(v) {
            *c = x as u16;
        }
        Polynomial::<SaberQ>::from_array(coeffs)
    })
}

fn roundtrip_for<P: SaberParams>(
    seed_a: [u8; 32],
    seed_s: [u8; 32],
    z: [u8; 32],
    m: [u8; 32],
) -> Result<(), TestCaseError> {
    let kp = SaberKem::<P>::keypair_derand(&seed_a, &seed_s, &z).unwrap();
    let (ct, ss) = SaberKem::<P>::encapsulate_derand(&kp.public_key, &m).unwrap();
    let recovered = SaberKem::<P>::decapsulate(&kp.secret_key, &ct).unwrap();
    prop_assert_eq!(ss, recovered);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn toom_matches_schoolbook(a in poly_q(), s in poly_small()) {
        let mut acc = Polynomial::<SaberQ>::zero();
        a.mul_acc(&s, &mut acc);
        prop_assert_eq!(acc, a.schoolbook_mul(&s));
    }

    #[test]
    fn mul_acc_accumulates(a in poly_q(), s in poly_small(), start in poly_q()) {
        let mut acc = start.clone();
        a.mul_acc(&s, &mut acc);
        prop_assert_eq!(acc, start.add(&a.schoolbook_mul(&s)));
    }

    #[test]
    fn pack_then_unpack_keeps_low_bits(p in poly_q(), bits in 1usize..=13) {
        let packed = <DefaultCoefficientSerde as CoefficientPacker<SaberQ>>::pack_coeffs(&p, bits).unwrap();
        prop_assert_eq!(packed.len(), bytes_required(bits));

        let unpacked: Polynomial<SaberQ> =
            <DefaultCoefficientSerde as CoefficientUnpacker<SaberQ>>::unpack_coeffs(&packed, bits).unwrap();
        let mask = (1u16 << bits) - 1;
        for (a, b) in p.coeffs.iter().zip(unpacked.coeffs.iter()) {
            prop_assert_eq!(a & mask, *b);
        }
    }

    #[test]
    fn unpack_then_pack_is_identity(bytes in prop::collection::vec(any::<u8>(), bytes_required(10))) {
        let p: Polynomial<SaberP> =
            <DefaultCoefficientSerde as CoefficientUnpacker<SaberP>>::unpack_coeffs(&bytes, 10).unwrap();
        let packed = <DefaultCoefficientSerde as CoefficientPacker<SaberP>>::pack_coeffs(&p, 10).unwrap();
        prop_assert_eq!(packed, bytes);
    }

    #[test]
    fn cbd_coefficients_stay_in_range(buf in prop::collection::vec(any::<u8>(), cbd_bytes(8))) {
        let p: Polynomial<SaberQ> =
            <DefaultSamplers as CbdSampler<SaberQ>>::sample_cbd(&buf, 8).unwrap();
        for c in p.coeffs.iter() {
            let v = *c as i16;
            prop_assert!((-4..=4).contains(&v), "coefficient {} out of range", v);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn lightsaber_roundtrip(seed_a in any::<[u8; 32]>(), seed_s in any::<[u8; 32]>(),
                            z in any::<[u8; 32]>(), m in any::<[u8; 32]>()) {
        roundtrip_for::<LightSaberParams>(seed_a, seed_s, z, m)?;
    }

    #[test]
    fn saber_roundtrip(seed_a in any::<[u8; 32]>(), seed_s in any::<[u8; 32]>(),
                       z in any::<[u8; 32]>(), m in any::<[u8; 32]>()) {
        roundtrip_for::<SaberParamsImpl>(seed_a, seed_s, z, m)?;
    }

    #[test]
    fn firesaber_roundtrip(seed_a in any::<[u8; 32]>(), seed_s in any::<[u8; 32]>(),
                           z in any::<[u8; 32]>(), m in any::<[u8; 32]>()) {
        roundtrip_for::<FireSaberParams>(seed_a, seed_s, z, m)?;
    }

    #[test]
    fn tampered_ciphertext_is_rejected_implicitly(
        seed in any::<[u8; 32]>(),
        m in any::<[u8; 32]>(),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        type K = SaberKem<SaberParamsImpl>;
        let kp = K::keypair_derand(&seed, &seed, &seed).unwrap();
        let (ct, ss) = K::encapsulate_derand(&kp.public_key, &m).unwrap();

        let mut bytes = ct.to_bytes();
        let idx = pos.index(bytes.len());
        bytes[idx] ^= 1 << bit;
        let tampered = SaberCiphertext::<SaberParamsImpl>::from_bytes(&bytes).unwrap();

        // A flipped bit never produces an error, only an unrelated key.
        let rejected = K::decapsulate(&kp.secret_key, &tampered).unwrap();
        prop_assert_ne!(ss, rejected);
    }
}
