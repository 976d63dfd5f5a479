//! Cross-crate behaviour of the public API

use rand::rngs::StdRng;
use rand::SeedableRng;
use saber_api::{Error as ApiError, FixedSize, Kem, Serialize, SerializeSecret};
use saber_internal::constant_time::{ct_eq, ct_eq_mask, ct_select_bytes};
use saber_kem::saber::{kat, SaberParamsImpl};
use saber_kem::{
    FireSaber, LightSaber, Saber, SaberCiphertext, SaberPublicKey, SaberSecretKey,
    SaberSharedSecret, SaberVariant,
};
use saber_params::pqc::saber::{FIRESABER, LIGHTSABER, SABER};
use saber_tests::suites::kat::runner::generate;

#[test]
fn test_constant_time_helpers() {
    let a = [1u8, 2, 3, 4];
    let b = [1u8, 2, 3, 4];
    let c = [1u8, 2, 3, 5];

    assert!(ct_eq(a, b));
    assert!(!ct_eq(a, c));
    assert!(!ct_eq(&a[..], &a[..3]));
    assert_eq!(ct_eq_mask(&a, &b), 0xff);
    assert_eq!(ct_eq_mask(&a, &c), 0x00);

    let mut out = [0u8; 4];
    ct_select_bytes(&mut out, &a, &c, ct_eq_mask(&a, &b));
    assert_eq!(out, c);
}

#[test]
fn test_sizes_agree_with_params_crate() {
    for (variant, set) in SaberVariant::ALL.iter().zip([LIGHTSABER, SABER, FIRESABER]) {
        assert_eq!(variant.name(), set.name);
        assert_eq!(variant.rank(), set.l);
        assert_eq!(variant.public_key_bytes(), set.public_key_size, "{variant}");
        assert_eq!(variant.secret_key_bytes(), set.secret_key_size, "{variant}");
        assert_eq!(variant.ciphertext_bytes(), set.ciphertext_size, "{variant}");
        assert_eq!(variant.shared_secret_bytes(), set.shared_secret_size);
    }

    type P = SaberParamsImpl;
    assert_eq!(<SaberPublicKey<P> as FixedSize>::SIZE, SABER.public_key_size);
    assert_eq!(<SaberSecretKey<P> as FixedSize>::SIZE, SABER.secret_key_size);
    assert_eq!(<SaberCiphertext<P> as FixedSize>::SIZE, SABER.ciphertext_size);
    assert_eq!(<SaberSharedSecret as FixedSize>::SIZE, 32);
}

fn exchange_through_bytes<K>()
where
    K: Kem,
    K::PublicKey: Serialize,
    K::SecretKey: SerializeSecret,
    K::Ciphertext: Serialize,
    K::SharedSecret: PartialEq + core::fmt::Debug,
{
    let mut rng = StdRng::seed_from_u64(42);
    let kp = K::keypair(&mut rng).unwrap();

    // Ship the public key, keep the secret key in storage.
    let pk_wire = K::public_key(&kp).to_bytes();
    let sk_stored = K::secret_key(&kp).to_bytes_zeroizing();

    let pk = K::PublicKey::from_bytes(&pk_wire).unwrap();
    let (ct, ss_sender) = K::encapsulate(&mut rng, &pk).unwrap();
    let ct_wire = ct.to_bytes();

    let sk = K::SecretKey::from_bytes(&sk_stored).unwrap();
    let ct = K::Ciphertext::from_bytes(&ct_wire).unwrap();
    let ss_receiver = K::decapsulate(&sk, &ct).unwrap();

    assert_eq!(ss_sender, ss_receiver, "{}", K::name());
}

#[test]
fn test_exchange_through_bytes() {
    exchange_through_bytes::<LightSaber>();
    exchange_through_bytes::<Saber>();
    exchange_through_bytes::<FireSaber>();
}

#[test]
fn test_variant_and_typed_api_interoperate() {
    let mut rng = StdRng::seed_from_u64(7);
    let kp = FireSaber::keypair(&mut rng).unwrap();

    let variant: SaberVariant = "firesaber".parse().unwrap();
    let mut ct = vec![0u8; variant.ciphertext_bytes()];
    let mut ss = [0u8; 32];
    variant
        .encapsulate(&mut rng, kp.public_key.as_bytes(), &mut ct, &mut ss)
        .unwrap();

    let ct = SaberCiphertext::from_bytes(&ct).unwrap();
    let recovered = FireSaber::decapsulate(&kp.secret_key, &ct).unwrap();
    assert_eq!(recovered.as_array(), &ss);
}

#[test]
fn test_cross_variant_bytes_are_rejected() {
    let mut rng = StdRng::seed_from_u64(3);
    let light = LightSaber::keypair(&mut rng).unwrap();

    let err = <Saber as Kem>::PublicKey::from_bytes(light.public_key.as_bytes()).unwrap_err();
    assert!(matches!(err, ApiError::InvalidLength { .. }), "{err:?}");

    let mut ss = [0u8; 32];
    let ct = vec![0u8; LIGHTSABER.ciphertext_size];
    assert!(SaberVariant::Saber
        .decapsulate(&light.secret_key.to_bytes_zeroizing(), &ct, &mut ss)
        .is_err());
}

#[test]
fn test_global_kat_generator_matches_local_drbg() {
    let mut entropy = [0u8; 48];
    for (i, b) in entropy.iter_mut().enumerate() {
        *b = i as u8;
    }

    // Only this test touches the process-wide generator in this binary.
    kat::randombytes_init(&entropy, None, 256);
    let mut seed = [0u8; 48];
    kat::randombytes(&mut seed);

    let variant = SaberVariant::LightSaber;
    kat::randombytes_init(&seed, None, 256);
    let mut pk = vec![0u8; variant.public_key_bytes()];
    let mut sk = vec![0u8; variant.secret_key_bytes()];
    let mut ct = vec![0u8; variant.ciphertext_bytes()];
    let mut ss = [0u8; 32];
    kat::keypair(variant, &mut pk, &mut sk).unwrap();
    kat::encapsulate(variant, &mut ct, &mut ss, &pk).unwrap();

    let expected = generate(variant, 0, &seed).unwrap();
    assert_eq!(pk, expected.pk);
    assert_eq!(sk, expected.sk);
    assert_eq!(ct, expected.ct);
    assert_eq!(ss.to_vec(), expected.ss);

    let mut ss_dec = [0u8; 32];
    kat::decapsulate(variant, &mut ss_dec, &ct, &sk).unwrap();
    assert_eq!(ss_dec, ss);
}
