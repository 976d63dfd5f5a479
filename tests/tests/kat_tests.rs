//! NIST Known Answer Tests
//!
//! Place `LightSaber.rsp`, `Saber.rsp` and `FireSaber.rsp` from the
//! reference submission in `src/vectors/saber/`; variants without a file
//! are skipped.

use saber_algorithms::hash::Sha3_256;
use saber_algorithms::rng::CtrDrbg;
use saber_kem::SaberVariant;
use saber_tests::suites::kat::runner::{generate, run_all};
use saber_tests::suites::kat::{format_rsp, load_vectors, parse_rsp, KatError, KatVector};

/// Seeds the way `PQCgenKAT_kem` does: a master DRBG over 0x00..0x2f
/// yields one 48-byte seed per record.
fn nist_seeds(count: usize) -> Vec<[u8; 48]> {
    let mut entropy = [0u8; 48];
    for (i, b) in entropy.iter_mut().enumerate() {
        *b = i as u8;
    }
    let mut master = CtrDrbg::new(&entropy, None, 256);
    (0..count)
        .map(|_| {
            let mut seed = [0u8; 48];
            master.randombytes(&mut seed);
            seed
        })
        .collect()
}

fn synthesize(variant: SaberVariant, count: usize) -> Vec<KatVector> {
    nist_seeds(count)
        .into_iter()
        .enumerate()
        .map(|(i, seed)| {
            let out = generate(variant, i, &seed).unwrap();
            KatVector {
                count: i,
                seed,
                pk: out.pk,
                sk: out.sk,
                ct: out.ct,
                ss: out.ss,
            }
        })
        .collect()
}

#[test]
fn test_reference_kat_files() {
    for variant in SaberVariant::ALL {
        match load_vectors(variant).unwrap() {
            Some(vectors) => {
                let passed = run_all(variant, &vectors).unwrap_or_else(|e| panic!("{variant}: {e}"));
                assert!(passed > 0, "{variant}: empty KAT file");
                println!("{variant}: {passed} KAT records passed");
            }
            None => println!("{variant}: no KAT file, skipping"),
        }
    }
}

#[test]
fn test_first_seed_matches_nist_generator() {
    let seeds = nist_seeds(1);
    assert_eq!(
        hex::encode_upper(seeds[0]),
        "061550234D158C5EC95595FE04EF7A25767F2E24CC2BC479D09D86DC9ABCFDE7\
         056A8C266F9EF97ED08541DBD2E1FFA1"
    );
}

/// `count = 0` of each published `PQCkemKAT_*.rsp`: leading pk bytes,
/// SHA3-256 of pk, sk and ct, the shared secret, and the key returned for
/// the ciphertext with bit 0 of byte 0 flipped.
struct FirstRecord {
    variant: SaberVariant,
    pk_prefix: &'static str,
    pk_sha3: &'static str,
    sk_sha3: &'static str,
    ct_sha3: &'static str,
    ss: &'static str,
    rejected_ss: &'static str,
}

const FIRST_RECORDS: [FirstRecord; 3] = [
    FirstRecord {
        variant: SaberVariant::LightSaber,
        pk_prefix: "a92cbdb022f926bce5679bb3ee348120",
        pk_sha3: "96138744df873bb04d151f98662646dd8e5565afb6e1214b8d445130455c1988",
        sk_sha3: "29680a4736081703c41458682ab424b137cf841d4cbc0593d4b8d7f94a62a821",
        ct_sha3: "89152ce3b03491f61be0a47d059216eab14892e677f37370cd23cbfb53869bc0",
        ss: "bc9b4b82360b9079e6d26fdd12a58994a12eaf458a3dd5f310322a35a65752f5",
        rejected_ss: "502921e2f4923ccea16f52b9f7cfaddde3858310fbb1d561ed9155a1347789ee",
    },
    FirstRecord {
        variant: SaberVariant::Saber,
        pk_prefix: "29157c69a067dd1c151115a9bbeb2d6e",
        pk_sha3: "15a7ba143fd2c97ed443a2383aa01c4a06a578ae152521f7af6c64a51a8fac17",
        sk_sha3: "9348df05a945b4f56909cf684e05fb8d2a8e5ca0077a47441fd801e8d0ccef06",
        ct_sha3: "57470ae77e00cf6c44f5ab82f30b4e3e37288cee78b0e0c4bd2aec42e39c32d8",
        ss: "156533536c8435f82cc36fc1ef9528dedc49223dda0091617dc1acaf6058d1ca",
        rejected_ss: "3158eaa761fd6c5e856158b461d03e1dc665581adde80a64de9a2390eb8e39fb",
    },
    FirstRecord {
        variant: SaberVariant::FireSaber,
        pk_prefix: "7aef892e4ee8da1b65a5cbca85954aeb",
        pk_sha3: "49aac773cf8141c4336e93eb70e48df500e9a9853dc7d556e474e8133d034992",
        sk_sha3: "cda181369cf3cebb024bcdd22e659068cda69f6b47bb7b1170f94f9b0c29cb3b",
        ct_sha3: "31aaa34dcd2b4dbce34119de5afcd4e3b37cae3d9ac1d9ff5511f08bb23fc96a",
        ss: "b478bdf6d51f9f578e7d5134eefd4f58d76618424e775ca4184635f925c185ad",
        rejected_ss: "40dea298be748d655e65c08fd6e8ff5b1ff8ad4ed5a2e9a6dc2e64e1d2756027",
    },
];

fn sha3_hex(bytes: &[u8]) -> String {
    hex::encode(Sha3_256::digest_parts(&[bytes]))
}

#[test]
fn test_first_record_of_each_published_file() {
    let seed = nist_seeds(1)[0];
    for rec in &FIRST_RECORDS {
        let variant = rec.variant;
        let out = generate(variant, 0, &seed).unwrap();

        assert_eq!(hex::encode(&out.pk[..16]), rec.pk_prefix, "{variant}: pk");
        assert_eq!(sha3_hex(&out.pk), rec.pk_sha3, "{variant}: pk");
        assert_eq!(sha3_hex(&out.sk), rec.sk_sha3, "{variant}: sk");
        assert_eq!(sha3_hex(&out.ct), rec.ct_sha3, "{variant}: ct");
        assert_eq!(hex::encode(&out.ss), rec.ss, "{variant}: ss");

        let mut ct = out.ct.clone();
        ct[0] ^= 0x01;
        let mut ss = [0u8; 32];
        variant.decapsulate(&out.sk, &ct, &mut ss).unwrap();
        assert_eq!(hex::encode(ss), rec.rejected_ss, "{variant}: implicit rejection");
    }
}

#[test]
fn test_generated_file_replays() {
    for variant in SaberVariant::ALL {
        let vectors = synthesize(variant, 3);
        let text = format_rsp(variant.name(), &vectors);
        let parsed = parse_rsp(&text).unwrap();
        assert_eq!(parsed, vectors);
        assert_eq!(run_all(variant, &parsed).unwrap(), 3);
    }
}

#[test]
fn test_records_are_not_interchangeable_between_variants() {
    let vectors = synthesize(SaberVariant::LightSaber, 1);
    match run_all(SaberVariant::Saber, &vectors) {
        Err(KatError::Mismatch { field: "pk", .. }) => {}
        other => panic!("expected a pk mismatch, got {:?}", other),
    }
}

#[test]
fn test_corrupted_ciphertext_is_detected() {
    let mut vectors = synthesize(SaberVariant::Saber, 2);
    vectors[1].ct[10] ^= 0x80;
    match run_all(SaberVariant::Saber, &vectors) {
        Err(KatError::Mismatch { count: 1, field: "ct", .. }) => {}
        other => panic!("expected a ct mismatch in record 1, got {:?}", other),
    }
}
