//! Constants for the Saber key encapsulation mechanism (round 3)

/// Polynomial degree
pub const SABER_N: usize = 256;

/// log2 of the modulus q
pub const SABER_EQ: usize = 13;

/// log2 of the rounding modulus p
pub const SABER_EP: usize = 10;

/// Modulus q = 2^13
pub const SABER_Q: u16 = 1 << SABER_EQ;

/// Rounding modulus p = 2^10
pub const SABER_P: u16 = 1 << SABER_EP;

/// Length of the public matrix seed
pub const SABER_SEED_BYTES: usize = 32;

/// Length of the secret sampling seed
pub const SABER_NOISE_SEED_BYTES: usize = 32;

/// Length of the message and of the shared secret
pub const SABER_KEY_BYTES: usize = 32;

/// Length of the SHA3-256 digests embedded in keys
pub const SABER_HASH_BYTES: usize = 32;

/// A polynomial packed at 13 bits per coefficient
pub const SABER_POLY_BYTES: usize = SABER_EQ * SABER_N / 8;

/// A polynomial packed at 10 bits per coefficient
pub const SABER_POLY_COMPRESSED_BYTES: usize = SABER_EP * SABER_N / 8;

/// One Saber security level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberParameterSet {
    /// Display name
    pub name: &'static str,

    /// Module rank (number of polynomials per vector)
    pub l: usize,

    /// Centered-binomial parameter of the secret distribution
    pub mu: usize,

    /// log2 of the message-embedding modulus T
    pub et: usize,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// KEM secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// Bytes of a packed rank-`l` vector at 13 bits.
pub const fn polyvec_bytes(l: usize) -> usize {
    l * SABER_POLY_BYTES
}

/// Bytes of a packed rank-`l` vector at 10 bits.
pub const fn polyvec_compressed_bytes(l: usize) -> usize {
    l * SABER_POLY_COMPRESSED_BYTES
}

/// Bytes of the packed `cm` polynomial at `et` bits.
pub const fn scale_bytes(et: usize) -> usize {
    et * SABER_N / 8
}

/// Public key: packed `b` followed by the matrix seed.
pub const fn public_key_bytes(l: usize) -> usize {
    polyvec_compressed_bytes(l) + SABER_SEED_BYTES
}

/// KEM secret key: packed `s`, public key, H(pk), z.
pub const fn secret_key_bytes(l: usize) -> usize {
    polyvec_bytes(l) + public_key_bytes(l) + SABER_HASH_BYTES + SABER_KEY_BYTES
}

/// Ciphertext: packed `b'` followed by packed `cm`.
pub const fn ciphertext_bytes(l: usize, et: usize) -> usize {
    polyvec_compressed_bytes(l) + scale_bytes(et)
}

const fn parameter_set(name: &'static str, l: usize, mu: usize, et: usize) -> SaberParameterSet {
    SaberParameterSet {
        name,
        l,
        mu,
        et,
        public_key_size: public_key_bytes(l),
        secret_key_size: secret_key_bytes(l),
        ciphertext_size: ciphertext_bytes(l, et),
        shared_secret_size: SABER_KEY_BYTES,
    }
}

/// LightSaber (NIST level 1)
pub const LIGHTSABER: SaberParameterSet = parameter_set("LightSaber", 2, 10, 3);

/// Saber (NIST level 3)
pub const SABER: SaberParameterSet = parameter_set("Saber", 3, 8, 4);

/// FireSaber (NIST level 5)
pub const FIRESABER: SaberParameterSet = parameter_set("FireSaber", 4, 6, 6);

const _: () = assert!(SABER.public_key_size == 992);
const _: () = assert!(SABER.secret_key_size == 2304);
const _: () = assert!(SABER.ciphertext_size == 1088);
const _: () = assert!(LIGHTSABER.public_key_size == 672);
const _: () = assert!(LIGHTSABER.secret_key_size == 1568);
const _: () = assert!(LIGHTSABER.ciphertext_size == 736);
const _: () = assert!(FIRESABER.public_key_size == 1312);
const _: () = assert!(FIRESABER.secret_key_size == 3040);
const _: () = assert!(FIRESABER.ciphertext_size == 1472);
