//! Constants for FIPS 202 hash and extendable-output functions

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Rate (block size) of SHA3-256 in bytes
pub const SHA3_256_BLOCK_SIZE: usize = 136;

/// Rate (block size) of SHA3-512 in bytes
pub const SHA3_512_BLOCK_SIZE: usize = 72;

/// Rate of SHAKE-128 in bytes
pub const SHAKE128_BLOCK_SIZE: usize = 168;

/// Rate of SHAKE-256 in bytes
pub const SHAKE256_BLOCK_SIZE: usize = 136;

/// Keccak-f[1600] state size in bytes
pub const KECCAK_STATE_BYTES: usize = 200;

/// Keccak-f[1600] round count
pub const KECCAK_ROUNDS: usize = 24;
