//! Constants for the AES-256 CTR-DRBG

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES-256 round count
pub const AES256_ROUNDS: usize = 14;

/// CTR-DRBG seed length (key + counter block) in bytes
pub const CTR_DRBG_SEED_SIZE: usize = AES256_KEY_SIZE + AES_BLOCK_SIZE;
