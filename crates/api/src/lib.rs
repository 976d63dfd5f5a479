//! Public API traits and types for the saber workspace
//!
//! This crate provides the public API surface shared by every crate in the
//! workspace: the error type, the key encapsulation trait and the byte
//! serialization contracts that key and ciphertext types implement.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{FixedSize, Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
