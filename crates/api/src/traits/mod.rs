//! Trait definitions implemented by the saber algorithm crates

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{FixedSize, Serialize, SerializeSecret};
