//! Security primitives and memory safety utilities

pub mod memory;
pub mod secret;

pub use secret::SecretBuffer;

// Re-export memory barrier utilities
pub use memory::barrier;
