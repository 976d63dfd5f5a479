//! Polynomial arithmetic for power-of-two module lattices
//!
//! Rings are Z_Q[X]/(X^256 + 1) with Q = 2^k. Coefficients are `u16` and
//! arithmetic wraps modulo 2^16, which is correct modulo every smaller
//! power of two. Multiplication is Toom-Cook 4-way over Karatsuba.

pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod serialize;
pub mod toom;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::params::{Modulus, PowerOfTwo, SaberP, SaberQ, RING_DEGREE};
    pub use super::polynomial::Polynomial;
    pub use super::sampling::{cbd_bytes, CbdSampler, DefaultSamplers};
    pub use super::serialize::{
        bytes_required, CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
    };
}
