//! Ring parameters for Z_Q[X]/(X^256 + 1) with power-of-two Q

/// Degree of every ring used here
pub const RING_DEGREE: usize = 256;

/// Trait defining a power-of-two modulus and the ring degree
///
/// Because Q divides 2^16, coefficients are kept as `u16` residues modulo
/// 2^16 and arithmetic simply wraps; only the low `LOG_Q` bits carry
/// meaning and the rest are discarded when a polynomial is packed.
pub trait Modulus {
    /// log2 of the modulus
    const LOG_Q: u32;

    /// The modulus Q = 2^LOG_Q
    const Q: u32 = 1 << Self::LOG_Q;

    /// The polynomial degree N (number of coefficients)
    const N: usize = RING_DEGREE;

    /// Mask selecting the significant bits of a coefficient
    const MASK: u16 = ((1u32 << Self::LOG_Q) - 1) as u16;
}

/// Modulus 2^LOG_Q selected at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PowerOfTwo<const LOG_Q: u32>;

impl<const LOG_Q: u32> Modulus for PowerOfTwo<LOG_Q> {
    const LOG_Q: u32 = LOG_Q;
}

/// Saber's large modulus q = 2^13
pub type SaberQ = PowerOfTwo<13>;

/// Saber's rounding modulus p = 2^10
pub type SaberP = PowerOfTwo<10>;

/// Check if N is a power of 2
pub const fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}
