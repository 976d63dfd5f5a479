//! Validation helpers for byte-oriented entry points

use super::{Error, Result};

/// Validate that a buffer has exactly the expected length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
