//! Error handling for the public API

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

impl From<rand::Error> for Error {
    fn from(_e: rand::Error) -> Self {
        Self::RandomGenerationError {
            context: "random source",
            #[cfg(feature = "std")]
            message: _e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
