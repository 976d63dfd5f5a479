//! Errors raised while loading or replaying Known Answer Tests

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("hex decode error in `{field}` at line {line}: {source}")]
    Hex {
        field: String,
        line: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("line {line}: expected `name = value`, got {text:?}")]
    Syntax { line: usize, text: String },

    #[error("vector {count}: missing field `{field}`")]
    MissingField { count: usize, field: &'static str },

    #[error("vector {count}: seed must be 48 bytes, got {len}")]
    SeedLength { count: usize, len: usize },

    #[error("vector {count}: {field} mismatch\n  expected: {expected}\n  actual:   {actual}")]
    Mismatch {
        count: usize,
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("vector {count}: KEM operation failed: {source}")]
    Kem {
        count: usize,
        #[source]
        source: saber_kem::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, KatError>;
