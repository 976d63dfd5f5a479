//! Sizes of the symmetric building blocks

pub mod hash;
pub mod symmetric;
