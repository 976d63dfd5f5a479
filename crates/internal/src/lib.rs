//! Internal utilities shared by the saber crates
//!
//! Nothing in here is part of the public API surface; the helpers exist so
//! that every crate in the workspace performs secret comparisons and byte
//! loads the same way.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;

pub use constant_time::{ct_eq, ct_eq_mask, ct_select_bytes};
