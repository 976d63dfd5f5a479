//! Test harnesses for the saber workspace
//!
//! - [`suites::constant_time`]: Welch t-test timing comparisons
//! - [`suites::kat`]: NIST `.rsp` Known Answer Test parsing and replay

pub mod suites;
