//! Timing comparisons for secret-dependent code paths
//!
//! These are statistical smoke tests, not proofs; run them on an idle
//! machine with `cargo test --release --test constant_time_tests`.

mod constant_time;
