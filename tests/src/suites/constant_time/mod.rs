//! Statistical timing tests for secret-dependent code paths.

pub mod tester;

pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
