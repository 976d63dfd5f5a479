pub mod hash_tests;
pub mod kem_tests;

pub use saber_tests::suites::constant_time::{TestConfig, TimingAnalysis, TimingTester};

/// Run `a` and `b` through warm-up and interleaved measurement, then
/// print the report and assert on the verdict.
pub fn assert_same_timing<A: FnMut(), B: FnMut()>(
    name: &str,
    config: &TestConfig,
    mut a: A,
    mut b: B,
) -> TimingAnalysis {
    for _ in 0..config.num_warmup {
        a();
        b();
    }

    let tester = TimingTester::from_config(config);
    let (times_a, times_b) = tester.measure_pair(a, b);
    let analysis = tester
        .analyze(&times_a, &times_b, config)
        .unwrap_or_else(|e| panic!("{name}: analysis failed: {e}"));

    println!("{}", analysis.report(name));
    assert!(
        analysis.is_constant_time,
        "{name} shows a timing difference between input classes\n{}",
        analysis.report(name)
    );
    analysis
}
