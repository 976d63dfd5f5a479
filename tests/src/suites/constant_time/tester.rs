//! Welch t-test timing harness.
//!
//! Two closures are timed in alternating batches so that frequency scaling
//! and cache warm-up affect both classes equally. The resulting samples are
//! trimmed with the IQR rule and compared with Welch's t-test. A pair
//! passes only if |t| stays under the configured bound and the combined
//! score and mean ratio stay inside their ranges.

use std::time::Instant;

use statrs::distribution::{ContinuousCDF, StudentsT};

use super::config::TestConfig;

/// Summary statistics for one pair of timing classes.
#[derive(Debug, Clone)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

/// Collects per-iteration timings in batches.
pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call of `f`, one entry per sample.
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<f64> {
        (0..self.num_samples).map(|_| self.batch(&mut f)).collect()
    }

    /// Like [`measure`](Self::measure) for two closures, alternating which
    /// one runs first in each round.
    pub fn measure_pair<A: FnMut(), B: FnMut()>(&self, mut a: A, mut b: B) -> (Vec<f64>, Vec<f64>) {
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for round in 0..self.num_samples {
            if round % 2 == 0 {
                times_a.push(self.batch(&mut a));
                times_b.push(self.batch(&mut b));
            } else {
                times_b.push(self.batch(&mut b));
                times_a.push(self.batch(&mut a));
            }
        }
        (times_a, times_b)
    }

    fn batch<F: FnMut()>(&self, f: &mut F) -> f64 {
        let start = Instant::now();
        for _ in 0..self.num_iterations {
            f();
        }
        start.elapsed().as_nanos() as f64 / self.num_iterations as f64
    }

    /// Compare two timing classes against the thresholds in `config`.
    pub fn analyze(
        &self,
        times_a: &[f64],
        times_b: &[f64],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let a = remove_outliers(times_a);
        let b = remove_outliers(times_b);
        if a.len() < 2 || b.len() < 2 {
            return Err(format!(
                "not enough samples after outlier removal ({} and {})",
                a.len(),
                b.len()
            ));
        }

        let (mean_a, var_a) = mean_and_variance(&a);
        let (mean_b, var_b) = mean_and_variance(&b);
        let (n_a, n_b) = (a.len() as f64, b.len() as f64);

        let se_a = var_a / n_a;
        let se_b = var_b / n_b;
        let se = (se_a + se_b).sqrt();
        let t_statistic = if se > 0.0 { (mean_a - mean_b).abs() / se } else { 0.0 };

        // Welch-Satterthwaite
        let degrees_of_freedom =
            (se_a + se_b).powi(2) / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));
        let p_value = two_tailed_p(t_statistic, degrees_of_freedom);

        let pooled =
            ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        let cohens_d = if pooled > 0.0 { (mean_a - mean_b).abs() / pooled } else { 0.0 };

        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);
        let std_dev_a = var_a.sqrt();
        let std_dev_b = var_b.sqrt();
        let max_rel_std_dev = (std_dev_a / mean_a).max(std_dev_b / mean_b);
        let combined_score = combined_score(mean_ratio, t_statistic, max_rel_std_dev);

        let is_constant_time = t_statistic < config.t_statistic_threshold
            && combined_score <= config.combined_score_threshold
            && mean_ratio >= config.mean_ratio_min
            && mean_ratio <= config.mean_ratio_max;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            combined_score,
            is_constant_time,
        })
    }
}

impl TimingAnalysis {
    /// Multi-line report for test output.
    pub fn report(&self, name: &str) -> String {
        let verdict = if self.is_constant_time { "PASS" } else { "FAIL" };
        format!(
            "{verdict}: {name}\n\
             \x20 mean: {:.0} ns vs {:.0} ns (ratio {:.3})\n\
             \x20 welch t = {:.2}, df = {:.1}, p = {:.3e}\n\
             \x20 cohen's d = {:.2} ({})\n\
             \x20 combined score = {:.3}",
            self.mean_a,
            self.mean_b,
            self.mean_ratio,
            self.t_statistic,
            self.degrees_of_freedom,
            self.p_value,
            self.cohens_d,
            effect_size_label(self.cohens_d),
            self.combined_score,
        )
    }
}

/// Drop samples outside `[q1 - 1.5·iqr, q3 + 1.5·iqr]`.
pub fn remove_outliers(times: &[f64]) -> Vec<f64> {
    if times.len() < 4 {
        return times.to_vec();
    }
    let mut sorted = times.to_vec();
    sorted.sort_by(|x, y| x.total_cmp(y));
    let q1 = sorted[sorted.len() / 4];
    let q3 = sorted[sorted.len() * 3 / 4];
    let iqr = q3 - q1;
    let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);
    times.iter().copied().filter(|t| *t >= lo && *t <= hi).collect()
}

/// Sample mean and unbiased variance.
pub fn mean_and_variance(times: &[f64]) -> (f64, f64) {
    let n = times.len() as f64;
    let mean = times.iter().sum::<f64>() / n;
    let ss: f64 = times.iter().map(|t| (t - mean).powi(2)).sum();
    (mean, ss / (n - 1.0))
}

fn two_tailed_p(t: f64, df: f64) -> f64 {
    if !df.is_finite() || df < 1.0 {
        return if t < 2.0 { 1.0 } else { 0.0 };
    }
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// `1 + 0.5·(ratio - 1) + 0.02·t + 0.3·max_rel_std_dev`
fn combined_score(mean_ratio: f64, t_stat: f64, max_rel_std_dev: f64) -> f64 {
    let score = 1.0 + 0.5 * (mean_ratio - 1.0) + 0.02 * t_stat + 0.3 * max_rel_std_dev;
    if score.is_finite() {
        score
    } else {
        mean_ratio
    }
}

fn effect_size_label(d: f64) -> &'static str {
    match d {
        d if d < 0.2 => "negligible",
        d if d < 0.5 => "small",
        d if d < 0.8 => "medium",
        d if d < 1.2 => "large",
        _ => "very large",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_variance() {
        let (m, v) = mean_and_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((m - 5.0).abs() < 1e-12);
        assert!((v - 32.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_outlier_removal() {
        let mut times = vec![100.0; 20];
        times.push(10_000.0);
        let trimmed = remove_outliers(&times);
        assert_eq!(trimmed.len(), 20);
    }

    #[test]
    fn test_identical_classes_pass() {
        let tester = TimingTester::new(0, 1);
        let a: Vec<f64> = (0..30).map(|i| 1000.0 + (i % 5) as f64).collect();
        let b = a.clone();
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.t_statistic < 1e-9);
        assert!(analysis.is_constant_time, "{}", analysis.report("identical"));
    }

    #[test]
    fn test_separated_classes_fail() {
        let tester = TimingTester::new(0, 1);
        let a: Vec<f64> = (0..30).map(|i| 1000.0 + (i % 5) as f64).collect();
        let b: Vec<f64> = a.iter().map(|t| t * 2.0).collect();
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.mean_ratio > 1.9);
        assert!(analysis.p_value < 1e-6);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_large_t_fails_under_lenient_score() {
        // A 2% shift with almost no noise: ratio and score look harmless,
        // but the classes are clearly distinguishable.
        let tester = TimingTester::new(0, 1);
        let a: Vec<f64> = (0..50).map(|i| 1000.0 + (i % 3) as f64).collect();
        let b: Vec<f64> = a.iter().map(|t| t + 20.0).collect();
        let config = TestConfig::default().with_combined_score_threshold(100.0);
        let analysis = tester.analyze(&a, &b, &config).unwrap();
        assert!(analysis.mean_ratio < 1.03);
        assert!(analysis.t_statistic > config.t_statistic_threshold);
        assert!(!analysis.is_constant_time, "{}", analysis.report("shifted"));

        let relaxed = config.with_t_statistic_threshold(f64::INFINITY);
        assert!(tester.analyze(&a, &b, &relaxed).unwrap().is_constant_time);
    }

    #[test]
    fn test_too_few_samples() {
        let tester = TimingTester::new(0, 1);
        assert!(tester.analyze(&[1.0], &[1.0, 2.0], &TestConfig::default()).is_err());
    }

    #[test]
    fn test_measure_pair_shapes() {
        let tester = TimingTester::new(6, 3);
        let mut calls = (0, 0);
        let (a, b) = tester.measure_pair(|| calls.0 += 1, || calls.1 += 1);
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 6);
        assert_eq!(calls, (18, 18));
    }
}
