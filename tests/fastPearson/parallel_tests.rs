use approx::assert_abs_diff_eq;
use fastPearson::prelude::*;
use proptest::prelude::{prop, ProptestConfig};
use proptest::strategy::Strategy as PropStrategy;
use proptest::{prop_assert, prop_assert_eq, proptest};

fn parallel(parallelism: usize, summation: Summation) -> Correlator {
    Correlation::new()
        .strategy(Strategy::Parallel)
        .parallel_summation(summation)
        .parallelism(parallelism)
        .build()
        .unwrap()
}

fn noisy_pair(n: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.013).sin() * 1e3 + 5e4).collect();
    let y: Vec<f64> = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 0.25 * xi + (i as f64 * 0.77).cos() * 40.0)
        .collect();
    (x, y)
}

#[test]
fn test_consistency() {
    // Parallel with one partition reproduces the sequential result exactly.
    let (x, y) = noisy_pair(10_000);

    let seq_res = correlate(&x, &y, Strategy::Compensated).unwrap();
    let par_res = parallel(1, Summation::Compensated).correlate(&x, &y).unwrap();
    assert_eq!(seq_res, par_res);

    let seq_naive = correlate(&x, &y, Strategy::Naive).unwrap();
    let par_naive = parallel(1, Summation::Naive).correlate(&x, &y).unwrap();
    assert_eq!(seq_naive, par_naive);
}

#[test]
fn test_partition_invariance() {
    let (x, y) = noisy_pair(250_001);

    let one = parallel(1, Summation::Compensated).correlate(&x, &y).unwrap();
    for p in [2, 4] {
        let split = parallel(p, Summation::Compensated).correlate(&x, &y).unwrap();
        assert_abs_diff_eq!(split.coefficient, one.coefficient, epsilon = 1e-12);
        assert_eq!(split.mean_x, one.mean_x);
        assert_eq!(split.mean_y, one.mean_y);
    }
}

#[test]
fn test_fixed_partitioning_is_reproducible() {
    let (x, y) = noisy_pair(50_000);
    let correlator = parallel(4, Summation::Naive);

    let first = correlator.correlate(&x, &y).unwrap();
    for _ in 0..5 {
        assert_eq!(correlator.correlate(&x, &y).unwrap(), first);
    }
}

#[test]
fn test_hardware_parallelism() {
    let (x, y) = noisy_pair(100_000);

    let hw = Correlation::new()
        .strategy(Strategy::Parallel)
        .build()
        .unwrap()
        .correlate(&x, &y)
        .unwrap();
    let seq = correlate(&x, &y, Strategy::Compensated).unwrap();
    assert_abs_diff_eq!(hw.coefficient, seq.coefficient, epsilon = 1e-12);
}

#[test]
fn test_more_partitions_than_elements() {
    let x = [43.0, 21.0, 25.0, 42.0, 57.0, 59.0];
    let y = [99.0, 65.0, 79.0, 75.0, 87.0, 81.0];

    let res = parallel(16, Summation::Compensated).correlate(&x, &y).unwrap();
    assert_abs_diff_eq!(res.coefficient, 0.529809, epsilon = 5e-7);

    // Thread count far beyond the input size.
    let tiny = parallel(30_000, Summation::Compensated)
        .correlate(&[1.0, 2.0], &[3.0, 5.0])
        .unwrap();
    assert_abs_diff_eq!(tiny.coefficient, 1.0, epsilon = 1e-12);
    assert_eq!(tiny.mean_x, 1.5);
    assert_eq!(tiny.mean_y, 4.0);
}

#[test]
fn test_parallel_one_pass() {
    let (x, y) = noisy_pair(40_000);

    let one_pass = Correlation::new()
        .strategy(Strategy::Parallel)
        .parallelism(4)
        .algorithm(Algorithm::OnePass)
        .build()
        .unwrap()
        .correlate(&x, &y)
        .unwrap();
    let two_pass = correlate(&x, &y, Strategy::Compensated).unwrap();

    assert_abs_diff_eq!(one_pass.coefficient, two_pass.coefficient, epsilon = 1e-6);
    assert_abs_diff_eq!(one_pass.mean_x, two_pass.mean_x, epsilon = 1e-9);
}

#[test]
fn test_parallel_errors() {
    let correlator = parallel(4, Summation::Compensated);

    let x = vec![1.0, 2.0, 3.0];
    let y = vec![1.0, 2.0];
    assert!(matches!(
        correlator.correlate(&x, &y),
        Err(CorrelationError::InvalidInput(_))
    ));

    let empty: Vec<f64> = Vec::new();
    assert!(matches!(
        correlator.correlate(&empty, &empty),
        Err(CorrelationError::InvalidInput(_))
    ));
}

fn bounded_pair() -> impl PropStrategy<Value = (Vec<f64>, Vec<f64>)> {
    (2usize..400).prop_flat_map(|n| {
        (
            prop::collection::vec(-1e3f64..1e3, n),
            prop::collection::vec(-1e3f64..1e3, n),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_strategies_agree((x, y) in bounded_pair()) {
        let compensated = correlate(&x, &y, Strategy::Compensated).unwrap();
        let naive = correlate(&x, &y, Strategy::Naive).unwrap();
        let par = parallel(3, Summation::Compensated).correlate(&x, &y).unwrap();

        if compensated.coefficient.is_nan() {
            prop_assert!(naive.coefficient.is_nan() || naive.coefficient.abs() <= 1.0 + 1e-9);
        } else {
            prop_assert!(compensated.coefficient.abs() <= 1.0 + 1e-12);
            prop_assert!((naive.coefficient - compensated.coefficient).abs() <= 1e-9);
            prop_assert!((par.coefficient - compensated.coefficient).abs() <= 1e-12);
        }
        prop_assert_eq!(par.mean_x, compensated.mean_x);
        prop_assert_eq!(par.mean_y, compensated.mean_y);
    }

    #[test]
    fn prop_self_correlation_is_one(x in prop::collection::vec(-1e6f64..1e6, 2..300)) {
        let res = correlate(&x, &x, Strategy::Compensated).unwrap();
        if !res.coefficient.is_nan() {
            prop_assert!((res.coefficient - 1.0).abs() <= 1e-12);
        }
        prop_assert_eq!(res.mean_x, res.mean_y);
    }

    #[test]
    fn prop_singleton_mean_is_exact(v in -1e300f64..1e300) {
        prop_assert_eq!(mean(&[v]), Ok(v));
    }
}
