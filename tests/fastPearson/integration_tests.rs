use approx::{assert_abs_diff_eq, assert_relative_eq};
use fastPearson::prelude::*;

const STRATEGIES: [Strategy; 3] = [Strategy::Naive, Strategy::Compensated, Strategy::Parallel];

#[test]
fn test_statistics_how_to_example() {
    let x = vec![43.0, 21.0, 25.0, 42.0, 57.0, 59.0];
    let y = vec![99.0, 65.0, 79.0, 75.0, 87.0, 81.0];

    for strategy in STRATEGIES {
        let res = correlate(&x, &y, strategy).unwrap();
        assert_abs_diff_eq!(res.coefficient, 0.529809, epsilon = 5e-7);
        assert_abs_diff_eq!(res.mean_x, 41.166666666666664, epsilon = 1e-12);
        assert_abs_diff_eq!(res.mean_y, 81.0, epsilon = 1e-12);
    }
}

#[test]
fn test_mathworks_example() {
    let x = vec![7.0, 33.0 / 7.0, 3.0, 5.0, 2.0];
    let y = vec![3.0, 5.0, 1.0, 7.0, 2.0];

    for strategy in STRATEGIES {
        let res = correlate(&x, &y, strategy).unwrap();
        assert_abs_diff_eq!(res.coefficient, 0.4514558056, epsilon = 1e-10);
    }
}

#[test]
fn test_nan_on_zero_variance() {
    for v in [0.0_f64, 1.0, -1.0] {
        let res = correlate(&[v], &[v], Strategy::Compensated).unwrap();
        assert!(res.coefficient.is_nan());
        assert_eq!(res.mean_x, v);
        assert_eq!(res.mean_y, v);
    }

    // Constant y against varying x.
    let res = correlate(&[1.0_f64, 2.0, 3.0], &[5.0, 5.0, 5.0], Strategy::Naive).unwrap();
    assert!(res.coefficient.is_nan());
}

#[test]
fn test_overflowing_squares_agree_across_strategies() {
    // Squared deviations overflow to infinity; the coefficient collapses to
    // zero rather than NaN for every strategy.
    let x = [1e200_f64, -1e200];
    let y = [1.0, 2.0];

    for strategy in STRATEGIES {
        let res = correlate(&x, &y, strategy).unwrap();
        assert!(!res.coefficient.is_nan(), "{:?} gave NaN", strategy);
        assert_eq!(res.coefficient, 0.0);
    }

    let big = [1e308, 1e308];
    assert_eq!(mean(&big), Ok(f64::INFINITY));
}

#[test]
fn test_self_correlation() {
    let x: Vec<f64> = (0..1_000).map(|i| (i as f64 * 0.1).sin() + 0.5).collect();

    for strategy in STRATEGIES {
        let res = correlate(&x, &x, strategy).unwrap();
        assert_abs_diff_eq!(res.coefficient, 1.0, epsilon = 1e-12);
        assert_eq!(res.mean_x, res.mean_y);
    }
}

#[test]
fn test_anti_correlation() {
    let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 10.0 - 3.0 * xi).collect();

    let res = correlate(&x, &y, Strategy::Compensated).unwrap();
    assert_abs_diff_eq!(res.coefficient, -1.0, epsilon = 1e-12);
}

#[test]
fn test_error_handling() {
    let x = vec![1.0, 2.0, 3.0];
    let y_short = vec![1.0, 2.0];

    for strategy in STRATEGIES {
        match correlate(&x, &y_short, strategy) {
            Err(CorrelationError::InvalidInput(_)) => (),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }

        let empty: Vec<f64> = Vec::new();
        match correlate(&empty, &empty, strategy) {
            Err(CorrelationError::InvalidInput(_)) => (),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[42.5]), Ok(42.5));
    assert_eq!(mean(&vec![1.0, 2.0, 3.0, 4.0]), Ok(2.5));

    let empty: Vec<f64> = Vec::new();
    assert_eq!(mean(&empty), Err(CorrelationError::EmptyInput));
}

#[test]
fn test_builder_configuration() {
    let correlator = Correlation::new()
        .strategy(Strategy::Parallel)
        .parallel_summation(Summation::Naive)
        .parallelism(3)
        .algorithm(Algorithm::OnePass)
        .build()
        .unwrap();

    let config = correlator.config();
    assert_eq!(config.strategy, Strategy::Parallel);
    assert_eq!(config.parallel_summation, Summation::Naive);
    assert_eq!(config.parallelism, Some(3));
    assert_eq!(config.algorithm, Algorithm::OnePass);

    let err = Correlation::new().parallelism(0).build().unwrap_err();
    assert_eq!(err, CorrelationError::InvalidParallelism(0));
}

#[test]
fn test_parallel_shorthand() {
    let on = Correlation::new().parallel(true).build().unwrap();
    assert_eq!(on.config().strategy, Strategy::Parallel);
    let off = Correlation::new().parallel(false).build().unwrap();
    assert_eq!(off.config().strategy, Strategy::Compensated);
}

#[test]
fn test_one_pass_matches_two_pass() {
    let x: Vec<f64> = (0..500).map(|i| (i as f64 * 0.37).sin() * 4.0).collect();
    let y: Vec<f64> = x.iter().enumerate().map(|(i, &v)| v + (i as f64 * 1.3).cos()).collect();

    let two = Correlation::new().build().unwrap().correlate(&x, &y).unwrap();
    let one = Correlation::new()
        .algorithm(Algorithm::OnePass)
        .build()
        .unwrap()
        .correlate(&x, &y)
        .unwrap();

    assert_relative_eq!(one.coefficient, two.coefficient, max_relative = 1e-10);
    assert_relative_eq!(one.mean_x, two.mean_x, max_relative = 1e-12, epsilon = 1e-15);
}

#[test]
fn test_two_pass_survives_large_offset() {
    // A large common offset destroys the raw-moment formula but not the
    // deviation-based one.
    let offset = 1e9;
    let x: Vec<f64> = (0..1_000).map(|i| offset + (i % 10) as f64).collect();
    let y: Vec<f64> = (0..1_000).map(|i| offset + 2.0 * (i % 10) as f64).collect();

    let res = correlate(&x, &y, Strategy::Compensated).unwrap();
    assert_abs_diff_eq!(res.coefficient, 1.0, epsilon = 1e-9);
}

#[test]
fn test_compensated_mean_accuracy() {
    // A million alternating samples around 0.1.
    let n = 1_000_000;
    let x: Vec<f64> = (0..n).map(|i| 0.1 + if i % 2 == 0 { 1e-3 } else { -1e-3 }).collect();

    let naive = Correlation::new()
        .strategy(Strategy::Naive)
        .build()
        .unwrap()
        .mean(&x)
        .unwrap();
    let compensated = mean(&x).unwrap();

    assert_abs_diff_eq!(compensated, 0.1, epsilon = 1e-15);
    assert_abs_diff_eq!(naive, 0.1, epsilon = 1e-9);
}

#[test]
fn test_f32_support() {
    let x: Vec<f32> = vec![43.0, 21.0, 25.0, 42.0, 57.0, 59.0];
    let y: Vec<f32> = vec![99.0, 65.0, 79.0, 75.0, 87.0, 81.0];

    let res = correlate(&x, &y, Strategy::Compensated).unwrap();
    assert_abs_diff_eq!(res.coefficient, 0.529809_f32, epsilon = 1e-5);
}

#[test]
fn test_slice_inputs() {
    let data = [1.0, 2.0, 3.0, 4.0, 6.0, 9.0];
    let res = correlate(&data[..5], &data[1..], Strategy::Compensated).unwrap();
    assert!(res.coefficient > 0.9);
    assert_abs_diff_eq!(res.mean_x, 3.2, epsilon = 1e-12);
}

#[cfg(feature = "cpu")]
#[test]
fn test_ndarray_integration() {
    use ndarray::{s, Array1};

    let x = Array1::from_vec(vec![43.0, 21.0, 25.0, 42.0, 57.0, 59.0]);
    let y = Array1::from_vec(vec![99.0, 65.0, 79.0, 75.0, 87.0, 81.0]);

    let res = correlate(&x, &y, Strategy::Parallel).unwrap();
    assert_abs_diff_eq!(res.coefficient, 0.529809, epsilon = 5e-7);

    // Strided views are not contiguous.
    let strided = x.slice(s![..;2]);
    let y_half = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    match correlate(&strided, &y_half, Strategy::Compensated) {
        Err(CorrelationError::InvalidInput(msg)) => assert!(msg.contains("contiguous")),
        other => panic!("Expected InvalidInput error, got {:?}", other),
    }
}
