//! Tests for the statistical moment primitives.
//!
//! These tests verify the elementary reductions:
//! - Sum and mean, including the mean = sum / count identity
//! - Variance and standard deviation with both ddof settings
//! - Pearson correlation, including its documented NaN behavior
//!
//! ## Test Organization
//!
//! 1. **Sum and Mean** - basic reductions and identities
//! 2. **Dispersion** - variance and standard deviation
//! 3. **Correlation** - corrcoef behavior

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Helper Data
// ============================================================================

/// 25-point series used by the original acceptance vectors.
const SERIES: [f64; 25] = [
    1.376749, 1.373969, 1.372195, 1.375233, 1.381031, 1.371181, 1.360464, 1.360464, 1.363537,
    1.367112, 1.366347, 1.367112, 1.377001, 1.369402, 1.364815, 1.371688, 1.371942, 1.381533,
    1.381533, 1.373209, 1.374475, 1.377001, 1.377758, 1.376244, 1.382788,
];

// ============================================================================
// Sum and Mean Tests
// ============================================================================

/// Sum of an empty slice is the additive identity.
#[test]
fn test_sum_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(sum(&empty), 0.0);
}

/// Sum folds left over the slice.
#[test]
fn test_sum_basic() {
    let v = [1.5f64, 2.5, -1.0, 3.0];
    assert_relative_eq!(sum(&v), 6.0, epsilon = 1e-12);
}

/// Mean equals sum divided by count for any non-empty sequence.
#[test]
fn test_mean_is_sum_over_count() {
    let datasets: [&[f64]; 3] = [&[4.2], &[1.0, 2.0, 4.0], &SERIES];
    for data in datasets {
        assert_relative_eq!(
            mean(data),
            sum(data) / data.len() as f64,
            epsilon = 1e-15
        );
    }
}

/// Mean of a single element is that element.
#[test]
fn test_mean_single_element() {
    assert_eq!(mean(&[7.25f64]), 7.25);
}

// ============================================================================
// Dispersion Tests
// ============================================================================

/// Sample variance (ddof = 1) of the reference series matches the known value.
#[test]
fn test_variance_reference_series() {
    let result = variance(&SERIES, 1);
    assert_relative_eq!(result, 4.138910915034214e-05, epsilon = 1e-6);
}

/// Population and sample variance differ by the n / (n - 1) factor.
#[test]
fn test_variance_ddof_relation() {
    let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let n = v.len() as f64;
    assert_relative_eq!(
        variance(&v, 1),
        variance(&v, 0) * n / (n - 1.0),
        epsilon = 1e-12
    );
}

/// Known population variance of a small dataset.
#[test]
fn test_variance_population() {
    // mean = 5, squared deviations sum to 32
    let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(variance(&v, 0), 4.0, epsilon = 1e-12);
}

/// Standard deviation is the square root of the variance.
#[test]
fn test_std_dev() {
    let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_relative_eq!(std_dev(&v, 0), 2.0, epsilon = 1e-12);
    assert_relative_eq!(std_dev(&v, 1), variance(&v, 1).sqrt(), epsilon = 1e-12);
}

/// Variance of identical values is zero.
#[test]
fn test_variance_constant_input() {
    let v = [3.5f64; 10];
    assert_relative_eq!(variance(&v, 0), 0.0, epsilon = 1e-15);
}

// ============================================================================
// Correlation Tests
// ============================================================================

/// Perfectly linearly related sequences have correlation 1.
#[test]
fn test_corrcoef_perfect_positive() {
    let x = [1.0f64, 2.0, 3.0, 4.0];
    let y = [3.0f64, 5.0, 7.0, 9.0];
    assert_relative_eq!(corrcoef(&x, &y), 1.0, epsilon = 1e-12);
}

/// Negatively related sequences have correlation -1.
#[test]
fn test_corrcoef_perfect_negative() {
    let x = [1.0f64, 2.0, 3.0, 4.0];
    let y = [9.0f64, 7.0, 5.0, 3.0];
    assert_relative_eq!(corrcoef(&x, &y), -1.0, epsilon = 1e-12);
}

/// Correlation is symmetric in its arguments.
#[test]
fn test_corrcoef_symmetry() {
    let x = [1.0f64, 2.0, 4.0, 8.0, 16.0];
    let y = [1.2f64, 1.9, 4.3, 7.6, 15.1];
    assert_relative_eq!(corrcoef(&x, &y), corrcoef(&y, &x), epsilon = 1e-15);
}

/// Zero variance on either side yields NaN (documented numeric behavior).
#[test]
fn test_corrcoef_zero_variance_is_nan() {
    let x = [1.0f64, 2.0, 3.0];
    let flat = [5.0f64, 5.0, 5.0];
    assert!(corrcoef(&x, &flat).is_nan());
    assert!(corrcoef(&flat, &x).is_nan());
}

/// f32 path produces the same correlation within single precision.
#[test]
fn test_corrcoef_f32() {
    let x = [1.0f32, 2.0, 3.0, 4.0];
    let y = [3.0f32, 5.0, 7.0, 9.0];
    assert_relative_eq!(corrcoef(&x, &y), 1.0f32, epsilon = 1e-6);
}
