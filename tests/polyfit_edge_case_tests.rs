//! Edge-case tests for the polynomial fitting surface.
//!
//! These tests pin the degradation contract: every invalid or numerically
//! hazardous input resolves to the all-zero sentinel (total surface) or a
//! typed error (fallible surface), and no fit ever returns NaN or infinity.
//!
//! ## Test Organization
//!
//! 1. **Input Validation** - empty, mismatched, underdetermined, non-finite
//! 2. **Numerical Extremes** - magnitude extremes, overflow, degeneracy
//! 3. **Fallible Surface** - error variants match the failing condition

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn indices(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

fn assert_zero_sentinel(coeffs: &[f64], degree: usize) {
    assert_eq!(coeffs.len(), degree + 1);
    assert!(coeffs.iter().all(|&c| c == 0.0));
}

// ============================================================================
// Input Validation
// ============================================================================

/// Empty inputs yield the sentinel of the requested length.
#[test]
fn test_empty_inputs() {
    let empty: [f64; 0] = [];
    for degree in [0usize, 1, 2, 5] {
        let coeffs = polyfit(&empty, &empty, degree);
        assert_zero_sentinel(&coeffs, degree);
    }
}

/// Mismatched lengths yield the sentinel.
#[test]
fn test_mismatched_lengths() {
    let coeffs = polyfit(&[0.0, 1.0, 2.0], &[1.0, 2.0], 1);
    assert_zero_sentinel(&coeffs, 1);
}

/// A single sample cannot determine a line.
#[test]
fn test_single_element() {
    let coeffs = polyfit(&[0.0], &[1.0], 1);
    assert_zero_sentinel(&coeffs, 1);
}

/// Degree at or above the sample count is underdetermined.
#[test]
fn test_degree_at_sample_count() {
    let x = indices(3);
    let y = [1.0, 2.0, 3.0];

    assert_zero_sentinel(&polyfit(&x, &y, 3), 3);
    assert_zero_sentinel(&polyfit(&x, &y, 10), 10);
}

/// NaN anywhere in the input yields the sentinel.
#[test]
fn test_nan_input() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, f64::NAN, 3.0];
    assert_zero_sentinel(&polyfit(&x, &y, 1), 1);

    let x_nan = [0.0, f64::NAN, 2.0];
    let y_ok = [1.0, 2.0, 3.0];
    assert_zero_sentinel(&polyfit(&x_nan, &y_ok, 1), 1);
}

/// Infinity anywhere in the input yields the sentinel.
#[test]
fn test_infinity_input() {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, f64::INFINITY, 3.0];
    assert_zero_sentinel(&polyfit(&x, &y, 1), 1);

    let y_neg = [1.0, f64::NEG_INFINITY, 3.0];
    assert_zero_sentinel(&polyfit(&x, &y_neg, 1), 1);
}

// ============================================================================
// Numerical Extremes
// ============================================================================

/// Zero and negative y values are fit exactly.
#[test]
fn test_zero_and_negative_values() {
    let x = indices(5);
    let y = [0.0, -1.0, -2.0, -3.0, -4.0];

    let coeffs = polyfit(&x, &y, 1);

    assert_relative_eq!(coeffs[0], -1.0, epsilon = 1e-10);
    assert_relative_eq!(coeffs[1], 0.0, epsilon = 1e-10);
}

/// Very small positive magnitudes stay finite.
#[test]
fn test_very_small_values() {
    let x = indices(5);
    let y = [1e-300, 1e-200, 1e-100, 1e-50, 1e-10];

    let coeffs = polyfit(&x, &y, 1);

    assert!(coeffs.iter().all(|c| c.is_finite()));
}

/// Very large magnitudes stay finite (no NaN contamination).
#[test]
fn test_very_large_values() {
    let x = indices(5);
    let y = [1e100, 1e150, 1e200, 1e250, 1e300];

    let coeffs = polyfit(&x, &y, 1);

    assert!(coeffs.iter().all(|c| c.is_finite()));
}

/// An extreme slope (tiny x spacing against a huge y span) degrades to a
/// finite, usable vector instead of NaN.
#[test]
fn test_extreme_slope() {
    let x: [f64; 2] = [0.0, 1e-10];
    let y: [f64; 2] = [0.0, 1e100];

    let coeffs = polyfit(&x, &y, 1);

    assert!(coeffs.iter().all(|c| c.is_finite()));
}

/// Duplicate x values are permitted and fit in the least-squares sense.
#[test]
fn test_duplicate_x_values() {
    let x = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
    let y = [1.0, 1.1, 2.0, 2.1, 3.0, 3.1];

    let coeffs = polyfit(&x, &y, 1);

    assert_relative_eq!(coeffs[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(coeffs[1], 1.05, epsilon = 1e-9);
}

/// Nearly collinear y values stay finite through the general solver.
#[test]
fn test_near_collinear() {
    let x = indices(5);
    let y = [2.0, 2.0000000001, 2.0000000002, 2.0000000003, 2.0000000004];

    let coeffs = polyfit(&x, &y, 1);

    assert!(coeffs.iter().all(|c| c.is_finite()));
}

/// A high degree against few points is still well-posed when n > degree.
#[test]
fn test_high_degree_few_points() {
    let x = indices(5);
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];

    let coeffs = polyfit(&x, &y, 4);

    assert_eq!(coeffs.len(), 5);
    assert!(coeffs.iter().all(|c| c.is_finite()));
}

/// All-identical x values collapse to the mean through the singular-row
/// degradation path.
#[test]
fn test_vertical_line_degrades_to_mean() {
    let x = [2.0, 2.0, 2.0];
    let y = [1.0, 2.0, 3.0];

    let coeffs = polyfit(&x, &y, 1);

    assert_relative_eq!(coeffs[0], 0.0, epsilon = 1e-12);
    assert_relative_eq!(coeffs[1], 2.0, epsilon = 1e-12);
}

// ============================================================================
// Fallible Surface
// ============================================================================

/// Each data-quality failure maps to its own error variant.
#[test]
fn test_error_variants() {
    let empty: [f64; 0] = [];
    assert_eq!(try_polyfit(&empty, &empty, 1), Err(FitError::EmptyInput));

    assert_eq!(
        try_polyfit(&[0.0, 1.0, 2.0], &[1.0, 2.0], 1),
        Err(FitError::MismatchedInputs { x_len: 3, y_len: 2 })
    );

    assert_eq!(
        try_polyfit(&[0.0, 1.0], &[1.0, 2.0], 2),
        Err(FitError::Underdetermined {
            points: 2,
            degree: 2
        })
    );

    assert!(matches!(
        try_polyfit(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0], 1),
        Err(FitError::NonFiniteInput(_))
    ));
}

/// Degree 0 over non-finite y rejects the closed form instead of returning
/// a NaN vector.
#[test]
fn test_degree_zero_nan_rejected() {
    let x = [0.0, 1.0];
    let y = [1.0, f64::NAN];

    assert_eq!(try_polyfit(&x, &y, 0), Err(FitError::NonFiniteSolution));
    assert_zero_sentinel(&polyfit(&x, &y, 0), 0);
}

/// Errors display with enough context for diagnosis.
#[test]
fn test_error_display() {
    let err = FitError::Underdetermined {
        points: 2,
        degree: 3,
    };
    let msg = format!("{err}");
    assert!(msg.contains('2'));
    assert!(msg.contains('3'));
}
