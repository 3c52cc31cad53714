//! Statistical moment primitives.
//!
//! ## Purpose
//!
//! This module provides the elementary reductions the fitting engine and its
//! callers build on: sum, arithmetic mean, variance, standard deviation, and
//! the Pearson correlation coefficient.
//!
//! ## Design notes
//!
//! * **Reductions only**: Every function is a single pass (or two passes via
//!   the mean) over a slice; no state, no allocation.
//! * **Generics**: Generic over `Float` types.
//! * **Preconditions**: Shape violations (empty input to `mean`, fewer than
//!   two samples to `variance`) are caller bugs and fail fast via
//!   `debug_assert!`; they are not recoverable errors.
//!
//! ## Key concepts
//!
//! * **ddof**: Delta degrees of freedom. `0` gives the population estimator,
//!   `1` the unbiased sample estimator.
//!
//! ## Invariants
//!
//! * `sum` of an empty slice is the additive identity.
//! * `variance` is non-negative for finite input.
//!
//! ## Non-goals
//!
//! * This module does not filter or validate non-finite values; NaN inputs
//!   propagate through the arithmetic as usual.
//! * This module does not provide weighted or higher-order moments.

// External dependencies
use num_traits::Float;

// ============================================================================
// Basic Reductions
// ============================================================================

/// Sum of a slice, folding left from the additive identity.
///
/// Defined for any finite sequence, including the empty one (which yields
/// zero).
#[inline]
pub fn sum<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// Arithmetic mean of a non-empty slice.
///
/// # Panics
///
/// Debug builds panic on empty input; this is a caller contract violation.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    debug_assert!(!values.is_empty(), "mean of empty slice");
    sum(values) / T::from(values.len()).unwrap()
}

// ============================================================================
// Dispersion
// ============================================================================

/// Variance of a slice with the given delta degrees of freedom.
///
/// Computed as `Σ (v_i - mean)^2 / (n - ddof)`. Pass `ddof = 0` for the
/// population variance, `ddof = 1` for the unbiased sample estimator.
///
/// # Panics
///
/// Debug builds panic when fewer than two samples are supplied.
pub fn variance<T: Float>(values: &[T], ddof: usize) -> T {
    debug_assert!(values.len() > 1, "variance needs at least two samples");
    debug_assert!(ddof < values.len(), "ddof must be below the sample count");
    let m = mean(values);
    let squared = values.iter().fold(T::zero(), |acc, &v| {
        let diff = v - m;
        acc + diff * diff
    });
    squared / T::from(values.len() - ddof).unwrap()
}

/// Standard deviation: the square root of [`variance`].
#[inline]
pub fn std_dev<T: Float>(values: &[T], ddof: usize) -> T {
    variance(values, ddof).sqrt()
}

// ============================================================================
// Correlation
// ============================================================================

/// Pearson correlation coefficient of two equal-length slices.
///
/// Returns NaN when either side has zero variance (the denominator is zero);
/// this is documented numeric behavior, not an error.
///
/// # Panics
///
/// Debug builds panic on mismatched lengths or fewer than two samples.
pub fn corrcoef<T: Float>(x: &[T], y: &[T]) -> T {
    debug_assert!(
        x.len() == y.len() && x.len() > 1,
        "corrcoef needs two equal-length slices of at least two samples"
    );
    let mx = mean(x);
    let my = mean(y);

    let mut cov = T::zero();
    let mut var_x = T::zero();
    let mut var_y = T::zero();
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mx;
        let dy = yi - my;
        cov = cov + dx * dy;
        var_x = var_x + dx * dx;
        var_y = var_y + dy * dy;
    }

    cov / (var_x * var_y).sqrt()
}
