//! High-level API for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the public fitting surface: the total `polyfit`
//! function with its zero-sentinel failure policy, the fallible
//! `try_polyfit` variant with typed errors, and the observer-instrumented
//! `try_polyfit_with`.
//!
//! ## Design notes
//!
//! * **Totality**: `polyfit` never fails visibly. Every invalid or
//!   numerically hazardous situation resolves to a vector of `degree + 1`
//!   zeros, keeping the function safe to call from numerically noisy
//!   pipelines without per-call-site error handling.
//! * **Distinguishable failures**: `try_polyfit` reports the same
//!   situations as `FitError` values for callers that want to tell an
//!   empty input from a rejected solution.
//! * **One engine**: All three entry points run the same executor; the
//!   surface only decides how failures are presented.
//!
//! ## Key concepts
//!
//! * **Zero sentinel**: The all-zero coefficient vector marking a failed
//!   fit on the total surface.
//! * **Coefficient order**: Highest-degree term first; the last component
//!   is the constant term.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::executor::FitExecutor;

// Publicly re-exported types
pub use crate::algorithms::accumulators::MomentAccum;
pub use crate::math::moments::{corrcoef, mean, std_dev, sum, variance};
pub use crate::primitives::errors::FitError;
pub use crate::primitives::trace::{FitEvent, FitObserver, NullObserver};

// ============================================================================
// Fitting Surface
// ============================================================================

/// Least-squares polynomial fit, total over all inputs.
///
/// Fits `y = c[0] * x^degree + ... + c[degree]` to the paired samples and
/// returns the `degree + 1` coefficients, highest power first.
///
/// Never panics on malformed numeric input: empty or mismatched slices,
/// NaN/infinite elements, underdetermined systems, and rejected solutions
/// all yield the all-zero sentinel vector instead.
///
/// ```
/// use polyfit_rs::prelude::*;
///
/// let x = [0.0f64, 1.0, 2.0, 3.0];
/// let y = [1.0, 3.0, 5.0, 7.0];
/// let coeffs = polyfit(&x, &y, 1);
/// assert!((coeffs[0] - 2.0).abs() < 1e-10); // slope
/// assert!((coeffs[1] - 1.0).abs() < 1e-10); // intercept
/// ```
pub fn polyfit<T: MomentAccum>(x: &[T], y: &[T], degree: usize) -> Vec<T> {
    try_polyfit(x, y, degree).unwrap_or_else(|_| vec![T::zero(); degree + 1])
}

/// Least-squares polynomial fit with distinguishable failures.
///
/// Numerically identical to [`polyfit`], but data-quality failures are
/// reported as [`FitError`] values instead of the zero sentinel.
///
/// ```
/// use polyfit_rs::prelude::*;
///
/// let err = try_polyfit(&[0.0_f64, 1.0], &[1.0], 1).unwrap_err();
/// assert_eq!(err, FitError::MismatchedInputs { x_len: 2, y_len: 1 });
/// ```
pub fn try_polyfit<T: MomentAccum>(x: &[T], y: &[T], degree: usize) -> Result<Vec<T>, FitError> {
    FitExecutor::run(x, y, degree, &mut NullObserver)
}

/// Least-squares polynomial fit streaming trace events to an observer.
///
/// The observer receives structured [`FitEvent`]s (pivot choices, overflow
/// clamps, singular-row detections) as the fit runs. Observation never
/// alters the numeric result.
pub fn try_polyfit_with<T, O>(
    x: &[T],
    y: &[T],
    degree: usize,
    observer: &mut O,
) -> Result<Vec<T>, FitError>
where
    T: MomentAccum,
    O: FitObserver<T>,
{
    FitExecutor::run(x, y, degree, observer)
}
