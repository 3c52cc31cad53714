//! Input validation for polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the data checks that guard the fitting engine:
//! input shapes, sample counts, and finiteness.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the full
//!   finiteness scan runs last.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Shape checks**: Non-empty, equal-length inputs.
//! * **Overdetermination**: The sample count must exceed the degree, or the
//!   system would be underdetermined.
//! * **Finite checks**: No NaN or infinity anywhere in the samples.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input data.
//! * This module does not decide failure policy; callers map errors to the
//!   zero sentinel or surface them as-is.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit input data.
///
/// Provides static methods returning `Result<(), FitError>` that fail fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate that both inputs are non-empty and of equal length.
    pub fn validate_shapes<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        if x.is_empty() || y.is_empty() {
            return Err(FitError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(FitError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate that the sample count strictly exceeds the degree.
    pub fn validate_sample_count(points: usize, degree: usize) -> Result<(), FitError> {
        if points <= degree {
            return Err(FitError::Underdetermined { points, degree });
        }
        Ok(())
    }

    /// Validate that every sample value is finite.
    pub fn validate_finite<T: Float>(x: &[T], y: &[T]) -> Result<(), FitError> {
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::NonFiniteInput(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::NonFiniteInput(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }
}
