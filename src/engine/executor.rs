//! Execution engine for polynomial fitting.
//!
//! ## Purpose
//!
//! This module orchestrates a complete fit: validation, closed-form
//! short-circuits, system construction, elimination, back-substitution, and
//! whole-vector result validation.
//!
//! ## Design notes
//!
//! * **Ordered validation**: Checks run cheapest-first and each failure
//!   short-circuits (shapes, degree-0 closed form, sample count,
//!   finiteness, collinearity).
//! * **Collinearity short-circuit**: When all `y` values agree within
//!   tolerance, the horizontal-line fit is returned directly; eliminating a
//!   rank-deficient collinear system is unstable and wasteful.
//! * **All-or-nothing result**: A solved vector containing any non-finite
//!   component is rejected as a whole. Partial correctness is not offered.
//! * **Coefficient order**: The solver produces ascending powers; the
//!   public vector is the reverse (highest-degree term first).
//!
//! ## Invariants
//!
//! * A returned `Ok` vector has exactly `degree + 1` components, all finite.
//! * Observers receive events but never influence numeric results.
//!
//! ## Non-goals
//!
//! * This module does not decide the zero-sentinel policy; that mapping
//!   lives in the public API layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulators::MomentAccum;
use crate::algorithms::normal::build_normal_system;
use crate::algorithms::solver::{back_substitute, eliminate};
use crate::engine::validator::Validator;
use crate::math::moments::mean;
use crate::math::tolerance::pivot_tolerance;
use crate::primitives::errors::FitError;
use crate::primitives::trace::{FitEvent, FitObserver};

// ============================================================================
// Fit Executor
// ============================================================================

/// Orchestrates a single polynomial fit from validation to coefficients.
pub struct FitExecutor;

impl FitExecutor {
    /// Run a complete fit of the given degree.
    ///
    /// Returns `degree + 1` coefficients ordered from the highest-degree
    /// term down to the constant term.
    pub fn run<T, O>(x: &[T], y: &[T], degree: usize, observer: &mut O) -> Result<Vec<T>, FitError>
    where
        T: MomentAccum,
        O: FitObserver<T>,
    {
        Validator::validate_shapes(x, y)?;

        // Degree 0 has a closed form and skips the general solver entirely.
        if degree == 0 {
            return Self::constant_solution(y, 0, observer);
        }

        Validator::validate_sample_count(x.len(), degree)?;
        Validator::validate_finite(x, y)?;
        observer.on_event(FitEvent::InputAccepted {
            samples: x.len(),
            degree,
        });

        if Self::is_collinear(y) {
            return Self::constant_solution(y, degree, observer);
        }

        let mut system = build_normal_system(x, y, degree, observer);
        eliminate(&mut system, observer);

        let mut coefficients = back_substitute(&system);
        coefficients.reverse();

        if coefficients.iter().any(|c| !c.is_finite()) {
            observer.on_event(FitEvent::SolutionRejected);
            return Err(FitError::NonFiniteSolution);
        }
        Ok(coefficients)
    }

    /// Whether all `y` values agree within the pivot tolerance.
    fn is_collinear<T: Float>(y: &[T]) -> bool {
        let first = y[0];
        let tolerance = pivot_tolerance::<T>();
        y.iter().all(|&v| (v - first).abs() <= tolerance)
    }

    /// Closed-form horizontal-line fit: zero slope terms, mean intercept.
    ///
    /// Serves both the degree-0 case and the collinearity short-circuit.
    /// The degree-0 path runs before the finiteness scan, so the intercept
    /// itself is checked to keep the all-finite-or-sentinel invariant.
    fn constant_solution<T, O>(
        y: &[T],
        degree: usize,
        observer: &mut O,
    ) -> Result<Vec<T>, FitError>
    where
        T: Float,
        O: FitObserver<T>,
    {
        let intercept = mean(y);
        if !intercept.is_finite() {
            observer.on_event(FitEvent::SolutionRejected);
            return Err(FitError::NonFiniteSolution);
        }
        if degree > 0 {
            observer.on_event(FitEvent::ConstantShortCircuit { intercept });
        }

        let mut coefficients = vec![T::zero(); degree + 1];
        coefficients[degree] = intercept;
        Ok(coefficients)
    }
}
