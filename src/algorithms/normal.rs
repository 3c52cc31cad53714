//! Normal-equations construction from moment sums.
//!
//! ## Purpose
//!
//! This module builds the `(degree+1) x (degree+1)` least-squares system for
//! a polynomial fit: `matrix[p][c] = Σ x_i^(p+c)` and
//! `rhs[p] = Σ x_i^p * y_i`.
//!
//! ## Design notes
//!
//! * **Shared moments**: A matrix entry depends only on `p + c`, so the
//!   `2*degree + 1` distinct power sums are computed once each and the
//!   matrix is filled from them.
//! * **Overflow clamping**: A sum that overflows to a non-finite value is
//!   clamped to zero instead of entering the solver. An incorrect zero is
//!   preferred over NaN contaminating the whole system; each clamp is
//!   reported to the observer.
//! * **`0^0 = 1`**: The zero-exponent convention is guaranteed by the
//!   accumulation backend.
//!
//! ## Invariants
//!
//! * Every entry of the returned system is finite.
//!
//! ## Non-goals
//!
//! * This module does not validate the samples (handled by the engine's
//!   validator before construction).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::accumulators::MomentAccum;
use crate::primitives::buffer::NormalSystem;
use crate::primitives::trace::{FitEvent, FitObserver};

// ============================================================================
// System Construction
// ============================================================================

/// Build the normal-equations system for a fit of the given degree.
///
/// Assumes the samples have already been validated (equal-length, finite,
/// more samples than coefficients).
pub fn build_normal_system<T, O>(
    x: &[T],
    y: &[T],
    degree: usize,
    observer: &mut O,
) -> NormalSystem<T>
where
    T: MomentAccum,
    O: FitObserver<T>,
{
    let order = degree + 1;
    let mut system = NormalSystem::new(order);

    // Distinct matrix exponents run from 0 to 2*degree.
    let mut moments: Vec<T> = Vec::with_capacity(2 * degree + 1);
    for exponent in 0..=2 * degree {
        let mut sum = T::power_sum(x, exponent);
        if !sum.is_finite() {
            observer.on_event(FitEvent::MomentOverflow { exponent });
            sum = T::zero();
        }
        moments.push(sum);
    }

    for power in 0..order {
        for col in 0..order {
            system.set(power, col, moments[power + col]);
        }

        let mut rhs = T::weighted_power_sum(x, y, power);
        if !rhs.is_finite() {
            observer.on_event(FitEvent::RhsOverflow { power });
            rhs = T::zero();
        }
        system.set_rhs(power, rhs);
    }

    system
}
