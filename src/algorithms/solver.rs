//! Gaussian elimination and back-substitution for the normal equations.
//!
//! ## Purpose
//!
//! This module solves the normal-equations system in place: forward
//! elimination with partial pivoting, then back-substitution producing the
//! coefficient vector in ascending-power order.
//!
//! ## Design notes
//!
//! * **Partial pivoting**: Each step pivots on the largest-magnitude entry
//!   in the current column, avoiding division by small numbers.
//! * **Graceful degradation**: A below-tolerance pivot does not abort the
//!   solve. The degraded row and its rhs entry are zeroed and elimination
//!   continues, trading exactness for a still-usable partial coefficient
//!   vector.
//! * **Update reversion**: A non-finite multiplier skips its row update; a
//!   non-finite updated entry keeps its pre-update value. Non-finite
//!   intermediates never enter the system.
//! * **Tolerance**: Recomputed from the numeric type at each risky step,
//!   never stored.
//!
//! ## Invariants
//!
//! * Every entry of the system stays finite throughout elimination.
//! * Back-substitution output components are finite or zero.
//!
//! ## Non-goals
//!
//! * This module does not judge the solved vector as a whole; whole-vector
//!   validation is the engine's final step.
//! * This module does not reorder the output; callers decide the public
//!   coefficient convention.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::tolerance::pivot_tolerance;
use crate::primitives::buffer::NormalSystem;
use crate::primitives::trace::{FitEvent, FitObserver};

// ============================================================================
// Forward Elimination
// ============================================================================

/// Reduce the system to upper-triangular form with partial pivoting.
pub fn eliminate<T, O>(system: &mut NormalSystem<T>, observer: &mut O)
where
    T: Float,
    O: FitObserver<T>,
{
    let order = system.order();

    for step in 0..order.saturating_sub(1) {
        // Select the pivot among the remaining rows of this column.
        let mut pivot_row = step;
        let mut max_val = system.at(step, step).abs();
        for candidate in step + 1..order {
            let val = system.at(candidate, step).abs();
            if val > max_val {
                max_val = val;
                pivot_row = candidate;
            }
        }

        if max_val < pivot_tolerance::<T>() {
            // Singular at this column: zero the remainder of the row and its
            // rhs entry, keep going.
            observer.on_event(FitEvent::SingularRow {
                row: step,
                magnitude: max_val,
            });
            for col in step..order {
                system.set(step, col, T::zero());
            }
            system.set_rhs(step, T::zero());
            continue;
        }

        observer.on_event(FitEvent::PivotSelected {
            step,
            pivot_row,
            magnitude: max_val,
        });
        system.swap_rows(step, pivot_row);

        let pivot = system.at(step, step);
        for row in step + 1..order {
            let multiplier = system.at(row, step) / pivot;
            if !multiplier.is_finite() {
                observer.on_event(FitEvent::UpdateDiscarded { row });
                continue;
            }

            let mut reverted = false;
            for col in step..order {
                let updated = system.at(row, col) - multiplier * system.at(step, col);
                if updated.is_finite() {
                    system.set(row, col, updated);
                } else {
                    reverted = true;
                }
            }
            let updated_rhs = system.rhs(row) - multiplier * system.rhs(step);
            if updated_rhs.is_finite() {
                system.set_rhs(row, updated_rhs);
            } else {
                reverted = true;
            }

            if reverted {
                observer.on_event(FitEvent::UpdateDiscarded { row });
            }
        }
    }
}

// ============================================================================
// Back-Substitution
// ============================================================================

/// Solve the upper-triangular system bottom-up.
///
/// Returns the solution in ascending-power order (index 0 is the constant
/// term). Rows whose diagonal is below tolerance, and quotients that come
/// out non-finite, resolve to zero.
pub fn back_substitute<T: Float>(system: &NormalSystem<T>) -> Vec<T> {
    let order = system.order();
    let mut solution = vec![T::zero(); order];

    for row in (0..order).rev() {
        let mut accumulated = T::zero();
        for col in row + 1..order {
            accumulated = accumulated + system.at(row, col) * solution[col];
        }

        let diagonal = system.at(row, row);
        if diagonal.abs() < pivot_tolerance::<T>() {
            solution[row] = T::zero();
        } else {
            let value = (system.rhs(row) - accumulated) / diagonal;
            solution[row] = if value.is_finite() { value } else { T::zero() };
        }
    }

    solution
}
