//! Pivot tolerance derivation.
//!
//! ## Purpose
//!
//! This module derives the "effectively zero" threshold used by the solver
//! when judging pivots and divisors during elimination and back-substitution.
//!
//! ## Design notes
//!
//! * **Formula**: `max(min_positive * 1000, epsilon * 1_000_000)` — the
//!   larger of a floor above the smallest normal magnitude and a multiple of
//!   the unit round-off. For f32 and f64 the round-off term dominates.
//! * **Recomputed per use**: The threshold is a pure function of the numeric
//!   type; callers recompute it at each risky step rather than storing it.

// External dependencies
use num_traits::Float;

// ============================================================================
// Pivot Tolerance
// ============================================================================

/// Threshold below which a pivot or divisor is treated as zero.
#[inline]
pub fn pivot_tolerance<T: Float>() -> T {
    let normal_floor = T::min_positive_value() * T::from(1000.0).unwrap();
    let roundoff_floor = T::epsilon() * T::from(1.0e6).unwrap();
    normal_floor.max(roundoff_floor)
}
