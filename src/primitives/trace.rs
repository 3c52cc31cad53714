//! Trace events and the observer seam for fit diagnostics.
//!
//! ## Purpose
//!
//! This module defines the structured events a fit can emit while it runs
//! (pivot choices, overflow clamps, singular-row detections) and the
//! `FitObserver` trait through which callers receive them.
//!
//! ## Design notes
//!
//! * **Injectable**: Observation is a seam, not a dependency; the numeric
//!   core takes `&mut impl FitObserver` and stays free of formatting and
//!   output concerns.
//! * **Inert**: Observers receive copies and return nothing; they cannot
//!   alter numeric results.
//! * **Copy events**: Every event is a small `Copy` value, safe for no_std
//!   sinks and ring buffers.
//!
//! ## Non-goals
//!
//! * This module does not provide any concrete sink beyond the no-op
//!   `NullObserver`; wiring events to a logger or collector is the caller's
//!   concern.

// ============================================================================
// Fit Events
// ============================================================================

/// A single diagnostic event emitted during a fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitEvent<T> {
    /// Inputs passed validation and the general solver path was entered.
    InputAccepted {
        /// Number of samples.
        samples: usize,
        /// Requested polynomial degree.
        degree: usize,
    },

    /// All `y` values were equal within tolerance; the closed-form
    /// horizontal-line fit was returned without elimination.
    ConstantShortCircuit {
        /// The fitted intercept (the mean of `y`).
        intercept: T,
    },

    /// A matrix power sum `Σ x_i^exponent` overflowed to a non-finite value
    /// and was clamped to zero.
    MomentOverflow {
        /// The offending exponent.
        exponent: usize,
    },

    /// An rhs sum `Σ x_i^power * y_i` overflowed to a non-finite value and
    /// was clamped to zero.
    RhsOverflow {
        /// The offending power.
        power: usize,
    },

    /// A pivot row was selected during elimination.
    PivotSelected {
        /// Elimination step (column index).
        step: usize,
        /// Row chosen as pivot.
        pivot_row: usize,
        /// Magnitude of the chosen pivot.
        magnitude: T,
    },

    /// The best available pivot was below tolerance; the row was zeroed and
    /// elimination continued.
    SingularRow {
        /// The degraded row.
        row: usize,
        /// Magnitude of the rejected pivot.
        magnitude: T,
    },

    /// A row update produced a non-finite multiplier or entry and was
    /// (partially) reverted.
    UpdateDiscarded {
        /// The row whose update was reverted.
        row: usize,
    },

    /// The solved coefficient vector contained non-finite components and was
    /// discarded as a whole.
    SolutionRejected,
}

// ============================================================================
// Observer Trait
// ============================================================================

/// Sink for [`FitEvent`]s emitted during a fit.
pub trait FitObserver<T> {
    /// Receive one event. Called synchronously from inside the fit.
    fn on_event(&mut self, event: FitEvent<T>);
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl<T> FitObserver<T> for NullObserver {
    #[inline]
    fn on_event(&mut self, _event: FitEvent<T>) {}
}
