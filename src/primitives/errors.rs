//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines the failure conditions a fit can report through the
//! fallible API (`try_polyfit`), covering input validation and rejected
//! solutions.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual lengths).
//! * **Optional**: The total `polyfit` surface maps every variant to the
//!   all-zero sentinel vector; only the `try_` surface exposes them.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty arrays, mismatched lengths, non-finite values.
//! 2. **Shape constraints**: More coefficients requested than samples provided.
//! 3. **Solution validation**: A solved coefficient vector containing NaN/Inf
//!    is rejected as a whole.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not distinguish recoverable elimination degradations
//!   (singular rows, clamped overflows); those are surfaced as trace events.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for polynomial fitting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// Input arrays are empty; fitting requires at least one sample.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Fewer samples than coefficients; the system would be underdetermined.
    Underdetermined {
        /// Number of samples provided.
        points: usize,
        /// Requested polynomial degree.
        degree: usize,
    },

    /// Input data contains NaN or infinite values.
    NonFiniteInput(String),

    /// The solved coefficient vector contained NaN or infinite components
    /// and was discarded as a whole.
    NonFiniteSolution,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::Underdetermined { points, degree } => {
                write!(
                    f,
                    "Underdetermined system: {points} samples for degree {degree} (need at least {})",
                    degree + 1
                )
            }
            Self::NonFiniteInput(s) => write!(f, "Non-finite input value: {s}"),
            Self::NonFiniteSolution => {
                write!(f, "Solution rejected: coefficient vector contained non-finite values")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for FitError {}
