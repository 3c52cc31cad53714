//! # polyfit-rs — Polynomial Least-Squares Fitting for Rust
//!
//! A small, dependency-light numerics library providing statistical moment
//! primitives and a polynomial least-squares regression solver, generic over
//! float types.
//!
//! ## What does it do?
//!
//! The core is the fitting engine: given paired samples `(x, y)` and a
//! requested polynomial degree, [`polyfit`](prelude::polyfit) constructs and
//! solves the normal-equations linear system for the least-squares
//! coefficients — with deliberate defenses against singular matrices,
//! numerical overflow, and degenerate inputs (empty data, mismatched
//! lengths, NaN/infinity, collinear data).
//!
//! Around it sit the moment primitives every fitting pipeline leans on:
//! [`sum`](prelude::sum), [`mean`](prelude::mean),
//! [`variance`](prelude::variance), [`std_dev`](prelude::std_dev), and the
//! Pearson [`corrcoef`](prelude::corrcoef).
//!
//! **Key properties:**
//! - Total fitting surface: `polyfit` never panics on malformed numeric
//!   input and never returns NaN/infinity — failures resolve to a defined
//!   all-zero sentinel vector
//! - Distinguishable failures available via `try_polyfit` for callers that
//!   want typed errors instead of the sentinel
//! - Pure functions throughout: no shared state, referentially transparent,
//!   safe to call concurrently without synchronization
//! - Generic over `f32`/`f64` through an accumulation-backend trait, with a
//!   SIMD path for `f64`
//!
//! ## Quick Start
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![0.0f64, 1.0, 2.0, 3.0];
//! let y = vec![1.0, 3.0, 5.0, 7.0];
//!
//! // Degree-1 fit: coefficients come highest power first.
//! let coeffs = polyfit(&x, &y, 1);
//! assert!((coeffs[0] - 2.0).abs() < 1e-10); // slope
//! assert!((coeffs[1] - 1.0).abs() < 1e-10); // intercept
//! ```
//!
//! ### Moment primitives
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let v = vec![1.0, 2.0, 3.0, 4.0];
//!
//! assert_eq!(sum(&v), 10.0);
//! assert_eq!(mean(&v), 2.5);
//! assert_eq!(variance(&v, 0), 1.25);            // population
//! assert!((std_dev(&v, 1) - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
//!
//! let x = vec![1.0f64, 2.0, 3.0];
//! let y = vec![2.0, 4.0, 6.0];
//! assert!((corrcoef(&x, &y) - 1.0).abs() < 1e-12);
//! ```
//!
//! ### Failure policy
//!
//! The total surface maps every data-quality problem to the zero sentinel:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! // Mismatched lengths: sentinel of degree + 1 zeros, no panic.
//! let coeffs = polyfit(&[0.0, 1.0, 2.0], &[1.0, 2.0], 1);
//! assert_eq!(coeffs, vec![0.0, 0.0]);
//!
//! // NaN input: same sentinel.
//! let coeffs = polyfit(&[0.0, 1.0, 2.0], &[1.0, f64::NAN, 3.0], 1);
//! assert_eq!(coeffs, vec![0.0, 0.0]);
//! ```
//!
//! Callers that want to know *why* use the fallible surface:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! match try_polyfit(&[] as &[f64], &[], 2) {
//!     Err(FitError::EmptyInput) => {}
//!     other => panic!("expected EmptyInput, got {:?}", other),
//! }
//! ```
//!
//! ### Trace observation
//!
//! Numerically risky steps can be observed through an injectable event
//! sink. Observation never changes the result:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<FitEvent<f64>>);
//!
//! impl FitObserver<f64> for Recorder {
//!     fn on_event(&mut self, event: FitEvent<f64>) {
//!         self.0.push(event);
//!     }
//! }
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![2.0, 2.0, 2.0, 2.0, 2.0];
//!
//! let mut recorder = Recorder::default();
//! let coeffs = try_polyfit_with(&x, &y, 1, &mut recorder).unwrap();
//!
//! assert_eq!(coeffs, vec![0.0, 2.0]); // horizontal line
//! assert!(recorder
//!     .0
//!     .iter()
//!     .any(|e| matches!(e, FitEvent::ConstantShortCircuit { .. })));
//! ```
//!
//! ## Numerical behavior
//!
//! The solver is Gaussian elimination with partial pivoting over the
//! normal equations, degrading gracefully instead of aborting:
//!
//! - A below-tolerance pivot zeroes its row and elimination continues,
//!   yielding a usable (if partial) coefficient vector.
//! - Moment sums that overflow to non-finite values are clamped to zero
//!   rather than contaminating the system with NaN.
//! - Row updates that would introduce non-finite entries are reverted.
//! - A solved vector containing any non-finite component is discarded as a
//!   whole; the result is always either fully finite or the sentinel.
//!
//! The "effectively zero" threshold is derived from the numeric type:
//! `max(smallest_normal * 1000, epsilon * 1e6)`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! All fitting and moment APIs are available unchanged; allocation goes
//! through `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the owned normal-equations buffer, and the
// trace-event observer seam.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the statistical moment primitives and the pivot tolerance
// derivation.
mod math;

// Layer 3: Algorithms - core fitting algorithms.
//
// Contains the power-sum accumulation backends, normal-equations
// construction, and the elimination/back-substitution solver.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation and the fit executor.
mod engine;

// High-level fitting API.
//
// Provides `polyfit`, `try_polyfit`, and `try_polyfit_with`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        corrcoef, mean, polyfit, std_dev, sum, try_polyfit, try_polyfit_with, variance, FitError,
        FitEvent, FitObserver, MomentAccum, NullObserver,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
