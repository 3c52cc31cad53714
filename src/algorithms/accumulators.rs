//! Power-sum accumulation backends.
//!
//! ## Purpose
//!
//! This module provides the accumulation routines that build the moment sums
//! `Σ x_i^e` and `Σ x_i^p * y_i` the normal-equations system is made of,
//! with a generic scalar path for any `Float` type and a two-lane SIMD path
//! for `f64`.
//!
//! ## Design notes
//!
//! * **Dispatch**: The `MomentAccum` trait selects the implementation per
//!   concrete type: `f32` uses the scalar path, `f64` the SIMD path.
//! * **Powering**: SIMD lanes raise by repeated multiplication (exponents
//!   are small, bounded by twice the degree); the empty product makes
//!   `0^0 = 1` hold structurally. The scalar path guards the zero exponent
//!   explicitly, since `powi` is not trusted to guarantee that convention.
//! * **Tail handling**: The SIMD path processes pairs and finishes the
//!   remainder with the same repeated-multiplication scheme.
//!
//! ## Invariants
//!
//! * Results are deterministic per type: identical inputs produce
//!   bit-identical sums.
//!
//! ## Non-goals
//!
//! * This module does not clamp non-finite sums; overflow policy belongs to
//!   the construction stage.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Accumulation Backend Trait
// ============================================================================

/// Accumulation backend for the moment sums of the normal equations.
///
/// Implemented for `f32` (scalar) and `f64` (SIMD).
pub trait MomentAccum: Float + 'static {
    /// Compute `Σ x_i^exp` with the `0^0 = 1` convention.
    fn power_sum(x: &[Self], exp: usize) -> Self;

    /// Compute `Σ x_i^exp * y_i` with the `0^0 = 1` convention.
    fn weighted_power_sum(x: &[Self], y: &[Self], exp: usize) -> Self;
}

impl MomentAccum for f32 {
    #[inline]
    fn power_sum(x: &[Self], exp: usize) -> Self {
        power_sum_scalar(x, exp)
    }

    #[inline]
    fn weighted_power_sum(x: &[Self], y: &[Self], exp: usize) -> Self {
        weighted_power_sum_scalar(x, y, exp)
    }
}

impl MomentAccum for f64 {
    #[inline]
    fn power_sum(x: &[Self], exp: usize) -> Self {
        power_sum_simd(x, exp)
    }

    #[inline]
    fn weighted_power_sum(x: &[Self], y: &[Self], exp: usize) -> Self {
        weighted_power_sum_simd(x, y, exp)
    }
}

// ============================================================================
// Scalar Accumulation
// ============================================================================

/// Raise a value to a small non-negative integer power.
///
/// `0^0 = 1` by convention; the zero exponent is handled before `powi` is
/// consulted.
#[inline]
fn pow_term<T: Float>(x: T, exp: usize) -> T {
    if exp == 0 {
        return T::one();
    }
    x.powi(exp as i32)
}

/// Scalar `Σ x_i^exp` for any `Float` type.
pub fn power_sum_scalar<T: Float>(x: &[T], exp: usize) -> T {
    x.iter()
        .fold(T::zero(), |acc, &v| acc + pow_term(v, exp))
}

/// Scalar `Σ x_i^exp * y_i` for any `Float` type.
pub fn weighted_power_sum_scalar<T: Float>(x: &[T], y: &[T], exp: usize) -> T {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&xv, &yv)| acc + pow_term(xv, exp) * yv)
}

// ============================================================================
// SIMD Accumulation (f64)
// ============================================================================

/// Raise both lanes of a pair by repeated multiplication.
#[inline]
fn pow_lanes(x: f64x2, exp: usize) -> f64x2 {
    let mut p = f64x2::splat(1.0);
    for _ in 0..exp {
        p = p * x;
    }
    p
}

/// SIMD `Σ x_i^exp` for `f64`, two lanes with a scalar tail.
pub fn power_sum_simd(x: &[f64], exp: usize) -> f64 {
    let mut acc = f64x2::splat(0.0);
    let mut chunks = x.chunks_exact(2);
    for pair in &mut chunks {
        acc += pow_lanes(f64x2::new([pair[0], pair[1]]), exp);
    }

    let mut total = acc.reduce_add();
    for &v in chunks.remainder() {
        let mut p = 1.0;
        for _ in 0..exp {
            p *= v;
        }
        total += p;
    }
    total
}

/// SIMD `Σ x_i^exp * y_i` for `f64`, two lanes with a scalar tail.
pub fn weighted_power_sum_simd(x: &[f64], y: &[f64], exp: usize) -> f64 {
    debug_assert_eq!(x.len(), y.len());

    let mut acc = f64x2::splat(0.0);
    let mut x_chunks = x.chunks_exact(2);
    let mut y_chunks = y.chunks_exact(2);
    for (xp, yp) in (&mut x_chunks).zip(&mut y_chunks) {
        let powered = pow_lanes(f64x2::new([xp[0], xp[1]]), exp);
        acc += powered * f64x2::new([yp[0], yp[1]]);
    }

    let mut total = acc.reduce_add();
    for (&xv, &yv) in x_chunks.remainder().iter().zip(y_chunks.remainder()) {
        let mut p = 1.0;
        for _ in 0..exp {
            p *= xv;
        }
        total += p * yv;
    }
    total
}
