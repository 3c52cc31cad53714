//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the core fitting algorithms:
//! - Power-sum accumulation backends (scalar and SIMD)
//! - Normal-equations construction from moment sums
//! - Gaussian elimination with partial pivoting and back-substitution
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Power-sum accumulation backends.
pub mod accumulators;

/// Normal-equations construction.
pub mod normal;

/// Elimination and back-substitution.
pub mod solver;
