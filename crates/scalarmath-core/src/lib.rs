//! Core scalar utilities for precision-sensitive geometric code.
//!
//! This crate provides the elementary building blocks that higher-level
//! geometry (ray casting, plane intersection, curve fitting) relies on:
//! ordering predicates, rounding and grid snapping, angle conversion and
//! fuzzy comparison under an explicit, caller-supplied tolerance.
//!
//! # Key Concepts
//!
//! - **Scalar**: the floating-point precision (`f32` or `f64`) every
//!   function is generic over
//! - **Tolerance**: a non-negative epsilon passed to every fuzzy
//!   comparison; there is no global default
//! - **Snapping**: rounding a value to a multiple of a grid size
//!
//! # Modules
//!
//! - [`error`]: Error types for checked operations
//! - [`scalar`]: Elementary predicates, rounding, snapping and angles
//! - [`tolerance`]: Epsilon-parameterized equality and range tests
//! - [`types`]: The `Scalar` trait and numerical constants

pub mod error;
pub mod scalar;
pub mod tolerance;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{Result, ScalarError};
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use scalarmath_core::prelude::*;
///
/// assert_eq!(snap(1.4_f64, 1.0), 1.0);
/// assert!(is_equal(1.0_f64, 1.0005, f64::ALMOST_ZERO));
/// ```
pub mod prelude {
    pub use crate::error::{Result, ScalarError};
    pub use crate::scalar::{
        abs_difference, abs_max, abs_min, ceil, checked_snap, checked_snap_down, checked_snap_up,
        clamp, correct, floor, fract, is_inf, is_nan, max, min, mix, modulo, nan, next_greater,
        normalize_degrees, normalize_radians, pred, pred_by, round, round_down, round_up, sign,
        smoothstep, snap, snap_down, snap_up, step, succ, succ_by, to_degrees, to_radians, trunc,
    };
    pub use crate::tolerance::{contains, is_equal, is_zero};
    pub use crate::types::{constants, Scalar};
}
