//! Error types for checked scalar operations.
//!
//! The plain scalar utilities and the polynomial solvers never fail: they
//! let IEEE arithmetic propagate NaN and infinity, and report "no real
//! solution" through a reduced root count. The errors defined here are
//! surfaced only by the checked variants and by fallible constructors.

use thiserror::Error;

/// Errors that can occur in checked scalar operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarError {
    /// Grid size is not a positive, finite value.
    ///
    /// This error occurs when snapping to a grid whose size is zero,
    /// negative, NaN or infinite.
    #[error("Invalid grid size: {size} (must be positive and finite)")]
    InvalidGridSize {
        /// The rejected grid size
        size: f64,
    },

    /// More roots than the root set can hold.
    #[error("Too many roots: capacity is {capacity}, got {actual}")]
    TooManyRoots {
        /// Number of slots in the root set
        capacity: usize,
        /// Number of roots supplied
        actual: usize,
    },

    /// A root is NaN or infinite.
    ///
    /// Valid root slots hold finite values only; NaN is reserved for the
    /// unused trailing slots.
    #[error("Root at index {index} is not finite: {value}")]
    NonFiniteRoot {
        /// Position of the offending root
        index: usize,
        /// The offending value
        value: f64,
    },
}

impl ScalarError {
    /// Create an InvalidGridSize error.
    pub fn invalid_grid_size(size: f64) -> Self {
        Self::InvalidGridSize { size }
    }

    /// Create a TooManyRoots error.
    pub fn too_many_roots(capacity: usize, actual: usize) -> Self {
        Self::TooManyRoots { capacity, actual }
    }

    /// Create a NonFiniteRoot error.
    pub fn non_finite_root(index: usize, value: f64) -> Self {
        Self::NonFiniteRoot { index, value }
    }
}

/// Result type alias for checked scalar operations.
pub type Result<T> = std::result::Result<T, ScalarError>;
