//! Elementary scalar predicates, rounding, snapping and angle utilities.
//!
//! All functions here are pure and total. None of them takes a tolerance
//! except [`correct`], which only rounds when the rounded value lies within
//! the given epsilon.

pub mod angle;
pub mod index;
pub mod ops;
pub mod rounding;

// Re-export scalar utilities
pub use angle::*;
pub use index::*;
pub use ops::*;
pub use rounding::*;
