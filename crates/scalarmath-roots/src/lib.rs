//! Closed-form real-root solvers for polynomials of degree two to four.
//!
//! The solvers classify root multiplicity under a caller-supplied
//! tolerance and never fail: missing real roots show up as a reduced count
//! in a fixed-capacity [`RootSet`] whose unused slots hold NaN.
//!
//! Coefficients are passed highest-degree-first. A leading coefficient
//! within tolerance of zero reduces the degree instead of dividing by it.
//!
//! # Example
//! ```
//! use scalarmath_roots::prelude::*;
//!
//! let roots = solve_quadratic(1.0_f64, 6.0, -16.0, f64::ALMOST_ZERO);
//! assert_eq!(roots.count(), 2);
//! assert_eq!(roots.as_slice(), &[2.0, -8.0]);
//! ```
//!
//! # Modules
//!
//! - [`cubic`]: Cardano and trigonometric cubic solver
//! - [`polynomial`]: Polynomial evaluation
//! - [`quadratic`]: Cancellation-free quadratic solver
//! - [`quartic`]: Ferrari quartic solver
//! - [`root_set`]: Fixed-capacity result type

pub mod cubic;
pub mod polynomial;
pub mod quadratic;
pub mod quartic;
pub mod root_set;

pub use cubic::solve_cubic;
pub use polynomial::evaluate;
pub use quadratic::solve_quadratic;
pub use quartic::solve_quartic;
pub use root_set::{CubicRoots, QuadraticRoots, QuarticRoots, RootSet};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cubic::solve_cubic;
    pub use crate::polynomial::evaluate;
    pub use crate::quadratic::solve_quadratic;
    pub use crate::quartic::solve_quartic;
    pub use crate::root_set::{CubicRoots, QuadraticRoots, QuarticRoots, RootSet};
    pub use scalarmath_core::{Result, Scalar, ScalarError};
}
