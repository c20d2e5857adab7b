//! Coefficient types for quadratic equations.
//!
//! [`Quadratic`] holds the coefficients of `a·x² + b·x + c` and the quantities
//! derived from them that the solvers branch on.

mod quadratic;

pub use quadratic::Quadratic;
