//! Closed-form real roots of quadratic equations.
//!
//! See [`QuadraticSolver`] for the branching rules and root order.

pub mod quadratic;

pub use quadratic::QuadraticSolver;
