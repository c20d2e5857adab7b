//! Closed-form real roots of `a·x² + b·x + c = 0`.
//!
//! [`QuadraticSolver::solve`] branches on the coefficients:
//!
//! - `a = 0, b = 0` — fails with [`Error::DegenerateEquation`]
//! - `a = 0, b ≠ 0` — one root, `-c / b`
//! - `a ≠ 0` — zero, one, or two roots depending on the discriminant
//!
//! Two roots are returned in formula order, `(-b + √Δ) / 2a` first and
//! `(-b - √Δ) / 2a` second. They are not sorted, so for negative `a` the first
//! root is the smaller one.

mod case;
mod error;

pub use case::Case;
pub use error::Error;

use quadratic_core::Quadratic;

/// Solves a quadratic equation with fixed coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Quadratic", into = "Quadratic"))]
pub struct QuadraticSolver {
    quadratic: Quadratic,
}

impl QuadraticSolver {
    /// Creates a solver for `a·x² + b·x + c = 0`.
    ///
    /// Any coefficients are accepted. A degenerate equation is only reported
    /// when solving.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            quadratic: Quadratic::new(a, b, c),
        }
    }

    /// Returns the coefficients being solved.
    #[must_use]
    pub const fn quadratic(&self) -> Quadratic {
        self.quadratic
    }

    /// Returns the discriminant `b² - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.quadratic.discriminant()
    }

    /// Determines which branch [`solve`](Self::solve) takes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateEquation`] if `a` and `b` are both zero.
    pub fn classify(&self) -> Result<Case, Error> {
        let q = &self.quadratic;

        if q.is_degenerate() {
            return Err(Error::DegenerateEquation { c: q.c() });
        }

        #[allow(clippy::float_cmp)]
        if q.a() == 0.0 {
            return Ok(Case::Linear);
        }

        Ok(Case::from_discriminant(q.discriminant()))
    }

    /// Returns the real roots of the equation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateEquation`] if `a` and `b` are both zero.
    pub fn solve(&self) -> Result<Vec<f64>, Error> {
        let (a, b, c) = (self.quadratic.a(), self.quadratic.b(), self.quadratic.c());

        let roots = match self.classify()? {
            Case::Linear => vec![-c / b],
            Case::NoRealRoots => Vec::new(),
            Case::RepeatedRoot => vec![-b / (2.0 * a)],
            Case::TwoRoots { discriminant } => {
                let sqrt_d = discriminant.sqrt();
                vec![(-b + sqrt_d) / (2.0 * a), (-b - sqrt_d) / (2.0 * a)]
            }
        };

        Ok(roots)
    }
}

impl From<Quadratic> for QuadraticSolver {
    fn from(quadratic: Quadratic) -> Self {
        Self { quadratic }
    }
}

impl From<QuadraticSolver> for Quadratic {
    fn from(solver: QuadraticSolver) -> Self {
        solver.quadratic
    }
}
