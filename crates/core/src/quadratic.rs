/// Coefficients of the quadratic `a·x² + b·x + c`.
///
/// Coefficients are stored as given. Nothing is validated here: whether the
/// equation is actually solvable is decided by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Creates a quadratic from its leading, linear, and constant coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the leading (quadratic) coefficient.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Returns the discriminant `b² - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates the quadratic at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Returns true if both `a` and `b` are zero.
    ///
    /// The expression then reduces to the constant `c` and has no unknown
    /// left to solve for.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }
}
