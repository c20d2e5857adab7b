use thiserror::Error;

/// Errors that can occur when solving a quadratic equation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// Both `a` and `b` are zero, so solving for `x` divides by zero.
    ///
    /// The equation reduces to `c = 0`, which holds for every `x` or for none.
    #[error("division by zero: a and b are both zero (c = {c})")]
    DegenerateEquation { c: f64 },
}
