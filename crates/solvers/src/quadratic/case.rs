/// The branch a quadratic solve takes, determined by its coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Case {
    /// `a` is zero and `b` is not: a single root at `-c / b`.
    Linear,
    /// Negative discriminant: no real roots.
    NoRealRoots,
    /// Zero discriminant: one repeated root at `-b / 2a`.
    RepeatedRoot,
    /// Positive (or non-finite) discriminant: two roots by the quadratic formula.
    TwoRoots { discriminant: f64 },
}

impl Case {
    /// Classifies a discriminant for a quadratic with non-zero `a`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub(super) fn from_discriminant(discriminant: f64) -> Self {
        if discriminant < 0.0 {
            Self::NoRealRoots
        } else if discriminant == 0.0 {
            Self::RepeatedRoot
        } else {
            Self::TwoRoots { discriminant }
        }
    }

    /// Returns the number of real roots a solve in this case produces.
    #[must_use]
    pub fn root_count(&self) -> usize {
        match self {
            Self::NoRealRoots => 0,
            Self::Linear | Self::RepeatedRoot => 1,
            Self::TwoRoots { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_sign_selects_case() {
        assert_eq!(Case::from_discriminant(-3.0), Case::NoRealRoots);
        assert_eq!(Case::from_discriminant(0.0), Case::RepeatedRoot);
        assert_eq!(Case::from_discriminant(-0.0), Case::RepeatedRoot);
        assert!(matches!(
            Case::from_discriminant(5.0),
            Case::TwoRoots { .. }
        ));
    }

    #[test]
    fn nan_discriminant_falls_through_to_two_roots() {
        assert!(matches!(
            Case::from_discriminant(f64::NAN),
            Case::TwoRoots { .. }
        ));
    }

    #[test]
    fn root_counts() {
        assert_eq!(Case::Linear.root_count(), 1);
        assert_eq!(Case::from_discriminant(-1.0).root_count(), 0);
        assert_eq!(Case::from_discriminant(0.0).root_count(), 1);
        assert_eq!(Case::from_discriminant(1.0).root_count(), 2);
    }
}
