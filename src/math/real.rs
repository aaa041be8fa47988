//! Tolerance-aware comparison of scalars.
//!
//! Every predicate of a given [`Real`] uses the same absolute epsilon, so a
//! value that is "zero" is never also "positive" or "negative".

use super::{Point, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Boundary semantics of a range end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// The boundary value itself belongs to the range (`<=`).
    #[default]
    Inclusive,
    /// The boundary value is excluded from the range (`<`).
    Exclusive,
}

/// Scalar comparator with a fixed absolute epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Real {
    eps: f64,
}

impl Default for Real {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Real {
    /// Comparator using the crate-wide [`TOLERANCE`].
    pub const DEFAULT: Self = Self { eps: TOLERANCE };

    /// Creates a comparator with a custom absolute epsilon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidTolerance` if `eps` is negative or not finite.
    pub fn with_epsilon(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(GeometryError::InvalidTolerance(eps).into());
        }
        Ok(Self { eps })
    }

    /// Returns the absolute epsilon of this comparator.
    #[must_use]
    pub fn epsilon(self) -> f64 {
        self.eps
    }

    #[must_use]
    pub fn is_zero(self, x: f64) -> bool {
        x.abs() <= self.eps
    }

    #[must_use]
    pub fn are_zero(self, xs: &[f64]) -> bool {
        xs.iter().all(|&x| self.is_zero(x))
    }

    #[must_use]
    pub fn is_positive(self, x: f64) -> bool {
        x > self.eps
    }

    #[must_use]
    pub fn is_negative(self, x: f64) -> bool {
        x < -self.eps
    }

    #[must_use]
    pub fn are_positive(self, xs: &[f64]) -> bool {
        xs.iter().all(|&x| self.is_positive(x))
    }

    #[must_use]
    pub fn are_negative(self, xs: &[f64]) -> bool {
        xs.iter().all(|&x| self.is_negative(x))
    }

    #[must_use]
    pub fn eq2(self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }

    #[must_use]
    pub fn neq(self, a: f64, b: f64) -> bool {
        !self.eq2(a, b)
    }

    /// True if every pair of values is equal within tolerance.
    #[must_use]
    pub fn eq(self, xs: &[f64]) -> bool {
        xs.iter()
            .enumerate()
            .all(|(i, &a)| xs[i + 1..].iter().all(|&b| self.eq2(a, b)))
    }

    /// `a < b` by more than the tolerance.
    #[must_use]
    pub fn lt2(self, a: f64, b: f64) -> bool {
        a < b - self.eps
    }

    /// `a <= b` allowing the tolerance.
    #[must_use]
    pub fn lte2(self, a: f64, b: f64) -> bool {
        a <= b + self.eps
    }

    #[must_use]
    pub fn gt2(self, a: f64, b: f64) -> bool {
        self.lt2(b, a)
    }

    #[must_use]
    pub fn gte2(self, a: f64, b: f64) -> bool {
        self.lte2(b, a)
    }

    /// Chained strict ordering: `xs[0] < xs[1] < ...`.
    #[must_use]
    pub fn lt(self, xs: &[f64]) -> bool {
        xs.windows(2).all(|w| self.lt2(w[0], w[1]))
    }

    /// Chained ordering: `xs[0] <= xs[1] <= ...`.
    ///
    /// `lte(&[0.0, t, 1.0])` is the usual "t lies in the unit range" test.
    #[must_use]
    pub fn lte(self, xs: &[f64]) -> bool {
        xs.windows(2).all(|w| self.lte2(w[0], w[1]))
    }

    #[must_use]
    pub fn gt(self, xs: &[f64]) -> bool {
        xs.windows(2).all(|w| self.gt2(w[0], w[1]))
    }

    #[must_use]
    pub fn gte(self, xs: &[f64]) -> bool {
        xs.windows(2).all(|w| self.gte2(w[0], w[1]))
    }

    /// Compares `a` against `b` with the given boundary semantics.
    #[must_use]
    pub fn compare(self, comparison: Comparison, a: f64, b: f64) -> bool {
        match comparison {
            Comparison::Inclusive => self.lte2(a, b),
            Comparison::Exclusive => self.lt2(a, b),
        }
    }

    /// Componentwise tolerance equality of two points.
    #[must_use]
    pub fn point_eq(self, a: &Point, b: &Point) -> bool {
        self.eq2(a.x, b.x) && self.eq2(a.y, b.y)
    }
}
