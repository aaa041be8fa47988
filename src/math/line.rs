use super::{Point, Real};

/// An infinite line in general form: `a * x + b * y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    /// Builds the line through `p1` and `p2`.
    ///
    /// The coefficients are not normalized; coincident points yield the
    /// all-zero equation, which every point satisfies.
    #[must_use]
    pub fn through(p1: &Point, p2: &Point) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// Evaluates the left-hand side at `p`.
    ///
    /// The sign tells which side of the line `p` is on; zero means on the line.
    #[must_use]
    pub fn evaluate(&self, p: &Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    #[must_use]
    pub fn is_parallel_to(&self, other: &Self, real: Real) -> bool {
        real.eq2(self.a * other.b, other.a * self.b)
    }
}
