use crate::math::{LineEquation, Point, Real};

/// Whether two segments meet, without computing where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    No,
    Yes,
    /// The segments lie on one line and are not separated by either line test.
    Overlap,
}

/// Side-of-line test for segments `u1 -> u2` and `v1 -> v2`.
///
/// Cheaper than [`super::classify`] and enough for crossing counts. `Overlap`
/// is reported for collinear pairs whose projections were not separated; it
/// does not check that the collinear extents actually overlap.
#[must_use]
pub fn exists(real: Real, u1: &Point, u2: &Point, v1: &Point, v2: &Point) -> Existence {
    let line_u = LineEquation::through(u1, u2);
    let n1 = line_u.evaluate(v1);
    let n2 = line_u.evaluate(v2);
    if real.are_positive(&[n1, n2]) || real.are_negative(&[n1, n2]) {
        return Existence::No;
    }

    let line_v = LineEquation::through(v1, v2);
    let m1 = line_v.evaluate(u1);
    let m2 = line_v.evaluate(u2);
    if real.are_positive(&[m1, m2]) || real.are_negative(&[m1, m2]) {
        return Existence::No;
    }

    if line_u.is_parallel_to(&line_v, real) {
        return Existence::Overlap;
    }
    Existence::Yes
}
