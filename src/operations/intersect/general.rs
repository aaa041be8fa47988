//! Parametric crossing of two lines restricted to parameter ranges.
//!
//! Each side is `origin + t * direction` with `t` limited to a [`ParamRange`]
//! whose ends are independently inclusive or exclusive and may be infinite.
//! Segments use `[0, 1]`; rays use `[0, ∞)`.

use crate::math::point::perp_prod;
use crate::math::{Comparison, Point, Real};

/// One end of a parameter range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamBound {
    pub value: f64,
    pub comparison: Comparison,
}

impl ParamBound {
    #[must_use]
    pub const fn new(value: f64, comparison: Comparison) -> Self {
        Self { value, comparison }
    }
}

/// Admissible parameter values `start (<|<=) t (<|<=) end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub start: ParamBound,
    pub end: ParamBound,
}

impl ParamRange {
    #[must_use]
    pub const fn new(start: ParamBound, end: ParamBound) -> Self {
        Self { start, end }
    }

    /// The unit range `[0, 1]` with the same boundary semantics at both ends.
    #[must_use]
    pub const fn segment(comparison: Comparison) -> Self {
        Self::new(
            ParamBound::new(0.0, comparison),
            ParamBound::new(1.0, comparison),
        )
    }

    /// The half-line `[0, ∞)`; only the origin end takes `comparison`.
    #[must_use]
    pub const fn ray(comparison: Comparison) -> Self {
        Self::new(
            ParamBound::new(0.0, comparison),
            ParamBound::new(f64::INFINITY, Comparison::Exclusive),
        )
    }

    #[must_use]
    pub fn contains(&self, real: Real, t: f64) -> bool {
        real.compare(self.start.comparison, self.start.value, t)
            && real.compare(self.end.comparison, t, self.end.value)
    }
}

/// Crossing of `u1 + a * u` and `v1 + b * v` with `a` in `a_range` and `b` in `b_range`.
///
/// Returns `None` when the lines are parallel (collinear included) or the
/// crossing falls outside either range.
#[must_use]
pub fn general(
    real: Real,
    u1: &Point,
    u: &Point,
    a_range: ParamRange,
    v1: &Point,
    v: &Point,
    b_range: ParamRange,
) -> Option<Point> {
    let w = u1 - v1;
    let d = perp_prod(v, u);
    if real.is_zero(d) {
        return None;
    }

    let a = perp_prod(&w, v) / d;
    let b = perp_prod(&w, u) / d;
    if a_range.contains(real, a) && b_range.contains(real, b) {
        Some(u1 + u * a)
    } else {
        None
    }
}

/// Crossing point of segments `u1 -> u2` and `v1 -> v2`.
///
/// With `Comparison::Exclusive`, touching at an endpoint does not count.
#[must_use]
pub fn segment_segment(
    real: Real,
    u1: &Point,
    u2: &Point,
    v1: &Point,
    v2: &Point,
    comparison: Comparison,
) -> Option<Point> {
    let range = ParamRange::segment(comparison);
    general(real, u1, &(u2 - u1), range, v1, &(v2 - v1), range)
}

/// Crossing point of the ray from `origin` along `direction` with segment `v1 -> v2`.
#[must_use]
pub fn ray_segment(
    real: Real,
    origin: &Point,
    direction: &Point,
    v1: &Point,
    v2: &Point,
    comparison: Comparison,
) -> Option<Point> {
    general(
        real,
        origin,
        direction,
        ParamRange::ray(comparison),
        v1,
        &(v2 - v1),
        ParamRange::segment(comparison),
    )
}
