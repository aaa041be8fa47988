//! Classification of how two segments meet.
//!
//! Every degeneracy is an ordinary outcome: a segment that collapses to a
//! point, parallel segments, collinear segments that overlap partially or
//! fully, and segments that only share an endpoint all produce an
//! [`IntersectionResult`] together with the [`Flags`] describing the case.

use tracing::trace;

use super::Flags;
use crate::geometry::Segment;
use crate::math::point::perp_prod;
use crate::math::{Point, Real};

/// Outcome of classifying a segment pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult {
    /// The segments do not meet.
    None { flags: Flags },
    /// The segments meet in exactly one point.
    Point { flags: Flags, point: Point },
    /// The segments are collinear and share the sub-segment `start..end`,
    /// ordered along the second segment's direction.
    Segment { flags: Flags, start: Point, end: Point },
}

impl IntersectionResult {
    #[must_use]
    pub fn flags(&self) -> Flags {
        match *self {
            Self::None { flags } | Self::Point { flags, .. } | Self::Segment { flags, .. } => {
                flags
            }
        }
    }

    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match *self {
            Self::Point { point, .. } => Some(point),
            _ => None,
        }
    }

    #[must_use]
    pub fn segment(&self) -> Option<(Point, Point)> {
        match *self {
            Self::Segment { start, end, .. } => Some((start, end)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None { .. })
    }

    /// Returns the same geometry with the U/V flag roles exchanged.
    #[must_use]
    fn swap_uv(self) -> Self {
        match self {
            Self::None { flags } => Self::None {
                flags: flags.swap_uv(),
            },
            Self::Point { flags, point } => Self::Point {
                flags: flags.swap_uv(),
                point,
            },
            Self::Segment { flags, start, end } => Self::Segment {
                flags: flags.swap_uv(),
                start,
                end,
            },
        }
    }
}

/// Classifies segment `u1 -> u2` against segment `v1 -> v2` with the default tolerance.
///
/// Coordinates must be finite; see [`crate::math::point::ensure_finite`].
#[must_use]
pub fn classify(u1: Point, u2: Point, v1: Point, v2: Point) -> IntersectionResult {
    SegmentIntersect::new(Segment::new(u1, u2), Segment::new(v1, v2)).execute()
}

/// Classifies the intersection of two segments, U and V.
#[derive(Debug, Clone, Copy)]
pub struct SegmentIntersect {
    u: Segment,
    v: Segment,
    real: Real,
}

impl SegmentIntersect {
    /// Creates a new `SegmentIntersect` query using [`Real::DEFAULT`].
    #[must_use]
    pub fn new(u: Segment, v: Segment) -> Self {
        Self {
            u,
            v,
            real: Real::DEFAULT,
        }
    }

    /// Uses `real` for every comparison made by this query.
    #[must_use]
    pub fn with_tolerance(mut self, real: Real) -> Self {
        self.real = real;
        self
    }

    /// Executes the query.
    ///
    /// Never fails for finite input; NaN or infinite coordinates give an
    /// unspecified result.
    #[must_use]
    pub fn execute(&self) -> IntersectionResult {
        let real = self.real;
        let (u1, v1) = (self.u.p1, self.v.p1);
        let u = self.u.direction();
        let v = self.v.direction();
        let w = u1 - v1;
        let d = perp_prod(&u, &v);

        let degenerate_u = self.u.is_degenerate(real);
        let degenerate_v = self.v.is_degenerate(real);

        if !degenerate_u && !degenerate_v && !real.is_zero(d) {
            return self.skew(&u, &v, &w, d);
        }

        // A point has no direction; only the other segment's line can separate it.
        let on_one_line = match (degenerate_u, degenerate_v) {
            (true, true) => true,
            (true, false) => real.is_zero(perp_prod(&v, &w)),
            (false, true) => real.is_zero(perp_prod(&u, &w)),
            (false, false) => real.are_zero(&[perp_prod(&u, &w), perp_prod(&v, &w)]),
        };
        if !on_one_line {
            let mut flags = Flags::PARALLEL;
            flags.set_if(Flags::DEGENERATE_U, degenerate_u);
            flags.set_if(Flags::DEGENERATE_V, degenerate_v);
            trace!(?flags, "segments lie on distinct lines");
            return IntersectionResult::None { flags };
        }

        match (degenerate_u, degenerate_v) {
            (true, true) => self.both_points(),
            (true, false) => point_on_segment(real, &self.u.p1, &self.v),
            (false, true) => point_on_segment(real, &self.v.p1, &self.u).swap_uv(),
            (false, false) => self.collinear_overlap(&u, &v, &w),
        }
    }

    /// Lines cross at a single point; check it lies on both segments.
    fn skew(&self, u: &Point, v: &Point, w: &Point, d: f64) -> IntersectionResult {
        let real = self.real;
        let ui = perp_prod(v, w) / d;
        let vi = perp_prod(u, w) / d;
        if !real.lte(&[0.0, ui, 1.0]) || !real.lte(&[0.0, vi, 1.0]) {
            trace!(ui, vi, "line crossing lies outside a segment");
            return IntersectionResult::None { flags: Flags::EMPTY };
        }

        let point = self.u.p1 + u * ui;
        let mut flags = Flags::EMPTY;
        flags.set_if(Flags::U1, real.point_eq(&point, &self.u.p1));
        flags.set_if(Flags::U2, real.point_eq(&point, &self.u.p2));
        flags.set_if(Flags::V1, real.point_eq(&point, &self.v.p1));
        flags.set_if(Flags::V2, real.point_eq(&point, &self.v.p2));
        trace!(ui, vi, ?flags, "segments cross");
        IntersectionResult::Point { flags, point }
    }

    /// Both segments are single points.
    fn both_points(&self) -> IntersectionResult {
        let flags = Flags::COLLINEAR | Flags::DEGENERATE_U | Flags::DEGENERATE_V;
        if self.real.point_eq(&self.u.p1, &self.v.p1) {
            IntersectionResult::Point {
                flags: flags | Flags::U1 | Flags::U2 | Flags::V1 | Flags::V2,
                point: self.u.p1,
            }
        } else {
            IntersectionResult::None { flags }
        }
    }

    /// Both segments have a direction and share a line: project U onto V's
    /// parameter and intersect the parameter range with `[0, 1]`.
    fn collinear_overlap(&self, u: &Point, v: &Point, w: &Point) -> IntersectionResult {
        let real = self.real;
        let flags = Flags::COLLINEAR | Flags::PARALLEL;

        // Parameters of u1 and u2 along V, measured on V's dominant axis.
        let w2 = w + u;
        let (mut t1, mut t2) = if v.x.abs() >= v.y.abs() {
            (w.x / v.x, w2.x / v.x)
        } else {
            (w.y / v.y, w2.y / v.y)
        };
        let swapped = t1 > t2;
        if swapped {
            std::mem::swap(&mut t1, &mut t2);
        }

        if real.gt2(t1, 1.0) || real.lt2(t2, 0.0) {
            trace!(t1, t2, "collinear segments do not overlap");
            return IntersectionResult::None { flags };
        }

        // U1/U2 are assigned as if t1 belonged to u1, then corrected for the swap.
        let mut ends = Flags::EMPTY;
        ends.set_if(Flags::U1, real.lte(&[0.0, t1, 1.0]));
        ends.set_if(Flags::U2, real.lte(&[0.0, t2, 1.0]));
        if swapped {
            ends = ends.swap_u_ends();
        }

        let t1 = if real.lte2(t1, 0.0) { 0.0 } else { t1.min(1.0) };
        let t2 = if real.gte2(t2, 1.0) { 1.0 } else { t2.max(0.0) };
        ends.set_if(Flags::V1, real.is_zero(t1));
        ends.set_if(Flags::V2, real.eq2(t2, 1.0));

        let flags = flags | ends;
        if real.eq2(t1, t2) {
            trace!(t1, ?flags, "collinear segments touch");
            return IntersectionResult::Point {
                flags,
                point: self.v.point_at(t1),
            };
        }

        trace!(t1, t2, ?flags, "collinear segments overlap");
        IntersectionResult::Segment {
            flags,
            start: self.v.point_at(t1),
            end: self.v.point_at(t2),
        }
    }
}

/// Single point `p` (the degenerate U) against the non-degenerate `segment` (V),
/// both known to lie on one line.
fn point_on_segment(real: Real, p: &Point, segment: &Segment) -> IntersectionResult {
    let flags = Flags::COLLINEAR | Flags::DEGENERATE_U;
    let d = segment.direction();
    let inside = if d.x.abs() >= d.y.abs() {
        within(real, p.x, segment.p1.x, segment.p2.x)
    } else {
        within(real, p.y, segment.p1.y, segment.p2.y)
    };
    if !inside {
        return IntersectionResult::None { flags };
    }

    let mut flags = flags | Flags::U1 | Flags::U2;
    flags.set_if(Flags::V1, real.point_eq(p, &segment.p1));
    flags.set_if(Flags::V2, real.point_eq(p, &segment.p2));
    IntersectionResult::Point { flags, point: *p }
}

/// Inclusive 1D containment of `x` between `a` and `b` in either order.
fn within(real: Real, x: f64, a: f64, b: f64) -> bool {
    real.lte(&[a.min(b), x, a.max(b)])
}
