use crate::error::Result;
use crate::math::point::{ensure_finite, length};
use crate::math::{Point, Real};

/// A directed line segment from `p1` to `p2`.
///
/// When `p1` and `p2` coincide within tolerance the segment is degenerate and
/// behaves as a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment after checking both endpoints are finite.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if any coordinate is NaN or infinite.
    pub fn try_new(p1: Point, p2: Point) -> Result<Self> {
        ensure_finite(&p1)?;
        ensure_finite(&p2)?;
        Ok(Self { p1, p2 })
    }

    /// Returns the direction vector `p2 - p1` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Point {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        length(&self.direction())
    }

    /// True when the endpoints coincide under `real`.
    #[must_use]
    pub fn is_degenerate(&self, real: Real) -> bool {
        real.point_eq(&self.p1, &self.p2)
    }

    /// Evaluates `p1 + t * (p2 - p1)`. Parameters 0 and 1 return the endpoints exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn point_at(&self, t: f64) -> Point {
        if t == 0.0 {
            self.p1
        } else if t == 1.0 {
            self.p2
        } else {
            self.p1 + self.direction() * t
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }
}

/// Yields the edges of a closed polygon: each vertex paired with the next,
/// then the last vertex paired with the first.
///
/// An empty slice yields nothing; a single vertex yields one degenerate edge.
pub fn polygon_edges(points: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let closing = match (points.first(), points.last()) {
        (Some(first), Some(last)) => Some(Segment::new(*last, *first)),
        _ => None,
    };
    points
        .windows(2)
        .map(|w| Segment::new(w[0], w[1]))
        .chain(closing)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn direction_and_length() {
        let s = Segment::new(p(1.0, 1.0), p(4.0, 5.0));
        assert_eq!(s.direction(), p(3.0, 4.0));
        assert_relative_eq!(s.length(), 5.0);
        assert_eq!(s.reversed().direction(), p(-3.0, -4.0));
    }

    #[test]
    fn degeneracy_under_tolerance() {
        let real = Real::DEFAULT;
        assert!(Segment::new(p(2.0, 2.0), p(2.0, 2.0)).is_degenerate(real));
        assert!(Segment::new(p(2.0, 2.0), p(2.0 + 1e-12, 2.0)).is_degenerate(real));
        assert!(!Segment::new(p(2.0, 2.0), p(2.0 + 1e-6, 2.0)).is_degenerate(real));
        assert!(!Segment::new(p(2.0, 2.0), p(2.0, 2.0 - 1e-5)).is_degenerate(real));
        assert!(!Segment::new(p(2.0, 2.0), p(2.1, 2.0)).is_degenerate(real));
    }

    #[test]
    fn point_at_endpoints_is_exact() {
        let s = Segment::new(p(0.1, 0.2), p(0.7, 0.3));
        assert_eq!(s.point_at(0.0), s.p1);
        assert_eq!(s.point_at(1.0), s.p2);
        let mid = s.point_at(0.5);
        assert_relative_eq!(mid.x, 0.4, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn try_new_rejects_non_finite() {
        assert!(Segment::try_new(p(0.0, 0.0), p(1.0, 1.0)).is_ok());
        assert!(Segment::try_new(p(f64::NAN, 0.0), p(1.0, 1.0)).is_err());
        assert!(Segment::try_new(p(0.0, 0.0), p(1.0, f64::NEG_INFINITY)).is_err());
    }

    #[test]
    fn polygon_edges_close_the_loop() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)];
        let edges: Vec<_> = polygon_edges(&pts).collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], Segment::new(pts[0], pts[1]));
        assert_eq!(edges[1], Segment::new(pts[1], pts[2]));
        assert_eq!(edges[2], Segment::new(pts[2], pts[0]));
        assert_eq!(polygon_edges(&[]).count(), 0);
        assert_eq!(polygon_edges(&pts[..1]).count(), 1);
    }
}
