use crate::error::{GeometryError, Result};
use crate::math::point::{distance, dot_prod};
use crate::math::{Point, Real};

/// Projects `p` onto the infinite line through `p1` and `p2`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if `p1` and `p2` coincide.
pub fn closest_point_on_line(p1: &Point, p2: &Point, p: &Point) -> Result<Point> {
    let line = p2 - p1;
    let len = distance(p2, p1);
    if Real::DEFAULT.is_zero(len) {
        return Err(GeometryError::Degenerate(format!(
            "line through coincident points ({}, {})",
            p1.x, p1.y
        ))
        .into());
    }
    // Signed distance of the projection from p1 along the line.
    let q = dot_prod(&line, &(p - p1)) / len;
    Ok(p1 + line * (q / len))
}

/// Closest point to `p` on the segment `p1 -> p2`.
///
/// A degenerate segment returns `p1`.
#[must_use]
pub fn closest_point_on_segment(p1: &Point, p2: &Point, p: &Point) -> Point {
    let line = p2 - p1;
    let len_sq = dot_prod(&line, &line);
    if Real::DEFAULT.is_zero(len_sq) {
        return *p1;
    }
    let t = (dot_prod(&line, &(p - p1)) / len_sq).clamp(0.0, 1.0);
    p1 + line * t
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn projection_onto_line() {
        let c = closest_point_on_line(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, 3.0)).unwrap();
        assert!(point::eq(&c, &p(1.0, 0.0)));
        // Projection may fall beyond the defining points.
        let c = closest_point_on_line(&p(0.0, 0.0), &p(1.0, 1.0), &p(4.0, 2.0)).unwrap();
        assert!(point::eq(&c, &p(3.0, 3.0)), "c={c:?}");
    }

    #[test]
    fn line_needs_two_distinct_points() {
        assert!(closest_point_on_line(&p(1.0, 1.0), &p(1.0, 1.0), &p(0.0, 0.0)).is_err());
    }

    #[test]
    fn segment_projection_is_clamped() {
        let (a, b) = (p(0.0, 0.0), p(4.0, 0.0));
        assert!(point::eq(&closest_point_on_segment(&a, &b, &p(2.0, 5.0)), &p(2.0, 0.0)));
        assert!(point::eq(&closest_point_on_segment(&a, &b, &p(-3.0, 1.0)), &a));
        assert!(point::eq(&closest_point_on_segment(&a, &b, &p(9.0, -1.0)), &b));
        assert_eq!(closest_point_on_segment(&a, &a, &p(9.0, -1.0)), a);
    }
}
