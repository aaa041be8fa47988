//! Vector-space operations on [`Point`] values.
//!
//! None of these mutate their inputs; every operation returns a fresh value.

use super::{Point, Real};
use crate::error::{GeometryError, Result};

/// Result of [`find_closest_point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoint {
    /// Index of the closest point in the searched slice.
    pub index: usize,
    /// The closest point itself.
    pub point: Point,
    /// Distance from the reference point.
    pub distance: f64,
}

#[must_use]
pub fn add(a: &Point, b: &Point) -> Point {
    a + b
}

/// Sums any number of points. The empty sum is the origin.
#[must_use]
pub fn sum(points: &[Point]) -> Point {
    points.iter().fold(Point::zeros(), |acc, p| acc + p)
}

#[must_use]
pub fn neg(p: &Point) -> Point {
    -p
}

#[must_use]
pub fn sub(a: &Point, b: &Point) -> Point {
    a - b
}

/// Subtracts the sum of `rest` from `first`.
#[must_use]
pub fn sub_all(first: &Point, rest: &[Point]) -> Point {
    first - sum(rest)
}

#[must_use]
pub fn scalar_mul(scalar: f64, p: &Point) -> Point {
    p * scalar
}

#[must_use]
pub fn dot_prod(a: &Point, b: &Point) -> f64 {
    a.dot(b)
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn perp_prod(a: &Point, b: &Point) -> f64 {
    a.x * b.y - a.y * b.x
}

#[must_use]
pub fn length(p: &Point) -> f64 {
    p.x.hypot(p.y)
}

#[must_use]
pub fn distance(a: &Point, b: &Point) -> f64 {
    length(&(a - b))
}

/// Rotates `p` about the origin by `angle` radians, clockwise in screen
/// coordinates (y pointing down).
#[must_use]
pub fn rotate(p: &Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos)
}

/// Rotates `p` about `pivot` by `angle` radians.
#[must_use]
pub fn rotate_wrt(p: &Point, angle: f64, pivot: &Point) -> Point {
    rotate(&(p - pivot), angle) + pivot
}

/// Rescales `p` to the given length, keeping its direction.
///
/// A negative `len` flips the direction.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `p` has no direction.
pub fn set_length(p: &Point, len: f64) -> Result<Point> {
    let current = length(p);
    if Real::DEFAULT.is_zero(current) {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(p * (len / current))
}

/// Returns the point at distance `len` from `from` in the direction of `towards`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `from` and `towards` coincide.
pub fn set_segment_length(from: &Point, towards: &Point, len: f64) -> Result<Point> {
    Ok(from + set_length(&(towards - from), len)?)
}

/// Snaps each coordinate to the nearest multiple of `grid`.
///
/// Halfway values round up. A non-positive `grid` returns `p` unchanged.
#[must_use]
pub fn snap_to(p: &Point, grid: f64) -> Point {
    if grid <= 0.0 {
        return *p;
    }
    p.map(|c| (c / grid + 0.5).floor() * grid)
}

/// Finds the point in `points` nearest to `reference`.
///
/// Ties keep the earliest index. Returns `None` for an empty slice.
#[must_use]
pub fn find_closest_point(reference: &Point, points: &[Point]) -> Option<ClosestPoint> {
    let (first, rest) = points.split_first()?;
    let mut best = ClosestPoint {
        index: 0,
        point: *first,
        distance: distance(reference, first),
    };
    for (i, p) in rest.iter().enumerate() {
        let d = distance(reference, p);
        if d < best.distance {
            best = ClosestPoint {
                index: i + 1,
                point: *p,
                distance: d,
            };
        }
    }
    Some(best)
}

/// Tolerance equality using the default comparator.
#[must_use]
pub fn eq(a: &Point, b: &Point) -> bool {
    Real::DEFAULT.point_eq(a, b)
}

/// Rejects points with NaN or infinite coordinates.
///
/// Classification assumes finite input; callers run this at their ingestion boundary.
///
/// # Errors
///
/// Returns `GeometryError::NonFinite` if either coordinate is not finite.
pub fn ensure_finite(p: &Point) -> Result<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { x: p.x, y: p.y }.into())
    }
}
