use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{polygon_edges, Aabb, DEFAULT_PAD};
use crate::math::{Comparison, Point, Real};
use crate::operations::intersect::{general, ParamBound, ParamRange};

/// Even-odd containment of a point in a closed polygon.
///
/// Casts a ray from the point towards the top edge of the polygon's bounding
/// box and counts the polygon edges it crosses.
#[derive(Debug, Clone, Copy)]
pub struct PointInPolygon<'a> {
    polygon: &'a [Point],
    point: Point,
    real: Real,
}

impl<'a> PointInPolygon<'a> {
    /// Creates a new `PointInPolygon` query using [`Real::DEFAULT`].
    #[must_use]
    pub fn new(polygon: &'a [Point], point: Point) -> Self {
        Self {
            polygon,
            point,
            real: Real::DEFAULT,
        }
    }

    /// Uses `real` for every comparison made by this query.
    #[must_use]
    pub fn with_tolerance(mut self, real: Real) -> Self {
        self.real = real;
        self
    }

    /// Executes the query, returning `true` if the point is inside.
    ///
    /// Points exactly on the boundary may land on either side.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than three vertices.
    pub fn execute(&self) -> Result<bool> {
        if self.polygon.len() < 3 {
            return Err(OperationError::InvalidInput(format!(
                "polygon needs at least 3 vertices, got {}",
                self.polygon.len()
            ))
            .into());
        }

        let aabb = Aabb::compute(self.polygon, DEFAULT_PAD)?;
        if !aabb.contains(self.real, &self.point) {
            return Ok(false);
        }

        let direction = aabb.ray_endpoints(&self.point).top - self.point;
        let ray = ParamRange::ray(Comparison::Inclusive);
        // Each edge owns its left end only, so a vertex on the ray is counted
        // once when the boundary passes through it and zero or two times when
        // the boundary only touches it.
        let edge_range = ParamRange::new(
            ParamBound::new(0.0, Comparison::Inclusive),
            ParamBound::new(1.0, Comparison::Exclusive),
        );

        let crossings = polygon_edges(self.polygon)
            .map(|edge| if edge.p1.x > edge.p2.x { edge.reversed() } else { edge })
            .filter(|edge| {
                general(
                    self.real,
                    &self.point,
                    &direction,
                    ray,
                    &edge.p1,
                    &edge.direction(),
                    edge_range,
                )
                .is_some()
            })
            .count();

        debug!(crossings, point = ?self.point, "point in polygon ray cast");
        Ok(crossings % 2 == 1)
    }
}
