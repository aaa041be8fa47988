use crate::error::{GeometryError, Result};
use crate::math::{Point, Real};

/// Padding applied by callers that do not choose their own.
pub const DEFAULT_PAD: f64 = 5.0;

/// An axis-aligned bounding box in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// Exit points of axis-aligned rays cast from a point inside an [`Aabb`].
///
/// `top` lies on the `y_min` edge, `bottom` on `y_max` (screen orientation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayEndpoints {
    pub top: Point,
    pub bottom: Point,
    pub left: Point,
    pub right: Point,
}

impl Aabb {
    /// Computes the bounding box of `points`, grown by `pad` on every side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::EmptyPointSet` if `points` is empty.
    pub fn compute(points: &[Point], pad: f64) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(GeometryError::EmptyPointSet)?;
        let mut aabb = Self {
            x_min: first.x,
            y_min: first.y,
            x_max: first.x,
            y_max: first.y,
        };
        for p in rest {
            aabb.x_min = aabb.x_min.min(p.x);
            aabb.y_min = aabb.y_min.min(p.y);
            aabb.x_max = aabb.x_max.max(p.x);
            aabb.y_max = aabb.y_max.max(p.y);
        }
        Ok(Self {
            x_min: aabb.x_min - pad,
            y_min: aabb.y_min - pad,
            x_max: aabb.x_max + pad,
            y_max: aabb.y_max + pad,
        })
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, real: Real, p: &Point) -> bool {
        real.lte(&[self.x_min, p.x, self.x_max]) && real.lte(&[self.y_min, p.y, self.y_max])
    }

    /// Returns where vertical and horizontal rays from `p` leave the box.
    #[must_use]
    pub fn ray_endpoints(&self, p: &Point) -> RayEndpoints {
        RayEndpoints {
            top: Point::new(p.x, self.y_min),
            bottom: Point::new(p.x, self.y_max),
            left: Point::new(self.x_min, p.y),
            right: Point::new(self.x_max, p.y),
        }
    }
}
