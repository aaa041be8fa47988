use crate::math::point::{dot_prod, length};
use crate::math::{Point, Real};

/// Sweeps circle 1 (center `c1`, radius `r1`) along displacement `v` and
/// returns its center at the moment it first touches circle 2 (`c2`, `r2`).
///
/// Returns `None` when circle 1 moves away from circle 2, passes it without
/// touching, or would touch only after travelling further than `|v|`.
/// Circles that already overlap report the contact behind `c1`.
#[must_use]
pub fn circle_collision_point(c1: &Point, r1: f64, v: &Point, c2: &Point, r2: f64) -> Option<Point> {
    let real = Real::DEFAULT;
    let c = c2 - c1;

    let along = dot_prod(v, &c);
    if !real.is_positive(along) {
        return None;
    }

    // Projection of c2 onto the path, and squared distance of c2 from the path.
    let v_len = length(v);
    let proj = along / v_len;
    let off_path_sq = dot_prod(&c, &c) - proj * proj;

    let reach = r1 + r2;
    let reach_sq = reach * reach;
    if real.gte2(off_path_sq, reach_sq) {
        return None;
    }

    let travel = proj - (reach_sq - off_path_sq).sqrt();
    if real.gt2(travel, v_len) {
        return None;
    }
    Some(c1 + v * (travel / v_len))
}
