mod circle_collision;
mod closest_point;
mod point_in_polygon;

pub use circle_collision::circle_collision_point;
pub use closest_point::{closest_point_on_line, closest_point_on_segment};
pub use point_in_polygon::PointInPolygon;
