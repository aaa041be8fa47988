pub mod aabb;
pub mod segment;

pub use aabb::{Aabb, RayEndpoints, DEFAULT_PAD};
pub use segment::{polygon_edges, Segment};
