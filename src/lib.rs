pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, SegsectError};
pub use geometry::{Aabb, Segment};
pub use math::{Comparison, Point, Real};
pub use operations::intersect::{classify, Flags, IntersectionResult, SegmentIntersect};
