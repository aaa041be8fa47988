mod classify;
mod existence;
mod flags;
mod general;

pub use classify::{classify, IntersectionResult, SegmentIntersect};
pub use existence::{exists, Existence};
pub use flags::Flags;
pub use general::{general, ray_segment, segment_segment, ParamBound, ParamRange};
