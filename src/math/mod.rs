pub mod line;
pub mod point;
pub mod real;

pub use line::LineEquation;
pub use point::ClosestPoint;
pub use real::{Comparison, Real};

/// 2D point type. Doubles as a displacement vector.
pub type Point = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;
