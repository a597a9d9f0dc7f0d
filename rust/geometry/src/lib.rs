//! Backing-Engine Geometry Primitives
//!
//! Axis-aligned rectangle and point math for 2D drawing analysis.
//! Everything operates on floating-point inches in the drawing plane;
//! walls and placements are treated as axis-aligned boxes on a single
//! plane, so all predicates reduce to interval arithmetic.

pub mod primitives;
pub mod separation;

// Re-export nalgebra vector types for convenience
pub use nalgebra::Vector2;

pub use primitives::{Point2D, Rect};
pub use separation::{separation_axis, separation_vector, Axis};
