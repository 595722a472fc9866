//! Closest-point computations between a point and simple primitives.

pub use self::point_segment::point_segment_distance_squared;
pub use self::point_triangle::point_triangle_distance;

mod point_segment;
mod point_triangle;
