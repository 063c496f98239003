//! Lossless conversions to and from the nalgebra 2D types.
//!
//! The crate stops deliberately at points, vectors, and their componentwise
//! algebra. Anything heavier (matrices, transform composition, higher
//! dimensions) belongs in nalgebra; these impls make the crossing free in
//! both directions.

use nalgebra as na;

use crate::point2::Point2f;
use crate::vec2::Vector2f;

impl From<Vector2f> for na::Vector2<f32> {
    #[inline]
    fn from(v: Vector2f) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}

impl From<na::Vector2<f32>> for Vector2f {
    #[inline]
    fn from(v: na::Vector2<f32>) -> Self {
        Vector2f::new(v.x, v.y)
    }
}

impl From<Point2f> for na::Point2<f32> {
    #[inline]
    fn from(p: Point2f) -> Self {
        na::Point2::new(p.x, p.y)
    }
}

impl From<na::Point2<f32>> for Point2f {
    #[inline]
    fn from(p: na::Point2<f32>) -> Self {
        Point2f::new(p.x, p.y)
    }
}
