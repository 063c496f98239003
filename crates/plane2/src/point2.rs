//! 2D point value type: positions that translate, scale, and rotate.
//!
//! Adding two points has no geometric meaning, so positional algebra is
//! expressed through translation by a [`Vector2f`] and through the
//! point-difference operator, which yields a vector.

use std::fmt;
use std::ops::{Add, Sub};

use crate::vec2::Vector2f;

/// Location in the plane. Two points with equal coordinates are
/// interchangeable; there is no identity beyond the coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2f {
    pub x: f32,
    pub y: f32,
}

impl Point2f {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point2f = Point2f { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset by scalar deltas.
    #[inline]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Offset by a displacement vector.
    #[inline]
    pub fn translate_by(self, v: Vector2f) -> Self {
        Self::new(self.x + v.x, self.y + v.y)
    }

    /// Componentwise scaling relative to the origin `(0, 0)`, never to any
    /// other pivot. For a different pivot, translate the pivot to the
    /// origin, scale, and translate back.
    #[inline]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Vector form of [`scale`](Self::scale): the components of `s` are the
    /// per-axis factors.
    #[inline]
    pub fn scale_by(self, s: Vector2f) -> Self {
        Self::new(self.x * s.x, self.y * s.y)
    }

    /// Rotation about the origin, counter-clockwise for positive angles
    /// (y-axis up).
    ///
    /// The angle is in degrees, converted to radians internally, and is not
    /// normalized: any real value is accepted, including ones outside
    /// `[0, 360)`.
    pub fn rotate(self, angle_deg: f32) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl Add<Vector2f> for Point2f {
    type Output = Point2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Self::Output {
        self.translate_by(rhs)
    }
}

impl Sub<Vector2f> for Point2f {
    type Output = Point2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Self::Output {
        Point2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Point difference yields the displacement from `rhs` to `self`.
impl Sub for Point2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Point2f) -> Self::Output {
        Vector2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Renders as `(x, y)`. An explicit formatter precision (`{:.3}`) is
/// honored; the default is the shortest text that parses back to the same
/// value.
impl fmt::Display for Point2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => write!(f, "({:.*}, {:.*})", digits, self.x, digits, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_forms_agree() {
        let p = Point2f::new(1.0, -2.0);
        let v = Vector2f::new(0.5, 4.0);
        assert_eq!(p.translate(0.5, 4.0), Point2f::new(1.5, 2.0));
        assert_eq!(p.translate_by(v), p.translate(v.x, v.y));
        assert_eq!(p + v, p.translate_by(v));
        assert_eq!((p + v) - v, p);
    }

    #[test]
    fn point_difference_is_a_vector() {
        let a = Point2f::new(2.0, 3.0);
        let b = Point2f::new(-1.0, 5.0);
        assert_eq!(b - a, Vector2f::new(-3.0, 2.0));
        assert_eq!(b - a, Vector2f::between(a, b));
    }

    #[test]
    fn scale_is_relative_to_origin() {
        let p = Point2f::new(2.0, -3.0);
        assert_eq!(p.scale(2.0, 0.5), Point2f::new(4.0, -1.5));
        assert_eq!(p.scale_by(Vector2f::new(2.0, 0.5)), p.scale(2.0, 0.5));
        // The origin is the fixed point of any scaling.
        assert_eq!(Point2f::ORIGIN.scale(123.0, -456.0), Point2f::ORIGIN);
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let r = Point2f::new(1.0, 0.0).rotate(90.0);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_angle_rotates_clockwise() {
        let r = Point2f::new(1.0, 0.0).rotate(-90.0);
        assert!(r.x.abs() < 1e-6);
        assert!((r.y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn full_turn_is_identity_within_tolerance() {
        let p = Point2f::new(3.5, -1.25);
        let r = p.rotate(360.0);
        assert!((r.x - p.x).abs() < 1e-5);
        assert!((r.y - p.y).abs() < 1e-5);
    }

    #[test]
    fn angles_outside_one_turn_are_accepted() {
        let p = Point2f::new(0.0, 2.0);
        let a = p.rotate(450.0);
        let b = p.rotate(90.0);
        assert!((a.x - b.x).abs() < 1e-5);
        assert!((a.y - b.y).abs() < 1e-5);
    }

    #[test]
    fn display_uses_parentheses() {
        assert_eq!(Point2f::new(1.0, 0.0).to_string(), "(1, 0)");
        assert_eq!(Point2f::new(-0.5, 2.25).to_string(), "(-0.5, 2.25)");
        assert_eq!(format!("{:.1}", Point2f::new(1.0, 0.0)), "(1.0, 0.0)");
    }
}
