//! 2D vector value type and its componentwise algebra.
//!
//! Purpose
//! - `Vector2f` models a displacement or direction in the plane: the
//!   difference of two points, or a direction with a magnitude.
//! - Every operation is a pure function returning a new value; nothing here
//!   mutates its arguments or holds state.
//!
//! Conventions
//! - Single precision throughout. All finite component pairs are valid; NaN
//!   and infinity propagate per IEEE-754 instead of being intercepted.
//! - `det` follows the counter-clockwise-positive orientation convention
//!   (y-axis up).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::point2::Point2f;

/// Displacement or direction in the plane.
///
/// Structurally a pair of floats like [`Point2f`], but kept as a distinct
/// type: a point is a location, a vector is a difference between locations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    /// Zero displacement.
    pub const ZERO: Vector2f = Vector2f { x: 0.0, y: 0.0 };
    /// Unit vector along +x.
    pub const X: Vector2f = Vector2f { x: 1.0, y: 0.0 };
    /// Unit vector along +y.
    pub const Y: Vector2f = Vector2f { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `a` to `b`, i.e. `b - a`.
    #[inline]
    pub fn between(a: Point2f, b: Point2f) -> Self {
        Self::new(b.x - a.x, b.y - a.y)
    }

    /// Dot product `x·x' + y·y'`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`
    /// (the 2D determinant, also called the perp-dot product).
    ///
    /// Positive when `other` lies counter-clockwise of `self`, negative
    /// clockwise, zero when parallel.
    #[inline]
    pub fn det(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Squared Euclidean length. Cheaper than [`length`](Self::length) when
    /// only comparing magnitudes.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length `sqrt(dot(v, v))`. Non-negative; NaN only if a
    /// component is NaN.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Componentwise multiplication by a scalar. No clamping; overflow and
    /// underflow follow float semantics.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Unit vector in the direction of `self`.
    ///
    /// When the length is not strictly positive (the zero vector, or a NaN
    /// length) the zero vector is returned. This is a degeneracy guard, not
    /// an error path; use [`try_normalize`](Self::try_normalize) to observe
    /// the degenerate case.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self.scale(1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Like [`normalize`](Self::normalize), reporting the degenerate case
    /// instead of masking it.
    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 {
            Some(self.scale(1.0 / len))
        } else {
            None
        }
    }

    /// Linear interpolation `self·(1−t) + other·t`, per component.
    ///
    /// `t` is unconstrained: values outside `[0, 1]` extrapolate, with no
    /// validation or clamping. The endpoints are exact: `t = 0` returns
    /// `self` and `t = 1` returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self::new(self.x * s + other.x * t, self.y * s + other.y * t)
    }
}

impl Add for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn add(self, rhs: Vector2f) -> Self::Output {
        Vector2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn sub(self, rhs: Vector2f) -> Self::Output {
        Vector2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector2f::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Vector2f> for f32 {
    type Output = Vector2f;
    #[inline]
    fn mul(self, rhs: Vector2f) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<f32> for Vector2f {
    type Output = Vector2f;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Vector2f::new(self.x / rhs, self.y / rhs)
    }
}

/// Renders as `<x, y>`. An explicit formatter precision (`{:.3}`) is
/// honored; the default is the shortest text that parses back to the same
/// value.
impl fmt::Display for Vector2f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(digits) => write!(f, "<{:.*}, {:.*}>", digits, self.x, digits, self.y),
            None => write!(f, "<{}, {}>", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_is_point_difference() {
        let a = Point2f::new(1.0, 2.0);
        let b = Point2f::new(4.0, -2.0);
        assert_eq!(Vector2f::between(a, b), Vector2f::new(3.0, -4.0));
    }

    #[test]
    fn dot_of_axes_and_self() {
        assert_eq!(Vector2f::X.dot(Vector2f::Y), 0.0);
        let v = Vector2f::new(2.0, 3.0);
        assert_eq!(v.dot(v), 13.0);
    }

    #[test]
    fn det_of_unit_axes_is_one() {
        assert_eq!(Vector2f::X.det(Vector2f::Y), 1.0);
        assert_eq!(Vector2f::Y.det(Vector2f::X), -1.0);
    }

    #[test]
    fn three_four_five_length() {
        assert_eq!(Vector2f::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2f::new(3.0, 4.0).length_squared(), 25.0);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let v = Vector2f::new(-7.5, 2.25).normalize();
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_is_zero_not_nan() {
        let n = Vector2f::ZERO.normalize();
        assert_eq!(n, Vector2f::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn try_normalize_reports_degeneracy() {
        assert_eq!(Vector2f::ZERO.try_normalize(), None);
        let u = Vector2f::new(0.0, -3.0).try_normalize().unwrap();
        assert!((u.length() - 1.0).abs() < 1e-6);
        assert_eq!(u, Vector2f::new(0.0, -1.0));
    }

    #[test]
    fn lerp_endpoints_exact_midpoint_halved() {
        let a = Vector2f::new(1.0, -2.0);
        let b = Vector2f::new(5.0, 6.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector2f::new(3.0, 2.0));
    }

    #[test]
    fn lerp_extrapolates_outside_unit_range() {
        let a = Vector2f::new(0.0, 0.0);
        let b = Vector2f::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 2.0), Vector2f::new(4.0, 8.0));
        assert_eq!(a.lerp(b, -0.5), Vector2f::new(-1.0, -2.0));
    }

    #[test]
    fn operator_algebra_matches_componentwise_forms() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(0.5, -1.5);
        assert_eq!(a + b, Vector2f::new(1.5, 0.5));
        assert_eq!(a - b, Vector2f::new(0.5, 3.5));
        assert_eq!(-a, Vector2f::new(-1.0, -2.0));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(2.0 * a, a.scale(2.0));
        assert_eq!(a / 2.0, Vector2f::new(0.5, 1.0));
    }

    #[test]
    fn scale_by_infinity_follows_float_semantics() {
        let v = Vector2f::new(1.0, -1.0).scale(f32::INFINITY);
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
    }

    #[test]
    fn display_uses_angle_brackets() {
        assert_eq!(Vector2f::new(1.5, -0.25).to_string(), "<1.5, -0.25>");
        assert_eq!(Vector2f::new(1.0, 0.0).to_string(), "<1, 0>");
        assert_eq!(format!("{:.2}", Vector2f::new(1.5, -0.25)), "<1.50, -0.25>");
    }
}
