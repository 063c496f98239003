//! Deterministic random draws of points and vectors (replay tokens).
//!
//! Purpose
//! - Provide small, reproducible samplers for scatter data used by tests,
//!   benchmarks, and demos. Every draw is addressed by a [`ReplayToken`], so
//!   a value can be regenerated exactly without being stored.
//!
//! Model
//! - A token `(seed, index)` is mixed into a single `StdRng`; samplers only
//!   consume that stream, so equal tokens give equal draws.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point2::Point2f;
use crate::vec2::Vector2f;

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub const fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer: equal tokens must map to equal streams.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling window.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    pub min: Point2f,
    pub max: Point2f,
}

impl Bounds2 {
    /// Square window centered on the origin with the given half-extent.
    #[inline]
    pub fn centered(half_extent: f32) -> Self {
        let h = half_extent.abs();
        Self {
            min: Point2f::new(-h, -h),
            max: Point2f::new(h, h),
        }
    }
}

/// Unit-length vector with uniformly distributed direction.
pub fn draw_unit_vector(tok: ReplayToken) -> Vector2f {
    let mut rng = tok.to_std_rng();
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    Vector2f::new(theta.cos(), theta.sin())
}

/// Vector uniform by area over the closed disc of the given radius.
///
/// The radius is taken by absolute value. The square root on the radial
/// draw keeps the distribution uniform instead of clustered at the center.
pub fn draw_vector_in_disc(radius: f32, tok: ReplayToken) -> Vector2f {
    let mut rng = tok.to_std_rng();
    let r = radius.abs() * rng.gen::<f32>().sqrt();
    let theta = rng.gen::<f32>() * std::f32::consts::TAU;
    Vector2f::new(theta.cos() * r, theta.sin() * r)
}

/// Point uniform over `bounds`. A degenerate axis (`max <= min`) collapses
/// to the `min` coordinate instead of panicking.
pub fn draw_point_in_bounds(bounds: Bounds2, tok: ReplayToken) -> Point2f {
    let mut rng = tok.to_std_rng();
    Point2f::new(
        draw_axis(&mut rng, bounds.min.x, bounds.max.x),
        draw_axis(&mut rng, bounds.min.y, bounds.max.y),
    )
}

/// `n` points uniform over `bounds`, all derived from one token.
pub fn draw_scatter(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point2f> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Point2f::new(
                draw_axis(&mut rng, bounds.min.x, bounds.max.x),
                draw_axis(&mut rng, bounds.min.y, bounds.max.y),
            )
        })
        .collect()
}

#[inline]
fn draw_axis<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
