//! Rotated scatter demo: draw a reproducible point cloud, rotate it, and
//! report everything through the formatting helpers.
//!
//! Purpose
//! - Show the replay-token sampling and the rotation kernel working together.
//! - Exercise `print_all!` end to end on mixed argument types.

use plane2::prelude::*;
use plane2::print_all;

fn main() {
    let tok = ReplayToken::new(42, 0);
    let cloud = draw_scatter(5, Bounds2::centered(10.0), tok);

    let angle = 30.0;
    let rotated: Vec<Point2f> = cloud.iter().map(|p| p.rotate(angle)).collect();

    print_all!("seed", tok.seed, "angle_deg", angle, "points", cloud.len());
    print_all!("before", cloud);
    print_all!("after", rotated);

    let drift: Vec<f32> = cloud
        .iter()
        .zip(&rotated)
        .map(|(a, b)| {
            let before = Vector2f::between(Point2f::ORIGIN, *a).length();
            let after = Vector2f::between(Point2f::ORIGIN, *b).length();
            (after - before).abs()
        })
        .collect();
    print_all!("radius_drift", drift);
}
