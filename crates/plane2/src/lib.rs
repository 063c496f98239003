//! Plane geometry primitives: points, vectors, and text helpers.
//!
//! Purpose
//! - Small value types for 2D positions ([`Point2f`]) and displacements
//!   ([`Vector2f`]) with the componentwise algebra between them
//!   (translation, scaling, rotation, dot, length, normalization, lerp,
//!   determinant).
//! - Generic one-line text rendering ([`text::Stringify`], [`print_all!`])
//!   for scalars, sequences, mappings, and the geometry types.
//! - Deterministic samplers ([`sample`]) for reproducible scatter data in
//!   tests, benches, and demos.
//!
//! Scope
//! - Every function is a pure, synchronous computation over copy types; the
//!   only I/O in the crate is `print_all!` writing to stdout. Values are
//!   safely shared across threads because nothing is ever mutated.
//! - This is not a linear-algebra engine: no matrices, no 3D, no transform
//!   composition. [`convert`] bridges to nalgebra when callers outgrow the
//!   surface here.

pub mod convert;
pub mod point2;
pub mod sample;
pub mod text;
pub mod vec2;

pub use point2::Point2f;
pub use vec2::Vector2f;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::point2::Point2f;
    pub use crate::sample::{
        draw_point_in_bounds, draw_scatter, draw_unit_vector, draw_vector_in_disc, Bounds2,
        ReplayToken,
    };
    pub use crate::text::{join_values, print_values, Stringify};
    pub use crate::vec2::Vector2f;
}
