//! Mathematical structs and functions.

use cgmath::{Point2, Vector2};
pub use box2d::Box2d;
pub use polyline::Polyline;
pub use util::*;

mod box2d;
mod polyline;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// Tolerance used when comparing computed lengths and areas against zero.
pub const EPSILON: f64 = 1e-6;
