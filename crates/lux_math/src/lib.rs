//! Lux math - value types shared by the scene model and the renderer.
//!
//! All types are immutable, double precision and backed by `glam::DVec3`.
//! `Vector` can never be the zero vector; every operation that could
//! produce one returns a [`MathError`] instead.

// Re-export glam's double precision vector for the radial shape helpers
pub use glam::DVec3;

mod color;
mod error;
mod point;
mod ray;
mod util;
mod vector;

pub use color::Color;
pub use error::{MathError, MathResult};
pub use point::Point;
pub use ray::{Ray, DELTA};
pub use util::{align_zero, is_zero, ACCURACY};
pub use vector::Vector;
