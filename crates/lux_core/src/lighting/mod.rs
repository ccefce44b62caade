//! Light sources for local illumination.

mod ambient;
mod directional;
mod point;
mod spot;

pub use ambient::AmbientLight;
pub use directional::DirectionalLight;
pub use point::PointLight;
pub use spot::SpotLight;

use lux_math::{Color, MathResult, Point, Vector};

/// Trait for lights that illuminate from a direction and can be occluded.
pub trait LightSource: Send + Sync {
    /// Intensity arriving at `point`, after attenuation.
    fn intensity_at(&self, point: &Point) -> Color;

    /// Unit direction from the light toward `point`.
    fn direction_at(&self, point: &Point) -> MathResult<Vector>;

    /// Distance from the light to `point`; infinite for directional lights.
    fn distance(&self, point: &Point) -> f64;

    /// Position of the emitter, if it has one.
    fn position(&self) -> Option<Point> {
        None
    }

    /// Radius of the emitting disk for soft shadows (0 = point emitter).
    fn radius(&self) -> f64 {
        0.0
    }
}
