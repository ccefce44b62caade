//! Scene container consumed by the renderer.
//!
//! The renderer only reads a scene; it is populated up front by whoever
//! describes it and must not change while a render is running.

use lux_math::Color;

use crate::geometry::{Geometries, Intersectable};
use crate::lighting::{AmbientLight, LightSource};

/// Geometries, lights, ambient light and background color of a render.
pub struct Scene {
    /// Scene name (for logging)
    pub name: String,

    /// Color returned for rays that hit nothing
    pub background: Color,

    /// Uniform light added to every hit
    pub ambient_light: AmbientLight,

    /// Shapes, in scan order
    pub geometries: Geometries,

    /// Light sources, in shading order
    pub lights: Vec<Box<dyn LightSource>>,
}

impl Scene {
    /// Create an empty scene with a black background and no ambient light.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            ambient_light: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Add a shape (or a nested collection) at the end of the scan order.
    pub fn add_geometry(&mut self, geometry: impl Intersectable + 'static) {
        self.geometries.add(geometry);
    }

    /// Add a light source.
    pub fn add_light(&mut self, light: impl LightSource + 'static) {
        self.lights.push(Box::new(light));
    }

    /// Number of light sources.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
