use lux_math::{Color, MathResult, Point, Vector};

use super::{LightSource, PointLight};

/// A point light whose intensity falls off away from its beam direction.
#[derive(Debug, Clone)]
pub struct SpotLight {
    light: PointLight,
    direction: Vector,
    narrow_beam: f64,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point, direction: Vector) -> Self {
        Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize(),
            narrow_beam: 1.0,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.light = self.light.with_kc(kc);
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.light = self.light.with_kl(kl);
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.light = self.light.with_kq(kq);
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.light = self.light.with_radius(radius);
        self
    }

    /// Exponent applied to the beam falloff; larger is narrower.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> Self {
        self.narrow_beam = narrow_beam;
        self
    }
}

impl LightSource for SpotLight {
    fn intensity_at(&self, point: &Point) -> Color {
        let Ok(l) = self.direction_at(point) else {
            return Color::BLACK;
        };
        let factor = self.direction.dot(&l).max(0.0).powf(self.narrow_beam);
        self.light.intensity_at(point) * factor
    }

    fn direction_at(&self, point: &Point) -> MathResult<Vector> {
        self.light.direction_at(point)
    }

    fn distance(&self, point: &Point) -> f64 {
        self.light.distance(point)
    }

    fn position(&self) -> Option<Point> {
        self.light.position()
    }

    fn radius(&self) -> f64 {
        self.light.radius()
    }
}
