use lux_math::{Color, MathResult, Point, Vector};

use super::LightSource;

/// An omni-directional light with distance attenuation.
///
/// A positive radius turns it into a disk-shaped area emitter for soft
/// shadows.
#[derive(Debug, Clone)]
pub struct PointLight {
    intensity: Color,
    position: Point,
    kc: f64,
    kl: f64,
    kq: f64,
    radius: f64,
}

impl PointLight {
    /// Create a new point light with no distance attenuation.
    pub fn new(intensity: Color, position: Point) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
            radius: 0.0,
        }
    }

    /// Constant attenuation factor.
    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    /// Linear attenuation factor.
    pub fn with_kl(mut self, kl: f64) -> Self {
        self.kl = kl;
        self
    }

    /// Quadratic attenuation factor.
    pub fn with_kq(mut self, kq: f64) -> Self {
        self.kq = kq;
        self
    }

    /// Radius of the emitting disk; negative values are treated as 0.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
        self
    }
}

impl LightSource for PointLight {
    fn intensity_at(&self, point: &Point) -> Color {
        let d = self.position.distance(point);
        self.intensity / (self.kc + self.kl * d + self.kq * d * d)
    }

    fn direction_at(&self, point: &Point) -> MathResult<Vector> {
        Ok(point.subtract(&self.position)?.normalize())
    }

    fn distance(&self, point: &Point) -> f64 {
        self.position.distance(point)
    }

    fn position(&self) -> Option<Point> {
        Some(self.position)
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
