use lux_math::{Color, MathResult, Point, Vector};

use super::LightSource;

/// A light infinitely far away, shining along a fixed direction.
#[derive(Debug, Clone)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vector,
}

impl DirectionalLight {
    pub fn new(intensity: Color, direction: Vector) -> Self {
        Self {
            intensity,
            direction: direction.normalize(),
        }
    }
}

impl LightSource for DirectionalLight {
    fn intensity_at(&self, _point: &Point) -> Color {
        self.intensity
    }

    fn direction_at(&self, _point: &Point) -> MathResult<Vector> {
        Ok(self.direction)
    }

    fn distance(&self, _point: &Point) -> f64 {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_light() {
        let light = DirectionalLight::new(Color::WHITE, Vector::new(0.0, 0.0, -5.0).unwrap());
        let p = Point::new(3.0, 4.0, 5.0);
        assert_eq!(light.intensity_at(&p), Color::WHITE);
        assert_eq!(light.direction_at(&p).unwrap(), -Vector::Z);
        assert!(light.distance(&p).is_infinite());
        assert!(light.position().is_none());
        assert_eq!(light.radius(), 0.0);
    }
}
