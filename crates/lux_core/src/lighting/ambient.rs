use lux_math::Color;

/// Uniform scene-wide illumination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    /// No ambient light at all.
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::BLACK,
    };

    /// Ambient light of color `ia` scaled by the attenuation factor `ka`.
    pub fn new(ia: Color, ka: f64) -> Self {
        Self { intensity: ia * ka }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::NONE
    }
}
