//! RGB color intensities.

use std::ops::{Add, AddAssign, Div, Mul};

use glam::DVec3;

/// An RGB color with channels on a 0-255 scale.
///
/// Channels are not clamped here; values above 255 are legal while
/// light contributions accumulate and are clamped by the image sink.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(DVec3);

impl Color {
    pub const BLACK: Color = Color(DVec3::ZERO);
    pub const WHITE: Color = Color(DVec3::splat(255.0));
    pub const RED: Color = Color(DVec3::new(255.0, 0.0, 0.0));
    pub const GREEN: Color = Color(DVec3::new(0.0, 255.0, 0.0));
    pub const BLUE: Color = Color(DVec3::new(0.0, 0.0, 255.0));

    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Convert to 8-bit channels, clamping to [0, 255].
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.0.clamp(DVec3::ZERO, DVec3::splat(255.0));
        [c.x as u8, c.y as u8, c.z as u8]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color(self.0 * rhs)
    }
}

/// Channel-wise attenuation.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color(self.0 * rhs.0)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        Color(self.0 / rhs)
    }
}
