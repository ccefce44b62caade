//! Surface reflectance coefficients for the Phong model.

/// Phong material attached to a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Diffuse reflectivity
    pub kd: f64,
    /// Specular reflectivity
    pub ks: f64,
    /// Specular exponent
    pub shininess: i32,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kd(mut self, kd: f64) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_ks(mut self, ks: f64) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_setters() {
        let m = Material::new().with_kd(0.5).with_ks(0.25).with_shininess(30);
        assert_eq!(m.kd, 0.5);
        assert_eq!(m.ks, 0.25);
        assert_eq!(m.shininess, 30);
        assert_eq!(Material::default(), Material { kd: 0.0, ks: 0.0, shininess: 0 });
    }
}
