//! Sphere primitive.

use lux_math::{align_zero, Color, MathResult, Point, Ray, Vector};

use super::{in_range, GeoPoint, Geometry, Intersectable};
use crate::{GeometryError, GeometryResult, Material};

/// A sphere given by center and radius.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point,
    radius: f64,
    material: Material,
    emission: Color,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(center: Point, radius: f64) -> GeometryResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            material: Material::default(),
            emission: Color::BLACK,
        })
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Intersectable for Sphere {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        let u = match self.center.subtract(&ray.head()) {
            Ok(u) => u,
            // Ray starts at the center: exactly one exit point
            Err(_) => {
                if !in_range(self.radius, max_distance) {
                    return Vec::new();
                }
                return vec![GeoPoint::new(self, ray.at(self.radius))];
            }
        };

        let tm = ray.direction().dot(&u);
        let d_squared = u.length_squared() - tm * tm;
        let th_squared = align_zero(self.radius * self.radius - d_squared);

        // Miss, or tangent
        if th_squared <= 0.0 {
            return Vec::new();
        }

        let th = th_squared.sqrt();
        [tm - th, tm + th]
            .into_iter()
            .filter(|&t| in_range(t, max_distance))
            .map(|t| GeoPoint::new(self, ray.at(t)))
            .collect()
    }
}

impl Geometry for Sphere {
    fn normal_at(&self, point: &Point) -> MathResult<Vector> {
        Ok(point.subtract(&self.center)?.normalize())
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn emission(&self) -> Color {
        self.emission
    }
}
