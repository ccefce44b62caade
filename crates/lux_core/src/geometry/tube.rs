//! Infinite tube around an axis.

use lux_math::{Color, MathResult, Point, Ray, Vector};

use super::radial::{radial_normal, tube_roots};
use super::{in_range, GeoPoint, Geometry, Intersectable};
use crate::{GeometryError, GeometryResult, Material};

/// An infinite circular tube.
#[derive(Debug, Clone)]
pub struct Tube {
    axis: Ray,
    radius: f64,
    material: Material,
    emission: Color,
}

impl Tube {
    /// Create a new tube. The radius must be positive.
    pub fn new(axis: Ray, radius: f64) -> GeometryResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }

        Ok(Self {
            axis,
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

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Intersectable for Tube {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        tube_roots(&self.axis, self.radius, ray)
            .into_iter()
            .filter(|&t| in_range(t, max_distance))
            .map(|t| GeoPoint::new(self, ray.at(t)))
            .collect()
    }
}

impl Geometry for Tube {
    fn normal_at(&self, point: &Point) -> MathResult<Vector> {
        radial_normal(&self.axis, point)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn emission(&self) -> Color {
        self.emission
    }
}
