//! Triangle primitive.
//!
//! Intersects the supporting plane first, then keeps the hit only if it
//! lies on the inner side of all three edges.

use lux_math::{align_zero, Color, MathResult, Point, Ray, Vector};

use super::{GeoPoint, Geometry, Intersectable, Plane};
use crate::{GeometryError, GeometryResult, Material};

/// A triangle. The normal follows the winding of the vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    vertices: [Point; 3],
    plane: Plane,
    material: Material,
    emission: Color,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Point, v1: Point, v2: Point) -> GeometryResult<Self> {
        let plane = Plane::from_points(v0, v1, v2).map_err(|_| GeometryError::DegenerateTriangle)?;

        Ok(Self {
            vertices: [v0, v1, v2],
            plane,
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

    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Half-plane test: the ray passes inside when it sees every edge
    /// turning the same way.
    fn passes_inside(&self, ray: &Ray) -> MathResult<bool> {
        let head = ray.head();
        let direction = ray.direction();
        let mut sign = 0.0;

        for i in 0..3 {
            let a = self.vertices[i].subtract(&head)?;
            let b = self.vertices[(i + 1) % 3].subtract(&head)?;
            let side = align_zero(direction.dot(&a.cross(&b)?));

            // On an edge or vertex
            if side == 0.0 {
                return Ok(false);
            }
            if sign * side < 0.0 {
                return Ok(false);
            }
            sign = side;
        }

        Ok(true)
    }
}

impl Intersectable for Triangle {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        let Some(t) = self.plane.intersect_t(ray, max_distance) else {
            return Vec::new();
        };

        // A degenerate edge configuration means the head lies in the plane
        if !self.passes_inside(ray).unwrap_or(false) {
            return Vec::new();
        }

        vec![GeoPoint::new(self, ray.at(t))]
    }
}

impl Geometry for Triangle {
    fn normal_at(&self, _point: &Point) -> MathResult<Vector> {
        Ok(self.plane.normal())
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn emission(&self) -> Color {
        self.emission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        )
        .unwrap()
    }

    fn down_from(x: f64, y: f64) -> Ray {
        Ray::new(Point::new(x, y, 1.0), -Vector::Z)
    }

    #[test]
    fn test_degenerate_triangle() {
        let err = Triangle::new(Point::ZERO, Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0))
            .unwrap_err();
        assert_eq!(err, GeometryError::DegenerateTriangle);
    }

    #[test]
    fn test_normal_follows_winding() {
        assert_eq!(triangle().normal_at(&Point::ZERO).unwrap(), Vector::Z);

        let flipped = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        )
        .unwrap();
        assert_eq!(flipped.normal_at(&Point::ZERO).unwrap(), -Vector::Z);
    }

    #[test]
    fn test_ray_inside() {
        assert_eq!(
            triangle().find_intersections(&down_from(0.5, 0.5)),
            vec![Point::new(0.5, 0.5, 0.0)]
        );
    }

    #[test]
    fn test_ray_outside_against_edge() {
        assert!(triangle().find_intersections(&down_from(2.0, 2.0)).is_empty());
    }

    #[test]
    fn test_ray_outside_against_vertex() {
        assert!(triangle().find_intersections(&down_from(-1.0, -1.0)).is_empty());
    }

    #[test]
    fn test_ray_on_edge_and_vertex() {
        assert!(triangle().find_intersections(&down_from(1.0, 0.0)).is_empty());
        assert!(triangle().find_intersections(&down_from(0.0, 0.0)).is_empty());
        // On the continuation of an edge
        assert!(triangle().find_intersections(&down_from(3.0, 0.0)).is_empty());
    }

    #[test]
    fn test_ray_parallel_to_triangle() {
        let ray = Ray::new(Point::new(0.5, 0.5, 1.0), Vector::X);
        assert!(triangle().find_intersections(&ray).is_empty());
    }
}
