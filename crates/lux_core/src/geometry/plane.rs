//! Infinite plane.

use lux_math::{align_zero, Color, MathResult, Point, Ray, Vector};

use super::{in_range, GeoPoint, Geometry, Intersectable};
use crate::{GeometryError, GeometryResult, Material};

/// A plane given by a point on it and a unit normal.
#[derive(Debug, Clone)]
pub struct Plane {
    q: Point,
    normal: Vector,
    material: Material,
    emission: Color,
}

impl Plane {
    /// Create a plane through `q` with the given normal (normalized here).
    pub fn new(q: Point, normal: Vector) -> Self {
        Self {
            q,
            normal: normal.normalize(),
            material: Material::default(),
            emission: Color::BLACK,
        }
    }

    /// Create the plane through three points.
    ///
    /// The normal is `(p2 - p1) x (p3 - p1)`, normalized.
    pub fn from_points(p1: Point, p2: Point, p3: Point) -> GeometryResult<Self> {
        let degenerate = |_| GeometryError::DegeneratePlane;
        let v1 = p2.subtract(&p1).map_err(degenerate)?;
        let v2 = p3.subtract(&p1).map_err(degenerate)?;
        let normal = v1.cross(&v2).map_err(degenerate)?;
        Ok(Self::new(p1, normal))
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn point(&self) -> Point {
        self.q
    }

    /// The constant unit normal.
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Ray parameter of the crossing, if there is one in range.
    pub(crate) fn intersect_t(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        // Ray starting at the reference point lies on the plane
        let qp = self.q.subtract(&ray.head()).ok()?;

        let nv = align_zero(self.normal.dot(&ray.direction()));
        if nv == 0.0 {
            return None;
        }

        let t = align_zero(self.normal.dot(&qp) / nv);
        in_range(t, max_distance).then_some(t)
    }
}

impl Intersectable for Plane {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        match self.intersect_t(ray, max_distance) {
            Some(t) => vec![GeoPoint::new(self, ray.at(t))],
            None => Vec::new(),
        }
    }
}

impl Geometry for Plane {
    fn normal_at(&self, _point: &Point) -> MathResult<Vector> {
        Ok(self.normal)
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

    fn xy_plane() -> Plane {
        Plane::new(Point::new(0.0, 0.0, 1.0), Vector::new(0.0, 0.0, 2.0).unwrap())
    }

    #[test]
    fn test_from_points() {
        let plane = Plane::from_points(
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let n = plane.normal();
        assert!((n.length() - 1.0).abs() < 1e-12);
        let expected = 1.0 / 3f64.sqrt();
        assert!((n.x() - expected).abs() < 1e-12);
        assert!((n.y() - expected).abs() < 1e-12);
        assert!((n.z() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_points() {
        let p = Point::new(1.0, 1.0, 1.0);
        assert_eq!(
            Plane::from_points(p, p, Point::ZERO).unwrap_err(),
            GeometryError::DegeneratePlane
        );
        assert_eq!(
            Plane::from_points(Point::ZERO, p, Point::new(2.0, 2.0, 2.0)).unwrap_err(),
            GeometryError::DegeneratePlane
        );
    }

    #[test]
    fn test_normal_is_normalized() {
        assert_eq!(xy_plane().normal_at(&Point::ZERO).unwrap(), Vector::Z);
    }

    #[test]
    fn test_ray_crosses() {
        let ray = Ray::new(Point::new(1.0, 1.0, 0.0), Vector::new(0.0, 0.0, 1.0).unwrap());
        assert_eq!(xy_plane().find_intersections(&ray), vec![Point::new(1.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_ray_points_away() {
        let ray = Ray::new(Point::new(1.0, 1.0, 0.0), -Vector::Z);
        assert!(xy_plane().find_intersections(&ray).is_empty());
    }

    #[test]
    fn test_ray_parallel() {
        // Parallel off the plane and inside it
        let ray = Ray::new(Point::new(1.0, 1.0, 0.0), Vector::X);
        assert!(xy_plane().find_intersections(&ray).is_empty());
        let ray = Ray::new(Point::new(1.0, 1.0, 1.0), Vector::X);
        assert!(xy_plane().find_intersections(&ray).is_empty());
    }

    #[test]
    fn test_ray_starts_on_plane() {
        let ray = Ray::new(Point::new(5.0, 2.0, 1.0), Vector::Z);
        assert!(xy_plane().find_intersections(&ray).is_empty());
        let ray = Ray::new(Point::new(0.0, 0.0, 1.0), Vector::Z);
        assert!(xy_plane().find_intersections(&ray).is_empty());
    }
}
