//! Finite cylinder: a tube segment closed by two caps.

use lux_math::{align_zero, is_zero, Color, MathResult, Point, Ray, Vector};

use super::radial::{axial_offset, radial_normal, tube_roots};
use super::{in_range, GeoPoint, Geometry, Intersectable, Plane};
use crate::{GeometryError, GeometryResult, Material};

/// A closed cylinder starting at the axis head and extending `height`
/// along the axis direction.
#[derive(Debug, Clone)]
pub struct Cylinder {
    axis: Ray,
    radius: f64,
    height: f64,
    /// Base cap at the axis head, top cap `height` further along
    caps: Vec<Plane>,
    material: Material,
    emission: Color,
}

impl Cylinder {
    /// Create a new cylinder. The radius must be positive and the height
    /// non-negative.
    pub fn new(axis: Ray, radius: f64, height: f64) -> GeometryResult<Self> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        if height.is_nan() || height < 0.0 {
            return Err(GeometryError::NegativeHeight(height));
        }

        let mut caps = vec![Plane::new(axis.head(), axis.direction())];
        // A zero height cylinder is a single disk
        if !is_zero(height) {
            caps.push(Plane::new(axis.at(height), axis.direction()));
        }

        Ok(Self {
            axis,
            radius,
            height,
            caps,
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

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Intersectable for Cylinder {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        let mut hits = Vec::new();

        // Side: tube hits strictly between the caps
        for t in tube_roots(&self.axis, self.radius, ray) {
            if !in_range(t, max_distance) {
                continue;
            }
            let point = ray.at(t);
            let offset = axial_offset(&self.axis, &point);
            if align_zero(offset) > 0.0 && align_zero(offset - self.height) < 0.0 {
                hits.push(GeoPoint::new(self, point));
            }
        }

        // Caps: plane hits strictly inside the disk
        let radius_squared = self.radius * self.radius;
        for cap in &self.caps {
            if let Some(t) = cap.intersect_t(ray, max_distance) {
                let point = ray.at(t);
                if align_zero(point.distance_squared(&cap.point()) - radius_squared) < 0.0 {
                    hits.push(GeoPoint::new(self, point));
                }
            }
        }

        hits
    }
}

impl Geometry for Cylinder {
    fn normal_at(&self, point: &Point) -> MathResult<Vector> {
        let offset = axial_offset(&self.axis, point);
        if is_zero(offset) {
            return Ok(-self.axis.direction());
        }
        if is_zero(offset - self.height) {
            return Ok(self.axis.direction());
        }
        radial_normal(&self.axis, point)
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

    /// Unit radius cylinder from z=0 to z=2.
    fn cylinder() -> Cylinder {
        Cylinder::new(Ray::new(Point::ZERO, Vector::Z), 1.0, 2.0).unwrap()
    }

    fn sorted_by_z(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| a.z().total_cmp(&b.z()));
        points
    }

    #[test]
    fn test_invalid_dimensions() {
        let axis = Ray::new(Point::ZERO, Vector::Z);
        assert_eq!(
            Cylinder::new(axis, 1.0, -1.0).unwrap_err(),
            GeometryError::NegativeHeight(-1.0)
        );
        assert_eq!(
            Cylinder::new(axis, -1.0, 1.0).unwrap_err(),
            GeometryError::NonPositiveRadius(-1.0)
        );
        assert!(matches!(
            Cylinder::new(axis, f64::NAN, 1.0),
            Err(GeometryError::NonPositiveRadius(_))
        ));
        assert!(matches!(
            Cylinder::new(axis, 1.0, f64::NAN),
            Err(GeometryError::NegativeHeight(_))
        ));
    }

    #[test]
    fn test_normals() {
        let cyl = cylinder();
        assert_eq!(cyl.normal_at(&Point::new(1.0, 0.0, 1.0)).unwrap(), Vector::X);
        assert_eq!(cyl.normal_at(&Point::new(0.5, 0.0, 0.0)).unwrap(), -Vector::Z);
        assert_eq!(cyl.normal_at(&Point::new(0.5, 0.0, 2.0)).unwrap(), Vector::Z);
        // Cap centers
        assert_eq!(cyl.normal_at(&Point::ZERO).unwrap(), -Vector::Z);
        assert_eq!(cyl.normal_at(&Point::new(0.0, 0.0, 2.0)).unwrap(), Vector::Z);
    }

    #[test]
    fn test_ray_through_side() {
        let ray = Ray::new(Point::new(-2.0, 0.0, 1.0), Vector::X);
        let mut points = cylinder().find_intersections(&ray);
        points.sort_by(|a, b| a.x().total_cmp(&b.x()));
        assert_eq!(points, vec![Point::new(-1.0, 0.0, 1.0), Point::new(1.0, 0.0, 1.0)]);
    }

    #[test]
    fn test_ray_through_both_caps() {
        let ray = Ray::new(Point::new(0.5, 0.0, -1.0), Vector::Z);
        assert_eq!(
            sorted_by_z(cylinder().find_intersections(&ray)),
            vec![Point::new(0.5, 0.0, 0.0), Point::new(0.5, 0.0, 2.0)]
        );
    }

    #[test]
    fn test_ray_through_cap_and_side() {
        let ray = Ray::new(Point::new(0.0, 0.0, -1.0), Vector::new(1.0, 0.0, 2.0).unwrap());
        let points = sorted_by_z(cylinder().find_intersections(&ray));
        assert_eq!(points.len(), 2);
        assert!((points[0].z() - 0.0).abs() < 1e-9);
        assert!((points[0].x() - 0.5).abs() < 1e-9);
        assert!((points[1].x() - 1.0).abs() < 1e-9);
        assert!((points[1].z() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_misses_finite_body() {
        // Would cross the infinite tube above the top cap
        let ray = Ray::new(Point::new(-2.0, 0.0, 5.0), Vector::X);
        assert!(cylinder().find_intersections(&ray).is_empty());
        // Parallel to the axis outside the radius
        let ray = Ray::new(Point::new(3.0, 0.0, -1.0), Vector::Z);
        assert!(cylinder().find_intersections(&ray).is_empty());
    }

    #[test]
    fn test_zero_height_is_a_disk() {
        let disk = Cylinder::new(Ray::new(Point::ZERO, Vector::Z), 1.0, 0.0).unwrap();
        let ray = Ray::new(Point::new(0.5, 0.0, -1.0), Vector::Z);
        assert_eq!(disk.find_intersections(&ray), vec![Point::new(0.5, 0.0, 0.0)]);
    }
}
