//! Intersectable shapes.
//!
//! Every shape answers two queries: where a ray crosses its surface and
//! what the outward normal is at a surface point. The composite
//! [`Geometries`] forwards intersection queries to its children.

mod cylinder;
mod plane;
mod radial;
mod sphere;
mod triangle;
mod tube;

pub use cylinder::Cylinder;
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use tube::Tube;

use lux_math::{align_zero, Color, MathResult, Point, Ray, Vector};

use crate::Material;

/// An intersection point together with the shape it lies on.
#[derive(Clone, Copy)]
pub struct GeoPoint<'a> {
    /// Shape that was hit
    pub geometry: &'a dyn Geometry,
    /// Point on the shape's surface
    pub point: Point,
}

impl<'a> GeoPoint<'a> {
    pub fn new(geometry: &'a dyn Geometry, point: Point) -> Self {
        Self { geometry, point }
    }

    /// Pick the point closest to `origin`.
    ///
    /// Linear scan with a strict comparison: among points at the same
    /// distance the first one in `points` wins, so the result follows the
    /// insertion order of the scene's geometries.
    pub fn closest(points: Vec<GeoPoint<'a>>, origin: &Point) -> Option<GeoPoint<'a>> {
        let mut closest = None;
        let mut closest_distance = f64::INFINITY;

        for gp in points {
            let distance = gp.point.distance_squared(origin);
            if distance < closest_distance {
                closest_distance = distance;
                closest = Some(gp);
            }
        }

        closest
    }
}

/// Trait for anything a ray can be intersected with.
pub trait Intersectable: Send + Sync {
    /// All points where `ray` crosses the surface with a ray parameter in
    /// `(0, max_distance]`. Order is unspecified; an empty vector means no hit.
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>>;

    /// Unbounded intersection points without the owning shapes.
    fn find_intersections(&self, ray: &Ray) -> Vec<Point> {
        self.find_geo_intersections(ray, f64::INFINITY)
            .into_iter()
            .map(|gp| gp.point)
            .collect()
    }
}

/// A single shape with a surface.
pub trait Geometry: Intersectable {
    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: &Point) -> MathResult<Vector>;

    /// Phong coefficients of the surface.
    fn material(&self) -> &Material;

    /// Light-independent base color.
    fn emission(&self) -> Color;
}

/// Returns true if ray parameter `t` lies in `(0, max_distance]`.
#[inline]
pub(crate) fn in_range(t: f64, max_distance: f64) -> bool {
    align_zero(t) > 0.0 && align_zero(t - max_distance) <= 0.0
}

/// An ordered collection of intersectables, itself intersectable.
#[derive(Default)]
pub struct Geometries {
    items: Vec<Box<dyn Intersectable>>,
}

impl Geometries {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item. Insertion order is the scan order.
    pub fn add(&mut self, item: impl Intersectable + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Intersectable for Geometries {
    fn find_geo_intersections(&self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'_>> {
        self.items
            .iter()
            .flat_map(|item| item.find_geo_intersections(ray, max_distance))
            .collect()
    }
}
