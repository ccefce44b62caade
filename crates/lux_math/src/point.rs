//! Location in 3D space.

use glam::DVec3;

use crate::{MathResult, Vector};

/// A point in 3D space. Unlike [`Vector`] it may sit at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(DVec3);

impl Point {
    /// The origin.
    pub const ZERO: Point = Point(DVec3::ZERO);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Raw coordinates.
    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// Move the point by a vector.
    #[inline]
    pub fn add(&self, v: &Vector) -> Point {
        Point(self.0 + v.as_dvec3())
    }

    /// Vector from `other` to `self`. Fails when the points coincide.
    pub fn subtract(&self, other: &Point) -> MathResult<Vector> {
        Vector::from_dvec3(self.0 - other.0)
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f64 {
        self.0.distance_squared(other.0)
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        self.0.distance(other.0)
    }
}

impl From<DVec3> for Point {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}
