//! Ray type for ray casting.
//!
//! A ray is defined by a head point and a normalized direction.

use crate::{is_zero, Point, Vector};

/// Offset applied to shadow ray heads to keep them off their own surface.
pub const DELTA: f64 = 0.1;

/// A half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point of the ray
    head: Point,
    /// Unit direction vector
    direction: Vector,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    pub fn new(head: Point, direction: Vector) -> Self {
        Self {
            head,
            direction: direction.normalize(),
        }
    }

    /// Create a ray whose head is pushed by [`DELTA`] along `normal`,
    /// toward the side `direction` points to.
    pub fn with_offset(head: Point, direction: Vector, normal: &Vector) -> Self {
        let nd = normal.dot(&direction);
        let head = if is_zero(nd) {
            head
        } else {
            let delta = normal.as_dvec3() * if nd > 0.0 { DELTA } else { -DELTA };
            Point::from(head.as_dvec3() + delta)
        };
        Self::new(head, direction)
    }

    #[inline]
    pub fn head(&self) -> Point {
        self.head
    }

    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// Point along the ray at parameter t.
    /// P(t) = head + t * direction
    pub fn at(&self, t: f64) -> Point {
        if is_zero(t) {
            return self.head;
        }
        Point::from(self.head.as_dvec3() + self.direction.as_dvec3() * t)
    }
}
