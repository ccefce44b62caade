//! Non-zero direction vector.

use std::ops::Neg;

use glam::DVec3;

use crate::{is_zero, MathError, MathResult};

/// A 3D vector that is never the zero vector.
///
/// The invariant is checked on construction and by every operation whose
/// result could collapse to zero (`add`, `subtract`, `scale`, `cross`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(DVec3);

impl Vector {
    /// Unit vector along +X.
    pub const X: Vector = Vector(DVec3::X);
    /// Unit vector along +Y.
    pub const Y: Vector = Vector(DVec3::Y);
    /// Unit vector along +Z.
    pub const Z: Vector = Vector(DVec3::Z);

    /// Create a vector from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        Self::from_dvec3(DVec3::new(x, y, z))
    }

    /// Wrap a raw `DVec3`, rejecting the zero vector.
    pub fn from_dvec3(v: DVec3) -> MathResult<Self> {
        if is_zero(v.x) && is_zero(v.y) && is_zero(v.z) {
            return Err(MathError::ZeroVector);
        }
        Ok(Self(v))
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

    /// Vector sum. Fails if the operands cancel out.
    pub fn add(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_dvec3(self.0 + other.0)
    }

    /// Vector difference. Fails if the operands are equal.
    pub fn subtract(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_dvec3(self.0 - other.0)
    }

    /// Multiply by a scalar. Scaling by zero is an error.
    pub fn scale(&self, scalar: f64) -> MathResult<Vector> {
        if is_zero(scalar) {
            return Err(MathError::ZeroScale);
        }
        Self::from_dvec3(self.0 * scalar)
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product. Fails for parallel operands.
    pub fn cross(&self, other: &Vector) -> MathResult<Vector> {
        Self::from_dvec3(self.0.cross(other.0)).map_err(|_| MathError::ParallelVectors)
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// Infallible: the length of a valid vector is never zero.
    pub fn normalize(&self) -> Vector {
        Vector(self.0 / self.length())
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn v(x: f64, y: f64, z: f64) -> Vector {
        Vector::new(x, y, z).unwrap()
    }

    #[test]
    fn test_zero_vector_rejected() {
        assert_eq!(Vector::new(0.0, 0.0, 0.0), Err(MathError::ZeroVector));
        assert_eq!(v(1.0, 2.0, 2.0), v(1.0, 2.0, 2.0));
    }

    #[test]
    fn test_length_squared() {
        assert_eq!(v(1.0, 2.0, 2.0).length_squared(), 9.0);
        assert_eq!(v(-3.0, -4.0, -5.0).length_squared(), 50.0);
        assert_eq!(v(-1.0, 2.0, -3.0).length_squared(), 14.0);
    }

    #[test]
    fn test_length() {
        assert_eq!(v(1.0, 2.0, 2.0).length(), 3.0);
        assert_eq!(v(-3.0, -4.0, -5.0).length(), 50f64.sqrt());
        assert_eq!(Vector::Z.length(), 1.0);
    }

    #[test]
    fn test_add() {
        let v1 = v(1.0, 2.0, 2.0);
        assert_eq!(v1.add(&v(-3.0, -4.0, -5.0)).unwrap(), v(-2.0, -2.0, -3.0));
        assert_eq!(v1.add(&v(-1.0, -2.0, -2.0)), Err(MathError::ZeroVector));
    }

    #[test]
    fn test_subtract() {
        let v1 = v(1.0, 2.0, 2.0);
        assert_eq!(v1.subtract(&v(0.0, 1.0, 1.0)).unwrap(), v(1.0, 1.0, 1.0));
        assert_eq!(v1.subtract(&v1), Err(MathError::ZeroVector));
    }

    #[test]
    fn test_scale() {
        let v3 = v(-1.0, 2.0, -3.0);
        assert_eq!(v3.scale(2.0).unwrap(), v(-2.0, 4.0, -6.0));
        assert_eq!(v3.scale(-3.0).unwrap(), v(3.0, -6.0, 9.0));
        assert_eq!(v3.scale(0.0), Err(MathError::ZeroScale));
    }

    #[test]
    fn test_dot() {
        let v1 = v(1.0, 2.0, 2.0);
        assert_eq!(v(-3.0, -4.0, -5.0).dot(&v(-1.0, 2.0, -3.0)), 10.0);
        // perpendicular
        assert_eq!(v1.dot(&v(0.0, 2.0, -2.0)), 0.0);
        // parallel: product of the lengths
        let v5 = v(2.0, 4.0, 4.0);
        assert_eq!(v1.dot(&v5), v1.length() * v5.length());
        assert_eq!(v1.dot(&-v5), -(v1.length() * v5.length()));
    }

    #[test]
    fn test_cross() {
        let v1 = v(1.0, 2.0, 2.0);
        let v4 = v(0.0, 2.0, -2.0);
        assert_eq!(
            v(-3.0, -4.0, -5.0).cross(&v(-1.0, 2.0, -3.0)).unwrap(),
            v(22.0, -4.0, -10.0)
        );

        let perpendicular = v1.cross(&v4).unwrap();
        assert!((perpendicular.length() - v1.length() * v4.length()).abs() < 1e-9);
        assert!(perpendicular.dot(&v1).abs() < 1e-9);
        assert!(perpendicular.dot(&v4).abs() < 1e-9);

        assert_eq!(v1.cross(&v(2.0, 4.0, 4.0)), Err(MathError::ParallelVectors));
        assert_eq!(v1.cross(&-v1), Err(MathError::ParallelVectors));
    }

    #[test]
    fn test_normalize() {
        let n = v(-1.0, 2.0, -3.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(n.dot(&v(-1.0, 2.0, -3.0)) > 0.0);
        assert_eq!(v(0.0, 0.0, 5.0).normalize(), Vector::Z);
    }

    #[test]
    fn test_normalize_random_vectors() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let raw = DVec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );
            if let Ok(vec) = Vector::from_dvec3(raw) {
                assert!((vec.normalize().length() - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cross_length_of_perpendicular_random_vectors() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let u = v(
                rng.gen_range(1.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );
            // Any vector crossed with u is perpendicular to u
            let helper = if u.x().abs() > u.y().abs() { Vector::Y } else { Vector::X };
            let w = u.cross(&helper).unwrap();
            let cross = u.cross(&w).unwrap();
            let expected = u.length() * w.length();
            assert!((cross.length() - expected).abs() < 1e-9 * expected);
        }
    }
}
