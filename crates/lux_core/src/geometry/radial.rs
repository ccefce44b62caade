//! Helpers shared by the shapes built around an axis (tube, cylinder).

use lux_math::{align_zero, is_zero, DVec3, MathResult, Point, Ray, Vector};

/// Component of `v` perpendicular to the unit `axis`.
#[inline]
fn perpendicular(v: DVec3, axis: DVec3) -> DVec3 {
    v - axis * v.dot(axis)
}

/// Signed distance of the projection of `point` along the axis, measured
/// from the axis head.
pub(crate) fn axial_offset(axis: &Ray, point: &Point) -> f64 {
    axis.direction()
        .as_dvec3()
        .dot(point.as_dvec3() - axis.head().as_dvec3())
}

/// Ray parameters where `ray` crosses the infinite tube of `radius`
/// around `axis`. Empty when parallel to the axis, missing or tangent.
pub(crate) fn tube_roots(axis: &Ray, radius: f64, ray: &Ray) -> Vec<f64> {
    let va = axis.direction().as_dvec3();
    let v_perp = perpendicular(ray.direction().as_dvec3(), va);
    let dp_perp = perpendicular(ray.head().as_dvec3() - axis.head().as_dvec3(), va);

    let a = v_perp.length_squared();
    if is_zero(a) {
        return Vec::new();
    }
    let b = 2.0 * v_perp.dot(dp_perp);
    let c = dp_perp.length_squared() - radius * radius;

    let discriminant = align_zero(b * b - 4.0 * a * c);
    if discriminant <= 0.0 {
        return Vec::new();
    }

    let root = discriminant.sqrt();
    vec![(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)]
}

/// Unit vector from the closest axis point to `point`.
pub(crate) fn radial_normal(axis: &Ray, point: &Point) -> MathResult<Vector> {
    let center = axis.at(axial_offset(axis, point));
    Ok(point.subtract(&center)?.normalize())
}
