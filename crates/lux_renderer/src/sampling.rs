//! Deterministic sample points over a light's emitting disk.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use lux_math::{Point, Vector};

/// Layout of `count` points on the unit disk.
///
/// An odd count puts one point at the center. The rest sit on rings
/// through the middle of equal-area annuli (radius `sqrt((i + 0.5) / m)`),
/// evenly spaced in angle with at least two points per ring, so every
/// ring and the whole layout are centered on the origin. Alternate rings
/// are rotated by half a step.
fn disk_layout(count: usize) -> Vec<DVec2> {
    let mut points = Vec::with_capacity(count);
    let mut remaining = count;
    if remaining % 2 == 1 {
        points.push(DVec2::ZERO);
        remaining -= 1;
    }
    if remaining == 0 {
        return points;
    }

    let rings = (((remaining as f64).sqrt() / 2.0).round() as usize).clamp(1, remaining / 2);
    let base = remaining / rings;
    let extra = remaining % rings;

    for ring in 0..rings {
        // Leftover points go to the outer rings
        let n = base + usize::from(ring >= rings - extra);
        let r = ((ring as f64 + 0.5) / rings as f64).sqrt();
        let phase = if ring % 2 == 1 { PI / n as f64 } else { 0.0 };
        points.extend((0..n).map(|k| {
            let theta = phase + TAU * k as f64 / n as f64;
            DVec2::new(r * theta.cos(), r * theta.sin())
        }));
    }

    points
}

/// `count` points on the disk of `radius` around `center`, perpendicular
/// to `axis`.
///
/// The same arguments always give the same points, every point lies
/// within `radius` of `center` and their mean is `center`. A single
/// sample is the center itself.
pub fn disk_samples(center: &Point, axis: &Vector, radius: f64, count: usize) -> Vec<Point> {
    let (u, v) = axis.normalize().as_dvec3().any_orthonormal_pair();

    disk_layout(count)
        .into_iter()
        .map(|p| Point::from(center.as_dvec3() + (u * p.x + v * p.y) * radius))
        .collect()
}
