//! Local illumination ray tracer.
//!
//! Implements the Phong model at the closest hit:
//! - Emission and ambient light
//! - Diffuse and specular terms per light source
//! - Hard shadows, or soft shadows averaged over a light's emitting disk

use std::sync::Arc;

use lux_core::{GeoPoint, Intersectable, LightSource, Material, Scene};
use lux_math::{align_zero, Color, MathResult, Point, Ray, Vector};

use crate::sampling::disk_samples;

/// Anything that turns a primary ray into a pixel color.
pub trait RayTracer: Send + Sync {
    /// Color seen along `ray`, using `samples` shadow rays per light.
    fn trace_ray(&self, ray: &Ray, samples: usize) -> Color;
}

/// Phong shading of the closest hit, without reflection or refraction.
pub struct SimpleRayTracer {
    scene: Arc<Scene>,
}

impl SimpleRayTracer {
    pub fn new(scene: Arc<Scene>) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Closest hit along the ray; ties go to the geometry added first.
    fn closest_intersection(&self, ray: &Ray) -> Option<GeoPoint<'_>> {
        let points = self.scene.geometries.find_geo_intersections(ray, f64::INFINITY);
        GeoPoint::closest(points, &ray.head())
    }

    fn calc_color(&self, gp: &GeoPoint<'_>, ray: &Ray, samples: usize) -> MathResult<Color> {
        let mut color = gp.geometry.emission() + self.scene.ambient_light.intensity();

        let v = ray.direction();
        let n = gp.geometry.normal_at(&gp.point)?;
        let nv = align_zero(n.dot(&v));
        if nv == 0.0 {
            return Ok(color);
        }

        let material = gp.geometry.material();
        for light in &self.scene.lights {
            // Hit exactly at the light position
            let Ok(l) = light.direction_at(&gp.point) else {
                continue;
            };

            // Light and viewer must be on the same side of the surface
            let nl = align_zero(n.dot(&l));
            if nl * nv <= 0.0 {
                continue;
            }

            let ktr = self.transparency(&gp.point, &n, light.as_ref(), &l, samples);
            if ktr == 0.0 {
                continue;
            }

            let il = light.intensity_at(&gp.point) * ktr;
            color += il * (diffuse(material, nl) + specular(material, &n, &l, nl, &v));
        }

        Ok(color)
    }

    /// Fraction of the light reaching `point`, in [0, 1].
    ///
    /// One shadow ray toward the light gives 0 or 1. With more than one
    /// sample and a light of positive radius, the rays go to points spread
    /// over the light's disk and the result is the unblocked fraction.
    fn transparency(
        &self,
        point: &Point,
        n: &Vector,
        light: &dyn LightSource,
        l: &Vector,
        samples: usize,
    ) -> f64 {
        let radius = light.radius();
        match light.position() {
            Some(position) if samples > 1 && radius > 0.0 => {
                let targets = disk_samples(&position, l, radius, samples);
                let lit = targets
                    .iter()
                    .filter(|target| match target.subtract(point) {
                        Ok(direction) => {
                            let shadow_ray = Ray::with_offset(*point, direction, n);
                            !self.is_blocked(&shadow_ray, point.distance(target))
                        }
                        // Sample sits on the shaded point
                        Err(_) => true,
                    })
                    .count();
                lit as f64 / targets.len() as f64
            }
            _ => {
                let shadow_ray = Ray::with_offset(*point, -*l, n);
                if self.is_blocked(&shadow_ray, light.distance(point)) {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    fn is_blocked(&self, shadow_ray: &Ray, distance: f64) -> bool {
        !self
            .scene
            .geometries
            .find_geo_intersections(shadow_ray, distance)
            .is_empty()
    }
}

impl RayTracer for SimpleRayTracer {
    fn trace_ray(&self, ray: &Ray, samples: usize) -> Color {
        let Some(gp) = self.closest_intersection(ray) else {
            return self.scene.background;
        };

        self.calc_color(&gp, ray, samples).unwrap_or_else(|err| {
            log::warn!("Cannot shade hit at {:?}: {}", gp.point, err);
            self.scene.background
        })
    }
}

#[inline]
fn diffuse(material: &Material, nl: f64) -> f64 {
    material.kd * nl.abs()
}

/// Phong specular term; the reflection of `l` about `n` compared with
/// the view direction.
#[inline]
fn specular(material: &Material, n: &Vector, l: &Vector, nl: f64, v: &Vector) -> f64 {
    let r = l.as_dvec3() - n.as_dvec3() * (2.0 * nl);
    let minus_vr = -v.as_dvec3().dot(r);
    if minus_vr <= 0.0 {
        return 0.0;
    }
    material.ks * minus_vr.powi(material.shininess)
}
