//! Lux Core - scene model for the ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `Tube`, `Cylinder` and the
//!   `Geometries` composite, all behind the `Intersectable` trait
//! - **Lighting**: ambient, directional, point and spot lights
//! - **Scene**: the read-only collection the renderer traces against
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{Scene, Sphere, PointLight};
//!
//! let mut scene = Scene::new("demo");
//! scene.geometries.add(Sphere::new(Point::new(0.0, 0.0, -100.0), 50.0)?);
//! scene.add_light(PointLight::new(Color::WHITE, Point::new(0.0, 100.0, 0.0)));
//! ```

pub mod error;
pub mod geometry;
pub mod lighting;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use error::{GeometryError, GeometryResult};
pub use geometry::{
    Cylinder, GeoPoint, Geometries, Geometry, Intersectable, Plane, Sphere, Triangle, Tube,
};
pub use lighting::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::Material;
pub use scene::Scene;
