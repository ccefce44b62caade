//! Lux Renderer - CPU ray casting with local illumination.
//!
//! A camera casts one primary ray per pixel, the ray tracer shades the
//! closest hit with ambient, diffuse and specular terms, and shadows are
//! either hard or softened by sampling each light's emitting disk.
//! Pixels are rendered sequentially or by a fixed pool of worker threads.

mod camera;
mod error;
mod image_writer;
mod pixel_manager;
mod sampling;
mod settings;
mod tracer;

pub use camera::{Camera, CameraBuilder};
pub use error::{CameraError, CameraResult, RenderError, RenderResult};
pub use image_writer::ImageWriter;
pub use pixel_manager::{Pixel, PixelManager};
pub use sampling::disk_samples;
pub use settings::RenderSettings;
pub use tracer::{RayTracer, SimpleRayTracer};

/// Re-export the value types the renderer API is written in
pub use lux_math::{Color, Point, Ray, Vector};
