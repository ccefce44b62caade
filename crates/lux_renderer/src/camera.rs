//! Pinhole camera and render driver.
//!
//! The camera maps pixel coordinates to primary rays through a view plane
//! in front of it, and drives the ray tracer over every pixel either on
//! the calling thread or on a fixed pool of workers.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use lux_math::{align_zero, is_zero, Color, MathError, MathResult, Point, Ray, Vector};

use crate::{
    CameraError, CameraResult, ImageWriter, PixelManager, RayTracer, RenderError, RenderResult,
    RenderSettings,
};

/// An immutable, validated camera. Create one with [`Camera::builder`].
pub struct Camera {
    location: Point,
    v_to: Vector,
    v_up: Vector,
    v_right: Vector,

    // View plane
    width: f64,
    height: f64,
    distance: f64,

    image_writer: ImageWriter,
    ray_tracer: Arc<dyn RayTracer>,

    /// Worker threads; 0 renders on the calling thread
    threads: usize,
    /// Shadow rays per light
    samples: usize,
    progress_interval: f64,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn v_to(&self) -> Vector {
        self.v_to
    }

    pub fn v_up(&self) -> Vector {
        self.v_up
    }

    pub fn v_right(&self) -> Vector {
        self.v_right
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The image being rendered into.
    pub fn image_writer(&self) -> &ImageWriter {
        &self.image_writer
    }

    /// Primary ray through the center of pixel (`column`, `row`) of a
    /// `columns` x `rows` grid laid over the view plane.
    ///
    /// Rows grow downward while `v_up` points up, so the vertical offset
    /// is negated.
    pub fn construct_ray(
        &self,
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    ) -> MathResult<Ray> {
        let center = self.location.add(&self.v_to.scale(self.distance)?);

        let rx = self.width / columns as f64;
        let ry = self.height / rows as f64;
        let xj = (column as f64 - (columns as f64 - 1.0) / 2.0) * rx;
        let yi = -(row as f64 - (rows as f64 - 1.0) / 2.0) * ry;

        let mut pij = center;
        if !is_zero(xj) {
            pij = pij.add(&self.v_right.scale(xj)?);
        }
        if !is_zero(yi) {
            pij = pij.add(&self.v_up.scale(yi)?);
        }

        Ok(Ray::new(self.location, pij.subtract(&self.location)?))
    }

    /// Trace every pixel of the image.
    ///
    /// With `threads == 0` pixels are visited in row-major order on the
    /// calling thread; otherwise exactly `threads` workers pull pixels
    /// from a shared [`PixelManager`] until none are left. Either way the
    /// resulting image is the same.
    pub fn render_image(&self) -> RenderResult<()> {
        let (nx, ny) = self.image_writer.dimensions();
        log::info!(
            "Rendering '{}' ({}x{}, {} threads, {} samples)",
            self.image_writer.name(),
            nx,
            ny,
            self.threads,
            self.samples
        );
        let start = Instant::now();

        if self.threads == 0 {
            self.render_sequential(nx, ny)?;
        } else {
            self.render_parallel(nx, ny)?;
        }

        log::info!("Render complete in {:.2?}", start.elapsed());
        Ok(())
    }

    fn render_sequential(&self, nx: usize, ny: usize) -> RenderResult<()> {
        let manager = PixelManager::new(ny, nx).with_progress_interval(self.progress_interval);
        for row in 0..ny {
            for column in 0..nx {
                self.cast_ray(column, row, nx, ny)?;
                manager.pixel_done();
            }
        }
        Ok(())
    }

    fn render_parallel(&self, nx: usize, ny: usize) -> RenderResult<()> {
        let manager = PixelManager::new(ny, nx).with_progress_interval(self.progress_interval);
        let failure: Mutex<Option<MathError>> = Mutex::new(None);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("lux-render-{}", i))
            .build()?;

        // The scope joins every worker and re-raises a worker panic
        pool.scope(|s| {
            for _ in 0..self.threads {
                s.spawn(|_| {
                    while let Some(pixel) = manager.next_pixel() {
                        if let Err(err) = self.cast_ray(pixel.column, pixel.row, nx, ny) {
                            manager.abort();
                            failure
                                .lock()
                                .unwrap_or_else(PoisonError::into_inner)
                                .get_or_insert(err);
                            return;
                        }
                        manager.pixel_done();
                    }
                });
            }
        });

        match failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn cast_ray(&self, column: usize, row: usize, nx: usize, ny: usize) -> MathResult<()> {
        let ray = self.construct_ray(column, row, nx, ny)?;
        let color = self.ray_tracer.trace_ray(&ray, self.samples);
        self.image_writer.write_pixel(column, row, color);
        Ok(())
    }

    /// Paint every `interval`-th row and column with `color`.
    pub fn print_grid(&self, interval: usize, color: Color) -> RenderResult<()> {
        if interval == 0 {
            return Err(RenderError::InvalidGridInterval);
        }

        let (nx, ny) = self.image_writer.dimensions();
        for row in 0..ny {
            for column in 0..nx {
                if row % interval == 0 || column % interval == 0 {
                    self.image_writer.write_pixel(column, row, color);
                }
            }
        }
        Ok(())
    }

    /// Save the rendered image; see [`ImageWriter::write_to_image`].
    pub fn write_to_image(&self) -> RenderResult<PathBuf> {
        self.image_writer.write_to_image()
    }
}

/// Collects camera parameters and validates them all at once in
/// [`build`](CameraBuilder::build).
pub struct CameraBuilder {
    location: Option<Point>,
    v_to: Option<Vector>,
    v_up: Option<Vector>,
    width: Option<f64>,
    height: Option<f64>,
    distance: Option<f64>,
    image_writer: Option<ImageWriter>,
    ray_tracer: Option<Arc<dyn RayTracer>>,
    output_dir: Option<PathBuf>,
    threads: usize,
    samples: usize,
    progress_interval: f64,
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self {
            location: None,
            v_to: None,
            v_up: None,
            width: None,
            height: None,
            distance: None,
            image_writer: None,
            ray_tracer: None,
            output_dir: None,
            threads: 0,
            samples: 1,
            progress_interval: 0.0,
        }
    }
}

impl CameraBuilder {
    pub fn with_location(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Viewing direction and up vector; they must be perpendicular.
    pub fn with_direction(mut self, v_to: Vector, v_up: Vector) -> Self {
        self.v_to = Some(v_to);
        self.v_up = Some(v_up);
        self
    }

    /// View plane size in scene units.
    pub fn with_vp_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Distance from the camera to the view plane.
    pub fn with_vp_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn with_image_writer(mut self, image_writer: ImageWriter) -> Self {
        self.image_writer = Some(image_writer);
        self
    }

    pub fn with_ray_tracer(mut self, ray_tracer: Arc<dyn RayTracer>) -> Self {
        self.ray_tracer = Some(ray_tracer);
        self
    }

    /// Number of render threads; 0 renders sequentially.
    pub fn with_multithreading(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Shadow rays per light; must be at least 1.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Log progress every `percent` percent; 0 disables.
    pub fn with_progress_interval(mut self, percent: f64) -> Self {
        self.progress_interval = percent;
        self
    }

    /// Apply threads, samples, progress interval and output directory.
    pub fn with_settings(mut self, settings: &RenderSettings) -> Self {
        self.threads = settings.threads;
        self.samples = settings.samples;
        self.progress_interval = settings.progress_interval;
        self.output_dir = Some(settings.output_dir.clone());
        self
    }

    /// Validate every field and produce the camera.
    pub fn build(self) -> CameraResult<Camera> {
        let location = self.location.ok_or(CameraError::MissingField("location"))?;
        let v_to = self.v_to.ok_or(CameraError::MissingField("v_to"))?;
        let v_up = self.v_up.ok_or(CameraError::MissingField("v_up"))?;
        let width = self.width.ok_or(CameraError::MissingField("width"))?;
        let height = self.height.ok_or(CameraError::MissingField("height"))?;
        let distance = self.distance.ok_or(CameraError::MissingField("distance"))?;

        let v_to = v_to.normalize();
        let v_up = v_up.normalize();
        if !is_zero(v_to.dot(&v_up)) {
            return Err(CameraError::NotPerpendicular);
        }

        for (field, value) in [("width", width), ("height", height), ("distance", distance)] {
            if align_zero(value) <= 0.0 {
                return Err(CameraError::NonPositive { field, value });
            }
        }

        let mut image_writer = self
            .image_writer
            .ok_or(CameraError::MissingField("image_writer"))?;
        let ray_tracer = self.ray_tracer.ok_or(CameraError::MissingField("ray_tracer"))?;

        if self.samples == 0 {
            return Err(CameraError::InvalidSampleCount);
        }

        if let Some(dir) = self.output_dir {
            image_writer = image_writer.with_output_dir(dir);
        }

        let v_right = v_to.cross(&v_up)?;

        let (nx, ny) = image_writer.dimensions();
        log::info!(
            "Camera built: {}x{} pixels, {} threads, {} samples",
            nx,
            ny,
            self.threads,
            self.samples
        );

        Ok(Camera {
            location,
            v_to,
            v_up,
            v_right,
            width,
            height,
            distance,
            image_writer,
            ray_tracer,
            threads: self.threads,
            samples: self.samples,
            progress_interval: self.progress_interval,
        })
    }
}
