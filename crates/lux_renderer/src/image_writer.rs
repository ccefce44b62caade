//! Image sink the camera renders into.
//!
//! Pixels are stored as packed 8-bit RGB in atomics, so worker threads
//! can write disjoint coordinates through a shared reference.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use image::{Rgb, RgbImage};
use lux_math::Color;

use crate::RenderResult;

/// Fixed-size raster that is flushed to a PNG file.
pub struct ImageWriter {
    name: String,
    nx: usize,
    ny: usize,
    output_dir: PathBuf,
    pixels: Vec<AtomicU32>,
}

impl ImageWriter {
    /// Create a black image of `nx` columns by `ny` rows.
    pub fn new(name: impl Into<String>, nx: usize, ny: usize) -> Self {
        Self {
            name: name.into(),
            nx,
            ny,
            output_dir: PathBuf::from("images"),
            pixels: (0..nx * ny).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    /// Directory `write_to_image` saves into (default `images`).
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Store the color of pixel (x, y), clamped to 8 bits per channel.
    pub fn write_pixel(&self, x: usize, y: usize, color: Color) {
        if x >= self.nx || y >= self.ny {
            log::warn!("Pixel ({}, {}) is outside the {}x{} image", x, y, self.nx, self.ny);
            return;
        }
        let [r, g, b] = color.to_rgb8();
        self.pixels[y * self.nx + x].store(u32::from_le_bytes([r, g, b, 0]), Ordering::Relaxed);
    }

    /// The stored 8-bit color of pixel (x, y), or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.nx || y >= self.ny {
            return None;
        }
        Some(self.load(y * self.nx + x))
    }

    fn load(&self, index: usize) -> [u8; 3] {
        let [r, g, b, _] = self.pixels[index].load(Ordering::Relaxed).to_le_bytes();
        [r, g, b]
    }

    /// Copy the raster into an `image` buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.nx as u32, self.ny as u32, |x, y| {
            Rgb(self.load(y as usize * self.nx + x as usize))
        })
    }

    /// Save the raster as `<output_dir>/<name>.png` and return the path.
    pub fn write_to_image(&self) -> RenderResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(format!("{}.png", self.name));
        self.to_rgb_image().save(&path)?;
        log::info!("Saved {}x{} image to {}", self.nx, self.ny, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_black() {
        let writer = ImageWriter::new("black", 4, 3);
        assert_eq!(writer.dimensions(), (4, 3));
        assert_eq!(writer.pixel(3, 2), Some([0, 0, 0]));
    }

    #[test]
    fn test_write_pixel_clamps() {
        let writer = ImageWriter::new("clamp", 2, 2);
        writer.write_pixel(1, 0, Color::new(300.0, 100.0, 0.0));
        assert_eq!(writer.pixel(1, 0), Some([255, 100, 0]));
        assert_eq!(writer.pixel(0, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_out_of_bounds_write_is_ignored() {
        let writer = ImageWriter::new("bounds", 2, 2);
        writer.write_pixel(2, 0, Color::WHITE);
        writer.write_pixel(0, 2, Color::WHITE);
        assert!((0..2).all(|y| (0..2).all(|x| writer.pixel(x, y) == Some([0, 0, 0]))));
    }

    #[test]
    fn test_out_of_bounds_read_is_none() {
        let writer = ImageWriter::new("read", 2, 2);
        writer.write_pixel(0, 1, Color::WHITE);
        // (2, 0) must not wrap around to (0, 1)
        assert_eq!(writer.pixel(2, 0), None);
        assert_eq!(writer.pixel(0, 2), None);
        assert_eq!(writer.pixel(0, usize::MAX / 2), None);
        assert_eq!(writer.pixel(0, 1), Some([255, 255, 255]));
    }

    #[test]
    fn test_concurrent_disjoint_writes() {
        let writer = ImageWriter::new("threads", 16, 16);
        std::thread::scope(|s| {
            for row in 0..16 {
                let writer = &writer;
                s.spawn(move || {
                    for x in 0..16 {
                        writer.write_pixel(x, row, Color::new(row as f64, x as f64, 7.0));
                    }
                });
            }
        });
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(writer.pixel(x, y), Some([y as u8, x as u8, 7]));
            }
        }
    }

    #[test]
    fn test_write_to_image() {
        let dir = std::env::temp_dir().join("lux_image_writer_test");
        let writer = ImageWriter::new("flush", 3, 2).with_output_dir(&dir);
        writer.write_pixel(2, 1, Color::BLUE);

        let path = writer.write_to_image().unwrap();
        assert_eq!(path, dir.join("flush.png"));

        let saved = image::open(&path).unwrap().to_rgb8();
        assert_eq!(saved.dimensions(), (3, 2));
        assert_eq!(saved.get_pixel(2, 1), &Rgb([0, 0, 255]));
        assert_eq!(saved.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
