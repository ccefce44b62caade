//! Hands out image pixels to render workers.
//!
//! A single atomic counter walks the image in row-major order, so every
//! pixel is given to exactly one caller no matter how many threads ask.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub row: usize,
    pub column: usize,
}

/// Shared pixel dispenser with progress tracking.
pub struct PixelManager {
    columns: usize,
    total: usize,
    /// Next linear pixel index to hand out
    next: AtomicUsize,
    /// Pixels reported finished
    done: AtomicUsize,
    /// Progress log step in percent (0 = silent)
    progress_interval: f64,
}

impl PixelManager {
    /// Create a manager for an image of `rows` x `columns` pixels.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            total: rows * columns,
            next: AtomicUsize::new(0),
            done: AtomicUsize::new(0),
            progress_interval: 0.0,
        }
    }

    /// Log progress every `percent` percent of finished pixels.
    pub fn with_progress_interval(mut self, percent: f64) -> Self {
        self.progress_interval = percent.max(0.0);
        self
    }

    /// Claim the next unrendered pixel, or `None` once all are handed out.
    pub fn next_pixel(&self) -> Option<Pixel> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        if index >= self.total {
            return None;
        }
        Some(Pixel {
            row: index / self.columns,
            column: index % self.columns,
        })
    }

    /// Stop handing out pixels; every later `next_pixel` returns `None`.
    pub fn abort(&self) {
        self.next.store(self.total, Ordering::Relaxed);
    }

    /// Record one finished pixel, logging when a progress step is crossed.
    pub fn pixel_done(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.progress_interval <= 0.0 || self.total == 0 {
            return;
        }

        let step = |count: usize| (count as f64 * 100.0 / self.total as f64 / self.progress_interval) as u64;
        if step(done) > step(done - 1) {
            log::info!("Render progress: {:.1}%", self.progress());
        }
    }

    /// Finished pixels as a percentage of the image.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.done.load(Ordering::Relaxed) as f64 * 100.0 / self.total as f64
    }
}
