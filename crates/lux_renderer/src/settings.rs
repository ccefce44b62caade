//! Render settings that can be loaded from a JSON file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Worker threads; 0 renders on the calling thread
    pub threads: usize,
    /// Shadow rays per light; 1 gives hard shadows
    pub samples: usize,
    /// Log progress every this many percent; 0 disables
    pub progress_interval: f64,
    /// Directory the image files are written to
    pub output_dir: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            threads: 0,
            samples: 1,
            progress_interval: 10.0,
            output_dir: PathBuf::from("images"),
        }
    }
}
