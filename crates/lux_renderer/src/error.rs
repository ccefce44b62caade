//! Errors raised while configuring a camera or producing an image.

use lux_math::MathError;
use thiserror::Error;

/// Errors that can occur when building a camera.
///
/// Every variant names the offending field or condition; all of them are
/// reported by [`CameraBuilder::build`](crate::CameraBuilder::build)
/// before any pixel is rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Missing camera field: {0}")]
    MissingField(&'static str),

    #[error("The vectors v_to and v_up are not perpendicular")]
    NotPerpendicular,

    #[error("Camera field {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Sample count must be at least 1")]
    InvalidSampleCount,

    #[error("Math error: {0}")]
    Math(#[from] MathError),
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Errors that can occur while rendering or writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to start render threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Math error: {0}")]
    Math(#[from] MathError),

    #[error("Grid interval must be positive")]
    InvalidGridInterval,
}

pub type RenderResult<T> = Result<T, RenderError>;
