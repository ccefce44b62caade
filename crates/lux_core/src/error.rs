//! Errors raised while constructing scene objects.

use lux_math::MathError;
use thiserror::Error;

/// Errors that can occur when building a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("height can't be negative, got {0}")]
    NegativeHeight(f64),

    #[error("triangle vertices are collinear or coincide")]
    DegenerateTriangle,

    #[error("plane points are collinear or coincide")]
    DegeneratePlane,

    #[error("math error: {0}")]
    Math(#[from] MathError),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
