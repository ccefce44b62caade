use thiserror::Error;

/// Errors raised by the vector algebra.
///
/// Each variant marks an operation that would have produced the zero
/// vector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot create the zero vector")]
    ZeroVector,

    #[error("cannot scale a vector by zero")]
    ZeroScale,

    #[error("cross product of parallel vectors is the zero vector")]
    ParallelVectors,
}

pub type MathResult<T> = Result<T, MathError>;
