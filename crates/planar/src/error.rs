//! Error taxonomy for the geometry core.
//!
//! All variants are input-validation failures detected eagerly at the API
//! boundary of the offending operation and surfaced to the caller. Every
//! operation here is a pure computation, so there is nothing to retry.

/// Errors raised by measurement, inversion, and construction operations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeomError {
    /// Inversion was requested on a matrix with (numerically) zero determinant.
    #[error("matrix is singular (det = {det})")]
    SingularMatrix { det: f64 },

    /// Bounds/area/perimeter/orientation were requested on geometry with zero
    /// points or zero contours. Raised instead of returning a zero-filled
    /// result, which would hide bugs at the call site.
    #[error("{what} has no points")]
    EmptyGeometry { what: &'static str },

    /// A rectangle was constructed with negative width or height. Rejected at
    /// construction rather than silently clamped.
    #[error("invalid rectangle dimensions {width} x {height}")]
    InvalidDimension { width: f64, height: f64 },
}

/// Shorthand used throughout the crate.
pub type GeomResult<T> = Result<T, GeomError>;
