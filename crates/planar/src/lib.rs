//! 2D polygon geometry core: contours, composites, rectangles, affine maps.
//!
//! Purpose
//! - Provide the measurement layer under a vector editor: signed area,
//!   perimeter, bounds, orientation, arc-length interpolation, and tri-state
//!   point containment over closed vertex chains.
//! - Keep the API minimal and numerically explicit (eps-aware predicates,
//!   eager validation errors instead of silent zero results).
//!
//! Conventions
//! - Coordinates are mathematical Y-up. Counter-clockwise vertex order has
//!   positive signed area. Screen-space (Y-down) callers see the sign flipped
//!   and are expected to handle that themselves; see `contour::measure`.
//! - Contours are implicitly closed: the last point connects back to the
//!   first. A chain with fewer than 3 points has zero area.
//!
//! Error policy
//! - Measurements of empty geometry and inversion of singular matrices fail
//!   with [`error::GeomError`]; nothing is clamped or defaulted. See `error`.

pub mod affine;
pub mod contains;
pub mod contour;
pub mod error;
pub mod polygon;
pub mod rect;
pub mod segment;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Short aliases to keep call sites close to the geometric notation.
pub use nalgebra::{Point2 as Pt2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{AffineMatrix, MatrixKind};
    pub use crate::contains::Containment;
    pub use crate::contour::rand::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::contour::{Contour, Orientation};
    pub use crate::error::GeomError;
    pub use crate::polygon::Polygon;
    pub use crate::rect::Rect;
    pub use crate::segment::Segment;
    pub use crate::shape::Shape;
    pub use nalgebra::{Point2 as Pt2, Vector2 as Vec2};
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise. This is the scalar
/// z-component of the 3D cross product and the kernel of the shoelace sum.
#[inline]
pub fn cross(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
