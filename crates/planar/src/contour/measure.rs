//! Pure measurement kernels over closed point chains.
//!
//! These free functions operate on `&[Pt2<f64>]` treated as an implicitly
//! closed chain (last point connects back to the first). They never index an
//! empty slice: empty input yields `0.0` or `None` and the `Contour` wrapper
//! maps that to `GeomError::EmptyGeometry`.
//!
//! Sign convention
//! - Mathematical Y-up axes: counter-clockwise vertex order gives positive
//!   signed area. Screen coordinates flip Y and therefore the sign; callers
//!   working in screen space negate, this module does not guess.

use crate::rect::Rect;
use crate::{cross, Pt2};

/// Signed areas with magnitude below this are classified `Degenerate`.
const EPS_AREA: f64 = 1e-12;

/// Winding direction of a closed chain, from the sign of its signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Fewer than 3 points, or collinear/coincident points with ~zero area.
    Degenerate,
}

/// Shoelace signed area: `0.5 · Σ (x_i·y_{i+1} − x_{i+1}·y_i)`, wrapping from
/// the last point back to the first. Chains with fewer than 3 points span no
/// area and return `0.0`.
pub fn signed_area(points: &[Pt2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += cross(p.coords, q.coords);
    }
    0.5 * acc
}

/// Sum of Euclidean edge lengths including the closing edge. Chains with
/// fewer than 2 points have no edges and return `0.0`.
pub fn perimeter(points: &[Pt2<f64>]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc += (q - p).norm();
    }
    acc
}

/// Componentwise min/max bounds; `None` for an empty chain.
#[inline]
pub fn bounds(points: &[Pt2<f64>]) -> Option<Rect> {
    Rect::from_points(points)
}

/// Winding classification with an eps dead-zone around zero area.
pub fn orientation(points: &[Pt2<f64>]) -> Orientation {
    orientation_of_area(signed_area(points))
}

#[inline]
pub(crate) fn orientation_of_area(a: f64) -> Orientation {
    if a > EPS_AREA {
        Orientation::CounterClockwise
    } else if a < -EPS_AREA {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Arc-length parameterized point on the closed chain.
///
/// Walks edges accumulating length until reaching `t · perimeter`, then lerps
/// within the reached edge. `t` is clamped to `[0, 1]`; both endpoints return
/// the first point (the chain is closed, so they coincide). A chain of
/// coincident points has zero perimeter and returns the first point at any
/// `t` instead of dividing by zero. `None` only for an empty chain.
pub fn interpolate(points: &[Pt2<f64>], t: f64) -> Option<Pt2<f64>> {
    let n = points.len();
    let first = *points.first()?;
    if n == 1 {
        return Some(first);
    }
    let total = perimeter(points);
    if total <= 0.0 {
        return Some(first);
    }
    let target = t.clamp(0.0, 1.0) * total;
    let mut walked = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let len = (q - p).norm();
        if len > 0.0 && walked + len >= target {
            let s = (target - walked) / len;
            return Some(p + (q - p) * s);
        }
        walked += len;
    }
    // Accumulated rounding can leave target a hair past the walked total;
    // the closing edge ends at the first point.
    Some(first)
}

/// Area centroid of the closed chain, falling back to the vertex mean when
/// the enclosed area is degenerate. `None` for an empty chain.
pub fn centroid(points: &[Pt2<f64>]) -> Option<Pt2<f64>> {
    let n = points.len();
    if n == 0 {
        return None;
    }
    let a = signed_area(points);
    if a.abs() > EPS_AREA {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = points[i];
            let q = points[(i + 1) % n];
            let w = cross(p.coords, q.coords);
            cx += (p.x + q.x) * w;
            cy += (p.y + q.y) * w;
        }
        let f = 1.0 / (6.0 * a);
        return Some(Pt2::new(cx * f, cy * f));
    }
    let mut sum = Pt2::new(0.0, 0.0);
    for p in points {
        sum.x += p.x;
        sum.y += p.y;
    }
    Some(Pt2::new(sum.x / n as f64, sum.y / n as f64))
}
