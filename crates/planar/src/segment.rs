//! Line segments: the edge primitive extracted from contours.
//!
//! Used by edge-by-edge algorithms (boundary classification in `contains`,
//! intersection probes). Segments are directed `a -> b` but length and
//! distance are direction-agnostic.

use crate::{Pt2, Vec2};

/// Tolerance for the 2×2 determinant in the intersection solve.
const EPS_DET: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Pt2<f64>,
    pub b: Pt2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(a: Pt2<f64>, b: Pt2<f64>) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn delta(&self) -> Vec2<f64> {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Pt2<f64> {
        self.eval(0.5)
    }

    /// Linear interpolation along the segment; `t=0` is `a`, `t=1` is `b`.
    #[inline]
    pub fn eval(&self, t: f64) -> Pt2<f64> {
        self.a + self.delta() * t
    }

    /// Distance from `p` to the closest point of the (closed) segment.
    pub fn distance_to_point(&self, p: Pt2<f64>) -> f64 {
        let d = self.delta();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            // Degenerate segment: both endpoints coincide.
            return (p - self.a).norm();
        }
        let t = ((p - self.a).dot(&d) / len2).clamp(0.0, 1.0);
        (p - (self.a + d * t)).norm()
    }

    /// Intersection point of the two segments, if the supporting lines cross
    /// within both parameter ranges. Parallel/near-parallel pairs return
    /// `None`; the caller decides what to do with the candidate.
    pub fn intersection(&self, other: &Segment) -> Option<Pt2<f64>> {
        // Solve a + s·d1 = c + u·d2 as a 2×2 system in (s, u).
        let d1 = self.delta();
        let d2 = other.delta();
        let det = d1.x * (-d2.y) - (-d2.x) * d1.y;
        if det.abs() < EPS_DET {
            return None;
        }
        let rhs = other.a - self.a;
        let s = (rhs.x * (-d2.y) - (-d2.x) * rhs.y) / det;
        let u = (d1.x * rhs.y - rhs.x * d1.y) / det;
        if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&u) {
            Some(self.eval(s))
        } else {
            None
        }
    }
}
