//! Tri-state point-in-polygon tests (even-odd rule).
//!
//! Algorithm
//! - Boundary first: a query point within `eps` of any edge is `Boundary`.
//!   The band is a distance test, not exact equality, so points that land on
//!   an edge up to floating error still classify as boundary.
//! - Otherwise even-odd ray casting: parity of edge crossings along the
//!   horizontal ray from the point towards +∞. For a composite polygon the
//!   parity accumulates across all contours, so a point inside a hole contour
//!   comes out `Outside`.
//!
//! Degenerate chains (fewer than 3 points) span no area and are `Outside`
//! everywhere.

use crate::segment::Segment;
use crate::Pt2;

/// Default half-width of the boundary band. Matches the predicate tolerance
/// used elsewhere in the crate; scale-agnostic, so callers with extreme
/// coordinate scales should pass their own via `*_eps`.
pub const BOUNDARY_EPS: f64 = 1e-9;

/// Result of a containment query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    /// Within the eps band around an edge or vertex.
    Boundary,
}

impl Containment {
    #[inline]
    pub fn is_inside(self) -> bool {
        matches!(self, Containment::Inside)
    }

    #[inline]
    pub fn is_boundary(self) -> bool {
        matches!(self, Containment::Boundary)
    }
}

/// Even-odd membership of `p` in one implicitly closed chain.
pub fn point_in_chain(points: &[Pt2<f64>], p: Pt2<f64>, eps: f64) -> Containment {
    let n = points.len();
    if n < 3 {
        return Containment::Outside;
    }
    for i in 0..n {
        let edge = Segment::new(points[i], points[(i + 1) % n]);
        if edge.distance_to_point(p) <= eps {
            return Containment::Boundary;
        }
    }
    if crossings_are_odd(points, p) {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Even-odd membership across the chains of a composite polygon. Boundary on
/// any chain wins; otherwise the crossing parities of all chains combine.
pub fn point_in_chains<'a, I>(chains: I, p: Pt2<f64>, eps: f64) -> Containment
where
    I: IntoIterator<Item = &'a [Pt2<f64>]>,
{
    let mut inside = false;
    for points in chains {
        match point_in_chain(points, p, eps) {
            Containment::Boundary => return Containment::Boundary,
            Containment::Inside => inside = !inside,
            Containment::Outside => {}
        }
    }
    if inside {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

/// Parity of horizontal-ray edge crossings. The half-open `>` / `<=` split on
/// the y-test counts each vertex exactly once, so rays through vertices do
/// not double-count.
fn crossings_are_odd(points: &[Pt2<f64>], p: Pt2<f64>) -> bool {
    let n = points.len();
    let mut odd = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = points[i];
        let pj = points[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = pi.x + (p.y - pi.y) * (pj.x - pi.x) / (pj.y - pi.y);
            if p.x < x_cross {
                odd = !odd;
            }
        }
        j = i;
    }
    odd
}
