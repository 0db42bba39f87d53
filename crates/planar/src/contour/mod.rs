//! Closed contours with memoized measurements.
//!
//! Purpose
//! - Provide the ordered, implicitly closed point sequence at the heart of the
//!   core, with derived measurements (signed area, perimeter, bounds,
//!   orientation) computed lazily and cached.
//!
//! Why this design
//! - The cache is an explicit `OnceCell<Measured>` cleared by every mutator.
//!   Stale caches are the main correctness risk for this type, so invalidation
//!   is concentrated in `invalidate()` and every `&mut` entry point calls it.
//! - Measurement getters fail with `EmptyGeometry` on zero points instead of
//!   indexing into an empty list or inventing a zero result.
//!
//! Code cross-refs: `measure` (pure kernels), `crate::contains` (membership),
//! `rand` (deterministic samplers for tests and benches).

use std::cell::OnceCell;

use crate::affine::AffineMatrix;
use crate::contains::{point_in_chain, Containment, BOUNDARY_EPS};
use crate::error::{GeomError, GeomResult};
use crate::rect::Rect;
use crate::segment::Segment;
use crate::{Pt2, Vec2};

pub mod measure;
pub mod rand;

pub use measure::Orientation;


/// Measurements derived from the point sequence, computed in one pass cache
/// fill. Only ever built for a non-empty contour, so `bounds` is total.
#[derive(Clone, Debug)]
struct Measured {
    signed_area: f64,
    perimeter: f64,
    bounds: Rect,
}

/// Ordered, implicitly closed point sequence.
#[derive(Clone, Debug, Default)]
pub struct Contour {
    points: Vec<Pt2<f64>>,
    cache: OnceCell<Measured>,
}

impl PartialEq for Contour {
    fn eq(&self, other: &Self) -> bool {
        // Cache state is derived and excluded from equality.
        self.points == other.points
    }
}

impl Contour {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Pt2<f64>>) -> Self {
        Self { points, cache: OnceCell::new() }
    }

    /// Convenience constructor from coordinate pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::from_points(coords.iter().map(|&(x, y)| Pt2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Pt2<f64>] {
        &self.points
    }

    #[inline]
    pub fn point(&self, i: usize) -> Option<Pt2<f64>> {
        self.points.get(i).copied()
    }

    /// Clears memoized measurements. Every mutator must call this.
    #[inline]
    fn invalidate(&mut self) {
        self.cache.take();
    }

    pub fn push(&mut self, p: Pt2<f64>) {
        self.invalidate();
        self.points.push(p);
    }

    /// Replace the point at `i`. Out-of-range indices are a caller bug.
    pub fn set(&mut self, i: usize, p: Pt2<f64>) {
        self.invalidate();
        self.points[i] = p;
    }

    pub fn insert(&mut self, i: usize, p: Pt2<f64>) {
        self.invalidate();
        self.points.insert(i, p);
    }

    pub fn remove(&mut self, i: usize) -> Pt2<f64> {
        self.invalidate();
        self.points.remove(i)
    }

    /// Reverses the point order, flipping orientation and negating the signed
    /// area while leaving unsigned area, perimeter, and bounds unchanged.
    pub fn reverse(&mut self) {
        self.invalidate();
        self.points.reverse();
    }

    pub fn clear(&mut self) {
        self.invalidate();
        self.points.clear();
    }

    /// Apply an affine map to every point.
    pub fn transform(&mut self, m: &AffineMatrix) {
        self.invalidate();
        for p in &mut self.points {
            *p = m.transform_point(*p);
        }
    }

    /// Shift every point by `v`.
    pub fn translate(&mut self, v: Vec2<f64>) {
        self.invalidate();
        for p in &mut self.points {
            *p += v;
        }
    }

    fn measured(&self) -> GeomResult<&Measured> {
        if self.points.is_empty() {
            return Err(GeomError::EmptyGeometry { what: "contour" });
        }
        Ok(self.cache.get_or_init(|| Measured {
            signed_area: measure::signed_area(&self.points),
            perimeter: measure::perimeter(&self.points),
            // Non-empty by the check above.
            bounds: measure::bounds(&self.points).unwrap_or_default(),
        }))
    }

    /// Shoelace signed area (Y-up, CCW positive). Zero for fewer than 3
    /// points; `EmptyGeometry` for zero points.
    pub fn signed_area(&self) -> GeomResult<f64> {
        self.measured().map(|m| m.signed_area)
    }

    /// Unsigned enclosed area.
    pub fn area(&self) -> GeomResult<f64> {
        self.signed_area().map(f64::abs)
    }

    /// Closed-chain perimeter including the wrap-around edge.
    pub fn perimeter(&self) -> GeomResult<f64> {
        self.measured().map(|m| m.perimeter)
    }

    /// Axis-aligned bounding box of the points.
    pub fn bounds(&self) -> GeomResult<Rect> {
        self.measured().map(|m| m.bounds)
    }

    /// Winding classification from the signed area's sign.
    pub fn orientation(&self) -> GeomResult<Orientation> {
        let a = self.signed_area()?;
        Ok(measure::orientation_of_area(a))
    }

    /// Arc-length parameterized point; see `measure::interpolate`.
    pub fn interpolate(&self, t: f64) -> GeomResult<Pt2<f64>> {
        measure::interpolate(&self.points, t)
            .ok_or(GeomError::EmptyGeometry { what: "contour" })
    }

    /// Area centroid (vertex mean for degenerate area).
    pub fn centroid(&self) -> GeomResult<Pt2<f64>> {
        measure::centroid(&self.points).ok_or(GeomError::EmptyGeometry { what: "contour" })
    }

    /// Edge from point `i` to point `i+1`, wrapping modulo the point count.
    pub fn segment(&self, i: usize) -> GeomResult<Segment> {
        let n = self.points.len();
        if n == 0 {
            return Err(GeomError::EmptyGeometry { what: "contour" });
        }
        let a = self.points[i % n];
        let b = self.points[(i + 1) % n];
        Ok(Segment::new(a, b))
    }

    /// All edges including the closing one, in order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Tri-state even-odd membership with the default boundary band.
    pub fn contains(&self, p: Pt2<f64>) -> Containment {
        point_in_chain(&self.points, p, BOUNDARY_EPS)
    }

    /// Membership with a caller-chosen boundary band width.
    pub fn contains_eps(&self, p: Pt2<f64>, eps: f64) -> Containment {
        point_in_chain(&self.points, p, eps)
    }
}
