//! Axis-aligned rectangles.
//!
//! Invariants
//! - `width >= 0` and `height >= 0`, enforced at construction
//!   ([`GeomError::InvalidDimension`]); negative extents are rejected, never
//!   clamped.
//! - An empty rectangle has zero width or zero height. `union` and
//!   `intersection` are closed on the type: a disjoint intersection yields an
//!   empty rectangle, not an error.

use crate::error::{GeomError, GeomResult};
use crate::Pt2;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Construct with validated extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> GeomResult<Rect> {
        if width < 0.0 || height < 0.0 {
            return Err(GeomError::InvalidDimension { width, height });
        }
        Ok(Rect { x, y, width, height })
    }

    /// Componentwise min/max hull of a point set. `None` for an empty slice.
    pub fn from_points(points: &[Pt2<f64>]) -> Option<Rect> {
        let first = points.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x;
        let mut max_y = first.y;
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Pt2<f64> {
        Pt2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Smallest rectangle covering both operands.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.top().max(other.top()) - y,
        }
    }

    /// Overlapping region; empty (zero-extent) when the operands are disjoint.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let width = (self.right().min(other.right()) - x).max(0.0);
        let height = (self.top().min(other.top()) - y).max(0.0);
        Rect { x, y, width, height }
    }

    /// Closed containment: edge points count as contained.
    pub fn contains_point(&self, p: Pt2<f64>) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.top()
    }
}
