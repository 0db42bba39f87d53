//! Closed sum type over the shape variants.
//!
//! Replaces an inheritance chain with one enum sharing the read-only query
//! surface consumers need: `bounds`, `perimeter`, `contains`. Adding a
//! variant is a compile-checked change at every match site.

use crate::contains::{Containment, BOUNDARY_EPS};
use crate::contour::Contour;
use crate::error::GeomResult;
use crate::polygon::Polygon;
use crate::rect::Rect;
use crate::segment::Segment;
use crate::Pt2;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Contour(Contour),
    Polygon(Polygon),
    Rect(Rect),
    Segment(Segment),
}

impl Shape {
    pub fn bounds(&self) -> GeomResult<Rect> {
        match self {
            Shape::Contour(c) => c.bounds(),
            Shape::Polygon(p) => p.bounds(),
            Shape::Rect(r) => Ok(*r),
            Shape::Segment(s) => {
                // Two points always exist, so the hull is total.
                Ok(Rect::from_points(&[s.a, s.b]).expect("segment has endpoints"))
            }
        }
    }

    /// Boundary length. For a segment (an open shape) this is its length.
    pub fn perimeter(&self) -> GeomResult<f64> {
        match self {
            Shape::Contour(c) => c.perimeter(),
            Shape::Polygon(p) => p.perimeter(),
            Shape::Rect(r) => Ok(2.0 * (r.width + r.height)),
            Shape::Segment(s) => Ok(s.length()),
        }
    }

    /// Tri-state membership. A segment has no interior, so queries on it
    /// classify as `Boundary` within the eps band and `Outside` elsewhere.
    pub fn contains(&self, p: Pt2<f64>) -> Containment {
        match self {
            Shape::Contour(c) => c.contains(p),
            Shape::Polygon(poly) => poly.contains(p),
            Shape::Rect(r) => rect_containment(r, p, BOUNDARY_EPS),
            Shape::Segment(s) => {
                if s.distance_to_point(p) <= BOUNDARY_EPS {
                    Containment::Boundary
                } else {
                    Containment::Outside
                }
            }
        }
    }
}

impl From<Contour> for Shape {
    fn from(c: Contour) -> Self {
        Shape::Contour(c)
    }
}
impl From<Polygon> for Shape {
    fn from(p: Polygon) -> Self {
        Shape::Polygon(p)
    }
}
impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}
impl From<Segment> for Shape {
    fn from(s: Segment) -> Self {
        Shape::Segment(s)
    }
}

fn rect_containment(r: &Rect, p: Pt2<f64>, eps: f64) -> Containment {
    let near_x = (p.x - r.x).abs() <= eps || (p.x - r.right()).abs() <= eps;
    let near_y = (p.y - r.y).abs() <= eps || (p.y - r.top()).abs() <= eps;
    let in_x = p.x >= r.x - eps && p.x <= r.right() + eps;
    let in_y = p.y >= r.y - eps && p.y <= r.top() + eps;
    if in_x && in_y && (near_x || near_y) {
        Containment::Boundary
    } else if in_x && in_y {
        Containment::Inside
    } else {
        Containment::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_variant_queries() {
        let shape = Shape::from(Rect::new(0.0, 0.0, 2.0, 1.0).unwrap());
        assert_eq!(shape.bounds().unwrap(), Rect::new(0.0, 0.0, 2.0, 1.0).unwrap());
        assert!((shape.perimeter().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(shape.contains(Pt2::new(1.0, 0.5)), Containment::Inside);
        assert_eq!(shape.contains(Pt2::new(0.0, 0.5)), Containment::Boundary);
        assert_eq!(shape.contains(Pt2::new(3.0, 0.5)), Containment::Outside);
    }

    #[test]
    fn segment_variant_queries() {
        let shape = Shape::from(Segment::new(Pt2::new(0.0, 0.0), Pt2::new(3.0, 4.0)));
        assert!((shape.perimeter().unwrap() - 5.0).abs() < 1e-12);
        let b = shape.bounds().unwrap();
        assert_eq!(b, Rect::new(0.0, 0.0, 3.0, 4.0).unwrap());
        assert_eq!(shape.contains(Pt2::new(1.5, 2.0)), Containment::Boundary);
        assert_eq!(shape.contains(Pt2::new(1.5, 2.5)), Containment::Outside);
    }

    #[test]
    fn contour_variant_delegates() {
        let c = Contour::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let shape = Shape::from(c);
        assert!((shape.perimeter().unwrap() - 4.0).abs() < 1e-12);
        assert_eq!(shape.contains(Pt2::new(0.5, 0.5)), Containment::Inside);
    }
}
