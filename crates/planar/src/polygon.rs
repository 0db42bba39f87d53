//! Composite polygons: ordered collections of contours.
//!
//! A polygon with several contours can be multiply-connected (outer boundary
//! plus holes). Bounds and perimeter aggregate over all contours. Net area is
//! deliberately not a naive sum of unsigned contour areas: holes must cancel,
//! which `signed_area` does under the nonzero-winding convention (holes wound
//! opposite to their outer contour).

use crate::affine::AffineMatrix;
use crate::contains::{point_in_chains, Containment, BOUNDARY_EPS};
use crate::contour::Contour;
use crate::error::{GeomError, GeomResult};
use crate::rect::Rect;
use crate::Pt2;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    contours: Vec<Contour>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn push(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Mutable access; `Contour` mutators invalidate their own caches, so no
    /// extra bookkeeping is needed here.
    #[inline]
    pub fn contour_mut(&mut self, i: usize) -> Option<&mut Contour> {
        self.contours.get_mut(i)
    }

    /// Union of all contour bounds. `EmptyGeometry` for a polygon with zero
    /// contours (or one containing an empty contour) — never a silent
    /// zero-rect.
    pub fn bounds(&self) -> GeomResult<Rect> {
        let mut iter = self.contours.iter();
        let first = iter
            .next()
            .ok_or(GeomError::EmptyGeometry { what: "polygon" })?;
        let mut acc = first.bounds()?;
        for c in iter {
            acc = acc.union(&c.bounds()?);
        }
        Ok(acc)
    }

    /// Sum of contour perimeters.
    pub fn perimeter(&self) -> GeomResult<f64> {
        if self.contours.is_empty() {
            return Err(GeomError::EmptyGeometry { what: "polygon" });
        }
        let mut acc = 0.0;
        for c in &self.contours {
            acc += c.perimeter()?;
        }
        Ok(acc)
    }

    /// Sum of contour signed areas: the net area under the nonzero-winding
    /// rule when holes are wound opposite to their enclosing contour. Summing
    /// unsigned areas would count holes as solid, so there is intentionally
    /// no `area()` that does that.
    pub fn signed_area(&self) -> GeomResult<f64> {
        if self.contours.is_empty() {
            return Err(GeomError::EmptyGeometry { what: "polygon" });
        }
        let mut acc = 0.0;
        for c in &self.contours {
            acc += c.signed_area()?;
        }
        Ok(acc)
    }

    /// Magnitude of the net signed area.
    pub fn area(&self) -> GeomResult<f64> {
        self.signed_area().map(f64::abs)
    }

    /// Reverse point order within every contour, flipping all orientations
    /// (e.g. to convert between outer/hole winding conventions).
    pub fn reverse(&mut self) {
        for c in &mut self.contours {
            c.reverse();
        }
    }

    /// Apply an affine map to every contour.
    pub fn transform(&mut self, m: &AffineMatrix) {
        for c in &mut self.contours {
            c.transform(m);
        }
    }

    /// Even-odd membership across all contours: a point inside an outer
    /// contour but also inside a hole contour is `Outside`.
    pub fn contains(&self, p: Pt2<f64>) -> Containment {
        self.contains_eps(p, BOUNDARY_EPS)
    }

    pub fn contains_eps(&self, p: Pt2<f64>, eps: f64) -> Containment {
        point_in_chains(self.contours.iter().map(|c| c.points()), p, eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contour::Orientation;

    fn square(lo: f64, hi: f64) -> Contour {
        Contour::from_coords(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi)])
    }

    fn ring() -> Polygon {
        let outer = square(0.0, 4.0);
        let mut hole = square(1.0, 3.0);
        hole.reverse(); // wind the hole clockwise
        Polygon::from_contours(vec![outer, hole])
    }

    #[test]
    fn empty_polygon_measurements_fail() {
        let p = Polygon::new();
        assert!(matches!(
            p.bounds(),
            Err(GeomError::EmptyGeometry { what: "polygon" })
        ));
        assert!(p.perimeter().is_err());
        assert!(p.signed_area().is_err());
    }

    #[test]
    fn bounds_union_and_perimeter_sum() {
        let p = ring();
        assert_eq!(p.bounds().unwrap(), Rect::new(0.0, 0.0, 4.0, 4.0).unwrap());
        assert!((p.perimeter().unwrap() - (16.0 + 8.0)).abs() < 1e-12);
    }

    #[test]
    fn hole_nets_out_of_signed_area() {
        let p = ring();
        // 16 − 4 under nonzero winding.
        assert!((p.signed_area().unwrap() - 12.0).abs() < 1e-12);
        assert!((p.area().unwrap() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn containment_respects_holes() {
        let p = ring();
        assert_eq!(p.contains(Pt2::new(0.5, 0.5)), Containment::Inside);
        assert_eq!(p.contains(Pt2::new(2.0, 2.0)), Containment::Outside);
        assert_eq!(p.contains(Pt2::new(5.0, 5.0)), Containment::Outside);
        assert_eq!(p.contains(Pt2::new(1.0, 2.0)), Containment::Boundary);
    }

    #[test]
    fn reverse_flips_every_contour() {
        let mut p = ring();
        let before: Vec<_> = p
            .contours()
            .iter()
            .map(|c| c.orientation().unwrap())
            .collect();
        assert_eq!(
            before,
            vec![Orientation::CounterClockwise, Orientation::Clockwise]
        );
        p.reverse();
        let after: Vec<_> = p
            .contours()
            .iter()
            .map(|c| c.orientation().unwrap())
            .collect();
        assert_eq!(
            after,
            vec![Orientation::Clockwise, Orientation::CounterClockwise]
        );
        // Net signed area negates, magnitude is preserved.
        assert!((p.signed_area().unwrap() + 12.0).abs() < 1e-12);
    }

    #[test]
    fn transform_maps_all_contours() {
        let mut p = ring();
        let mut m = AffineMatrix::identity();
        m.scale(2.0, 2.0);
        p.transform(&m);
        assert_eq!(p.bounds().unwrap(), Rect::new(0.0, 0.0, 8.0, 8.0).unwrap());
        assert!((p.signed_area().unwrap() - 48.0).abs() < 1e-12);
    }
}
