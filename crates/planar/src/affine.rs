//! 2×3 affine transforms with kind-classified fast paths.
//!
//! Purpose
//! - One transform type for the whole core: point/vector mapping, composition,
//!   inversion, and the elementary rotate/scale/translate/skew builders.
//!
//! Conventions
//! - Row-vector convention: `p' = (x·m11 + y·m21 + dx, x·m12 + y·m22 + dy)`.
//!   Composition `a.then(b)` therefore applies `a` first, then `b`.
//! - The classification ([`MatrixKind`]) is recomputed from the coefficients on
//!   every read and never stored. A stored tag can go stale after a partial
//!   update; recomputing costs a few compares and removes that bug class.
//! - Fast paths keyed on the kind are pure optimization. They must agree with
//!   the general 2×3 multiply on finite inputs (up to the sign of zero), which
//!   the tests pin down.

use crate::error::{GeomError, GeomResult};
use crate::{Pt2, Vec2};

/// Determinant magnitude below which a matrix is treated as singular.
const EPS_DET: f64 = 1e-12;

/// Classification of an affine matrix, derived from its coefficients.
///
/// `Translation` requires a unit linear part; `Scaling` covers any diagonal
/// linear part (offsets allowed); everything with a cross term is `General`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixKind {
    Identity,
    Translation,
    Scaling,
    General,
}

/// 2×3 affine matrix (third column is implicitly `[0, 0, 1]`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineMatrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineMatrix {
    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self { m11, m12, m21, m22, dx, dy }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Pure translation by `(dx, dy)`.
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Scaling about the origin by `(sx, sy)`.
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise rotation about the origin.
    ///
    /// With the row-vector convention a 90° rotation maps `(1,0)` to `(0,1)`.
    pub fn rotation(angle_deg: f64) -> Self {
        let (sin, cos) = angle_deg.to_radians().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Skew by `angle_x_deg` along X (shears x by y) and `angle_y_deg` along Y.
    pub fn skew(angle_x_deg: f64, angle_y_deg: f64) -> Self {
        Self::new(
            1.0,
            angle_y_deg.to_radians().tan(),
            angle_x_deg.to_radians().tan(),
            1.0,
            0.0,
            0.0,
        )
    }

    /// Classification derived from the current coefficients (exact compares;
    /// an epsilon here would let the fast paths drift from the general path).
    pub fn kind(&self) -> MatrixKind {
        if self.m12 != 0.0 || self.m21 != 0.0 {
            return MatrixKind::General;
        }
        let unit_linear = self.m11 == 1.0 && self.m22 == 1.0;
        let no_offset = self.dx == 0.0 && self.dy == 0.0;
        match (unit_linear, no_offset) {
            (true, true) => MatrixKind::Identity,
            (true, false) => MatrixKind::Translation,
            (false, _) => MatrixKind::Scaling,
        }
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.kind() == MatrixKind::Identity
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Map a point (translation applies).
    pub fn transform_point(&self, p: Pt2<f64>) -> Pt2<f64> {
        match self.kind() {
            MatrixKind::Identity => p,
            MatrixKind::Translation => Pt2::new(p.x + self.dx, p.y + self.dy),
            MatrixKind::Scaling => {
                Pt2::new(p.x * self.m11 + self.dx, p.y * self.m22 + self.dy)
            }
            MatrixKind::General => self.transform_point_general(p),
        }
    }

    /// Map a displacement (translation does not apply).
    pub fn transform_vector(&self, v: Vec2<f64>) -> Vec2<f64> {
        match self.kind() {
            MatrixKind::Identity | MatrixKind::Translation => v,
            MatrixKind::Scaling => Vec2::new(v.x * self.m11, v.y * self.m22),
            MatrixKind::General => Vec2::new(
                v.x * self.m11 + v.y * self.m21,
                v.x * self.m12 + v.y * self.m22,
            ),
        }
    }

    /// Full multiply-add path; the kind fast paths must agree with this.
    fn transform_point_general(&self, p: Pt2<f64>) -> Pt2<f64> {
        Pt2::new(
            p.x * self.m11 + p.y * self.m21 + self.dx,
            p.x * self.m12 + p.y * self.m22 + self.dy,
        )
    }

    /// Composition applying `self` first, then `other`.
    ///
    /// Kind pairs without a cross term skip the full multiply; the results
    /// match `then_general` (the property tests compare the two paths).
    pub fn then(&self, other: &AffineMatrix) -> AffineMatrix {
        match (self.kind(), other.kind()) {
            (MatrixKind::Identity, _) => *other,
            (_, MatrixKind::Identity) => *self,
            (MatrixKind::Translation, MatrixKind::Translation) => {
                Self::translation(self.dx + other.dx, self.dy + other.dy)
            }
            (a, b) if a != MatrixKind::General && b != MatrixKind::General => {
                // Both linear parts are diagonal: no cross terms survive.
                Self::new(
                    self.m11 * other.m11,
                    0.0,
                    0.0,
                    self.m22 * other.m22,
                    self.dx * other.m11 + other.dx,
                    self.dy * other.m22 + other.dy,
                )
            }
            _ => self.then_general(other),
        }
    }

    /// General 2×3 composition, correct for every kind pair.
    fn then_general(&self, other: &AffineMatrix) -> AffineMatrix {
        Self::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
            self.dx * other.m11 + self.dy * other.m21 + other.dx,
            self.dx * other.m12 + self.dy * other.m22 + other.dy,
        )
    }

    /// Inverse map, or `SingularMatrix` when `|det|` is numerically zero.
    pub fn inverse(&self) -> GeomResult<AffineMatrix> {
        match self.kind() {
            MatrixKind::Identity => Ok(*self),
            MatrixKind::Translation => Ok(Self::translation(-self.dx, -self.dy)),
            MatrixKind::Scaling => {
                let det = self.m11 * self.m22;
                if det.abs() < EPS_DET {
                    return Err(GeomError::SingularMatrix { det });
                }
                Ok(Self::new(
                    1.0 / self.m11,
                    0.0,
                    0.0,
                    1.0 / self.m22,
                    -self.dx / self.m11,
                    -self.dy / self.m22,
                ))
            }
            MatrixKind::General => {
                let det = self.determinant();
                if det.abs() < EPS_DET {
                    return Err(GeomError::SingularMatrix { det });
                }
                Ok(Self::new(
                    self.m22 / det,
                    -self.m12 / det,
                    -self.m21 / det,
                    self.m11 / det,
                    (self.dy * self.m21 - self.dx * self.m22) / det,
                    (self.dx * self.m12 - self.dy * self.m11) / det,
                ))
            }
        }
    }

    // Elementary composition, append semantics (`self = self * elem`): the
    // elementary transform is applied after the existing one.

    pub fn rotate(&mut self, angle_deg: f64) {
        *self = self.then(&Self::rotation(angle_deg));
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = self.then(&Self::scaling(sx, sy));
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        *self = self.then(&Self::translation(dx, dy));
    }

    pub fn skew_by(&mut self, angle_x_deg: f64, angle_y_deg: f64) {
        *self = self.then(&Self::skew(angle_x_deg, angle_y_deg));
    }

    // Prepend semantics (`self = elem * self`): the elementary transform is
    // applied before the existing one. Distinct from append for everything
    // that does not commute.

    pub fn rotate_prepend(&mut self, angle_deg: f64) {
        *self = Self::rotation(angle_deg).then(self);
    }

    pub fn scale_prepend(&mut self, sx: f64, sy: f64) {
        *self = Self::scaling(sx, sy).then(self);
    }

    pub fn translate_prepend(&mut self, dx: f64, dy: f64) {
        *self = Self::translation(dx, dy).then(self);
    }

    pub fn skew_prepend(&mut self, angle_x_deg: f64, angle_y_deg: f64) {
        *self = Self::skew(angle_x_deg, angle_y_deg).then(self);
    }
}

/// `a * b` composes with row-vector order: apply `a` first, then `b`.
impl std::ops::Mul for AffineMatrix {
    type Output = AffineMatrix;
    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        self.then(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn approx_pt(a: Pt2<f64>, b: Pt2<f64>, eps: f64) -> bool {
        approx(a.x, b.x, eps) && approx(a.y, b.y, eps)
    }

    #[test]
    fn kind_classification() {
        assert_eq!(AffineMatrix::identity().kind(), MatrixKind::Identity);
        assert_eq!(
            AffineMatrix::translation(1.0, -2.0).kind(),
            MatrixKind::Translation
        );
        assert_eq!(AffineMatrix::scaling(2.0, 3.0).kind(), MatrixKind::Scaling);
        // Diagonal with offsets still counts as scaling.
        assert_eq!(
            AffineMatrix::new(2.0, 0.0, 0.0, 3.0, 1.0, 1.0).kind(),
            MatrixKind::Scaling
        );
        assert_eq!(AffineMatrix::rotation(30.0).kind(), MatrixKind::General);
        // Kind is derived, so mutation can never leave it stale.
        let mut m = AffineMatrix::identity();
        m.translate(5.0, 0.0);
        assert_eq!(m.kind(), MatrixKind::Translation);
        m.scale(2.0, 2.0);
        assert_eq!(m.kind(), MatrixKind::Scaling);
    }

    #[test]
    fn rotation_90_maps_x_axis_to_y_axis() {
        let r = AffineMatrix::rotation(90.0);
        let p = r.transform_point(Pt2::new(1.0, 0.0));
        assert!(approx_pt(p, Pt2::new(0.0, 1.0), 1e-9));
    }

    #[test]
    fn vectors_ignore_translation() {
        let m = AffineMatrix::translation(10.0, 20.0);
        assert_eq!(m.transform_vector(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
        assert_eq!(
            m.transform_point(Pt2::new(1.0, 2.0)),
            Pt2::new(11.0, 22.0)
        );
    }

    #[test]
    fn fast_paths_match_general_transform() {
        let cases = [
            AffineMatrix::identity(),
            AffineMatrix::translation(3.5, -1.25),
            AffineMatrix::scaling(2.0, 0.5),
            AffineMatrix::new(2.0, 0.0, 0.0, 0.5, 1.0, -2.0),
            AffineMatrix::rotation(37.0),
        ];
        let p = Pt2::new(1.375, -2.5);
        for m in cases {
            assert_eq!(m.transform_point(p), m.transform_point_general(p));
        }
    }

    #[test]
    fn fast_paths_match_general_composition() {
        let kinds = [
            AffineMatrix::identity(),
            AffineMatrix::translation(1.5, -0.5),
            AffineMatrix::scaling(2.0, 4.0),
            AffineMatrix::new(0.5, 0.0, 0.0, 3.0, -1.0, 2.0),
            AffineMatrix::rotation(45.0),
        ];
        for a in kinds {
            for b in kinds {
                assert_eq!(a.then(&b), a.then_general(&b));
            }
        }
    }

    #[test]
    fn append_and_prepend_differ_for_noncommuting_ops() {
        let mut append = AffineMatrix::translation(1.0, 0.0);
        append.rotate(90.0);
        let mut prepend = AffineMatrix::translation(1.0, 0.0);
        prepend.rotate_prepend(90.0);

        let p = Pt2::new(0.0, 0.0);
        // translate then rotate: (1,0) -> (0,1)
        assert!(approx_pt(append.transform_point(p), Pt2::new(0.0, 1.0), 1e-9));
        // rotate then translate: (0,0) -> (1,0)
        assert!(approx_pt(prepend.transform_point(p), Pt2::new(1.0, 0.0), 1e-9));
    }

    #[test]
    fn skew_shears_along_axes() {
        let m = AffineMatrix::skew(45.0, 0.0);
        let p = m.transform_point(Pt2::new(0.0, 1.0));
        // x' = x + y·tan(45°) = 1
        assert!(approx_pt(p, Pt2::new(1.0, 1.0), 1e-9));
    }

    #[test]
    fn singular_matrix_fails_to_invert() {
        let m = AffineMatrix::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0);
        match m.inverse() {
            Err(GeomError::SingularMatrix { det }) => assert!(det.abs() < 1e-12),
            other => panic!("expected SingularMatrix, got {other:?}"),
        }
        assert!(AffineMatrix::scaling(0.0, 1.0).inverse().is_err());
    }

    #[test]
    fn inversion_round_trip_fixed_cases() {
        let cases = [
            AffineMatrix::translation(3.0, -7.0),
            AffineMatrix::scaling(2.0, 0.25),
            AffineMatrix::rotation(63.0),
            AffineMatrix::new(1.0, 0.5, -0.25, 2.0, 3.0, 4.0),
        ];
        let p = Pt2::new(0.7, -1.3);
        for m in cases {
            let inv = m.inverse().unwrap();
            let back = inv.transform_point(m.transform_point(p));
            assert!(approx_pt(back, p, 1e-9), "round trip failed for {m:?}");
        }
    }

    fn arb_matrix() -> impl Strategy<Value = AffineMatrix> {
        let c = -4.0..4.0f64;
        (c.clone(), c.clone(), c.clone(), c.clone(), c.clone(), c)
            .prop_map(|(m11, m12, m21, m22, dx, dy)| AffineMatrix::new(m11, m12, m21, m22, dx, dy))
    }

    proptest! {
        #[test]
        fn composition_is_associative(
            a in arb_matrix(),
            b in arb_matrix(),
            c in arb_matrix(),
            x in -10.0..10.0f64,
            y in -10.0..10.0f64,
        ) {
            let p = Pt2::new(x, y);
            let left = a.then(&b).then(&c).transform_point(p);
            let right = a.then(&b.then(&c)).transform_point(p);
            prop_assert!(approx_pt(left, right, 1e-6));
        }

        #[test]
        fn inversion_round_trip(
            m in arb_matrix().prop_filter("invertible", |m| m.determinant().abs() > 1e-3),
            x in -10.0..10.0f64,
            y in -10.0..10.0f64,
        ) {
            let p = Pt2::new(x, y);
            let back = m.inverse().unwrap().transform_point(m.transform_point(p));
            prop_assert!(approx_pt(back, p, 1e-6));
        }

        #[test]
        fn compose_fast_paths_agree_with_general(a in arb_matrix(), b in arb_matrix()) {
            // Random matrices are almost always General; mix in derived
            // diagonal kinds to exercise every fast-path pairing.
            let variants = [
                AffineMatrix::identity(),
                AffineMatrix::translation(a.dx, a.dy),
                AffineMatrix::scaling(
                    if a.m11 != 0.0 { a.m11 } else { 1.0 },
                    if a.m22 != 0.0 { a.m22 } else { 1.0 },
                ),
                a,
            ];
            for v in variants {
                prop_assert_eq!(v.then(&b), v.then_general(&b));
                prop_assert_eq!(b.then(&v), b.then_general(&v));
            }
        }
    }
}
