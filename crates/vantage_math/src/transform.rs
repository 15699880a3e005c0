//! Translation / rotation / scale transform

use core::ops::Mul;

use crate::matrix::{Mat3, Mat4};
use crate::quaternion::Quat;
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Affine transform stored as separate translation, rotation, and
/// non-uniform scale components.
///
/// A point is mapped as `rotate(scale * p) + translation`: scale first,
/// then rotation, then translation.
///
/// Keeping the three components separate instead of a single matrix makes
/// composition and inversion cheap, at a cost: when both operands of a
/// composition carry rotation together with non-uniform scale, the result
/// is not the same map as the product of their matrices (the scale axes
/// stay aligned to each operand's local frame). Uniform scale, or scale
/// applied only at the leaves of a hierarchy, composes exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Transform3<S> {
    pub translation: Vec3<S>,
    pub rotation: Quat<S>,
    pub scale: Vec3<S>,
}

impl<S: Scalar> Transform3<S> {
    #[inline]
    pub fn new(translation: Vec3<S>, rotation: Quat<S>, scale: Vec3<S>) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Quat::identity(), Vec3::one())
    }

    #[inline]
    pub fn from_translation(translation: Vec3<S>) -> Self {
        Self::new(translation, Quat::identity(), Vec3::one())
    }

    #[inline]
    pub fn from_rotation(rotation: Quat<S>) -> Self {
        Self::new(Vec3::zero(), rotation, Vec3::one())
    }

    #[inline]
    pub fn from_scale(scale: Vec3<S>) -> Self {
        Self::new(Vec3::zero(), Quat::identity(), scale)
    }

    #[inline]
    pub fn has_translation(&self) -> bool {
        self.translation != Vec3::zero()
    }

    #[inline]
    pub fn has_rotation(&self) -> bool {
        self.rotation != Quat::identity()
    }

    #[inline]
    pub fn has_scale(&self) -> bool {
        self.scale != Vec3::one()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        !self.has_translation() && !self.has_rotation() && !self.has_scale()
    }

    /// Componentwise inverse: `(-t, conjugate(r), 1/s)`.
    ///
    /// This inverts each component in isolation, which undoes the original
    /// transform only while the components commute (any subset of pure
    /// translation, pure rotation, or uniform scale). For the exact inverse
    /// of a full transform use [`inverse_matrix`](Self::inverse_matrix).
    #[inline]
    pub fn inverse(&self) -> Self {
        Self::new(
            -self.translation,
            self.rotation.conjugate(),
            Vec3::one() / self.scale,
        )
    }

    /// Homogeneous matrix: `[rotation * diag(scale) | translation]`
    pub fn matrix(&self) -> Mat4<S> {
        let rs = self.rotation.to_mat3() * Mat3::from_diagonal(self.scale);
        Mat4::from_mat3_translation(rs, self.translation)
    }

    /// Exact inverse matrix: `diag(1/scale) * rotation^T` applied after
    /// undoing the translation. Valid because rotation matrices are
    /// orthogonal (transpose = inverse).
    pub fn inverse_matrix(&self) -> Mat4<S> {
        let sri = Mat3::from_diagonal(Vec3::one() / self.scale) * self.rotation.to_mat3().transpose();
        let ti = sri * -self.translation;
        Mat4::from_mat3_translation(sri, ti)
    }

    /// Transform a point: scale, then rotate, then translate
    #[inline]
    pub fn apply(&self, point: Vec3<S>) -> Vec3<S> {
        self.rotation * (point * self.scale) + self.translation
    }

    /// Transform a direction: rotation only, no translation and no scale
    #[inline]
    pub fn apply_direction(&self, direction: Vec3<S>) -> Vec3<S> {
        self.rotation * direction
    }
}

impl<S: Scalar> Default for Transform3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composition: `b` is applied first, then `a`, so
/// `(a * b).apply(p) == a.apply(b.apply(p))` whenever `a`'s scale is
/// uniform (see the type-level caveat; the composed translation scales
/// after rotating, so non-uniform scale on `a` diverges from sequential
/// application).
impl<S: Scalar> Mul for Transform3<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            (self.rotation * rhs.translation) * self.scale + self.translation,
            self.rotation * rhs.rotation,
            self.scale * rhs.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Angle;

    #[test]
    fn test_identity_apply() {
        let t = Transform3::<f32>::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!((t.apply(p) - p).length() < 1e-6);
    }

    #[test]
    fn test_apply_order_scale_rotate_translate() {
        // Scale (2,1,1), rotate 90 deg about z, translate +x
        let t = Transform3::new(
            Vec3::new(1.0f64, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::unit_z(), Angle::from_radians(core::f64::consts::FRAC_PI_2)),
            Vec3::new(2.0, 1.0, 1.0),
        );
        // (1,0,0) -> scaled (2,0,0) -> rotated (0,2,0) -> translated (1,2,0)
        let p = t.apply(Vec3::unit_x());
        assert!((p - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_compose_matches_sequential_apply() {
        let a = Transform3::new(
            Vec3::new(1.0f64, -2.0, 0.5),
            Quat::from_axis_angle(Vec3::new(0.0, 1.0, 1.0).normalize(), Angle::from_radians(0.8)),
            Vec3::splat(3.0),
        );
        let b = Transform3::new(
            Vec3::new(-4.0, 0.0, 2.0),
            Quat::from_axis_angle(Vec3::unit_x(), Angle::from_radians(-0.3)),
            Vec3::new(0.5, 2.0, 1.5),
        );
        let p = Vec3::new(0.7, 1.1, -2.2);
        let composed = (a * b).apply(p);
        let sequential = a.apply(b.apply(p));
        assert!((composed - sequential).length() < 1e-12);
    }

    #[test]
    fn test_matrix_agrees_with_apply() {
        let t = Transform3::new(
            Vec3::new(2.0f64, -1.0, 4.0),
            Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0).normalize(), Angle::from_radians(1.2)),
            Vec3::new(2.0, 0.5, 1.0),
        );
        let p = Vec3::new(-3.0, 0.25, 1.5);
        let via_matrix = t.matrix().transform_point(p);
        assert!((via_matrix - t.apply(p)).length() < 1e-12);
    }

    #[test]
    fn test_inverse_matrix_roundtrip() {
        let t = Transform3::new(
            Vec3::new(2.0f64, -1.0, 4.0),
            Quat::from_axis_angle(Vec3::new(1.0, 0.0, 1.0).normalize(), Angle::from_radians(-0.9)),
            Vec3::new(2.0, 3.0, 0.25),
        );
        let p = Vec3::new(5.0, -2.0, 0.5);
        let back = t.inverse_matrix().transform_point(t.apply(p));
        assert!((back - p).length() < 1e-12);
    }

    #[test]
    fn test_componentwise_inverse_for_commuting_components() {
        let t = Transform3::<f64>::from_scale(Vec3::new(2.0, 4.0, 8.0));
        let p = Vec3::new(1.0, 1.0, 1.0);
        let back = t.inverse().apply(t.apply(p));
        assert!((back - p).length() < 1e-12);
    }
}
