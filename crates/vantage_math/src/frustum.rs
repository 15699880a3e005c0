//! Plane and view-frustum types for culling

use crate::angle::Angle;
use crate::scalar::Scalar;
use crate::transform::Transform3;
use crate::vector::Vec3;

/// Infinite plane `{p : dot(normal, p) = distance}`.
///
/// The normal is unit length by convention, not enforced; every signed
/// distance formula in the crate assumes it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Plane<S> {
    pub normal: Vec3<S>,
    pub distance: S,
}

impl<S: Scalar> Plane<S> {
    #[inline]
    pub fn new(normal: Vec3<S>, distance: S) -> Self {
        Self { normal, distance }
    }

    /// Signed distance: positive in front of the plane (the normal side),
    /// negative behind.
    #[inline]
    pub fn distance_to(&self, point: Vec3<S>) -> S {
        self.normal.dot(point) - self.distance
    }

    /// Rotate the normal and recompute the distance through a transformed
    /// point known to lie on the plane.
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        let point_on_plane = self.normal * self.distance;
        let normal = transform.rotation * self.normal;
        let distance = normal.dot(transform.apply(point_on_plane));
        Self::new(normal, distance)
    }
}

/// Six inward-facing planes bounding a pyramidal view volume.
///
/// Defined in a right-handed camera space looking down -Z; every plane
/// normal points into the volume.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Frustum<S> {
    pub top: Plane<S>,
    pub bottom: Plane<S>,
    pub left: Plane<S>,
    pub right: Plane<S>,
    pub near: Plane<S>,
    pub far: Plane<S>,
}

impl<S: Scalar> Frustum<S> {
    #[inline]
    pub fn new(
        top: Plane<S>,
        bottom: Plane<S>,
        left: Plane<S>,
        right: Plane<S>,
        near: Plane<S>,
        far: Plane<S>,
    ) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            near,
            far,
        }
    }

    /// Camera-space frustum from horizontal/vertical fields of view and
    /// the near/far clip distances.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < fovx < π`, `0 < fovy < π` and
    /// `0 < z_near < z_far`.
    pub fn from_fov(fovx: Angle<S>, fovy: Angle<S>, z_near: S, z_far: S) -> Self {
        assert!(fovx.radians() > S::ZERO && fovx.radians() < S::PI);
        assert!(fovy.radians() > S::ZERO && fovy.radians() < S::PI);
        assert!(z_near > S::ZERO);
        assert!(z_far > z_near);

        let half_fovy = fovy / S::TWO;
        let half_fovx = fovx / S::TWO;
        let sy = half_fovy.sin();
        let cy = half_fovy.cos();
        let sx = half_fovx.sin();
        let cx = half_fovx.cos();

        Self::new(
            Plane::new(Vec3::new(S::ZERO, -cy, -sy), S::ZERO),
            Plane::new(Vec3::new(S::ZERO, cy, -sy), S::ZERO),
            Plane::new(Vec3::new(cx, S::ZERO, -sx), S::ZERO),
            Plane::new(Vec3::new(-cx, S::ZERO, -sx), S::ZERO),
            Plane::new(Vec3::new(S::ZERO, S::ZERO, -S::ONE), z_near),
            Plane::new(Vec3::new(S::ZERO, S::ZERO, S::ONE), -z_far),
        )
    }

    /// Transform each of the six planes independently
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        Self::new(
            self.top.transform(transform),
            self.bottom.transform(transform),
            self.left.transform(transform),
            self.right.transform(transform),
            self.near.transform(transform),
            self.far.transform(transform),
        )
    }
}
