//! 3D ray for picking and collision queries

use crate::scalar::Scalar;
use crate::transform::Transform3;
use crate::vector::Vec3;

/// Ray from an origin along a direction.
///
/// The direction is stored as given and never normalized; parametric
/// distances are in units of the direction's length, so callers wanting
/// world-unit distances must normalize the direction themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Ray3<S> {
    pub origin: Vec3<S>,
    pub direction: Vec3<S>,
}

impl<S: Scalar> Ray3<S> {
    #[inline]
    pub fn new(origin: Vec3<S>, direction: Vec3<S>) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray
    #[inline]
    pub fn at(&self, t: S) -> Vec3<S> {
        self.origin + self.direction * t
    }

    /// Transform the origin as a point and the direction by rotation only.
    ///
    /// The direction is deliberately not rescaled by the transform's scale,
    /// so parametric distances along the transformed ray do not account
    /// for it.
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        Self::new(
            transform.apply(self.origin),
            transform.rotation * self.direction,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Angle;
    use crate::quaternion::Quat;

    #[test]
    fn test_at() {
        let ray = Ray3::new(Vec3::new(1.0f64, 0.0, 0.0), Vec3::unit_z());
        assert_eq!(ray.at(5.0), Vec3::new(1.0, 0.0, 5.0));
    }

    #[test]
    fn test_direction_not_normalized() {
        let ray = Ray3::new(Vec3::<f32>::zero(), Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(ray.direction.length(), 10.0);
    }

    #[test]
    fn test_transform_ignores_scale_on_direction() {
        let t = Transform3::new(
            Vec3::new(0.0f64, 1.0, 0.0),
            Quat::from_axis_angle(Vec3::unit_z(), Angle::from_radians(core::f64::consts::FRAC_PI_2)),
            Vec3::splat(5.0),
        );
        let ray = Ray3::new(Vec3::zero(), Vec3::unit_x());
        let moved = ray.transform(&t);
        // Origin picks up the full transform, direction only the rotation
        assert!((moved.origin - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-12);
        assert!((moved.direction - Vec3::unit_y()).length() < 1e-12);
        assert!((moved.direction.length() - 1.0).abs() < 1e-12);
    }
}
