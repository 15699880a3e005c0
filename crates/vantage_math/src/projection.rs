//! Perspective projection parameters

use crate::angle::Angle;
use crate::frustum::Frustum;
use crate::matrix::Mat4;
use crate::scalar::Scalar;
use crate::vector::Vec4;

/// Right-handed perspective projection, `gluPerspective`-style.
///
/// Stores the vertical field of view; the horizontal one is derived
/// through the aspect ratio (width / height).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct PerspectiveProjection<S> {
    fovy: Angle<S>,
    aspect_ratio: S,
    z_near: S,
    z_far: S,
}

impl<S: Scalar> PerspectiveProjection<S> {
    /// # Panics
    ///
    /// Panics unless `0 < fovy <= π - ε`, `aspect_ratio > 0` and
    /// `0 < z_near < z_far`.
    pub fn new(fovy: Angle<S>, aspect_ratio: S, z_near: S, z_far: S) -> Self {
        assert!(fovy.radians() > S::ZERO);
        assert!(fovy.radians() <= S::PI - S::EPSILON);
        assert!(aspect_ratio > S::ZERO);
        assert!(z_near > S::ZERO);
        assert!(z_far > z_near);

        Self {
            fovy,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Construct from the horizontal field of view instead
    pub fn from_fovx(fovx: Angle<S>, aspect_ratio: S, z_near: S, z_far: S) -> Self {
        let half_tan = (fovx / S::TWO).tan();
        let fovy = Angle::from_radians((half_tan / aspect_ratio).atan() * S::TWO);
        Self::new(fovy, aspect_ratio, z_near, z_far)
    }

    #[inline]
    pub fn fovy(&self) -> Angle<S> {
        self.fovy
    }

    /// Horizontal field of view: `2 * atan(tan(fovy / 2) * aspect)`
    pub fn fovx(&self) -> Angle<S> {
        let half_tan = (self.fovy / S::TWO).tan();
        Angle::from_radians((half_tan * self.aspect_ratio).atan() * S::TWO)
    }

    #[inline]
    pub fn aspect_ratio(&self) -> S {
        self.aspect_ratio
    }

    #[inline]
    pub fn z_near(&self) -> S {
        self.z_near
    }

    #[inline]
    pub fn z_far(&self) -> S {
        self.z_far
    }

    /// OpenGL-style right-handed projection matrix.
    ///
    /// ```text
    /// ( f/aspect  0          0                0            )
    /// ( 0         f          0                0            )
    /// ( 0         0  (zf+zn)/(zn-zf)  2*zf*zn/(zn-zf)      )
    /// ( 0         0         -1                0            )
    /// ```
    /// with `f = cot(fovy / 2)`.
    pub fn matrix(&self) -> Mat4<S> {
        let half = self.fovy / S::TWO;
        let f = half.cos() / half.sin();
        let depth = self.z_near - self.z_far;

        Mat4::from_cols(
            Vec4::new(f / self.aspect_ratio, S::ZERO, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, f, S::ZERO, S::ZERO),
            Vec4::new(
                S::ZERO,
                S::ZERO,
                (self.z_far + self.z_near) / depth,
                -S::ONE,
            ),
            Vec4::new(
                S::ZERO,
                S::ZERO,
                S::TWO * self.z_far * self.z_near / depth,
                S::ZERO,
            ),
        )
    }

    /// Camera-space view frustum for these parameters
    pub fn frustum(&self) -> Frustum<S> {
        Frustum::from_fov(self.fovx(), self.fovy, self.z_near, self.z_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vec3;
    use core::f64::consts::FRAC_PI_2;

    fn square_projection() -> PerspectiveProjection<f64> {
        PerspectiveProjection::new(Angle::from_radians(FRAC_PI_2), 1.0, 1.0, 100.0)
    }

    #[test]
    fn test_fovx_equals_fovy_for_square_aspect() {
        let p = square_projection();
        assert!((p.fovx().radians() - p.fovy().radians()).abs() < 1e-12);
    }

    #[test]
    fn test_fovx_roundtrip_through_ctor() {
        let p = PerspectiveProjection::new(Angle::from_radians(1.1), 1.6, 0.5, 50.0);
        let q = PerspectiveProjection::from_fovx(p.fovx(), 1.6, 0.5, 50.0);
        assert!((q.fovy().radians() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_maps_clip_planes_to_unit_depth() {
        let p = square_projection();
        let m = p.matrix();

        // Points on the near/far planes map to z/w = -1 and +1
        let near = m * Vec3::new(0.0, 0.0, -1.0).extend(1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-12);
        let far = m * Vec3::new(0.0, 0.0, -100.0).extend(1.0);
        assert!((far.z / far.w - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_w_is_negated_view_z() {
        let p = square_projection();
        let m = p.matrix();
        let clip = m * Vec3::new(0.3, -0.2, -10.0).extend(1.0);
        assert!((clip.w - 10.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic]
    fn test_zero_fov_rejected() {
        let _ = PerspectiveProjection::<f32>::new(Angle::zero(), 1.0, 0.1, 10.0);
    }

    #[test]
    #[should_panic]
    fn test_negative_aspect_rejected() {
        let _ = PerspectiveProjection::<f64>::new(Angle::from_radians(1.0), -1.0, 0.1, 10.0);
    }

    #[test]
    fn test_frustum_agrees_with_projection_volume() {
        let p = square_projection();
        let f = p.frustum();
        // A point comfortably inside the view volume
        let inside = Vec3::new(0.0, 0.0, -10.0);
        for plane in [f.top, f.bottom, f.left, f.right, f.near, f.far] {
            assert!(plane.distance_to(inside) > 0.0);
        }
    }
}
