//! Quaternion for 3D rotations

use core::ops::{Mul, MulAssign};

use crate::angle::Angle;
use crate::matrix::{Mat3, Mat4};
use crate::scalar::Scalar;
use crate::vector::Vec3;

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat<S> {
    pub x: S,
    pub y: S,
    pub z: S,
    pub w: S,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { x, y, z, w }
    }

    /// Identity quaternion (no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    /// Create from a rotation axis and an angle
    pub fn from_axis_angle(axis: Vec3<S>, angle: Angle<S>) -> Self {
        let half = angle.radians() * S::HALF;
        let (sin, cos) = half.sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Vector part of the quaternion
    #[inline]
    pub fn xyz(self) -> Vec3<S> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn length_squared(self) -> S {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn length(self) -> S {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > S::ZERO {
            Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
        } else {
            Self::identity()
        }
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Inverse
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > S::ZERO {
            let inv = S::ONE / len_sq;
            Self::new(-self.x * inv, -self.y * inv, -self.z * inv, self.w * inv)
        } else {
            Self::identity()
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3<S>) -> Vec3<S> {
        let qv = self.xyz();
        let uv = qv.cross(v);
        let uuv = qv.cross(uv);
        v + (uv * self.w + uuv) * S::TWO
    }

    /// Convert to a 3x3 rotation matrix
    pub fn to_mat3(self) -> Mat3<S> {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat3::from_cols(
            Vec3::new(S::ONE - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, S::ONE - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, S::ONE - (xx + yy)),
        )
    }

    /// Convert to a 4x4 rotation matrix
    pub fn to_mat4(self) -> Mat4<S> {
        self.to_mat3().to_mat4()
    }

    /// Extract a rotation quaternion from a rotation matrix.
    ///
    /// Selects the largest of the four diagonal combinations before taking
    /// a square root, so precision holds up when any single diagonal term
    /// is near zero. Comparisons are strict, so on exact ties the earliest
    /// candidate (w, then x, y, z) wins.
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        let m00 = m.cols[0].x;
        let m10 = m.cols[1].x;
        let m20 = m.cols[2].x;
        let m01 = m.cols[0].y;
        let m11 = m.cols[1].y;
        let m21 = m.cols[2].y;
        let m02 = m.cols[0].z;
        let m12 = m.cols[1].z;
        let m22 = m.cols[2].z;

        let four_x_squared_minus_1 = m00 - m11 - m22;
        let four_y_squared_minus_1 = m11 - m00 - m22;
        let four_z_squared_minus_1 = m22 - m00 - m11;
        let four_w_squared_minus_1 = m00 + m11 + m22;

        let mut index = 0;
        let mut four_max_squared_minus_1 = four_w_squared_minus_1;

        if four_x_squared_minus_1 > four_max_squared_minus_1 {
            index = 1;
            four_max_squared_minus_1 = four_x_squared_minus_1;
        }

        if four_y_squared_minus_1 > four_max_squared_minus_1 {
            index = 2;
            four_max_squared_minus_1 = four_y_squared_minus_1;
        }

        if four_z_squared_minus_1 > four_max_squared_minus_1 {
            index = 3;
            four_max_squared_minus_1 = four_z_squared_minus_1;
        }

        let biggest = (four_max_squared_minus_1 + S::ONE).sqrt() * S::HALF;
        let mul = S::HALF * S::HALF / biggest;

        match index {
            0 => Self::new(
                (m12 - m21) * mul,
                (m20 - m02) * mul,
                (m01 - m10) * mul,
                biggest,
            ),
            1 => Self::new(
                biggest,
                (m01 + m10) * mul,
                (m20 + m02) * mul,
                (m12 - m21) * mul,
            ),
            2 => Self::new(
                (m01 + m10) * mul,
                biggest,
                (m12 + m21) * mul,
                (m20 - m02) * mul,
            ),
            _ => Self::new(
                (m20 + m02) * mul,
                (m12 + m21) * mul,
                biggest,
                (m01 - m10) * mul,
            ),
        }
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<S: Scalar> MulAssign for Quat<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;

    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.rotate(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rotation() {
        let q = Quat::<f32>::identity();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!((q * v - v).length() < 1e-6);
    }

    #[test]
    fn test_rotation_about_y() {
        let q = Quat::from_axis_angle(
            Vec3::<f64>::unit_y(),
            Angle::from_radians(core::f64::consts::FRAC_PI_2),
        );
        let v = Vec3::unit_x();
        let rotated = q * v;
        assert!((rotated - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let q = Quat::from_axis_angle(
            Vec3::new(1.0f64, 2.0, -0.5).normalize(),
            Angle::from_radians(0.75),
        );
        let back = Quat::from_mat3(&q.to_mat3());
        // Double cover: q and -q describe the same rotation
        assert!(q.dot(back).abs() > 1.0 - 1e-12);
    }

    #[test]
    fn test_composition_matches_sequential_rotation() {
        let a = Quat::from_axis_angle(Vec3::<f64>::unit_z(), Angle::from_radians(0.3));
        let b = Quat::from_axis_angle(Vec3::unit_x(), Angle::from_radians(-1.1));
        let v = Vec3::new(0.25, -3.0, 2.0);
        let composed = (a * b) * v;
        let sequential = a * (b * v);
        assert!((composed - sequential).length() < 1e-12);
    }
}
