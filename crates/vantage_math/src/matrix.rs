//! Column-major matrix types

use core::ops::{Mul, MulAssign};

use crate::scalar::Scalar;
use crate::vector::{Vec3, Vec4};

/// 3x3 matrix (column-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3<S> {
    pub cols: [Vec3<S>; 3],
}

impl<S: Scalar> Mat3<S> {
    #[inline]
    pub fn from_cols(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(Vec3::unit_x(), Vec3::unit_y(), Vec3::unit_z())
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_cols(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    /// Diagonal matrix, e.g. a non-uniform scale
    #[inline]
    pub fn from_diagonal(d: Vec3<S>) -> Self {
        Self::from_cols(
            Vec3::new(d.x, S::ZERO, S::ZERO),
            Vec3::new(S::ZERO, d.y, S::ZERO),
            Vec3::new(S::ZERO, S::ZERO, d.z),
        )
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec3<S> {
        Vec3::new(self.cols[0][index], self.cols[1][index], self.cols[2][index])
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    pub fn determinant(&self) -> S {
        let [c0, c1, c2] = self.cols;
        c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
            + c2.x * (c0.y * c1.z - c1.y * c0.z)
    }

    /// Inverse by the adjugate / determinant formula.
    ///
    /// The determinant is not checked: inverting a singular or
    /// near-singular matrix produces non-finite components. Callers that
    /// cannot guarantee invertibility should check `determinant()` first.
    pub fn inverse(&self) -> Self {
        let m00 = self.cols[0].x;
        let m10 = self.cols[1].x;
        let m20 = self.cols[2].x;
        let m01 = self.cols[0].y;
        let m11 = self.cols[1].y;
        let m21 = self.cols[2].y;
        let m02 = self.cols[0].z;
        let m12 = self.cols[1].z;
        let m22 = self.cols[2].z;

        let a = m00 * (m11 * m22 - m21 * m12);
        let b = -(m10 * (m01 * m22 - m21 * m02));
        let c = m20 * (m01 * m12 - m11 * m02);

        let inv_det = S::ONE / (a + b + c);

        Self::from_cols(
            Vec3::new(
                (m11 * m22 - m21 * m12) * inv_det,
                -(m01 * m22 - m21 * m02) * inv_det,
                (m01 * m12 - m11 * m02) * inv_det,
            ),
            Vec3::new(
                -(m10 * m22 - m20 * m12) * inv_det,
                (m00 * m22 - m20 * m02) * inv_det,
                -(m00 * m12 - m10 * m02) * inv_det,
            ),
            Vec3::new(
                (m10 * m21 - m20 * m11) * inv_det,
                -(m00 * m21 - m20 * m01) * inv_det,
                (m00 * m11 - m10 * m01) * inv_det,
            ),
        )
    }

    #[inline]
    pub fn to_mat4(&self) -> Mat4<S> {
        Mat4::from_cols(
            self.cols[0].extend(S::ZERO),
            self.cols[1].extend(S::ZERO),
            self.cols[2].extend(S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ZERO, S::ONE),
        )
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;

    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z
    }
}

/// 4x4 matrix (column-major) - the homogeneous transformation matrix
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4<S> {
    pub cols: [Vec4<S>; 4],
}

impl<S: Scalar> Mat4<S> {
    #[inline]
    pub fn from_cols(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_cols(
            Vec4::new(S::ONE, S::ZERO, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, S::ONE, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ONE, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ZERO, S::ONE),
        )
    }

    #[inline]
    pub fn from_translation(translation: Vec3<S>) -> Self {
        let mut m = Self::identity();
        m.cols[3] = translation.extend(S::ONE);
        m
    }

    #[inline]
    pub fn from_scale(scale: Vec3<S>) -> Self {
        Self::from_cols(
            Vec4::new(scale.x, S::ZERO, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, scale.y, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, scale.z, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ZERO, S::ONE),
        )
    }

    /// Affine matrix from a 3x3 linear part and a translation column
    #[inline]
    pub fn from_mat3_translation(linear: Mat3<S>, translation: Vec3<S>) -> Self {
        Self::from_cols(
            linear.cols[0].extend(S::ZERO),
            linear.cols[1].extend(S::ZERO),
            linear.cols[2].extend(S::ZERO),
            translation.extend(S::ONE),
        )
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vec4<S> {
        let pick = |col: Vec4<S>| match index {
            0 => col.x,
            1 => col.y,
            2 => col.z,
            _ => col.w,
        };
        Vec4::new(
            pick(self.cols[0]),
            pick(self.cols[1]),
            pick(self.cols[2]),
            pick(self.cols[3]),
        )
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Get the translation component
    #[inline]
    pub fn translation(&self) -> Vec3<S> {
        self.cols[3].truncate()
    }

    /// Transform a point (w = 1, with perspective divide)
    #[inline]
    pub fn transform_point(&self, point: Vec3<S>) -> Vec3<S> {
        let v = *self * point.extend(S::ONE);
        v.truncate() / v.w
    }

    /// Transform a vector (w = 0)
    #[inline]
    pub fn transform_vector(&self, vector: Vec3<S>) -> Vec3<S> {
        (*self * vector.extend(S::ZERO)).truncate()
    }

    pub fn determinant(&self) -> S {
        let a = self.cols[0];
        let b = self.cols[1];
        let c = self.cols[2];
        let d = self.cols[3];

        let s0 = a.x * b.y - b.x * a.y;
        let s1 = a.x * b.z - b.x * a.z;
        let s2 = a.x * b.w - b.x * a.w;
        let s3 = a.y * b.z - b.y * a.z;
        let s4 = a.y * b.w - b.y * a.w;
        let s5 = a.z * b.w - b.z * a.w;

        let c5 = c.z * d.w - d.z * c.w;
        let c4 = c.y * d.w - d.y * c.w;
        let c3 = c.y * d.z - d.y * c.z;
        let c2 = c.x * d.w - d.x * c.w;
        let c1 = c.x * d.z - d.x * c.z;
        let c0 = c.x * d.y - d.x * c.y;

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    /// Inverse by block cofactor expansion.
    ///
    /// The 2x2 sub-determinants are gathered into four-lane vectors and
    /// combined with alternating sign patterns; the determinant falls out
    /// as `dot(col0, inverse_row0)`. Like [`Mat3::inverse`], a near-zero
    /// determinant is not guarded against.
    pub fn inverse(&self) -> Self {
        let m00 = self.cols[0].x;
        let m10 = self.cols[1].x;
        let m20 = self.cols[2].x;
        let m30 = self.cols[3].x;
        let m01 = self.cols[0].y;
        let m11 = self.cols[1].y;
        let m21 = self.cols[2].y;
        let m31 = self.cols[3].y;
        let m02 = self.cols[0].z;
        let m12 = self.cols[1].z;
        let m22 = self.cols[2].z;
        let m32 = self.cols[3].z;
        let m03 = self.cols[0].w;
        let m13 = self.cols[1].w;
        let m23 = self.cols[2].w;
        let m33 = self.cols[3].w;

        let c00 = m22 * m33 - m32 * m23;
        let c02 = m12 * m33 - m32 * m13;
        let c03 = m12 * m23 - m22 * m13;

        let c04 = m21 * m33 - m31 * m23;
        let c06 = m11 * m33 - m31 * m13;
        let c07 = m11 * m23 - m21 * m13;

        let c08 = m21 * m32 - m31 * m22;
        let c10 = m11 * m32 - m31 * m12;
        let c11 = m11 * m22 - m21 * m12;

        let c12 = m20 * m33 - m30 * m23;
        let c14 = m10 * m33 - m30 * m13;
        let c15 = m10 * m23 - m20 * m13;

        let c16 = m20 * m32 - m30 * m22;
        let c18 = m10 * m32 - m30 * m12;
        let c19 = m10 * m22 - m20 * m12;

        let c20 = m20 * m31 - m30 * m21;
        let c22 = m10 * m31 - m30 * m11;
        let c23 = m10 * m21 - m20 * m11;

        let f0 = Vec4::new(c00, c00, c02, c03);
        let f1 = Vec4::new(c04, c04, c06, c07);
        let f2 = Vec4::new(c08, c08, c10, c11);
        let f3 = Vec4::new(c12, c12, c14, c15);
        let f4 = Vec4::new(c16, c16, c18, c19);
        let f5 = Vec4::new(c20, c20, c22, c23);

        let v0 = Vec4::new(m10, m00, m00, m00);
        let v1 = Vec4::new(m11, m01, m01, m01);
        let v2 = Vec4::new(m12, m02, m02, m02);
        let v3 = Vec4::new(m13, m03, m03, m03);

        let i0 = v1 * f0 - v2 * f1 + v3 * f2;
        let i1 = v0 * f0 - v2 * f3 + v3 * f4;
        let i2 = v0 * f1 - v1 * f3 + v3 * f5;
        let i3 = v0 * f2 - v1 * f4 + v2 * f5;

        let sign_a = Vec4::new(S::ONE, -S::ONE, S::ONE, -S::ONE);
        let sign_b = Vec4::new(-S::ONE, S::ONE, -S::ONE, S::ONE);

        let inv = Self::from_cols(i0 * sign_a, i1 * sign_b, i2 * sign_a, i3 * sign_b);

        let det = self.cols[0].dot(inv.row(0));
        let inv_det = S::ONE / det;

        Self::from_cols(
            inv.cols[0] * inv_det,
            inv.cols[1] * inv_det,
            inv.cols[2] * inv_det,
            inv.cols[3] * inv_det,
        )
    }
}

impl<S: Scalar> Default for Mat4<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mul for Mat4<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;

    #[inline]
    fn mul(self, rhs: Vec4<S>) -> Vec4<S> {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl<S: Scalar> MulAssign for Mat4<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_approx(a: &Mat4<f64>, b: &Mat4<f64>, epsilon: f64) {
        for col in 0..4 {
            let d = a.cols[col] - b.cols[col];
            assert!(
                d.length() < epsilon,
                "column {} differs: {:?} vs {:?}",
                col,
                a.cols[col],
                b.cols[col]
            );
        }
    }

    #[test]
    fn test_mat4_identity() {
        let m = Mat4::<f32>::identity();
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_mat4_translation_point() {
        let m = Mat4::from_translation(Vec3::new(1.0f32, 2.0, 3.0));
        let result = m.transform_point(Vec3::zero());
        assert!((result - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }

    #[test]
    fn test_mat4_inverse_roundtrip() {
        let m = Mat4::from_translation(Vec3::new(1.0f64, -2.0, 3.0))
            * Mat4::from_scale(Vec3::new(2.0, 4.0, 0.5));
        assert_mat4_approx(&(m * m.inverse()), &Mat4::identity(), 1e-12);
        assert_mat4_approx(&m.inverse().inverse(), &m, 1e-12);
    }

    #[test]
    fn test_mat3_inverse_roundtrip() {
        let m = Mat3::from_cols(
            Vec3::new(1.0f64, 0.0, 5.0),
            Vec3::new(2.0, 1.0, 6.0),
            Vec3::new(3.0, 4.0, 0.0),
        );
        let prod = m * m.inverse();
        let id = Mat3::<f64>::identity();
        for col in 0..3 {
            assert!((prod.cols[col] - id.cols[col]).length() < 1e-12);
        }
    }

    #[test]
    fn test_mat4_determinant() {
        assert!((Mat4::<f64>::identity().determinant() - 1.0).abs() < 1e-12);
        let m = Mat4::from_translation(Vec3::new(7.0f64, -3.0, 2.0))
            * Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert!((m.determinant() - 24.0).abs() < 1e-12);
    }

    #[test]
    fn test_mat3_determinant() {
        let id = Mat3::<f32>::identity();
        assert!((id.determinant() - 1.0).abs() < 1e-6);
        let scale = Mat3::from_diagonal(Vec3::new(2.0f32, 3.0, 4.0));
        assert!((scale.determinant() - 24.0).abs() < 1e-5);
    }
}
