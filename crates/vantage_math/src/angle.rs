//! Self-normalizing angle wrapper

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::scalar::Scalar;

/// An angle in radians, kept within `[-2π, 2π)`.
///
/// Every constructor and mutation re-normalizes, so two full turns in
/// either direction collapse back into range. The raw value is only
/// reachable through [`radians`](Self::radians), which keeps the invariant
/// airtight.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Angle<S> {
    radians: S,
}

impl<S: Scalar> Angle<S> {
    #[inline]
    pub fn zero() -> Self {
        Self { radians: S::ZERO }
    }

    pub fn from_radians(radians: S) -> Self {
        Self {
            radians: Self::normalized(radians),
        }
    }

    pub fn from_degrees(degrees: S) -> Self {
        Self::from_radians(degrees * S::DEG_TO_RAD)
    }

    #[inline]
    pub fn radians(self) -> S {
        self.radians
    }

    #[inline]
    pub fn degrees(self) -> S {
        self.radians * S::RAD_TO_DEG
    }

    pub fn set_radians(&mut self, radians: S) {
        self.radians = Self::normalized(radians);
    }

    fn normalized(radians: S) -> S {
        let max = S::TAU;
        let min = -S::TAU;
        let mut value = radians;
        while value >= max {
            value -= max;
        }
        while value < min {
            value += max;
        }
        value
    }

    #[inline]
    pub fn sin(self) -> S {
        self.radians.sin()
    }

    #[inline]
    pub fn cos(self) -> S {
        self.radians.cos()
    }

    #[inline]
    pub fn tan(self) -> S {
        self.radians.tan()
    }
}

impl<S: Scalar> Add for Angle<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl<S: Scalar> Sub for Angle<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl<S: Scalar> Mul<S> for Angle<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl<S: Scalar> Div<S> for Angle<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

impl<S: Scalar> Neg for Angle<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl<S: Scalar> AddAssign for Angle<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Angle<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{PI, TAU};

    #[test]
    fn test_normalizes_above_two_turns() {
        let a = Angle::from_radians(TAU + 1.0);
        assert!((a.radians() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalizes_below_negative_two_turns() {
        let a = Angle::from_radians(-TAU - 1.0);
        assert!((a.radians() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_full_turn_is_kept() {
        // -2π is inside the range, +2π is not
        let neg = Angle::from_radians(-TAU);
        assert!((neg.radians() + TAU).abs() < 1e-12);
        let pos = Angle::from_radians(TAU);
        assert!(pos.radians().abs() < 1e-12);
    }

    #[test]
    fn test_set_radians_renormalizes() {
        let mut a = Angle::<f32>::zero();
        a.set_radians(3.0 * core::f32::consts::TAU);
        assert!(a.radians().abs() < 1e-5);
    }

    #[test]
    fn test_degree_roundtrip() {
        let a = Angle::<f64>::from_degrees(90.0);
        assert!((a.radians() - PI / 2.0).abs() < 1e-12);
        assert!((a.degrees() - 90.0).abs() < 1e-10);
    }
}
