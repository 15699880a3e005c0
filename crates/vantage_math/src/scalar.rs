//! Scalar abstraction over the supported floating point types

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric capability required by every type in this crate.
///
/// A single trait bound replaces a hierarchy of per-capability traits:
/// everything generic in the library is written against `Scalar`, so adding
/// a new scalar representation (e.g. a fixed-point type) is a localized
/// change to one impl block.
///
/// `EPSILON` is the degeneracy threshold used by the epsilon-gated
/// algorithms (slab-method ray/box, quaternion branch select), not the
/// machine epsilon of the type.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const TAU: Self;
    /// Most negative finite value.
    const MIN: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Degeneracy threshold for epsilon-gated branches.
    const EPSILON: Self;
    const DEG_TO_RAD: Self;
    const RAD_TO_DEG: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $pi:expr, $tau:expr, $eps:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = $pi;
            const TAU: Self = $tau;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const EPSILON: Self = $eps;
            const DEG_TO_RAD: Self = $pi / 180.0;
            const RAD_TO_DEG: Self = 180.0 / $pi;

            #[inline]
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$t>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$t>::cos(self)
            }

            #[inline]
            fn tan(self) -> Self {
                <$t>::tan(self)
            }

            #[inline]
            fn acos(self) -> Self {
                <$t>::acos(self)
            }

            #[inline]
            fn atan(self) -> Self {
                <$t>::atan(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                <$t>::sin_cos(self)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$t>::min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }
        }
    };
}

impl_scalar!(f32, core::f32::consts::PI, core::f32::consts::TAU, 1e-6);
impl_scalar!(f64, core::f64::consts::PI, core::f64::consts::TAU, 1e-15);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_per_type() {
        assert_eq!(<f32 as Scalar>::EPSILON, 1e-6);
        assert_eq!(<f64 as Scalar>::EPSILON, 1e-15);
    }

    #[test]
    fn test_degree_conversion_constants() {
        assert!((f64::DEG_TO_RAD * 180.0 - core::f64::consts::PI).abs() < 1e-12);
        assert!((f32::RAD_TO_DEG * core::f32::consts::PI - 180.0).abs() < 1e-4);
    }
}
