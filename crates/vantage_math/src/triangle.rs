//! Triangle primitive

use crate::bounds::Bounds3;
use crate::frustum::Plane;
use crate::scalar::Scalar;
use crate::transform::Transform3;
use crate::vector::Vec3;

/// Three ordered vertices.
///
/// Counter-clockwise winding (viewed from the front) gives the outward
/// normal; [`normal`](Self::normal) and the single-sided ray test both
/// depend on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Triangle3<S> {
    pub a: Vec3<S>,
    pub b: Vec3<S>,
    pub c: Vec3<S>,
}

impl<S: Scalar> Triangle3<S> {
    #[inline]
    pub fn new(a: Vec3<S>, b: Vec3<S>, c: Vec3<S>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn points(&self) -> [Vec3<S>; 3] {
        [self.a, self.b, self.c]
    }

    /// Unit normal of the triangle plane, winding-dependent
    #[inline]
    pub fn normal(&self) -> Vec3<S> {
        (self.b - self.a).cross(self.c - self.a).normalize()
    }

    /// Supporting plane through the three vertices
    pub fn plane(&self) -> Plane<S> {
        let normal = self.normal();
        Plane::new(normal, normal.dot(self.a))
    }

    /// Axis-aligned box around the vertices
    pub fn bounds(&self) -> Bounds3<S> {
        Bounds3::from_min_max(
            self.a.min(self.b).min(self.c),
            self.a.max(self.b).max(self.c),
        )
    }

    /// Transform each vertex
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        Self::new(
            transform.apply(self.a),
            transform.apply(self.b),
            transform.apply(self.c),
        )
    }
}
