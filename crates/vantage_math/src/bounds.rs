//! Bounding volumes for spatial queries and culling

use crate::scalar::Scalar;
use crate::transform::Transform3;
use crate::vector::{Vec2, Vec3};

/// Axis-aligned bounding box stored as center + half-extents.
///
/// A `Bounds3` is always a genuine box: the extents are non-negative and a
/// zero-extent box is a point, not an "empty" marker. Operations that can
/// come up empty (`from_points` on no points, `intersection` of disjoint
/// boxes) return `Option` instead of a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Bounds3<S> {
    pub center: Vec3<S>,
    pub extents: Vec3<S>,
}

impl<S: Scalar> Bounds3<S> {
    /// Create from center and half-extents.
    ///
    /// # Panics
    ///
    /// Panics if any component of `extents` is negative.
    pub fn new(center: Vec3<S>, extents: Vec3<S>) -> Self {
        assert!(
            extents.x >= S::ZERO && extents.y >= S::ZERO && extents.z >= S::ZERO,
            "Bounds3 extents must be non-negative"
        );
        Self { center, extents }
    }

    /// Create from extreme corners.
    ///
    /// # Panics
    ///
    /// Panics if `minimum` exceeds `maximum` on any axis.
    pub fn from_min_max(minimum: Vec3<S>, maximum: Vec3<S>) -> Self {
        assert!(
            minimum.x <= maximum.x && minimum.y <= maximum.y && minimum.z <= maximum.z,
            "Bounds3 minimum must not exceed maximum"
        );
        let center = (maximum + minimum) * S::HALF;
        let extents = (maximum - minimum) * S::HALF;
        Self { center, extents }
    }

    /// Smallest box containing all of `points`, or `None` for an empty
    /// slice.
    pub fn from_points(points: &[Vec3<S>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut minimum = Vec3::splat(S::MAX);
        let mut maximum = Vec3::splat(S::MIN);

        for &point in points {
            minimum = minimum.min(point);
            maximum = maximum.max(point);
        }

        Some(Self::from_min_max(minimum, maximum))
    }

    #[inline]
    pub fn minimum(&self) -> Vec3<S> {
        self.center - self.extents
    }

    #[inline]
    pub fn maximum(&self) -> Vec3<S> {
        self.center + self.extents
    }

    /// Smallest box containing both operands
    pub fn union(&self, other: &Self) -> Self {
        Self::from_min_max(
            self.minimum().min(other.minimum()),
            self.maximum().max(other.maximum()),
        )
    }

    /// Overlap of two boxes, or `None` if they are disjoint.
    ///
    /// Boxes that merely touch produce a degenerate (zero-extent) box on
    /// the touching axis rather than `None`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let a_min = self.minimum();
        let a_max = self.maximum();
        let b_min = other.minimum();
        let b_max = other.maximum();

        let overlaps = a_min.x <= b_max.x
            && b_min.x <= a_max.x
            && a_min.y <= b_max.y
            && b_min.y <= a_max.y
            && a_min.z <= b_max.z
            && b_min.z <= a_max.z;

        if overlaps {
            Some(Self::from_min_max(a_min.max(b_min), a_max.min(b_max)))
        } else {
            None
        }
    }

    /// The 8 corner points, enumerated by a fixed sign pattern.
    ///
    /// The ordering is stable but not a winding order; treat it as opaque.
    pub fn corners(&self) -> [Vec3<S>; 8] {
        let signs = [
            Vec3::new(S::ONE, S::ONE, S::ONE),
            Vec3::new(-S::ONE, S::ONE, S::ONE),
            Vec3::new(S::ONE, -S::ONE, S::ONE),
            Vec3::new(S::ONE, S::ONE, -S::ONE),
            Vec3::new(-S::ONE, -S::ONE, S::ONE),
            Vec3::new(S::ONE, -S::ONE, -S::ONE),
            Vec3::new(-S::ONE, S::ONE, -S::ONE),
            Vec3::new(-S::ONE, -S::ONE, -S::ONE),
        ];

        signs.map(|sign| self.center + self.extents * sign)
    }

    /// Strict interior test: points exactly on a face are NOT contained.
    pub fn contains(&self, point: Vec3<S>) -> bool {
        let minimum = self.minimum();
        let maximum = self.maximum();
        point.x > minimum.x
            && point.x < maximum.x
            && point.y > minimum.y
            && point.y < maximum.y
            && point.z > minimum.z
            && point.z < maximum.z
    }

    /// Squared distance from `point` to the box surface; zero inside.
    pub fn distance_squared_to_point(&self, point: Vec3<S>) -> S {
        let minimum = self.minimum();
        let maximum = self.maximum();
        let mut distance_squared = S::ZERO;

        for index in 0..3 {
            let p = point[index];
            let b_min = minimum[index];
            let b_max = maximum[index];

            if p < b_min {
                let delta = b_min - p;
                distance_squared += delta * delta;
            }

            if p > b_max {
                let delta = p - b_max;
                distance_squared += delta * delta;
            }
        }

        distance_squared
    }

    /// Axis-aligned box around the transformed corners.
    ///
    /// Refitting the 8 corners is exact under rotation but conservative
    /// (over-covering) when rotation combines with non-uniform scale.
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        let corners = self.corners();
        let mut minimum = transform.apply(corners[0]);
        let mut maximum = minimum;

        for &corner in &corners[1..] {
            let point = transform.apply(corner);
            minimum = minimum.min(point);
            maximum = maximum.max(point);
        }

        Self::from_min_max(minimum, maximum)
    }
}

/// 2D axis-aligned bounding rectangle, center + half-extents.
///
/// Same construction contract as [`Bounds3`], two dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Bounds2<S> {
    pub center: Vec2<S>,
    pub extents: Vec2<S>,
}

impl<S: Scalar> Bounds2<S> {
    /// # Panics
    ///
    /// Panics if any component of `extents` is negative.
    pub fn new(center: Vec2<S>, extents: Vec2<S>) -> Self {
        assert!(
            extents.x >= S::ZERO && extents.y >= S::ZERO,
            "Bounds2 extents must be non-negative"
        );
        Self { center, extents }
    }

    /// # Panics
    ///
    /// Panics if `minimum` exceeds `maximum` on any axis.
    pub fn from_min_max(minimum: Vec2<S>, maximum: Vec2<S>) -> Self {
        assert!(
            minimum.x <= maximum.x && minimum.y <= maximum.y,
            "Bounds2 minimum must not exceed maximum"
        );
        let center = (maximum + minimum) * S::HALF;
        let extents = (maximum - minimum) * S::HALF;
        Self { center, extents }
    }

    pub fn from_points(points: &[Vec2<S>]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut minimum = Vec2::splat(S::MAX);
        let mut maximum = Vec2::splat(S::MIN);

        for &point in points {
            minimum = minimum.min(point);
            maximum = maximum.max(point);
        }

        Some(Self::from_min_max(minimum, maximum))
    }

    #[inline]
    pub fn minimum(&self) -> Vec2<S> {
        self.center - self.extents
    }

    #[inline]
    pub fn maximum(&self) -> Vec2<S> {
        self.center + self.extents
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::from_min_max(
            self.minimum().min(other.minimum()),
            self.maximum().max(other.maximum()),
        )
    }

    /// Overlap of two rectangles, or `None` if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let a_min = self.minimum();
        let a_max = self.maximum();
        let b_min = other.minimum();
        let b_max = other.maximum();

        let overlaps =
            a_min.x <= b_max.x && b_min.x <= a_max.x && a_min.y <= b_max.y && b_min.y <= a_max.y;

        if overlaps {
            Some(Self::from_min_max(a_min.max(b_min), a_max.min(b_max)))
        } else {
            None
        }
    }

    /// The 4 corner points, enumerated by a fixed sign pattern.
    pub fn corners(&self) -> [Vec2<S>; 4] {
        let signs = [
            Vec2::new(S::ONE, S::ONE),
            Vec2::new(S::ONE, -S::ONE),
            Vec2::new(-S::ONE, S::ONE),
            Vec2::new(-S::ONE, -S::ONE),
        ];

        signs.map(|sign| self.center + self.extents * sign)
    }

    /// Closed containment test: boundary points ARE contained (unlike the
    /// strict [`Bounds3::contains`]).
    pub fn contains(&self, point: Vec2<S>) -> bool {
        let minimum = self.minimum();
        let maximum = self.maximum();
        point.x >= minimum.x && point.x <= maximum.x && point.y >= minimum.y && point.y <= maximum.y
    }
}

/// Bounding sphere
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Sphere<S> {
    pub center: Vec3<S>,
    pub radius: S,
}

impl<S: Scalar> Sphere<S> {
    /// # Panics
    ///
    /// Panics if `radius` is negative.
    pub fn new(center: Vec3<S>, radius: S) -> Self {
        assert!(radius >= S::ZERO, "Sphere radius must be non-negative");
        Self { center, radius }
    }

    /// Circumscribed sphere of a box: exact containment, though not the
    /// minimal sphere for non-cubic boxes.
    pub fn from_bounds(bounds: &Bounds3<S>) -> Self {
        Self {
            center: bounds.center,
            radius: bounds.extents.length(),
        }
    }

    /// Axis-aligned box around the sphere
    pub fn bounds(&self) -> Bounds3<S> {
        Bounds3::new(self.center, Vec3::splat(self.radius))
    }

    /// A sphere guaranteed to contain both inputs.
    ///
    /// Centered at the midpoint of the two centers, with radius large
    /// enough to reach past the farther input. Over-approximates; it is
    /// not the minimal enclosing sphere.
    pub fn union(a: &Self, b: &Self) -> Self {
        let midpoint = (a.center + b.center) * S::HALF;
        let radius = midpoint.distance(a.center) + a.radius.max(b.radius);
        Self { center: midpoint, radius }
    }

    /// Translate the center and scale the radius by the largest scale
    /// component.
    ///
    /// An approximation: the center ignores the transform's rotation
    /// (which moves off-origin centers) and the radius ignores the scale
    /// direction.
    pub fn transform(&self, transform: &Transform3<S>) -> Self {
        Self {
            center: self.center + transform.translation,
            radius: self.radius * transform.scale.max_component(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_min_max_derives_center_extents() {
        let b = Bounds3::from_min_max(Vec3::new(-1.0f32, 0.0, 2.0), Vec3::new(3.0, 4.0, 6.0));
        assert_eq!(b.center, Vec3::new(1.0, 2.0, 4.0));
        assert_eq!(b.extents, Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_extents_rejected() {
        let _ = Bounds3::new(Vec3::<f32>::zero(), Vec3::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_from_points_empty_is_none() {
        assert!(Bounds3::<f64>::from_points(&[]).is_none());
    }

    #[test]
    fn test_from_points_covers_input() {
        let points = [
            Vec3::new(1.0f64, -2.0, 0.0),
            Vec3::new(-3.0, 4.0, 1.0),
            Vec3::new(0.0, 0.0, 5.0),
        ];
        let b = Bounds3::from_points(&points).unwrap();
        assert_eq!(b.minimum(), Vec3::new(-3.0, -2.0, 0.0));
        assert_eq!(b.maximum(), Vec3::new(1.0, 4.0, 5.0));
    }

    #[test]
    fn test_union_encloses_both() {
        let a = Bounds3::from_min_max(Vec3::new(-1.0f64, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let b = Bounds3::from_min_max(Vec3::new(2.0, 2.0, 2.0), Vec3::new(3.0, 3.0, 3.0));
        let u = a.union(&b);
        assert_eq!(u.minimum(), a.minimum());
        assert_eq!(u.maximum(), b.maximum());
    }

    #[test]
    fn test_intersection_disjoint_is_none() {
        let a = Bounds3::from_min_max(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let b = Bounds3::from_min_max(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn test_intersection_overlap() {
        let a = Bounds3::from_min_max(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(2.0, 2.0, 2.0));
        let b = Bounds3::from_min_max(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.minimum(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(i.maximum(), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_intersection_touching_is_degenerate_not_none() {
        let a = Bounds3::from_min_max(Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let b = Bounds3::from_min_max(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.extents.x, 0.0);
    }

    #[test]
    fn test_contains_excludes_boundary() {
        let b = Bounds3::from_min_max(Vec3::new(-1.0f64, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(b.contains(Vec3::zero()));
        assert!(!b.contains(Vec3::new(1.0, 0.0, 0.0)));
        assert!(!b.contains(Vec3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn test_corners_of_offcenter_box() {
        let b = Bounds3::from_min_max(Vec3::new(1.0f64, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0));
        let corners = b.corners();
        assert_eq!(corners[0], Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(corners[7], Vec3::new(1.0, 1.0, 1.0));
        for corner in corners {
            assert_eq!(b.distance_squared_to_point(corner), 0.0);
        }
    }

    #[test]
    fn test_distance_squared_outside() {
        let b = Bounds3::from_min_max(Vec3::new(0.0f64, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(b.distance_squared_to_point(Vec3::new(2.0, 0.5, 0.5)), 1.0);
        assert_eq!(b.distance_squared_to_point(Vec3::new(2.0, 2.0, 0.5)), 2.0);
    }

    #[test]
    fn test_sphere_from_bounds_contains_corners() {
        let b = Bounds3::from_min_max(Vec3::new(-1.0f64, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        let s = Sphere::from_bounds(&b);
        for corner in b.corners() {
            assert!(corner.distance(s.center) <= s.radius + 1e-12);
        }
    }

    #[test]
    fn test_sphere_union_contains_both() {
        let a = Sphere::new(Vec3::new(-5.0f64, 0.0, 0.0), 1.0);
        let b = Sphere::new(Vec3::new(7.0, 2.0, 0.0), 3.0);
        let u = Sphere::union(&a, &b);
        assert!(u.center.distance(a.center) + a.radius <= u.radius + 1e-12);
        assert!(u.center.distance(b.center) + b.radius <= u.radius + 1e-12);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_radius_rejected() {
        let _ = Sphere::new(Vec3::<f32>::zero(), -1.0);
    }

    #[test]
    fn test_bounds2_intersection() {
        let a = Bounds2::from_min_max(Vec2::new(0.0f32, 0.0), Vec2::new(2.0, 2.0));
        let b = Bounds2::from_min_max(Vec2::new(1.0, -1.0), Vec2::new(3.0, 1.0));
        let i = a.intersection(&b).unwrap();
        assert_eq!(i.minimum(), Vec2::new(1.0, 0.0));
        assert_eq!(i.maximum(), Vec2::new(2.0, 1.0));

        let c = Bounds2::from_min_max(Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0));
        assert!(a.intersection(&c).is_none());
    }

    #[test]
    fn test_bounds2_contains_is_closed() {
        let b = Bounds2::from_min_max(Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 1.0));
        assert!(b.contains(Vec2::new(1.0, 0.0)));
        assert!(!b.contains(Vec2::new(1.1, 0.0)));
    }
}
