//! Pairwise intersection and containment tests
//!
//! Pure boolean predicates over shape pairs, plus the hit-reporting
//! ray/triangle variant. Unless a predicate says otherwise, exactly
//! touching shapes count as intersecting.

use crate::bounds::{Bounds3, Sphere};
use crate::frustum::{Frustum, Plane};
use crate::ray::Ray3;
use crate::scalar::Scalar;
use crate::triangle::Triangle3;

/// Result of a ray/triangle intersection
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriangleHit<S> {
    /// Parametric distance along the ray, in units of the direction length
    pub distance: S,
    /// Barycentric weights `[a, b, c]` of the hit point
    pub barycentric: [S; 3],
}

/// Box/plane overlap: the box's projection interval onto the normal
/// against the center distance. Touching counts.
pub fn bounds_intersects_plane<S: Scalar>(bounds: &Bounds3<S>, plane: &Plane<S>) -> bool {
    let projection_radius = (bounds.extents * plane.normal.abs()).sum();
    plane.distance_to(bounds.center).abs() <= projection_radius
}

/// Box/plane overlap, or the box entirely on the plane's front side
pub fn bounds_intersects_or_inside_plane<S: Scalar>(bounds: &Bounds3<S>, plane: &Plane<S>) -> bool {
    let projection_radius = (bounds.extents * plane.normal.abs()).sum();
    let distance = plane.distance_to(bounds.center);
    let intersects = distance.abs() <= projection_radius;
    let is_inside = projection_radius <= distance;
    intersects || is_inside
}

/// Box/frustum test for culling.
///
/// Six box/plane tests, ordered near, left, right, top, bottom, far: the
/// planes most likely to reject come first so the common all-outside case
/// exits early.
pub fn bounds_intersects_frustum<S: Scalar>(bounds: &Bounds3<S>, frustum: &Frustum<S>) -> bool {
    if !bounds_intersects_or_inside_plane(bounds, &frustum.near) {
        return false;
    }
    if !bounds_intersects_or_inside_plane(bounds, &frustum.left) {
        return false;
    }
    if !bounds_intersects_or_inside_plane(bounds, &frustum.right) {
        return false;
    }
    if !bounds_intersects_or_inside_plane(bounds, &frustum.top) {
        return false;
    }
    if !bounds_intersects_or_inside_plane(bounds, &frustum.bottom) {
        return false;
    }
    if !bounds_intersects_or_inside_plane(bounds, &frustum.far) {
        return false;
    }
    true
}

/// Box/box overlap by per-axis center separation. Touching counts.
pub fn bounds_intersects_bounds<S: Scalar>(a: &Bounds3<S>, b: &Bounds3<S>) -> bool {
    if (a.center.x - b.center.x).abs() > a.extents.x + b.extents.x {
        return false;
    }
    if (a.center.y - b.center.y).abs() > a.extents.y + b.extents.y {
        return false;
    }
    if (a.center.z - b.center.z).abs() > a.extents.z + b.extents.z {
        return false;
    }
    true
}

/// Sphere/plane overlap. Touching counts.
pub fn sphere_intersects_plane<S: Scalar>(sphere: &Sphere<S>, plane: &Plane<S>) -> bool {
    plane.distance_to(sphere.center).abs() <= sphere.radius
}

/// Sphere/plane overlap, or the sphere entirely on the plane's front side
pub fn sphere_intersects_or_inside_plane<S: Scalar>(sphere: &Sphere<S>, plane: &Plane<S>) -> bool {
    let distance = plane.distance_to(sphere.center);
    let intersects = distance.abs() <= sphere.radius;
    let is_inside = sphere.radius <= distance;
    intersects || is_inside
}

/// Sphere/frustum test for culling, same plane order as
/// [`bounds_intersects_frustum`]
pub fn sphere_intersects_frustum<S: Scalar>(sphere: &Sphere<S>, frustum: &Frustum<S>) -> bool {
    if !sphere_intersects_or_inside_plane(sphere, &frustum.near) {
        return false;
    }
    if !sphere_intersects_or_inside_plane(sphere, &frustum.left) {
        return false;
    }
    if !sphere_intersects_or_inside_plane(sphere, &frustum.right) {
        return false;
    }
    if !sphere_intersects_or_inside_plane(sphere, &frustum.top) {
        return false;
    }
    if !sphere_intersects_or_inside_plane(sphere, &frustum.bottom) {
        return false;
    }
    if !sphere_intersects_or_inside_plane(sphere, &frustum.far) {
        return false;
    }
    true
}

/// Sphere/box overlap via the squared point-to-box distance. Touching
/// counts.
pub fn sphere_intersects_bounds<S: Scalar>(sphere: &Sphere<S>, bounds: &Bounds3<S>) -> bool {
    bounds.distance_squared_to_point(sphere.center) <= sphere.radius * sphere.radius
}

/// Sphere/sphere overlap.
///
/// STRICT comparison: spheres whose surfaces exactly touch are reported as
/// not intersecting, unlike the touching-counts convention of the other
/// predicates.
pub fn sphere_intersects_sphere<S: Scalar>(a: &Sphere<S>, b: &Sphere<S>) -> bool {
    let delta = a.center - b.center;
    let radius_sum = a.radius + b.radius;
    delta.dot(delta) < radius_sum * radius_sum
}

/// Slab-method ray/box test.
///
/// `epsilon` is the threshold below which a direction component counts as
/// parallel to that slab; pass `S::EPSILON` unless the inputs call for a
/// different tolerance. The parametric interval starts at zero, so boxes
/// strictly behind the ray origin do not intersect.
pub fn ray_intersects_bounds<S: Scalar>(ray: &Ray3<S>, bounds: &Bounds3<S>, epsilon: S) -> bool {
    let mut tmin = S::ZERO;
    let mut tmax = S::MAX;
    let minimum = bounds.minimum();
    let maximum = bounds.maximum();

    for index in 0..3 {
        let origin = ray.origin[index];
        let direction = ray.direction[index];

        if direction.abs() < epsilon {
            // Parallel to the slab: either always inside it or never
            if origin < minimum[index] || origin > maximum[index] {
                return false;
            }
        } else {
            let ood = S::ONE / direction;
            let mut t1 = (minimum[index] - origin) * ood;
            let mut t2 = (maximum[index] - origin) * ood;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
            }
            tmin = tmin.max(t1);
            tmax = tmax.min(t2);
            if tmin > tmax {
                return false;
            }
        }
    }

    true
}

/// Single-sided ray/triangle test.
///
/// Only front faces hit: a counter-clockwise triangle whose normal points
/// back along the ray direction. Back faces and triangles behind the ray
/// origin are rejected.
pub fn ray_intersects_triangle<S: Scalar>(ray: &Ray3<S>, triangle: &Triangle3<S>) -> bool {
    scaled_triangle_hit(ray, triangle).is_some()
}

/// Like [`ray_intersects_triangle`], but reports the parametric distance
/// and the barycentric coordinates of the hit.
pub fn ray_triangle_hit<S: Scalar>(ray: &Ray3<S>, triangle: &Triangle3<S>) -> Option<TriangleHit<S>> {
    let (t, v, w, d) = scaled_triangle_hit(ray, triangle)?;
    let ood = S::ONE / d;
    let v = v * ood;
    let w = w * ood;
    Some(TriangleHit {
        distance: t * ood,
        barycentric: [S::ONE - v - w, v, w],
    })
}

/// Möller-Trumbore style rejection cascade; the returned terms are all
/// still scaled by the denominator `d`.
fn scaled_triangle_hit<S: Scalar>(ray: &Ray3<S>, triangle: &Triangle3<S>) -> Option<(S, S, S, S)> {
    let ab = triangle.b - triangle.a;
    let ac = triangle.c - triangle.a;
    let qp = -ray.direction;

    let n = ab.cross(ac);
    let d = qp.dot(n);
    if d <= S::ZERO {
        return None;
    }

    let ap = ray.origin - triangle.a;
    let t = ap.dot(n);
    if t < S::ZERO {
        return None;
    }

    let e = qp.cross(ap);
    let v = ac.dot(e);
    if v < S::ZERO || v > d {
        return None;
    }
    let w = -ab.dot(e);
    if w < S::ZERO || v + w > d {
        return None;
    }

    Some((t, v, w, d))
}
