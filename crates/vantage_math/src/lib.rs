//! # vantage_math - Generic 3D Math and Spatial Queries
//!
//! Vector, matrix, quaternion, and bounding-volume primitives for view
//! culling, picking, and collision detection. Every type is generic over a
//! [`Scalar`] so the same code instantiates at `f32` and `f64` (or any
//! other type implementing the trait) without precision assumptions baked
//! in.
//!
//! The heart of the crate is the spatial-query surface: the shapes in
//! [`bounds`], [`frustum`], [`ray`] and [`triangle`], the pairwise
//! predicates in [`intersect`], and [`Transform3`] to move all of them
//! between coordinate spaces.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod angle;
pub mod bounds;
pub mod frustum;
pub mod intersect;
pub mod matrix;
pub mod projection;
pub mod quaternion;
pub mod ray;
pub mod scalar;
pub mod transform;
pub mod triangle;
pub mod vector;

pub use angle::Angle;
pub use bounds::{Bounds2, Bounds3, Sphere};
pub use frustum::{Frustum, Plane};
pub use intersect::TriangleHit;
pub use matrix::{Mat3, Mat4};
pub use projection::PerspectiveProjection;
pub use quaternion::Quat;
pub use ray::Ray3;
pub use scalar::Scalar;
pub use transform::Transform3;
pub use triangle::Triangle3;
pub use vector::{Vec2, Vec3, Vec4};

pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::bounds::{Bounds2, Bounds3, Sphere};
    pub use crate::frustum::{Frustum, Plane};
    pub use crate::intersect::{
        bounds_intersects_bounds, bounds_intersects_frustum, bounds_intersects_or_inside_plane,
        bounds_intersects_plane, ray_intersects_bounds, ray_intersects_triangle, ray_triangle_hit,
        sphere_intersects_bounds, sphere_intersects_frustum, sphere_intersects_or_inside_plane,
        sphere_intersects_plane, sphere_intersects_sphere, TriangleHit,
    };
    pub use crate::matrix::{Mat3, Mat4};
    pub use crate::projection::PerspectiveProjection;
    pub use crate::quaternion::Quat;
    pub use crate::ray::Ray3;
    pub use crate::scalar::Scalar;
    pub use crate::transform::Transform3;
    pub use crate::triangle::Triangle3;
    pub use crate::vector::{Vec2, Vec3, Vec4};
}
