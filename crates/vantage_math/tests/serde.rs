//! Serialization round-trips for the serde feature

#![cfg(feature = "serde")]

use vantage_math::prelude::*;

#[test]
fn bounds_roundtrip_through_bincode() {
    let bounds = Bounds3::new(Vec3::new(1.0f32, -2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
    let bytes = bincode::serialize(&bounds).unwrap();
    let back: Bounds3<f32> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, bounds);
}

#[test]
fn transform_roundtrip_through_bincode() {
    let t = Transform3::new(
        Vec3::new(1.0f64, 2.0, 3.0),
        Quat::from_axis_angle(Vec3::unit_y(), Angle::from_radians(0.5)),
        Vec3::new(2.0, 2.0, 2.0),
    );
    let bytes = bincode::serialize(&t).unwrap();
    let back: Transform3<f64> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, t);
}
