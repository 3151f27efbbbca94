//! Tests for the Vec3 helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn splat_fills_every_component() {
    let v = splat(-0.5);
    assert_eq!(v.x, -0.5);
    assert_eq!(v.y, -0.5);
    assert_eq!(v.z, -0.5);
}

#[test]
fn add_scalar_is_explicit_broadcast() {
    let v = add_scalar(Vec3::new(1.0, -1.0, 0.0), 0.5);
    assert_eq!(v, Vec3::new(1.5, -0.5, 0.5));
}

#[test]
fn midpoint_is_symmetric() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-3.0, 0.0, 7.0);
    assert_eq!(midpoint(a, b), midpoint(b, a));
    assert_eq!(midpoint(a, b), Vec3::new(-1.0, 1.0, 5.0));
}

/// The near point of `thirds(a, b)` is the far point of `thirds(b, a)`.
#[test]
fn thirds_mirror_when_reversed() {
    let a = Vec3::new(0.3, -1.2, 4.0);
    let b = Vec3::new(2.0, 0.5, -1.0);
    let (ab_near_a, ab_near_b) = thirds(a, b);
    let (ba_near_b, ba_near_a) = thirds(b, a);
    assert_relative_eq!(ab_near_a, ba_near_a, epsilon = 1e-12);
    assert_relative_eq!(ab_near_b, ba_near_b, epsilon = 1e-12);
}

#[test]
fn centroid_of_hexagon_is_center() {
    let points: Vec<Vec3> = (0..6)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 3.0;
            Vec3::new(angle.cos(), angle.sin(), 2.0)
        })
        .collect();
    assert_relative_eq!(centroid(&points), Vec3::new(0.0, 0.0, 2.0), epsilon = 1e-12);
}

#[test]
fn centroid_of_nothing_is_origin() {
    assert_eq!(centroid(&[]), Vec3::ZERO);
}

#[test]
fn to_f32_keeps_components() {
    assert_eq!(to_f32(Vec3::new(1.0, 2.5, -3.0)), [1.0f32, 2.5, -3.0]);
}
