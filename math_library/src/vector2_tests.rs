/// Tests for Vector2
///
/// Covers magnitude, normalization, dot/cross products, angles and the
/// arithmetic operators.

use super::*;
use std::f32::consts::{FRAC_PI_2, PI};

// ============================================================================
// Tests: Magnitude / Normalization
// ============================================================================

#[test]
fn test_magnitude() {
    assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vector2::new(3.0, 4.0).magnitude_squared(), 25.0);
}

#[test]
fn test_normalized_has_unit_length() {
    let v = Vector2::new(10.0, -5.0).normalized();
    assert!((v.magnitude() - 1.0).abs() < 1e-6);
}

#[test]
fn test_normalized_zero_vector_is_zero() {
    assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
}

#[test]
fn test_normalize_mutates_in_place() {
    let mut v = Vector2::new(0.0, 7.0);
    let returned = v.normalize();
    assert_eq!(v, Vector2::Y);
    assert_eq!(returned, v);
}

// ============================================================================
// Tests: Products and angles
// ============================================================================

#[test]
fn test_dot_product() {
    assert_eq!(Vector2::dot(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)), 11.0);
    assert_eq!(Vector2::dot(Vector2::X, Vector2::Y), 0.0);
}

#[test]
fn test_cross_sign_follows_winding() {
    assert_eq!(Vector2::cross(Vector2::X, Vector2::Y), 1.0);
    assert_eq!(Vector2::cross(Vector2::Y, Vector2::X), -1.0);
}

#[test]
fn test_perpendicular_is_orthogonal() {
    let v = Vector2::new(2.0, 5.0);
    assert_eq!(Vector2::dot(v, v.perpendicular()), 0.0);
    assert_eq!(Vector2::X.perpendicular(), Vector2::new(0.0, -1.0));
}

#[test]
fn test_distance() {
    assert_eq!(Vector2::distance(Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0)), 5.0);
}

#[test]
fn test_angle_between_ignores_length() {
    let angle = Vector2::angle_between(Vector2::new(5.0, 0.0), Vector2::new(0.0, 0.1));
    assert!((angle - FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_angle_between_parallel_is_zero_not_nan() {
    let v = Vector2::new(0.3, 0.7);
    let angle = Vector2::angle_between(v, v * 3.0);
    assert!(!angle.is_nan());
    assert!(angle.abs() < 1e-3);
}

#[test]
fn test_signed_angle() {
    assert!((Vector2::signed_angle(Vector2::X, Vector2::Y) - FRAC_PI_2).abs() < 1e-6);
    assert!((Vector2::signed_angle(Vector2::Y, Vector2::X) + FRAC_PI_2).abs() < 1e-6);
    assert!((Vector2::signed_angle(Vector2::X, -Vector2::X) - PI).abs() < 1e-6);
}

// ============================================================================
// Tests: Operators
// ============================================================================

#[test]
fn test_arithmetic_operators() {
    let a = Vector2::new(6.0, 8.0);
    let b = Vector2::new(2.0, 4.0);

    assert_eq!(a + b, Vector2::new(8.0, 12.0));
    assert_eq!(a - b, Vector2::new(4.0, 4.0));
    assert_eq!(a * b, Vector2::new(12.0, 32.0));
    assert_eq!(a / b, Vector2::new(3.0, 2.0));
    assert_eq!(a * 0.5, Vector2::new(3.0, 4.0));
    assert_eq!(0.5 * a, Vector2::new(3.0, 4.0));
    assert_eq!(a / 2.0, Vector2::new(3.0, 4.0));
    assert_eq!(-a, Vector2::new(-6.0, -8.0));
}

#[test]
fn test_assign_operators() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(1.0, 2.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));
    v -= Vector2::ONE;
    assert_eq!(v, Vector2::new(1.0, 2.0));
    v *= 3.0;
    assert_eq!(v, Vector2::new(3.0, 6.0));
    v /= 3.0;
    assert_eq!(v, Vector2::new(1.0, 2.0));
}

#[test]
fn test_clamp() {
    let v = Vector2::new(10.0, -10.0).clamp(Vector2::new(-1.0, -2.0), Vector2::new(1.0, 2.0));
    assert_eq!(v, Vector2::new(1.0, -2.0));
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Vector2::new(1.5, -2.0)), "(1.5, -2)");
}

#[test]
fn test_glam_round_trip() {
    let v = Vector2::new(1.0, 2.0);
    let g: glam::Vec2 = v.into();
    assert_eq!(g, glam::Vec2::new(1.0, 2.0));
    assert_eq!(Vector2::from(g), v);
}
