use bouncing_circles::math::{approx_eq, clamp, Rect, Vector2};
use std::f32::consts::PI;
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, 7.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, 3.0));

    // Scalar multiplication
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));

    // Dot product, both spellings
    assert_eq!(v1.dot(&v2), 14.0);
    assert_eq!(v1 * v2, 14.0);

    // Length
    assert_relative_eq!(Vector2::new(3.0, 4.0).length(), 5.0);

    // Normalize
    let normalized = v2.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, 4.0 / 41.0f32.sqrt());
}

#[test]
fn test_normalize_zero_vector_is_noop() {
    let zero = Vector2::zero();
    let n = zero.normalize();
    assert!(n.is_finite());
    assert!(n.is_zero());
}

#[test]
fn test_rotation_preserves_length() {
    let v = Vector2::new(-3.5, 7.25);
    for step in 0..16 {
        let angle = step as f32 * PI / 8.0;
        assert_relative_eq!(v.rotate(angle).length(), v.length(), epsilon = 1e-4);
    }
}

#[test]
fn test_rotation_round_trip() {
    let v = Vector2::new(2.0, -1.0);
    let back = v.rotate(0.7).rotate(-0.7);
    assert_relative_eq!(back.x, v.x, epsilon = 1e-5);
    assert_relative_eq!(back.y, v.y, epsilon = 1e-5);
}

#[test]
fn test_rotate_into_normal_frame_projects_on_normal() {
    let normal = Vector2::new(0.6, 0.8);
    let v = Vector2::new(3.0, -2.0);
    let local = v.rotate(-normal.angle());

    assert_relative_eq!(local.x, v.dot(&normal), epsilon = 1e-5);
    assert_relative_eq!(local.y, v.dot(&normal.left_normal()), epsilon = 1e-5);
}

#[test]
fn test_nalgebra_conversion() {
    let v = Vector2::new(1.5, -2.5);
    let na = v.to_nalgebra();
    assert_eq!(na.x, 1.5);
    assert_eq!(na.y, -2.5);
    assert_eq!(Vector2::from_nalgebra(&na), v);
}

#[test]
fn test_rect_edges_and_center() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(rect.right(), 40.0);
    assert_eq!(rect.bottom(), 60.0);
    assert_eq!(rect.center(), Vector2::new(25.0, 40.0));

    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains_rect(&rect));
    assert!(!rect.contains_rect(&outer));
}

#[test]
fn test_scalar_helpers() {
    assert!(approx_eq(0.1 + 0.2, 0.3));
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
}
