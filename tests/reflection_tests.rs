//! Planar Reflection Matrix Tests
//!
//! Tests for:
//! - Householder reflection correctness across axis-aligned and oblique planes
//! - Involution property (M·M ≈ I) for unit normals
//! - Fixed points on the mirror plane
//! - Plane derivation from mirror transforms, including non-uniform scale

use glam::{Mat4, Quat, Vec3};
use specular::{Plane, reflection_matrix};
use std::f32::consts::FRAC_PI_2;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
}

fn mat4_approx(a: Mat4, b: Mat4) -> bool {
    (0..4).all(|i| {
        let ca = a.col(i);
        let cb = b.col(i);
        (0..4).all(|j| (ca[j] - cb[j]).abs() < EPSILON)
    })
}

// ============================================================================
// Householder matrix correctness
// ============================================================================

#[test]
fn xz_plane_reflects_point() {
    // Plane y = 0 with normal +Y: (1, 2, 3) must map to (1, -2, 3)
    let plane = Plane::new(Vec3::Y, 0.0);
    let m = reflection_matrix(&plane);

    let reflected = m.transform_point3(Vec3::new(1.0, 2.0, 3.0));
    assert!(
        vec3_approx(reflected, Vec3::new(1.0, -2.0, 3.0)),
        "expected (1, -2, 3), got {reflected:?}"
    );
}

#[test]
fn offset_plane_reflects_across_it() {
    // Plane y = -1: normal +Y, d = 1. Reflecting (0, 1, 0) lands at (0, -3, 0)
    let plane = Plane::new(Vec3::Y, 1.0);
    let m = reflection_matrix(&plane);

    let reflected = m.transform_point3(Vec3::new(0.0, 1.0, 0.0));
    assert!(
        vec3_approx(reflected, Vec3::new(0.0, -3.0, 0.0)),
        "expected (0, -3, 0), got {reflected:?}"
    );
}

#[test]
fn reflection_is_involution() {
    let normals = [
        Vec3::Y,
        Vec3::X,
        Vec3::new(1.0, 1.0, 0.0).normalize(),
        Vec3::new(0.3, -0.7, 0.2).normalize(),
    ];

    for normal in normals {
        for d in [0.0, -1.5, 2.25] {
            let m = reflection_matrix(&Plane::new(normal, d));
            assert!(
                mat4_approx(m * m, Mat4::IDENTITY),
                "M·M should be identity for normal {normal:?}, d {d}"
            );
        }
    }
}

#[test]
fn point_on_plane_is_fixed() {
    let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
    let on_plane = Vec3::new(3.0, -2.0, 2.0);
    let plane = Plane::new(normal, -normal.dot(on_plane));

    assert!(approx(plane.signed_distance(on_plane), 0.0));

    let m = reflection_matrix(&plane);
    let reflected = m.transform_point3(on_plane);
    assert!(
        vec3_approx(reflected, on_plane),
        "points on the plane must be fixed, got {reflected:?}"
    );
}

#[test]
fn reflection_negates_signed_distance() {
    let plane = Plane::new(Vec3::new(0.2, 0.9, -0.4).normalize(), 0.75);
    let m = reflection_matrix(&plane);

    let point = Vec3::new(4.0, 1.0, -2.0);
    let reflected = m.transform_point3(point);
    assert!(
        approx(
            plane.signed_distance(reflected),
            -plane.signed_distance(point)
        ),
        "reflection must mirror the signed distance"
    );
}

// ============================================================================
// Plane derivation from mirror transforms
// ============================================================================

#[test]
fn plane_from_identity_transform() {
    let plane = Plane::from_transform(&Mat4::IDENTITY, Vec3::Y);
    assert!(vec3_approx(plane.normal, Vec3::Y));
    assert!(approx(plane.d, 0.0));
}

#[test]
fn plane_from_translated_transform() {
    let transform = Mat4::from_translation(Vec3::new(0.0, -1.0, 0.0));
    let plane = Plane::from_transform(&transform, Vec3::Y);

    assert!(vec3_approx(plane.normal, Vec3::Y));
    // d = -(n · T) = 1
    assert!(approx(plane.d, 1.0));
}

#[test]
fn plane_from_rotated_transform() {
    // Rotating the mirror 90° about X turns its local +Y into world +Z
    let transform = Mat4::from_quat(Quat::from_rotation_x(FRAC_PI_2));
    let plane = Plane::from_transform(&transform, Vec3::Y);

    assert!(
        vec3_approx(plane.normal, Vec3::Z),
        "expected +Z, got {:?}",
        plane.normal
    );
}

#[test]
fn plane_normal_is_unit_under_nonuniform_scale() {
    let transform = Mat4::from_scale(Vec3::new(2.0, 3.0, 0.5))
        * Mat4::from_quat(Quat::from_rotation_z(0.4));
    let plane = Plane::from_transform(&transform, Vec3::Y);

    assert!(
        approx(plane.normal.length(), 1.0),
        "normal must be normalized, length {}",
        plane.normal.length()
    );

    // Involution must survive the non-uniform scale path
    let m = reflection_matrix(&plane);
    assert!(mat4_approx(m * m, Mat4::IDENTITY));
}

#[test]
fn mirror_surface_point_is_fixed_under_derived_plane() {
    // A tilted, spun, offset mirror: its own origin lies on the plane
    let transform = Mat4::from_rotation_y(0.8)
        * Mat4::from_rotation_x(0.3)
        * Mat4::from_translation(Vec3::new(0.0, -1.0, 0.0));
    let plane = Plane::from_transform(&transform, Vec3::Y);
    let m = reflection_matrix(&plane);

    let mirror_origin = transform.w_axis.truncate();
    assert!(approx(plane.signed_distance(mirror_origin), 0.0));
    assert!(vec3_approx(m.transform_point3(mirror_origin), mirror_origin));
}
