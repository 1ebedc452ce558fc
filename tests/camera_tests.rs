//! Camera & Skybox Reconstruction Tests
//!
//! Tests for:
//! - Projection depth range ([0, 1] for wgpu clip space)
//! - Inverse view-projection mapping NDC corners to far-plane corners
//!   (the skybox shader's per-pixel ray reconstruction)
//! - Orbit rig invariants

use glam::{Mat4, Vec3};
use specular::{Camera, CameraRig};
use std::f32::consts::PI;

const EPSILON: f32 = 1e-3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn projection_maps_near_to_zero_and_far_to_one() {
    let camera = Camera::new_perspective(PI / 2.5, 0.1, 100.0);
    let proj = camera.projection_matrix(16.0 / 9.0);

    let near_ndc = proj.project_point3(Vec3::new(0.0, 0.0, -camera.near));
    let far_ndc = proj.project_point3(Vec3::new(0.0, 0.0, -camera.far));

    assert!(approx(near_ndc.z, 0.0), "near plane should map to z=0, got {}", near_ndc.z);
    assert!(approx(far_ndc.z, 1.0), "far plane should map to z=1, got {}", far_ndc.z);
}

// ============================================================================
// Skybox ray reconstruction
// ============================================================================

#[test]
fn inverse_view_projection_maps_ndc_corners_to_far_plane() {
    let camera = Camera::new_perspective(PI / 2.5, 0.1, 100.0);
    let aspect = 16.0 / 9.0;

    let eye = Vec3::new(0.0, 1.0, 3.4);
    let target = Vec3::new(0.0, -0.5, 0.0);
    let up = Vec3::Y;

    let view = Mat4::look_at_rh(eye, target, up);
    let view_projection = camera.projection_matrix(aspect) * view;
    let inverse = view_projection.inverse();

    let expected = camera.far_plane_corners(eye, target, up, aspect);
    let ndc_corners = [
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, 1.0, 1.0),
    ];

    for (ndc, far_corner) in ndc_corners.iter().zip(&expected) {
        let world = inverse.project_point3(*ndc);
        let error = (world - *far_corner).length();
        // Relative tolerance: the far plane sits ~100 units out
        assert!(
            error < 0.05,
            "NDC {ndc:?}: reconstructed {world:?}, expected {far_corner:?} (error {error})"
        );
    }
}

#[test]
fn far_plane_corners_lie_on_the_far_plane() {
    let camera = Camera::default();
    let eye = Vec3::new(4.0, 2.0, 4.0);
    let target = Vec3::ZERO;
    let forward = (target - eye).normalize();

    let corners = camera.far_plane_corners(eye, target, Vec3::Y, 1.5);
    for corner in corners {
        let depth = (corner - eye).dot(forward);
        assert!(
            approx(depth / camera.far, 1.0),
            "corner {corner:?} should sit at the far distance, got {depth}"
        );
    }
}

// ============================================================================
// Orbit rig
// ============================================================================

#[test]
fn orbit_preserves_height_and_radius() {
    let rig = CameraRig::new(Vec3::new(0.0, 1.0, 3.4), Vec3::ZERO);
    let initial_radius = Vec3::new(rig.eye.x, 0.0, rig.eye.z).length();

    for time in [0.0, 1.0, 10.0, 123.4] {
        let eye = rig.eye_at(time);
        assert!(approx(eye.y, rig.eye.y), "orbit must preserve height");

        let radius = Vec3::new(eye.x, 0.0, eye.z).length();
        assert!(approx(radius, initial_radius), "orbit must preserve radius");
    }
}

#[test]
fn orbit_at_time_zero_is_initial_eye() {
    let rig = CameraRig::new(Vec3::new(2.0, 0.5, -1.0), Vec3::ZERO);
    let eye = rig.eye_at(0.0);
    assert!((eye - rig.eye).length() < EPSILON);
}

#[test]
fn view_matrix_centers_the_target() {
    let rig = CameraRig::new(Vec3::new(0.0, 1.0, 3.4), Vec3::new(0.0, -0.5, 0.0));
    let view = rig.view_at(0.7);

    // The target must land on the view-space -Z axis
    let target_view = view.transform_point3(rig.target);
    assert!(approx(target_view.x, 0.0), "target x should be 0, got {}", target_view.x);
    assert!(approx(target_view.y, 0.0), "target y should be 0, got {}", target_view.y);
    assert!(target_view.z < 0.0, "target should be in front of the camera");
}
