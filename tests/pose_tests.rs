//! Frame Pose Tests
//!
//! Tests for:
//! - Determinism: the pose is a pure function of elapsed time
//! - Known transforms at t = 0
//! - Point-light orbits about the world Z axis
//! - Mirrored-camera construction (involution, eye across the plane)
//! - Light-space projection depth monotonicity

use glam::{Mat4, Quat, Vec3, Vec4};
use specular::{
    Camera, CameraRig, CubeData, Mirror, PointLight, Scene, SceneObject, ShadowLight, Spin,
    TextureData, create_box, create_plane,
};
use std::f32::consts::PI;

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn solid_cube() -> CubeData {
    CubeData::new(std::array::from_fn(|_| {
        TextureData::solid(1, 1, [255, 255, 255, 255])
    }))
}

fn test_scene() -> Scene {
    Scene {
        geometries: vec![create_box(1.0, 1.0, 1.0), create_plane(1.0, 1.0, 1, 1)],
        objects: vec![
            SceneObject {
                geometry: 0,
                base_color: Vec4::ONE,
                reflectivity: 0.5,
                translation: Vec3::new(0.0, 0.5, 0.0),
                scale: Vec3::splat(0.8),
                spin: Spin::new(0.9, 1.1),
            },
            SceneObject {
                geometry: 0,
                base_color: Vec4::new(0.4, 0.6, 0.9, 1.0),
                reflectivity: 0.2,
                translation: Vec3::new(-2.4, -2.4, -1.2),
                scale: Vec3::splat(2.0),
                spin: Spin::new(0.2, 0.25),
            },
        ],
        ambient_color: Vec4::new(0.1, 0.1, 0.1, 1.0),
        point_lights: vec![PointLight::new(Vec3::new(3.0, 0.0, 1.5), Vec3::ONE)],
        shadow_light: ShadowLight::new(Vec3::new(0.0, 8.0, 0.1), Vec3::ONE),
        camera: Camera::new_perspective(PI / 2.5, 0.1, 100.0),
        rig: CameraRig::new(Vec3::new(0.0, 1.0, 3.4), Vec3::new(0.0, -0.5, 0.0)),
        environment: solid_cube(),
        diffuse: TextureData::solid(1, 1, [255, 255, 255, 255]),
        mirror: Some(Mirror {
            geometry: 1,
            distortion: TextureData::solid(1, 1, [128, 128, 128, 255]),
            distortion_strength: 0.3,
            tilt: 0.3,
            spin_speed: 0.2354,
            offset: Vec3::new(0.0, -1.0, 0.0),
            scale: 2.0,
        }),
        post: None,
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn pose_is_pure_function_of_time() {
    let scene = test_scene();

    let a = scene.pose_at(1.2345, 16.0 / 9.0);
    let b = scene.pose_at(1.2345, 16.0 / 9.0);
    assert_eq!(a, b, "equal inputs must produce identical poses");

    let c = scene.pose_at(1.2346, 16.0 / 9.0);
    assert_ne!(a, c, "different times must produce different poses");
}

#[test]
fn fixed_scenario_is_reproducible() {
    // Camera at (45, 20, 1) looking at (0, 0.2, 0), up (0, 10, 0), FOV PI/2.5
    let mut scene = test_scene();
    scene.camera = Camera::new_perspective(PI / 2.5, 0.1, 100.0);
    scene.rig = CameraRig {
        eye: Vec3::new(45.0, 20.0, 1.0),
        target: Vec3::new(0.0, 0.2, 0.0),
        up: Vec3::new(0.0, 10.0, 0.0),
        orbit_speed: 0.05,
    };

    let a = scene.pose_at(7.5, 16.0 / 9.0);
    let b = scene.pose_at(7.5, 16.0 / 9.0);
    assert_eq!(a, b);

    assert_eq!(a.objects.len(), scene.objects.len());
    assert!(a.reflection.is_some());
    assert!(a.mirror_model.is_some());
}

// ============================================================================
// Known transforms at t = 0
// ============================================================================

#[test]
fn objects_start_unrotated() {
    let scene = test_scene();
    let pose = scene.pose_at(0.0, 1.0);

    for (object, object_pose) in scene.objects.iter().zip(&pose.objects) {
        let expected = Mat4::from_scale_rotation_translation(
            object.scale,
            Quat::IDENTITY,
            object.translation,
        );
        assert!(
            object_pose
                .model
                .abs_diff_eq(expected, EPSILON),
            "at t=0 the model must be scale+translation only"
        );
    }
}

#[test]
fn object_transforms_advance_with_time() {
    let scene = test_scene();
    let early = scene.pose_at(0.5, 1.0);
    let late = scene.pose_at(2.5, 1.0);

    assert_ne!(early.objects[0].model, late.objects[0].model);
}

// ============================================================================
// Light orbits
// ============================================================================

#[test]
fn point_light_orbits_about_world_z() {
    let light = PointLight::new(Vec3::new(3.0, 0.0, 1.5), Vec3::ONE);
    let initial_radius = Vec3::new(light.position.x, light.position.y, 0.0).length();

    for time in [0.0, 0.7, 3.1, 42.0] {
        let position = light.position_at(time);
        assert!(
            approx(position.z, light.position.z),
            "rotation about Z must preserve z"
        );
        let radius = Vec3::new(position.x, position.y, 0.0).length();
        assert!(approx(radius, initial_radius), "orbit must preserve radius");
    }
}

// ============================================================================
// Mirrored camera
// ============================================================================

#[test]
fn mirror_plane_reflection_is_involution() {
    let scene = test_scene();
    let pose = scene.pose_at(1.7, 1.5);

    let plane = pose.mirror_plane.expect("scene has a mirror");
    let m = specular::reflection_matrix(&plane);
    assert!(
        (m * m).abs_diff_eq(Mat4::IDENTITY, 1e-3),
        "reflection derived from the animated mirror must be an involution"
    );
}

#[test]
fn reflected_eye_sits_across_the_mirror_plane() {
    let scene = test_scene();
    let pose = scene.pose_at(2.3, 1.5);

    let plane = pose.mirror_plane.expect("scene has a mirror");
    let reflection = pose.reflection.expect("scene has a mirror");

    let main_distance = plane.signed_distance(pose.main.eye);
    let mirrored_distance = plane.signed_distance(reflection.eye);
    assert!(
        (main_distance + mirrored_distance).abs() < 1e-3,
        "mirrored eye must sit at the opposite signed distance"
    );
}

#[test]
fn scene_without_mirror_has_no_reflection_pose() {
    let mut scene = test_scene();
    scene.mirror = None;

    let pose = scene.pose_at(1.0, 1.0);
    assert!(pose.reflection.is_none());
    assert!(pose.mirror_model.is_none());
    assert!(pose.mirror_plane.is_none());
}

// ============================================================================
// Light-space projection
// ============================================================================

#[test]
fn light_projection_depth_increases_with_distance() {
    let light = ShadowLight::new(Vec3::new(0.0, 8.0, 0.1), Vec3::ONE);
    let light_vp = light.view_projection();

    let direction = (light.target - light.position).normalize();

    // Sample points marching away from the light toward the target
    let mut last_depth = f32::MIN;
    for t in [1.0, 2.0, 4.0, 7.0] {
        let point = light.position + direction * t;
        let ndc = light_vp.project_point3(point);
        assert!(
            ndc.z > last_depth,
            "depth must grow with distance from the light ({} <= {last_depth})",
            ndc.z
        );
        last_depth = ndc.z;
    }

    assert!(last_depth <= 1.0, "points inside the frustum stay in [0, 1]");
}
