//! Cubemap and planar reflections demo: three spinning objects above a
//! slowly rotating mirror, with a shadow-casting light and two point lights
//! orbiting the scene.

mod support;

use glam::{Vec3, Vec4};

use specular::{
    App, Camera, CameraRig, Mirror, PointLight, Scene, SceneObject, ShadowLight, Spin,
    create_box, create_plane, create_sphere,
};

fn build_scene() -> Scene {
    let geometries = vec![
        create_sphere(0.7, 48, 24),
        create_box(1.0, 1.0, 1.0),
        create_plane(1.0, 1.0, 1, 1),
    ];

    let objects = vec![
        // Middle object
        SceneObject {
            geometry: 0,
            base_color: Vec4::new(0.9, 0.5, 0.4, 1.0),
            reflectivity: 0.6,
            translation: Vec3::ZERO,
            scale: Vec3::splat(0.8),
            spin: Spin::new(48.24f32.to_radians(), 56.97f32.to_radians()),
        },
        // Large object
        SceneObject {
            geometry: 1,
            base_color: Vec4::new(0.4, 0.6, 0.9, 1.0),
            reflectivity: 0.35,
            translation: Vec3::new(-2.4, -2.4, -1.2),
            scale: Vec3::splat(2.0),
            spin: Spin::new(12.0f32.to_radians(), 14.0f32.to_radians()),
        },
        // Small object
        SceneObject {
            geometry: 1,
            base_color: Vec4::new(0.5, 0.9, 0.5, 1.0),
            reflectivity: 0.5,
            translation: Vec3::new(0.9, 0.9, 0.6),
            scale: Vec3::splat(0.22),
            spin: Spin::new(15.0f32.to_radians(), 17.0f32.to_radians()),
        },
    ];

    let mut shadow_light = ShadowLight::new(Vec3::new(5.0, 8.0, 4.0), Vec3::splat(0.9));
    shadow_light.target = Vec3::ZERO;

    Scene {
        geometries,
        objects,
        ambient_color: Vec4::new(0.08, 0.08, 0.1, 1.0),
        point_lights: vec![
            PointLight::new(Vec3::new(3.0, 0.0, 1.5), Vec3::new(0.4, 0.1, 0.1)),
            PointLight::new(Vec3::new(-3.0, 0.0, 1.5), Vec3::new(0.1, 0.1, 0.4)),
        ],
        shadow_light,
        camera: Camera::default(),
        rig: CameraRig::new(Vec3::new(0.0, 1.0, 3.4), Vec3::new(0.0, -0.5, 0.0)),
        environment: support::sky_cubemap(256),
        diffuse: support::checkerboard(256, 8, [220, 220, 220, 255], [140, 150, 160, 255]),
        mirror: Some(Mirror {
            geometry: 2,
            distortion: support::noise(128, 7),
            distortion_strength: 0.3,
            tilt: 0.3,
            spin_speed: 0.2354,
            offset: Vec3::new(0.0, -1.0, 0.0),
            scale: 2.0,
        }),
        post: None,
    }
}

fn main() -> specular::Result<()> {
    env_logger::init();
    App::new(build_scene())
        .with_title("Cubemap & Planar Reflections")
        .run()
}
