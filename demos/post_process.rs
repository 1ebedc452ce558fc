//! Post-processing demo: a row of objects at varying depths rendered
//! through the depth-of-field / occlusion / inversion pass. The main pass
//! goes to an intermediate target; only the post pass touches the surface.

mod support;

use glam::{Vec3, Vec4};

use specular::{
    App, Camera, CameraRig, PointLight, PostSettings, Scene, SceneObject, ShadowLight, Spin,
    create_box, create_sphere,
};

fn build_scene() -> Scene {
    let geometries = vec![create_sphere(0.7, 48, 24), create_box(1.0, 1.0, 1.0)];

    // Objects staggered in depth so the focal falloff is visible
    let objects = vec![
        SceneObject {
            geometry: 0,
            base_color: Vec4::new(0.9, 0.4, 0.3, 1.0),
            reflectivity: 0.4,
            translation: Vec3::new(0.0, 0.2, 0.0),
            scale: Vec3::splat(0.9),
            spin: Spin::new(20.0f32.to_radians(), 30.0f32.to_radians()),
        },
        SceneObject {
            geometry: 1,
            base_color: Vec4::new(0.3, 0.7, 0.4, 1.0),
            reflectivity: 0.25,
            translation: Vec3::new(-2.0, -0.4, -3.0),
            scale: Vec3::splat(1.2),
            spin: Spin::new(10.0f32.to_radians(), 12.0f32.to_radians()),
        },
        SceneObject {
            geometry: 1,
            base_color: Vec4::new(0.8, 0.8, 0.3, 1.0),
            reflectivity: 0.25,
            translation: Vec3::new(2.2, 0.6, -7.0),
            scale: Vec3::splat(1.6),
            spin: Spin::new(8.0f32.to_radians(), 9.0f32.to_radians()),
        },
        SceneObject {
            geometry: 0,
            base_color: Vec4::new(0.5, 0.4, 0.9, 1.0),
            reflectivity: 0.5,
            translation: Vec3::new(1.2, -0.2, 2.5),
            scale: Vec3::splat(0.5),
            spin: Spin::new(25.0f32.to_radians(), 15.0f32.to_radians()),
        },
    ];

    Scene {
        geometries,
        objects,
        ambient_color: Vec4::new(0.1, 0.1, 0.12, 1.0),
        point_lights: vec![PointLight::new(
            Vec3::new(2.5, 1.0, 2.0),
            Vec3::new(0.3, 0.25, 0.2),
        )],
        shadow_light: ShadowLight::new(Vec3::new(6.0, 9.0, 5.0), Vec3::splat(0.85)),
        camera: Camera::default(),
        rig: CameraRig {
            eye: Vec3::new(45.0, 20.0, 1.0),
            target: Vec3::new(0.0, 0.2, 0.0),
            up: Vec3::new(0.0, 10.0, 0.0),
            orbit_speed: 0.05,
        },
        environment: support::sky_cubemap(256),
        diffuse: support::checkerboard(256, 8, [210, 210, 215, 255], [120, 130, 150, 255]),
        mirror: None,
        post: Some(PostSettings {
            focal_depth: 45.0,
            blur_scale: 0.12,
            ao_strength: 0.6,
        }),
    }
}

fn main() -> specular::Result<()> {
    env_logger::init();
    App::new(build_scene())
        .with_title("Depth of Field & Inversion")
        .run()
}
