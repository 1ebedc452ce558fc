pub mod camera;
pub mod light;
pub mod pose;

pub use camera::{Camera, CameraRig};
pub use light::{PointLight, ShadowConfig, ShadowLight};
pub use pose::{FramePose, ObjectPose, PointLightPose, ViewPose};

use glam::{Vec3, Vec4};

use crate::resources::{CubeData, Geometry, TextureData};

/// Time-parameterized rotation rates of a scene object, radians per second
/// about the local X and Y axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spin {
    pub rate_x: f32,
    pub rate_y: f32,
}

impl Spin {
    #[must_use]
    pub fn new(rate_x: f32, rate_y: f32) -> Self {
        Self { rate_x, rate_y }
    }
}

/// Static description of an opaque scene object. The per-frame model matrix
/// is recomputed from these parameters every tick; nothing about an object
/// persists between frames.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Index into [`Scene::geometries`].
    pub geometry: usize,
    pub base_color: Vec4,
    /// Blend factor between Phong shading (0.0) and the environment
    /// reflection (1.0).
    pub reflectivity: f32,
    pub translation: Vec3,
    pub scale: Vec3,
    pub spin: Spin,
}

/// The mirror surface: a quad that samples the planar-reflection target
/// through a distortion map.
#[derive(Debug, Clone)]
pub struct Mirror {
    /// Index into [`Scene::geometries`]; expected to be an XZ-plane quad
    /// whose local reflection normal is +Y.
    pub geometry: usize,
    pub distortion: TextureData,
    /// Screen-space x offset per unit of distortion-map deviation.
    pub distortion_strength: f32,
    /// Fixed tilt about X, radians.
    pub tilt: f32,
    /// Rotation rate about Y, radians per second.
    pub spin_speed: f32,
    pub offset: Vec3,
    pub scale: f32,
}

impl Mirror {
    /// Mirror world transform at `time`.
    #[must_use]
    pub fn model_at(&self, time: f32) -> glam::Mat4 {
        glam::Mat4::from_rotation_y(time * self.spin_speed)
            * glam::Mat4::from_rotation_x(self.tilt)
            * glam::Mat4::from_translation(self.offset)
            * glam::Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Screen-space post-processing parameters. The kernel itself (5×5
/// depth-of-field, 3×3 occlusion, final inversion) is fixed.
#[derive(Debug, Clone, Copy)]
pub struct PostSettings {
    /// View-space distance that stays in focus.
    pub focal_depth: f32,
    /// Blur radius growth per unit of defocus.
    pub blur_scale: f32,
    /// Occlusion darkening strength, 0..1.
    pub ao_strength: f32,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            focal_depth: 4.0,
            blur_scale: 0.8,
            ao_strength: 0.6,
        }
    }
}

/// Complete static description of a demo scene: meshes, image data, lights,
/// camera rig and animation parameters. Everything that varies over time is
/// derived from this and the frame timestamp by [`FramePose::at`].
pub struct Scene {
    pub geometries: Vec<Geometry>,
    pub objects: Vec<SceneObject>,

    pub ambient_color: Vec4,
    pub point_lights: Vec<PointLight>,
    pub shadow_light: ShadowLight,

    pub camera: Camera,
    pub rig: CameraRig,

    pub environment: CubeData,
    pub diffuse: TextureData,

    pub mirror: Option<Mirror>,
    pub post: Option<PostSettings>,
}

impl Scene {
    /// Computes the frame pose at `time`; see [`FramePose::at`].
    #[must_use]
    pub fn pose_at(&self, time: f32, aspect: f32) -> FramePose {
        FramePose::at(self, time, aspect)
    }
}
