//! Frame Pose
//!
//! The per-frame transform context. [`FramePose::at`] derives every matrix
//! a frame needs — object models, camera and mirrored-camera views, the
//! light-space projection, live light positions — from the static [`Scene`]
//! and the elapsed time alone. Passes receive this context explicitly;
//! there is no shared mutable transform state anywhere in the renderer, and
//! equal inputs produce a bitwise-equal pose.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::math::reflection::{Plane, reflection_matrix};
use crate::scene::Scene;

/// One camera's worth of view state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub eye: Vec3,
    pub view: Mat4,
    pub view_projection: Mat4,
    pub view_projection_inverse: Mat4,
}

/// Per-object transforms, recreated every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectPose {
    pub model: Mat4,
    /// Inverse-transpose of `model`; keeps normals perpendicular under
    /// non-uniform scale.
    pub normal_matrix: Mat4,
}

/// Live state of one point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightPose {
    pub position: Vec3,
    pub color: Vec3,
}

/// Everything time-dependent about one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePose {
    pub time: f32,
    pub projection: Mat4,

    pub main: ViewPose,
    /// Mirrored camera; present when the scene has a mirror.
    pub reflection: Option<ViewPose>,

    pub light_view_projection: Mat4,
    pub point_lights: Vec<PointLightPose>,

    pub objects: Vec<ObjectPose>,

    pub mirror_model: Option<Mat4>,
    pub mirror_plane: Option<Plane>,
}

impl FramePose {
    /// Derives the complete frame pose at `time`. Pure: no clocks, no
    /// global state, no allocation beyond the returned vectors.
    #[must_use]
    pub fn at(scene: &Scene, time: f32, aspect: f32) -> Self {
        let projection = scene.camera.projection_matrix(aspect);

        let eye = scene.rig.eye_at(time);
        let view = Mat4::look_at_rh(eye, scene.rig.target, scene.rig.up);
        let view_projection = projection * view;
        let main = ViewPose {
            eye,
            view,
            view_projection,
            view_projection_inverse: view_projection.inverse(),
        };

        let light_view_projection = scene.shadow_light.view_projection();

        let point_lights = scene
            .point_lights
            .iter()
            .map(|light| PointLightPose {
                position: light.position_at(time),
                color: light.color,
            })
            .collect();

        let objects = scene
            .objects
            .iter()
            .map(|object| {
                let rotation = Quat::from_euler(
                    EulerRot::XYZ,
                    time * object.spin.rate_x,
                    time * object.spin.rate_y,
                    0.0,
                );
                let model =
                    Mat4::from_scale_rotation_translation(object.scale, rotation, object.translation);
                ObjectPose {
                    model,
                    normal_matrix: model.inverse().transpose(),
                }
            })
            .collect();

        let (mirror_model, mirror_plane, reflection) = match &scene.mirror {
            Some(mirror) => {
                let model = mirror.model_at(time);
                let plane = Plane::from_transform(&model, Vec3::Y);
                let reflect = reflection_matrix(&plane);

                let mirrored_view = view * reflect;
                let mirrored_vp = projection * mirrored_view;
                let pose = ViewPose {
                    eye: reflect.transform_point3(eye),
                    view: mirrored_view,
                    view_projection: mirrored_vp,
                    view_projection_inverse: mirrored_vp.inverse(),
                };
                (Some(model), Some(plane), Some(pose))
            }
            None => (None, None, None),
        };

        Self {
            time,
            projection,
            main,
            reflection,
            light_view_projection,
            point_lights,
            objects,
            mirror_model,
            mirror_plane,
        }
    }
}
