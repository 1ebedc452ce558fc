//! Camera & Orbit Rig
//!
//! The camera holds projection parameters only; view matrices are derived
//! per frame from the [`CameraRig`], which orbits a fixed eye position about
//! the world Y axis. Keeping both free of mutable matrix caches makes the
//! frame pose a pure function of time.

use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Vertical field of view, radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    #[must_use]
    pub fn new_perspective(fov: f32, near: f32, far: f32) -> Self {
        Self { fov, near, far }
    }

    /// Projection matrix for the given aspect ratio. glam's `perspective_rh`
    /// targets wgpu's [0, 1] clip-space depth range.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// World-space corners of the far clipping plane, in NDC corner order
    /// (−1,−1), (1,−1), (1,1), (−1,1).
    ///
    /// The skybox shader reconstructs per-pixel ray directions by pushing
    /// screen corners through the inverse view-projection; this is the
    /// analytic counterpart used to validate that reconstruction.
    #[must_use]
    pub fn far_plane_corners(&self, eye: Vec3, target: Vec3, up: Vec3, aspect: f32) -> [Vec3; 4] {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let true_up = right.cross(forward);

        let center = eye + forward * self.far;
        let half_h = (self.fov * 0.5).tan() * self.far;
        let half_w = half_h * aspect;

        [
            center - right * half_w - true_up * half_h,
            center + right * half_w - true_up * half_h,
            center + right * half_w + true_up * half_h,
            center - right * half_w + true_up * half_h,
        ]
    }
}

impl Default for Camera {
    fn default() -> Self {
        // FOV matches the demo scenes
        Self::new_perspective(PI / 2.5, 0.1, 100.0)
    }
}

/// Orbiting camera rig: the initial eye position is rotated about the world
/// Y axis at `orbit_speed` radians per second, always looking at `target`.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub orbit_speed: f32,
}

impl CameraRig {
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            orbit_speed: 0.05,
        }
    }

    /// Eye position at `time`.
    #[must_use]
    pub fn eye_at(&self, time: f32) -> Vec3 {
        Quat::from_rotation_y(time * self.orbit_speed) * self.eye
    }

    /// View matrix at `time`.
    #[must_use]
    pub fn view_at(&self, time: f32) -> Mat4 {
        Mat4::look_at_rh(self.eye_at(time), self.target, self.up)
    }
}
