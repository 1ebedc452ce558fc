//! Lights
//!
//! Two kinds of light drive the Phong model: unshadowed point lights whose
//! positions orbit the world Z axis over time, and a single shadow-casting
//! light rendered from in the shadow pass.

use glam::{Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Point light with a time-parameterized orbit about the world Z axis.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    /// Initial position; the live position is derived from this each frame.
    pub position: Vec3,
    pub color: Vec3,
    /// Orbit rate about world Z, radians per second.
    pub orbit_speed: f32,
}

impl PointLight {
    #[must_use]
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            color,
            orbit_speed: 1.0,
        }
    }

    /// Live position at `time`.
    #[must_use]
    pub fn position_at(&self, time: f32) -> Vec3 {
        Quat::from_rotation_z(time * self.orbit_speed) * self.position
    }
}

/// Shadow map parameters.
#[derive(Debug, Clone, Copy)]
pub struct ShadowConfig {
    /// Depth target resolution, independent of the screen.
    pub map_size: u32,
    /// Lower clamp on the sampled visibility factor; fully occluded points
    /// keep this fraction of their diffuse/specular contribution.
    pub min_visibility: f32,
    /// Depth comparison bias in light clip space.
    pub depth_bias: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            map_size: 512,
            min_visibility: 0.2,
            depth_bias: 0.0015,
        }
    }
}

/// The single shadow-casting light. Renders the scene depth from its point
/// of view in the shadow pass and contributes shadow-modulated Phong
/// diffuse/specular in the main pass.
#[derive(Debug, Clone, Copy)]
pub struct ShadowLight {
    pub position: Vec3,
    pub target: Vec3,
    pub color: Vec3,
    /// Field of view of the light-space projection, radians.
    pub fov: f32,
    pub config: ShadowConfig,
}

impl ShadowLight {
    #[must_use]
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            color,
            fov: PI * 0.1,
            config: ShadowConfig::default(),
        }
    }

    /// Light-space view-projection matrix.
    ///
    /// Square aspect (the shadow map is square); near/far fixed at
    /// 0.1/100.0 to match the scene scale.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let dir = self.target - self.position;
        let safe_dir = if dir.length_squared() > 1e-6 {
            dir.normalize()
        } else {
            -Vec3::Z
        };
        let up = if safe_dir.y.abs() > 0.99 { Vec3::X } else { Vec3::Y };

        let view = Mat4::look_at_rh(self.position, self.position + safe_dir, up);
        let proj = Mat4::perspective_rh(self.fov, 1.0, 0.1, 100.0);
        proj * view
    }
}
