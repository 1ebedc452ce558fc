//! WGSL shader sources, embedded at compile time.

/// Depth-only shadow pass.
pub const SHADOW: &str = include_str!("shadow.wgsl");

/// Fullscreen skybox via inverse view-projection ray reconstruction.
pub const SKYBOX: &str = include_str!("skybox.wgsl");

/// Opaque scene objects: Phong + environment reflection + shadow sampling.
pub const PHONG: &str = include_str!("phong.wgsl");

/// Mirror quad sampling the planar-reflection target.
pub const MIRROR: &str = include_str!("mirror.wgsl");

/// Screen-space depth-of-field / occlusion / inversion pass.
pub const POST: &str = include_str!("post.wgsl");
