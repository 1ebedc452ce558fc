//! Render Passes
//!
//! Each pass is a concrete struct sequenced by the frame driver in a fixed
//! order: shadow → reflection → main (skybox, opaque, mirror) → post.
//! There is no graph scheduling; the passes are strictly sequential within
//! one command encoder.

mod mirror;
mod opaque;
mod post;
mod shadow;
mod skybox;

pub use mirror::MirrorPass;
pub use opaque::OpaquePass;
pub use post::PostPass;
pub use shadow::ShadowPass;
pub use skybox::SkyboxPass;

/// Which camera an opaque invocation renders with. The mirrored view flips
/// triangle winding, so it culls front faces where the main view culls back
/// faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Main,
    Mirrored,
}

/// One object draw: a geometry index plus the object's uniform slot within
/// the current view's slot range.
#[derive(Debug, Clone, Copy)]
pub struct DrawCall {
    pub geometry: usize,
    pub slot: u32,
}
