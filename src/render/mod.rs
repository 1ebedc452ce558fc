pub mod context;
pub mod frame;
pub mod passes;
pub mod resources;
pub mod settings;
pub mod shaders;
pub mod target;
pub mod uniforms;

pub use context::WgpuContext;
pub use frame::FrameRenderer;
pub use settings::RenderSettings;
pub use target::{RenderTarget, ShadowTarget};
