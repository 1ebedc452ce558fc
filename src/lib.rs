pub mod app;
pub mod errors;
pub mod math;
pub mod render;
pub mod resources;
pub mod scene;
pub mod utils;

pub use app::App;
pub use errors::{Result, SpecularError};
pub use math::reflection::{Plane, reflection_matrix};
pub use render::{FrameRenderer, RenderSettings, WgpuContext};
pub use resources::primitives::{create_box, create_plane, create_sphere};
pub use resources::{CubeData, Geometry, TextureData};
pub use scene::{
    Camera, CameraRig, FramePose, Mirror, PointLight, PostSettings, Scene, SceneObject,
    ShadowConfig, ShadowLight, Spin,
};
