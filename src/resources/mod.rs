pub mod geometry;
pub mod primitives;
pub mod texture;

pub use geometry::Geometry;
pub use texture::{CubeData, TextureData};
