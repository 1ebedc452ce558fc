pub mod reflection;

pub use reflection::{Plane, reflection_matrix};
