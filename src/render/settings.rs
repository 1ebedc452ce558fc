//! Renderer Settings

/// Construction-time renderer configuration. All runtime parameters live in
/// the scene description; these only affect GPU setup.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub vsync: bool,
    pub power_preference: wgpu::PowerPreference,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
    pub depth_format: wgpu::TextureFormat,
    pub clear_color: wgpu::Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            depth_format: wgpu::TextureFormat::Depth32Float,
            clear_color: wgpu::Color::BLACK,
        }
    }
}
