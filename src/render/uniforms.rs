//! GPU Uniform Structs & Dynamic Uniform Buffers
//!
//! The uniform structs here mirror the WGSL structs in
//! `render/shaders/*.wgsl` field for field; every member is vec4/mat4 sized
//! or grouped into 16-byte tails so the std140-style uniform layout matches
//! `#[repr(C)]` exactly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Upper bound on point lights; the WGSL array length.
pub const MAX_POINT_LIGHTS: usize = 4;

/// One point light as the shader sees it.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GpuPointLight {
    /// World position, w unused.
    pub position: Vec4,
    /// RGB color, w unused.
    pub color: Vec4,
}

/// Per-view frame globals. Two slots are written per frame: slot 0 for the
/// main camera, slot 1 for the mirrored camera of the reflection pass.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct GlobalUniforms {
    pub view_projection: Mat4,
    /// Inverse view-projection, for skybox ray reconstruction.
    pub view_projection_inverse: Mat4,
    pub light_view_projection: Mat4,
    /// Camera world position, w unused.
    pub camera_position: Vec4,
    pub ambient_color: Vec4,
    pub shadow_light_position: Vec4,
    pub shadow_light_color: Vec4,
    pub point_lights: [GpuPointLight; MAX_POINT_LIGHTS],
    pub light_count: u32,
    pub time: f32,
    pub min_shadow: f32,
    pub shadow_bias: f32,
}

/// Per-object uniforms, one slot per object per view.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: Mat4,
    pub mvp: Mat4,
    pub light_mvp: Mat4,
    pub normal_matrix: Mat4,
    pub base_color: Vec4,
    /// x = reflectivity, yzw unused.
    pub params: Vec4,
}

/// Mirror quad uniforms.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct MirrorUniforms {
    pub mvp: Mat4,
    /// x,y = screen size in pixels, z = distortion strength, w unused.
    pub params: Vec4,
}

/// Post-process uniforms.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct PostUniforms {
    /// x = focal depth, y = blur scale, z = occlusion strength, w unused.
    pub params0: Vec4,
    /// x = camera near, y = camera far, zw unused.
    pub params1: Vec4,
}

/// Uniform buffer holding `capacity` aligned slots of one `T`, bound once
/// with a dynamic offset per slot.
pub struct DynamicUniformBuffer {
    buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    stride: u32,
    item_size: u32,
    capacity: u32,
}

impl DynamicUniformBuffer {
    #[must_use]
    pub fn new<T: Pod>(device: &wgpu::Device, capacity: u32, label: &str) -> Self {
        let item_size = std::mem::size_of::<T>() as u32;
        let min_alignment = device.limits().min_uniform_buffer_offset_alignment.max(1);
        let stride = align_to(item_size, min_alignment);

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} Layout")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(u64::from(item_size)),
                },
                count: None,
            }],
        });

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: u64::from(stride) * u64::from(capacity.max(1)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(u64::from(item_size)),
                }),
            }],
        });

        Self {
            buffer,
            layout,
            bind_group,
            stride,
            item_size,
            capacity: capacity.max(1),
        }
    }

    /// Writes `value` into `slot`.
    pub fn write<T: Pod>(&self, queue: &wgpu::Queue, slot: u32, value: &T) {
        debug_assert!(slot < self.capacity);
        debug_assert_eq!(std::mem::size_of::<T>() as u32, self.item_size);
        queue.write_buffer(
            &self.buffer,
            u64::from(slot) * u64::from(self.stride),
            bytemuck::bytes_of(value),
        );
    }

    /// Dynamic offset selecting `slot`.
    #[inline]
    #[must_use]
    pub fn offset(&self, slot: u32) -> u32 {
        slot * self.stride
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

pub(crate) fn align_to(value: u32, alignment: u32) -> u32 {
    value.div_ceil(alignment) * alignment
}
