//! GPU Resource Upload
//!
//! Uploads CPU-side geometry and pixel data into GPU buffers and textures.
//! Everything is uploaded once before the frame loop; nothing here is
//! touched per frame.

use wgpu::util::DeviceExt;

use crate::resources::{CubeData, Geometry, TextureData};

/// Uploaded mesh: one vertex buffer per attribute plus the index buffer.
///
/// Attribute slots: 0 = position, 1 = normal, 2 = uv. The shadow pass binds
/// slot 0 only.
pub struct GpuGeometry {
    pub position_buffer: wgpu::Buffer,
    pub normal_buffer: wgpu::Buffer,
    pub uv_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuGeometry {
    #[must_use]
    pub fn upload(device: &wgpu::Device, geometry: &Geometry) -> Self {
        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Geometry Positions"),
            contents: bytemuck::cast_slice(geometry.positions()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let normal_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Geometry Normals"),
            contents: bytemuck::cast_slice(geometry.normals()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uv_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Geometry UVs"),
            contents: bytemuck::cast_slice(geometry.uvs()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Geometry Indices"),
            contents: bytemuck::cast_slice(geometry.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            position_buffer,
            normal_buffer,
            uv_buffer,
            index_buffer,
            index_count: geometry.index_count(),
        }
    }
}

/// Uploads an RGBA8 pixel block as a 2D texture and returns its view.
///
/// `srgb` selects the color-space interpretation: color maps want sRGB,
/// data maps (distortion, noise) want linear.
#[must_use]
pub fn create_texture_2d(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    data: &TextureData,
    srgb: bool,
    label: &str,
) -> wgpu::TextureView {
    let format = if srgb {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(data.width * 4),
            rows_per_image: Some(data.height),
        },
        wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        },
    );

    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

/// Uploads six RGBA8 faces as an environment cubemap and returns a cube view.
#[must_use]
pub fn create_cubemap(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    data: &CubeData,
    label: &str,
) -> wgpu::TextureView {
    let size = data.face_size();

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 6,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    for (layer, face) in data.faces.iter().enumerate() {
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d {
                    x: 0,
                    y: 0,
                    z: layer as u32,
                },
                aspect: wgpu::TextureAspect::All,
            },
            &face.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(size * 4),
                rows_per_image: Some(size),
            },
            wgpu::Extent3d {
                width: size,
                height: size,
                depth_or_array_layers: 1,
            },
        );
    }

    texture.create_view(&wgpu::TextureViewDescriptor {
        label: Some(label),
        dimension: Some(wgpu::TextureViewDimension::Cube),
        ..Default::default()
    })
}
