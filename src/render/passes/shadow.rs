//! Shadow Pass
//!
//! Renders every scene object into a depth-only target from the shadow
//! light's point of view. Only positions are consumed and there is no
//! fragment stage. Front faces are culled — the standard shadow-bias
//! convention that pushes self-shadowing onto surfaces facing away from the
//! light. The main pass samples the result with hardware depth comparison.

use crate::render::passes::DrawCall;
use crate::render::resources::GpuGeometry;
use crate::render::shaders;
use crate::render::target::ShadowTarget;
use crate::render::uniforms::DynamicUniformBuffer;
use crate::scene::ShadowConfig;

pub struct ShadowPass {
    target: ShadowTarget,
    pipeline: wgpu::RenderPipeline,
}

impl ShadowPass {
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        object_layout: &wgpu::BindGroupLayout,
        config: &ShadowConfig,
    ) -> Self {
        let target = ShadowTarget::new(device, config.map_size);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Shadow Shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SHADOW.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Shadow Pipeline Layout"),
            bind_group_layouts: &[Some(object_layout)],
            immediate_size: 0,
        });

        let position_attributes = wgpu::vertex_attr_array![0 => Float32x3];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Shadow Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: 12,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &position_attributes,
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            // Depth-only: no color targets, no fragment stage
            fragment: None,
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Front),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: Some(true),
                depth_compare: Some(wgpu::CompareFunction::Less),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self { target, pipeline }
    }

    /// The depth target the main pass samples.
    #[must_use]
    pub fn target(&self) -> &ShadowTarget {
        &self.target
    }

    pub fn run(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        objects: &DynamicUniformBuffer,
        geometries: &[GpuGeometry],
        draws: &[DrawCall],
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shadow Pass"),
            color_attachments: &[],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.target.view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        pass.set_pipeline(&self.pipeline);

        for draw in draws {
            pass.set_bind_group(0, objects.bind_group(), &[objects.offset(draw.slot)]);

            let geometry = &geometries[draw.geometry];
            pass.set_vertex_buffer(0, geometry.position_buffer.slice(..));
            pass.set_index_buffer(geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..geometry.index_count, 0, 0..1);
        }
    }
}
