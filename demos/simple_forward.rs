//! Minimal forward-rendering demo, driven directly against the wgpu context
//! without the multi-pass renderer: one mesh, one pipeline, one uniform
//! buffer. The vertex stage bobs the mesh on a sine wave and shades by the
//! view-space normal; the fragment stage inverts the colors.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use specular::render::resources::GpuGeometry;
use specular::{RenderSettings, WgpuContext, create_sphere};

const SHADER: &str = include_str!("shaders/simple.wgsl");

const BG_COLOR: Vec4 = Vec4::new(0.3, 0.5, 0.5, 1.0);
const FG_COLOR: Vec4 = Vec4::new(0.6, 0.9, 0.7, 1.0);

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    mvp: Mat4,
    model_view: Mat4,
    bg_color: Vec4,
    fg_color: Vec4,
    params: Vec4,
}

struct RenderState {
    ctx: WgpuContext,
    geometry: GpuGeometry,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
}

impl RenderState {
    fn new(ctx: WgpuContext) -> Self {
        let device = &ctx.device;

        let geometry = GpuGeometry::upload(device, &create_sphere(1.0, 48, 24));

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Simple Uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Simple Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Uniforms>() as u64),
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Simple BindGroup"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Simple Shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Simple Pipeline Layout"),
            bind_group_layouts: &[&layout],
            immediate_size: 0,
        });

        let position_attributes = wgpu::vertex_attr_array![0 => Float32x3];
        let normal_attributes = wgpu::vertex_attr_array![1 => Float32x3];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Simple Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &position_attributes,
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: 12,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &normal_attributes,
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.color_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: ctx.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            ctx,
            geometry,
            uniform_buffer,
            bind_group,
            pipeline,
        }
    }

    fn render(&mut self, time: f32) -> specular::Result<()> {
        let (width, height) = self.ctx.size();
        if width == 0 || height == 0 {
            return Ok(());
        }
        let aspect = width as f32 / height as f32;

        let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(Vec3::new(10.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        let model = Mat4::from_rotation_y(time * 0.2235);
        let model_view = view * model;

        let uniforms = Uniforms {
            mvp: projection * model_view,
            model_view,
            bg_color: BG_COLOR,
            fg_color: FG_COLOR,
            params: Vec4::new(time, 0.0, 0.0, 0.0),
        };
        self.ctx
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let frame = match self.ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Simple Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Simple Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: f64::from(BG_COLOR.x),
                            g: f64::from(BG_COLOR.y),
                            b: f64::from(BG_COLOR.z),
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture_view,
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
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.geometry.position_buffer.slice(..));
            pass.set_vertex_buffer(1, self.geometry.normal_buffer.slice(..));
            pass.set_index_buffer(self.geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.geometry.index_count, 0, 0..1);
        }

        self.ctx.queue.submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }
}

#[derive(Default)]
struct SimpleForward {
    window: Option<Arc<Window>>,
    state: Option<RenderState>,
    start: Option<std::time::Instant>,
}

impl ApplicationHandler for SimpleForward {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("Simple Forward Rendering")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let size = window.inner_size();
        match pollster::block_on(WgpuContext::new(
            window,
            &RenderSettings::default(),
            size.width.max(1),
            size.height.max(1),
        )) {
            Ok(ctx) => {
                self.state = Some(RenderState::new(ctx));
                self.start = Some(std::time::Instant::now());
            }
            Err(e) => {
                log::error!("Fatal renderer error: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(state) = &mut self.state {
                    state.ctx.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let time = self
                    .start
                    .map_or(0.0, |start| start.elapsed().as_secs_f32());
                if let Some(state) = &mut self.state {
                    if let Err(e) = state.render(time) {
                        log::error!("Render error: {e}");
                        event_loop.exit();
                        return;
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> specular::Result<()> {
    env_logger::init();
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = SimpleForward::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
