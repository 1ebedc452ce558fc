//! Frame Driver
//!
//! Owns every GPU resource a scene needs and sequences the passes each
//! frame, strictly in order:
//!
//! ```text
//! shadow → reflection (skybox + opaque, mirrored camera)
//!        → main (skybox + opaque + mirror quad)
//!        → post-process (optional)
//! ```
//!
//! All time-dependent state comes in through the [`FramePose`] computed at
//! the top of [`FrameRenderer::render`]; the driver itself holds no
//! animation state, so a frame is a pure function of the scene description
//! and the elapsed time.

use glam::Vec4;

use crate::errors::Result;
use crate::render::context::WgpuContext;
use crate::render::passes::{
    DrawCall, MirrorPass, OpaquePass, PostPass, ShadowPass, SkyboxPass, ViewKind,
};
use crate::render::resources::{GpuGeometry, create_cubemap, create_texture_2d};
use crate::render::target::RenderTarget;
use crate::render::uniforms::{
    DynamicUniformBuffer, GlobalUniforms, GpuPointLight, MAX_POINT_LIGHTS, MirrorUniforms,
    ObjectUniforms,
};
use crate::scene::{FramePose, Scene, ViewPose};

/// Globals slot holding the main camera.
const GLOBALS_MAIN: u32 = 0;
/// Globals slot holding the mirrored camera.
const GLOBALS_REFLECTION: u32 = 1;

/// The multi-pass frame renderer.
///
/// Built once from a [`Scene`]; the same scene must be passed to every
/// [`render`](Self::render) call. Offscreen targets are created here and
/// mutated in place every frame — the shadow target lives inside the shadow
/// pass, the reflection and scene targets live here.
pub struct FrameRenderer {
    geometries: Vec<GpuGeometry>,
    /// Object draws for the main view (slots `0..n`).
    draws: Vec<DrawCall>,
    /// The same draws addressed at the reflection-view slots (`n..2n`).
    reflected_draws: Vec<DrawCall>,

    globals: DynamicUniformBuffer,
    objects: DynamicUniformBuffer,
    object_count: u32,

    shadow: ShadowPass,
    skybox: SkyboxPass,
    opaque: OpaquePass,
    mirror: Option<MirrorPass>,
    post: Option<PostPass>,

    reflection_target: RenderTarget,
    /// Present when post-processing is enabled; the main pass renders here
    /// instead of the surface.
    scene_target: Option<RenderTarget>,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(ctx: &WgpuContext, scene: &Scene) -> Self {
        let device = &ctx.device;
        let queue = &ctx.queue;

        let geometries: Vec<GpuGeometry> = scene
            .geometries
            .iter()
            .map(|geometry| GpuGeometry::upload(device, geometry))
            .collect();

        let object_count = scene.objects.len() as u32;
        let draws: Vec<DrawCall> = scene
            .objects
            .iter()
            .enumerate()
            .map(|(index, object)| DrawCall {
                geometry: object.geometry,
                slot: index as u32,
            })
            .collect();
        let reflected_draws: Vec<DrawCall> = draws
            .iter()
            .map(|draw| DrawCall {
                geometry: draw.geometry,
                slot: draw.slot + object_count,
            })
            .collect();

        let environment_view =
            create_cubemap(device, queue, &scene.environment, "Environment Cubemap");
        let diffuse_view = create_texture_2d(device, queue, &scene.diffuse, true, "Diffuse Map");

        let globals = DynamicUniformBuffer::new::<GlobalUniforms>(device, 2, "Frame Globals");
        let objects = DynamicUniformBuffer::new::<ObjectUniforms>(
            device,
            (object_count * 2).max(1),
            "Object Uniforms",
        );

        let shadow = ShadowPass::new(device, objects.layout(), &scene.shadow_light.config);
        let mut skybox = SkyboxPass::new(
            device,
            globals.layout(),
            &environment_view,
            ctx.depth_format,
        );
        let mut opaque = OpaquePass::new(
            device,
            globals.layout(),
            objects.layout(),
            &environment_view,
            &diffuse_view,
            &shadow.target().view,
            ctx.depth_format,
        );

        let color_format = ctx.color_format();
        skybox.ensure_pipeline(device, color_format);
        opaque.ensure_pipeline(device, color_format, ViewKind::Main);
        opaque.ensure_pipeline(device, color_format, ViewKind::Mirrored);

        let (width, height) = ctx.size();
        let reflection_target = RenderTarget::new(
            device,
            width,
            height,
            color_format,
            ctx.depth_format,
            "Reflection Target",
        );
        let scene_target = scene.post.map(|_| {
            RenderTarget::new(
                device,
                width,
                height,
                color_format,
                ctx.depth_format,
                "Scene Target",
            )
        });

        let mirror = scene.mirror.as_ref().map(|mirror| {
            let distortion_view =
                create_texture_2d(device, queue, &mirror.distortion, false, "Distortion Map");
            MirrorPass::new(
                device,
                &reflection_target.color_view,
                distortion_view,
                color_format,
                ctx.depth_format,
            )
        });

        let post = scene_target.as_ref().map(|target| {
            PostPass::new(
                device,
                &target.color_view,
                &target.depth_view,
                color_format,
            )
        });

        log::info!(
            "FrameRenderer ready: {} objects, {} geometries, mirror: {}, post: {}",
            object_count,
            geometries.len(),
            mirror.is_some(),
            post.is_some(),
        );

        Self {
            geometries,
            draws,
            reflected_draws,
            globals,
            objects,
            object_count,
            shadow,
            skybox,
            opaque,
            mirror,
            post,
            reflection_target,
            scene_target,
        }
    }

    /// Recreates the screen-sized offscreen targets and the bind groups
    /// that reference them.
    pub fn resize(&mut self, ctx: &WgpuContext) {
        let (width, height) = ctx.size();
        if width == 0 || height == 0 {
            return;
        }

        self.reflection_target = RenderTarget::new(
            &ctx.device,
            width,
            height,
            ctx.color_format(),
            ctx.depth_format,
            "Reflection Target",
        );
        if let Some(mirror) = &mut self.mirror {
            mirror.rebind(&ctx.device, &self.reflection_target.color_view);
        }

        if let Some(target) = &mut self.scene_target {
            *target = RenderTarget::new(
                &ctx.device,
                width,
                height,
                ctx.color_format(),
                ctx.depth_format,
                "Scene Target",
            );
            if let Some(post) = &mut self.post {
                post.rebind(&ctx.device, &target.color_view, &target.depth_view);
            }
        }
    }

    fn global_uniforms(scene: &Scene, pose: &FramePose, view: &ViewPose) -> GlobalUniforms {
        let mut point_lights = [GpuPointLight {
            position: Vec4::ZERO,
            color: Vec4::ZERO,
        }; MAX_POINT_LIGHTS];
        for (gpu_light, light) in point_lights.iter_mut().zip(&pose.point_lights) {
            gpu_light.position = light.position.extend(1.0);
            gpu_light.color = light.color.extend(1.0);
        }

        GlobalUniforms {
            view_projection: view.view_projection,
            view_projection_inverse: view.view_projection_inverse,
            light_view_projection: pose.light_view_projection,
            camera_position: view.eye.extend(1.0),
            ambient_color: scene.ambient_color,
            shadow_light_position: scene.shadow_light.position.extend(1.0),
            shadow_light_color: scene.shadow_light.color.extend(1.0),
            point_lights,
            light_count: pose.point_lights.len().min(MAX_POINT_LIGHTS) as u32,
            time: pose.time,
            min_shadow: scene.shadow_light.config.min_visibility,
            shadow_bias: scene.shadow_light.config.depth_bias,
        }
    }

    /// Renders one frame at `time` seconds of elapsed animation.
    pub fn render(&mut self, ctx: &WgpuContext, scene: &Scene, time: f32) -> Result<()> {
        let (width, height) = ctx.size();
        if width == 0 || height == 0 {
            return Ok(());
        }
        let aspect = width as f32 / height as f32;

        let pose = scene.pose_at(time, aspect);
        let queue = &ctx.queue;

        // --- Upload per-frame uniforms -----------------------------------
        self.globals.write(
            queue,
            GLOBALS_MAIN,
            &Self::global_uniforms(scene, &pose, &pose.main),
        );
        if let Some(reflection) = &pose.reflection {
            self.globals.write(
                queue,
                GLOBALS_REFLECTION,
                &Self::global_uniforms(scene, &pose, reflection),
            );
        }

        for (index, object) in scene.objects.iter().enumerate() {
            let object_pose = &pose.objects[index];
            let uniforms = ObjectUniforms {
                model: object_pose.model,
                mvp: pose.main.view_projection * object_pose.model,
                light_mvp: pose.light_view_projection * object_pose.model,
                normal_matrix: object_pose.normal_matrix,
                base_color: object.base_color,
                params: Vec4::new(object.reflectivity, 0.0, 0.0, 0.0),
            };
            self.objects.write(queue, index as u32, &uniforms);

            if let Some(reflection) = &pose.reflection {
                self.objects.write(
                    queue,
                    self.object_count + index as u32,
                    &ObjectUniforms {
                        mvp: reflection.view_projection * object_pose.model,
                        ..uniforms
                    },
                );
            }
        }

        if let (Some(mirror_pass), Some(mirror), Some(mirror_model)) =
            (&self.mirror, &scene.mirror, &pose.mirror_model)
        {
            mirror_pass.write(
                queue,
                &MirrorUniforms {
                    mvp: pose.main.view_projection * *mirror_model,
                    params: Vec4::new(
                        width as f32,
                        height as f32,
                        mirror.distortion_strength,
                        0.0,
                    ),
                },
            );
        }

        if let (Some(post_pass), Some(post)) = (&self.post, &scene.post) {
            post_pass.write(queue, post, scene.camera.near, scene.camera.far);
        }

        // --- Acquire the surface -----------------------------------------
        let frame = match ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        let surface_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let color_format = ctx.color_format();

        // --- 1. Shadow pass ----------------------------------------------
        self.shadow
            .run(&mut encoder, &self.objects, &self.geometries, &self.draws);

        // --- 2. Reflection pass: mirrored camera into the offscreen target
        if pose.reflection.is_some() {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Reflection Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.reflection_target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.reflection_target.depth_view,
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

            self.skybox
                .record(&mut pass, color_format, &self.globals, GLOBALS_REFLECTION);
            self.opaque.record(
                &mut pass,
                color_format,
                ViewKind::Mirrored,
                &self.globals,
                GLOBALS_REFLECTION,
                &self.objects,
                &self.geometries,
                &self.reflected_draws,
            );
        }

        // --- 3. Main pass: skybox, opaque objects, mirror quad -----------
        {
            let (color_view, depth_view) = match &self.scene_target {
                Some(target) => (&target.color_view, &target.depth_view),
                None => (&surface_view, &ctx.depth_texture_view),
            };

            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(ctx.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: depth_view,
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

            self.skybox
                .record(&mut pass, color_format, &self.globals, GLOBALS_MAIN);
            self.opaque.record(
                &mut pass,
                color_format,
                ViewKind::Main,
                &self.globals,
                GLOBALS_MAIN,
                &self.objects,
                &self.geometries,
                &self.draws,
            );

            if let (Some(mirror_pass), Some(mirror)) = (&self.mirror, &scene.mirror) {
                if pose.mirror_model.is_some() {
                    mirror_pass.record(&mut pass, &self.geometries[mirror.geometry]);
                }
            }
        }

        // --- 4. Post-process into the surface ----------------------------
        if let Some(post_pass) = &self.post {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Post Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
            post_pass.record(&mut pass);
        }

        queue.submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }
}
