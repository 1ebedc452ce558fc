//! Application Shell
//!
//! Thin winit wrapper: creates the window, initializes the GPU context and
//! frame renderer on resume, and drives one frame per redraw. The host's
//! refresh callback is the only scheduler — each redraw is one complete
//! frame, nothing runs between them.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::render::{FrameRenderer, RenderSettings, WgpuContext};
use crate::scene::Scene;
use crate::utils::fps_counter::FpsCounter;
use crate::utils::time::Timer;

struct RenderState {
    ctx: WgpuContext,
    renderer: FrameRenderer,
}

/// Windowed application driving a [`FrameRenderer`] over a [`Scene`].
pub struct App {
    title: String,
    settings: RenderSettings,
    scene: Scene,

    window: Option<Arc<Window>>,
    state: Option<RenderState>,

    timer: Timer,
    fps_counter: FpsCounter,
}

impl App {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            title: "Specular".into(),
            settings: RenderSettings::default(),
            scene,
            window: None,
            state: None,
            timer: Timer::new(),
            fps_counter: FpsCounter::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the frame loop until the window closes.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
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

        log::info!("Initializing renderer backend...");
        let size = window.inner_size();
        match pollster::block_on(WgpuContext::new(
            window,
            &self.settings,
            size.width.max(1),
            size.height.max(1),
        )) {
            Ok(ctx) => {
                let renderer = FrameRenderer::new(&ctx, &self.scene);
                self.state = Some(RenderState { ctx, renderer });
                self.timer = Timer::new();
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
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(state) = &mut self.state {
                    state.ctx.resize(physical_size.width, physical_size.height);
                    state.renderer.resize(&state.ctx);
                }
            }
            WindowEvent::RedrawRequested => {
                self.timer.tick();

                if let Some(state) = &mut self.state {
                    let time = self.timer.elapsed.as_secs_f32();
                    if let Err(e) = state.renderer.render(&state.ctx, &self.scene, time) {
                        log::error!("Render error: {e}");
                        event_loop.exit();
                        return;
                    }
                }

                if let Some(fps) = self.fps_counter.update() {
                    if let Some(window) = &self.window {
                        window.set_title(&format!("{} | FPS: {fps:.2}", self.title));
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
