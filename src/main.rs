//! transform3d - interactive 3D transform demos
//!
//! Draws the tutorial letter F (and friends) through a configurable
//! transform chain, with keyboard control over every parameter.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use transform3d::config::AppConfig;
use transform3d::input::{InputAction, InputMapper};
use transform3d::logging::init_logging;
use transform3d::systems::{RenderError, RenderSystem, WindowSystem};
use transform3d_core::{DemoPreset, FrameTransforms, SceneParams, TransformStages};
use transform3d_input::ParamController;
use transform3d_render::RenderableGeometry;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    controller: ParamController,
    preset: DemoPreset,
    stages: TransformStages,
    params: SceneParams,
    /// Cached GPU geometry (rebuilt when the preset changes)
    geometry: RenderableGeometry,
    last_frame: Instant,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let controller = ParamController::new()
            .with_translation_speed(config.input.translation_speed)
            .with_rotation_speed(config.input.rotation_speed)
            .with_scale_speed(config.input.scale_speed)
            .with_fov_speed(config.input.fov_speed)
            .with_camera_speed(config.input.camera_speed);

        let preset = config.demo.preset;
        let mut app = Self {
            config,
            window_system: None,
            render_system: None,
            controller,
            preset,
            stages: TransformStages::empty(),
            params: SceneParams::default(),
            geometry: RenderableGeometry::default(),
            last_frame: Instant::now(),
        };
        app.select_preset(preset);
        app
    }

    /// Switch demos: stages, starting parameters and geometry
    fn select_preset(&mut self, preset: DemoPreset) {
        self.preset = preset;
        self.stages = self.config.stages_for(preset);
        self.params = self.config.params_for(preset);
        self.geometry = RenderableGeometry::from_geometry(&preset.geometry());

        if let Some(render) = &mut self.render_system {
            render.upload_geometry(&self.geometry);
        }
        log::info!(
            "Preset '{}' with stages {:?} ({} vertices)",
            preset.name(),
            self.stages,
            self.geometry.vertex_count()
        );
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetParams => {
                self.params = self.config.params_for(self.preset);
                log::info!("Parameters reset for '{}'", self.preset.name());
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window_system {
                    window.toggle_fullscreen();
                }
            }
            InputAction::NextPreset => self.select_preset(self.preset.next()),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        // Cap dt so a stalled frame does not jump the parameters
        let dt = (now - self.last_frame).as_secs_f32().min(1.0 / 30.0);
        self.last_frame = now;

        self.params = self.controller.apply(self.params, dt);

        if let Some(window) = &mut self.window_system {
            window.update_title(self.preset, self.stages, &self.params);
        }

        let Some(render) = &mut self.render_system else {
            return;
        };

        match FrameTransforms::compute(self.stages, &self.params, render.viewport()) {
            Ok(transforms) => match render.render_frame(&transforms) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            },
            Err(e) => log::warn!("Skipping frame: {}", e),
        }

        if let Some(window) = &self.window_system {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let mut render_system = match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render_system) => render_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        render_system.upload_geometry(&self.geometry);
        window_system.request_redraw();

        self.window_system = Some(window_system);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render_system {
                    render.resize(physical_size.width, physical_size.height);
                }
                log::info!("Resized to {}x{}", physical_size.width, physical_size.height);
            }

            WindowEvent::Focused(false) => {
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(action) if !event.repeat => self.handle_action(event_loop, action),
                        Some(_) => {}
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(&config.debug.log_level);
    log::info!("Starting transform3d");

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let (config, problems) = config.with_fallbacks();
    for e in problems {
        log::warn!("{}. Using a fallback value.", e);
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
