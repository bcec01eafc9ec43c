//! wire4d - 3D/4D Wireframe Viewer
//!
//! Projects parametric shapes and a tesseract through an orthographic,
//! perspective or 4D perspective camera onto a flat canvas.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use wire4d::config::{AppConfig, ConfigError};
use wire4d::input::{InputAction, InputMapper};
use wire4d::systems::{RenderError, RenderSystem, SimulationState, WindowSystem};
use wire4d_core::{Scene, SHAPE_CATALOG};
use wire4d_input::InputState;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationState,
    input: InputState,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = load_scene(&config);
        log::info!("Scene '{}' with {} objects", scene.name, scene.len());

        let input = InputState::new()
            .with_zoom_range(config.input.zoom_min, config.input.zoom_max)
            .with_zoom_step(config.input.zoom_step)
            .with_zoom(config.input.zoom);
        let simulation = SimulationState::new(&config, scene);

        Self {
            config,
            window: None,
            render: None,
            simulation,
            input,
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ToggleCursor => {
                self.input.set_rotate_mode(false);
                if let Some(window) = &mut self.window {
                    window.release_cursor();
                }
            }
            InputAction::ToggleRotate => {
                let enabled = !self.input.rotate_mode();
                self.input.set_rotate_mode(enabled);
                if let Some(window) = &mut self.window {
                    if enabled {
                        window.capture_cursor();
                    } else {
                        window.release_cursor();
                    }
                }
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            _ => {
                self.simulation.apply(action);
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let snapshot = self.input.snapshot();
        self.simulation.update(&snapshot);

        if let Some(window) = &self.window {
            let camera = self.simulation.camera();
            window.update_title(camera.kind(), camera.position(), self.simulation.view().zoom);
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(&self.simulation) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Scene file from the config, or a single object selector entry
fn load_scene(config: &AppConfig) -> Scene {
    if !config.scene.path.is_empty() {
        match Scene::load(&config.scene.path) {
            Ok(scene) => return scene,
            Err(e) => log::warn!("Failed to load scene '{}': {}", config.scene.path, e),
        }
    }

    let mut scene = Scene::new(config.scene.object.clone());
    if let Err(e) = scene.select(&config.scene.object) {
        log::warn!("{}. Using '{}'.", e, SHAPE_CATALOG[0]);
        scene = Scene::new(SHAPE_CATALOG[0]);
        if let Err(e) = scene.select(SHAPE_CATALOG[0]) {
            log::error!("Failed to build '{}': {}", SHAPE_CATALOG[0], e);
        }
    }
    scene
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            Arc::clone(window.window()),
            &self.config.rendering,
            self.config.window.vsync,
        ) {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::Focused(false) => {
                self.input.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let captured = self
                        .window
                        .as_ref()
                        .is_some_and(|w| w.is_cursor_captured());
                    match InputMapper::map_keyboard(key, event.state, captured) {
                        Some(action) => self.handle_action(action, event_loop),
                        None => {
                            self.input.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.input.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Configuration first so the log level can come from it
    let loaded: Result<AppConfig, ConfigError> = AppConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("Starting wire4d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
