//! Stereojet - anaglyph flight demo
//!
//! Flies a jet over a scrolling procedural valley and composes a left and
//! right eye pass every frame for red/cyan glasses.

use log::{debug, error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use stereojet::config::AppConfig;
use stereojet::input::{InputAction, InputMapper};
use stereojet::systems::{FrameLogRenderer, FrameState, SimulationSystem, WindowSystem};
use stereojet_geometry::GeometryError;
use stereojet_scene::{
    ControlState, FlightController, FlightState, Scene, StereoCamera, StereoRenderer,
};

/// Log draw statistics this often
const STATS_INTERVAL: u64 = 300;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    scene: Scene,
    renderer: FrameLogRenderer,
    camera: StereoCamera,
    flight: FlightState,
    controller: FlightController,
    controls: ControlState,
    mapper: InputMapper,
    simulation: SimulationSystem,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, GeometryError> {
        let settings = config.scene_settings();
        let scene = match config.terrain.seed {
            Some(seed) => {
                info!("Generating terrain from seed {}", seed);
                Scene::build_with(&settings, &mut StdRng::seed_from_u64(seed))?
            }
            None => Scene::build(&settings)?,
        };

        let renderer = FrameLogRenderer::from_config(&config.rendering);

        Ok(Self {
            window: None,
            scene,
            renderer,
            camera: config.camera(),
            flight: config.flight(),
            controller: config.controller(),
            controls: config.controls(),
            mapper: InputMapper::from_config(&config.controls),
            simulation: SimulationSystem::new().with_max_frame_dt(config.simulation.max_frame_dt),
            config,
        })
    }

    /// Put camera, jet and terrain back at their start
    fn reset_view(&mut self) {
        self.camera = self.config.camera();
        self.flight.reset();
        self.scene.strip_mut().reset();
        self.controller.release_all();
        info!("View reset to starting position");
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetView => self.reset_view(),
            adjustment => {
                if self.mapper.apply(adjustment, &mut self.controls) {
                    let c = &self.controls;
                    info!(
                        "IPD {:.3}, scroll {:.1}, flaps {:.0}, stabilizers {:.0}/{:.0}, body {:?}, sun {:?}",
                        c.ipd,
                        c.scroll_speed,
                        c.wing_flaps,
                        c.vertical_stabilizers,
                        c.horizontal_stabilizers,
                        c.body_offsets(),
                        c.sun_color
                    );
                }
            }
        }
    }

    fn redraw(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let state = FrameState {
            scene: &mut self.scene,
            camera: &mut self.camera,
            flight: &mut self.flight,
            controller: &mut self.controller,
            controls: &self.controls,
        };
        match self.simulation.update(state, window.aspect_ratio()) {
            Ok(result) => {
                if let Err(e) = self.renderer.render_frame(&result.frame) {
                    error!("Frame render failed: {}", e);
                }
            }
            Err(e) => error!("Frame composition failed: {}", e),
        }

        let frames = self.renderer.frames();
        if frames > 0 && frames % STATS_INTERVAL == 0 {
            let stats = self.renderer.last_frame();
            debug!(
                "Frame {}: {} filled, {} wireframe draws, {} indices",
                frames, stats.triangle_draws, stats.line_draws, stats.indices
            );
        }

        if self.config.debug.show_overlay {
            window.update_title(self.flight.position, self.controls.ipd);
        }

        // Request next frame
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.scene.upload_all(&mut self.renderer) {
            error!("Model upload failed: {}", e);
            event_loop.exit();
            return;
        }
        info!("Uploaded {} models", self.renderer.model_count());

        window.request_redraw();
        self.window = Some(window);
        self.simulation.reset_clock();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused
                self.controller.release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match self.mapper.map_keyboard(key, event.state) {
                        Some(action) => self.handle_action(action, event_loop),
                        None => {
                            // Pass to controller for flight keys
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.controller.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => self.redraw(),

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
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    info!("Starting stereojet");

    let config = loaded.unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut app = App::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(&mut app)?;
    Ok(())
}
