//! Frame simulation system
//!
//! Manages the per-frame update including:
//! - Delta time calculation
//! - Held keys → jet attitude, then flight integration
//! - Terrain scrolling
//! - Camera zoom/pan from the mouse
//! - Composition of both eye passes

use std::time::Instant;
use stereojet_math::MathError;
use stereojet_scene::{ControlState, FlightController, FlightState, FrameOutput, Scene, StereoCamera};

/// Result of a simulation update
pub struct SimulationResult {
    /// Seconds simulated this frame, after capping
    pub dt: f32,
    /// Both eye passes, ready for the renderer
    pub frame: FrameOutput,
}

/// Mutable state the simulation advances each frame
pub struct FrameState<'a> {
    pub scene: &'a mut Scene,
    pub camera: &'a mut StereoCamera,
    pub flight: &'a mut FlightState,
    pub controller: &'a mut FlightController,
    pub controls: &'a ControlState,
}

/// Manages the frame simulation loop
pub struct SimulationSystem {
    last_frame: Instant,
    max_frame_dt: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_frame_dt: 0.25,
        }
    }

    /// Set the longest step a single frame may take
    pub fn with_max_frame_dt(mut self, max_frame_dt: f32) -> Self {
        self.max_frame_dt = max_frame_dt;
        self
    }

    /// Restart the frame clock, so the next update does not see the pause
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(&mut self, state: FrameState<'_>, aspect_ratio: f32) -> Result<SimulationResult, MathError> {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(raw_dt, state, aspect_ratio)
    }

    /// Run one frame of `raw_dt` seconds
    pub fn step(
        &self,
        raw_dt: f32,
        state: FrameState<'_>,
        aspect_ratio: f32,
    ) -> Result<SimulationResult, MathError> {
        // Cap dt so the first frame or a window stall doesn't fling the jet
        let dt = raw_dt.clamp(0.0, self.max_frame_dt);

        // 1. Held keys steer, then the jet flies and damps
        state.controller.update_flight(state.flight, dt);
        state.flight.advance(dt);

        // 2. Scroll the terrain
        state.scene.strip_mut().advance(state.controls.scroll_speed * dt);

        // 3. Wheel/drag move the tracked camera
        state.controller.update_camera(state.camera);

        // 4. Compose both eyes
        let frame = state
            .scene
            .compose(state.camera, state.flight, state.controls, aspect_ratio)?;

        Ok(SimulationResult { dt, frame })
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stereojet_scene::{DrawMode, SceneSettings, TerrainParams};
    use winit::event::{ElementState, MouseScrollDelta};
    use winit::keyboard::KeyCode;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    struct Fixture {
        scene: Scene,
        camera: StereoCamera,
        flight: FlightState,
        controller: FlightController,
        controls: ControlState,
    }

    impl Fixture {
        fn new() -> Self {
            let settings = SceneSettings {
                terrain: TerrainParams::new(0.1, 2.0, 4, 4),
                ..SceneSettings::default()
            };
            Self {
                scene: Scene::build_with(&settings, &mut StdRng::seed_from_u64(5)).unwrap(),
                camera: StereoCamera::new(),
                flight: FlightState::new(),
                controller: FlightController::new(),
                controls: ControlState::default(),
            }
        }

        fn state(&mut self) -> FrameState<'_> {
            FrameState {
                scene: &mut self.scene,
                camera: &mut self.camera,
                flight: &mut self.flight,
                controller: &mut self.controller,
                controls: &self.controls,
            }
        }
    }

    #[test]
    fn test_delta_time_capped() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        let result = sim.step(3.0, fx.state(), 1.0).unwrap();
        assert_eq!(result.dt, 0.25);
        // 0.25 s at 1.5 units/s
        assert!(approx_eq(fx.scene.strip().scroll_offset(), 0.375));
    }

    #[test]
    fn test_negative_dt_ignored() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        fx.controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        let result = sim.step(-1.0, fx.state(), 1.0).unwrap();
        assert_eq!(result.dt, 0.0);
        // No travel, only the clamp up to the floor of the flight box
        assert_eq!(fx.flight.position, [0.0, 0.0, 0.2]);
        assert_eq!(fx.flight.yaw, 0.0);
        assert_eq!(fx.scene.strip().scroll_offset(), 0.0);
    }

    #[test]
    fn test_custom_cap() {
        let sim = SimulationSystem::new().with_max_frame_dt(0.1);
        let mut fx = Fixture::new();
        assert!(approx_eq(sim.step(1.0, fx.state(), 1.0).unwrap().dt, 0.1));
    }

    #[test]
    fn test_level_flight_moves_forward() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        sim.step(0.1, fx.state(), 1.0).unwrap();
        // heading (0, 1, 0) at speed 5
        assert!(approx_eq(fx.flight.position[1], 0.5));
        // z clamped up to the floor of the flight box
        assert!(approx_eq(fx.flight.position[2], 0.2));
    }

    #[test]
    fn test_held_key_yaws() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        fx.controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        sim.step(0.1, fx.state(), 1.0).unwrap();
        // 115 deg/s * 0.1 s, then damped once
        assert!(approx_eq(fx.flight.yaw, -11.5 * 0.95));
    }

    #[test]
    fn test_wheel_zooms_camera() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        fx.controller.process_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        sim.step(0.016, fx.state(), 1.0).unwrap();
        // one line up = -100 px * 0.01
        assert!(approx_eq(fx.camera.position[2], 0.5));

        // pending scroll is consumed
        sim.step(0.016, fx.state(), 1.0).unwrap();
        assert!(approx_eq(fx.camera.position[2], 0.5));
    }

    #[test]
    fn test_step_composes_frame() {
        let sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        let result = sim.step(0.016, fx.state(), 16.0 / 9.0).unwrap();
        assert_eq!(result.frame.left.draws.len(), 16);
        assert_eq!(result.frame.right.count(DrawMode::Lines), 4);
    }

    #[test]
    fn test_update_uses_wall_clock() {
        let mut sim = SimulationSystem::new();
        let mut fx = Fixture::new();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let result = sim.update(fx.state(), 1.0).unwrap();
        assert!(result.dt >= 0.02);
        assert!(result.dt <= 0.25);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.max_frame_dt, 0.25);
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }
}
