//! Flight controller for the jet and the viewing rig
//!
//! Controls:
//! - A/D: Yaw left/right
//! - W/S: Pitch down/up
//! - Mouse wheel: Move the camera up/down (never below z = 0)
//! - Left-click + drag: Pan the camera across X and Z

use bitflags::bitflags;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Pixels per wheel notch when the platform reports line deltas
const PIXELS_PER_LINE: f32 = 100.0;

bitflags! {
    /// Attitude keys currently held down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct HeldKeys: u8 {
        /// A - yaw toward -X
        const YAW_LEFT = 1 << 0;
        /// D - yaw toward +X
        const YAW_RIGHT = 1 << 1;
        /// S - nose up
        const PITCH_UP = 1 << 2;
        /// W - nose down
        const PITCH_DOWN = 1 << 3;
    }
}

/// Input state accumulated between frames
pub struct FlightController {
    held: HeldKeys,

    // Mouse state
    mouse_pressed: bool,
    pending_drag_x: f32,
    pending_drag_y: f32,
    pending_scroll: f32,

    // Configuration
    pub rotation_speed: f32, // Degrees per second while a key is held
    pub zoom_speed: f32,
    pub pan_speed: f32,
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightController {
    pub fn new() -> Self {
        Self {
            held: HeldKeys::empty(),

            mouse_pressed: false,
            pending_drag_x: 0.0,
            pending_drag_y: 0.0,
            pending_scroll: 0.0,

            rotation_speed: 115.0,
            zoom_speed: 0.01,
            pan_speed: 0.1,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is a flight key.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let flag = match key {
            KeyCode::KeyA => HeldKeys::YAW_LEFT,
            KeyCode::KeyD => HeldKeys::YAW_RIGHT,
            KeyCode::KeyS => HeldKeys::PITCH_UP,
            KeyCode::KeyW => HeldKeys::PITCH_DOWN,
            _ => return false,
        };
        self.held.set(flag, state == ElementState::Pressed);
        true
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process mouse movement; ignored unless the left button is held
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if self.mouse_pressed {
            self.pending_drag_x += delta_x as f32;
            self.pending_drag_y += delta_y as f32;
        }
    }

    /// Process a mouse wheel event
    ///
    /// Deltas are stored as pixels, positive when scrolling toward the user,
    /// so pulling the wheel back raises the camera.
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
        };
        self.pending_scroll += delta_y;
    }

    /// Apply held attitude keys to the jet for a frame of length `dt`
    pub fn update_flight<F: FlightControl>(&self, flight: &mut F, dt: f32) {
        let (yaw, pitch) = self.attitude_input();
        let step = self.rotation_speed * dt;
        flight.rotate(yaw * step, pitch * step);
    }

    /// Apply accumulated wheel and drag input to the camera rig
    ///
    /// Returns the camera position for debug display.
    pub fn update_camera<C: CameraRig>(&mut self, rig: &mut C) -> [f32; 3] {
        if self.pending_scroll != 0.0 {
            rig.zoom(self.pending_scroll * self.zoom_speed);
        }
        if self.pending_drag_x != 0.0 || self.pending_drag_y != 0.0 {
            rig.pan(
                -self.pending_drag_x * self.pan_speed,
                self.pending_drag_y * self.pan_speed,
            );
        }

        // Reset pending mouse movement
        self.pending_scroll = 0.0;
        self.pending_drag_x = 0.0;
        self.pending_drag_y = 0.0;

        rig.position()
    }

    /// Keys currently held
    pub fn held_keys(&self) -> HeldKeys {
        self.held
    }

    /// Check if any attitude key is pressed
    pub fn is_steering(&self) -> bool {
        !self.held.is_empty()
    }

    /// Get raw attitude input
    ///
    /// Returns (yaw, pitch) in -1.0 to 1.0. Yaw is positive for D, pitch
    /// is positive for S.
    pub fn attitude_input(&self) -> (f32, f32) {
        let axis = |pos: HeldKeys, neg: HeldKeys| {
            (self.held.contains(pos) as i32 - self.held.contains(neg) as i32) as f32
        };
        (
            axis(HeldKeys::YAW_RIGHT, HeldKeys::YAW_LEFT),
            axis(HeldKeys::PITCH_UP, HeldKeys::PITCH_DOWN),
        )
    }

    /// Release every held key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held = HeldKeys::empty();
        self.mouse_pressed = false;
    }

    /// Builder: set attitude rate in degrees per second
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: set wheel zoom factor
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Builder: set drag pan factor
    pub fn with_pan_speed(mut self, speed: f32) -> Self {
        self.pan_speed = speed;
        self
    }
}

/// Trait for jet attitude control
pub trait FlightControl {
    /// Add yaw and pitch, in degrees
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
}

/// Trait for the viewing camera the mouse drives
pub trait CameraRig {
    /// Move the camera along world Z
    fn zoom(&mut self, delta_z: f32);
    /// Move the camera along world X and Z
    fn pan(&mut self, delta_x: f32, delta_z: f32);
    fn position(&self) -> [f32; 3];
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[derive(Default)]
    struct Attitude {
        yaw: f32,
        pitch: f32,
    }

    impl FlightControl for Attitude {
        fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }
    }

    struct Rig([f32; 3]);

    impl CameraRig for Rig {
        fn zoom(&mut self, delta_z: f32) {
            self.0[2] = (self.0[2] + delta_z).max(0.0);
        }

        fn pan(&mut self, delta_x: f32, delta_z: f32) {
            self.0[0] += delta_x;
            self.0[2] += delta_z;
        }

        fn position(&self) -> [f32; 3] {
            self.0
        }
    }

    #[test]
    fn test_flight_keys_are_consumed() {
        let mut controller = FlightController::new();
        assert!(controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed));
        assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert!(!controller.process_keyboard(KeyCode::KeyQ, ElementState::Pressed));
        assert_eq!(controller.held_keys(), HeldKeys::YAW_LEFT | HeldKeys::PITCH_DOWN);

        controller.process_keyboard(KeyCode::KeyA, ElementState::Released);
        assert_eq!(controller.held_keys(), HeldKeys::PITCH_DOWN);
    }

    #[test]
    fn test_key_directions() {
        let dt = 0.1;
        for (key, yaw, pitch) in [
            (KeyCode::KeyA, -11.5, 0.0),
            (KeyCode::KeyD, 11.5, 0.0),
            (KeyCode::KeyS, 0.0, 11.5),
            (KeyCode::KeyW, 0.0, -11.5),
        ] {
            let mut controller = FlightController::new();
            controller.process_keyboard(key, ElementState::Pressed);
            let mut attitude = Attitude::default();
            controller.update_flight(&mut attitude, dt);
            assert!(approx_eq(attitude.yaw, yaw), "{:?} yaw {}", key, attitude.yaw);
            assert!(approx_eq(attitude.pitch, pitch), "{:?} pitch {}", key, attitude.pitch);
        }
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut controller = FlightController::new();
        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.attitude_input(), (0.0, 0.0));
        assert!(controller.is_steering());
    }

    #[test]
    fn test_drag_requires_left_button() {
        let mut controller = FlightController::new();
        let mut rig = Rig([0.0, -5.0, 1.5]);

        controller.process_mouse_motion(10.0, 5.0);
        assert_eq!(controller.update_camera(&mut rig), [0.0, -5.0, 1.5]);

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_motion(10.0, 5.0);
        let pos = controller.update_camera(&mut rig);
        assert!(approx_eq(pos[0], -1.0));
        assert!(approx_eq(pos[2], 2.0));

        // pending drag is consumed
        let pos = controller.update_camera(&mut rig);
        assert!(approx_eq(pos[0], -1.0));
    }

    #[test]
    fn test_scroll_zoom_clamps_at_ground() {
        let mut controller = FlightController::new();
        let mut rig = Rig([0.0, -5.0, 1.5]);

        // one notch away from the user lowers the camera by 1
        controller.process_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert!(approx_eq(controller.update_camera(&mut rig)[2], 0.5));

        controller.process_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 500.0)));
        assert_eq!(controller.update_camera(&mut rig)[2], 0.0);

        controller.process_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -50.0)));
        assert!(approx_eq(controller.update_camera(&mut rig)[2], 0.5));
    }

    #[test]
    fn test_builders_and_release() {
        let mut controller = FlightController::new()
            .with_rotation_speed(90.0)
            .with_zoom_speed(0.02)
            .with_pan_speed(0.5);
        assert_eq!(controller.rotation_speed, 90.0);
        assert_eq!(controller.zoom_speed, 0.02);
        assert_eq!(controller.pan_speed, 0.5);

        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.release_all();
        assert!(!controller.is_steering());
    }
}
