//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit, ResetView and the
//! runtime knob adjustments. Flight keys (WASD) are NOT mapped here - they
//! go directly to the FlightController.
//!
//! | Keys | Knob |
//! |---|---|
//! | `[` / `]` | IPD |
//! | `-` / `=` | terrain scroll speed |
//! | `F` / `V` | wing flaps |
//! | `T` / `G` | vertical stabilizers |
//! | `Y` / `H` | horizontal stabilizers |
//! | `J` / `L` | body yaw |
//! | `I` / `K` | body pitch |
//! | `U` / `O` | body roll |
//! | `C` | next sun colour |

use log::warn;
use stereojet_scene::ControlState;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::ControlsConfig;

/// Actions triggered by special input (not flight)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Put the camera, jet and terrain back at their start (R key)
    ResetView,
    /// Change the interpupillary distance
    AdjustIpd(f32),
    /// Change terrain scroll speed
    AdjustScrollSpeed(f32),
    /// Deflect the wing flaps, in degrees
    AdjustWingFlaps(f32),
    /// Deflect the vertical stabilizers, in degrees
    AdjustVerticalStabilizers(f32),
    /// Deflect the horizontal stabilizers, in degrees
    AdjustHorizontalStabilizers(f32),
    /// Offset the body by `[yaw, pitch, roll]` degrees
    AdjustBody([f32; 3]),
    /// Switch the sun to the next preset tint
    CycleSunColor,
}

/// Maps raw input events to semantic actions
///
/// Holds the step size of each adjustable knob and the sun colour cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMapper {
    pub ipd_step: f32,
    pub scroll_step: f32,
    pub flap_step: f32,
    pub body_step: f32,
    sun_presets: Vec<String>,
    sun_index: usize,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::from_config(&ControlsConfig::default())
    }
}

impl InputMapper {
    /// Create a mapper with the configured step sizes
    pub fn from_config(config: &ControlsConfig) -> Self {
        Self {
            ipd_step: config.ipd_step,
            scroll_step: config.scroll_step,
            flap_step: config.flap_step,
            body_step: config.body_step,
            sun_presets: config.sun_presets.clone(),
            sun_index: 0,
        }
    }

    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for flight keys
    pub fn map_keyboard(&self, key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        let body = self.body_step;
        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetView),
            KeyCode::BracketLeft => Some(InputAction::AdjustIpd(-self.ipd_step)),
            KeyCode::BracketRight => Some(InputAction::AdjustIpd(self.ipd_step)),
            KeyCode::Minus => Some(InputAction::AdjustScrollSpeed(-self.scroll_step)),
            KeyCode::Equal => Some(InputAction::AdjustScrollSpeed(self.scroll_step)),
            KeyCode::KeyF => Some(InputAction::AdjustWingFlaps(self.flap_step)),
            KeyCode::KeyV => Some(InputAction::AdjustWingFlaps(-self.flap_step)),
            KeyCode::KeyT => Some(InputAction::AdjustVerticalStabilizers(self.flap_step)),
            KeyCode::KeyG => Some(InputAction::AdjustVerticalStabilizers(-self.flap_step)),
            KeyCode::KeyY => Some(InputAction::AdjustHorizontalStabilizers(self.flap_step)),
            KeyCode::KeyH => Some(InputAction::AdjustHorizontalStabilizers(-self.flap_step)),
            KeyCode::KeyJ => Some(InputAction::AdjustBody([-body, 0.0, 0.0])),
            KeyCode::KeyL => Some(InputAction::AdjustBody([body, 0.0, 0.0])),
            KeyCode::KeyI => Some(InputAction::AdjustBody([0.0, body, 0.0])),
            KeyCode::KeyK => Some(InputAction::AdjustBody([0.0, -body, 0.0])),
            KeyCode::KeyU => Some(InputAction::AdjustBody([0.0, 0.0, -body])),
            KeyCode::KeyO => Some(InputAction::AdjustBody([0.0, 0.0, body])),
            KeyCode::KeyC => Some(InputAction::CycleSunColor),
            _ => None, // Flight keys handled by controller
        }
    }

    /// Apply a knob adjustment to the control state
    ///
    /// Returns `false` when nothing changed: for Exit and ResetView, and
    /// when the sun cycle has no usable preset.
    pub fn apply(&mut self, action: InputAction, controls: &mut ControlState) -> bool {
        match action {
            InputAction::AdjustIpd(delta) => controls.adjust_ipd(delta),
            InputAction::AdjustScrollSpeed(delta) => controls.adjust_scroll_speed(delta),
            InputAction::AdjustWingFlaps(delta) => controls.adjust_wing_flaps(delta),
            InputAction::AdjustVerticalStabilizers(delta) => controls.adjust_vertical_stabilizers(delta),
            InputAction::AdjustHorizontalStabilizers(delta) => {
                controls.adjust_horizontal_stabilizers(delta)
            }
            InputAction::AdjustBody(delta) => controls.adjust_body_offsets(delta),
            InputAction::CycleSunColor => return self.next_sun_color(controls),
            InputAction::Exit | InputAction::ResetView => return false,
        }
        true
    }

    /// Preset the sun cycle currently points at
    pub fn sun_preset(&self) -> Option<&str> {
        self.sun_presets.get(self.sun_index).map(String::as_str)
    }

    fn next_sun_color(&mut self, controls: &mut ControlState) -> bool {
        if self.sun_presets.is_empty() {
            return false;
        }
        self.sun_index = (self.sun_index + 1) % self.sun_presets.len();
        let hex = &self.sun_presets[self.sun_index];
        match controls.set_sun_color_hex(hex) {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping sun preset: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn press(mapper: &InputMapper, key: KeyCode) -> Option<InputAction> {
        mapper.map_keyboard(key, ElementState::Pressed)
    }

    #[test]
    fn test_escape_exits() {
        assert_eq!(press(&InputMapper::default(), KeyCode::Escape), Some(InputAction::Exit));
    }

    #[test]
    fn test_flight_keys_not_mapped() {
        // WASD should return None (handled by controller)
        let mapper = InputMapper::default();
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            assert_eq!(press(&mapper, key), None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let mapper = InputMapper::default();
        assert_eq!(mapper.map_keyboard(KeyCode::Escape, ElementState::Released), None);
        assert_eq!(mapper.map_keyboard(KeyCode::BracketRight, ElementState::Released), None);
        assert_eq!(mapper.map_keyboard(KeyCode::KeyC, ElementState::Released), None);
    }

    #[test]
    fn test_adjustment_keys() {
        let mapper = InputMapper::default();

        assert_eq!(press(&mapper, KeyCode::KeyR), Some(InputAction::ResetView));
        assert_eq!(press(&mapper, KeyCode::BracketLeft), Some(InputAction::AdjustIpd(-0.005)));
        assert_eq!(press(&mapper, KeyCode::BracketRight), Some(InputAction::AdjustIpd(0.005)));
        assert_eq!(press(&mapper, KeyCode::Minus), Some(InputAction::AdjustScrollSpeed(-0.1)));
        assert_eq!(press(&mapper, KeyCode::Equal), Some(InputAction::AdjustScrollSpeed(0.1)));
        assert_eq!(press(&mapper, KeyCode::KeyF), Some(InputAction::AdjustWingFlaps(5.0)));
        assert_eq!(press(&mapper, KeyCode::KeyV), Some(InputAction::AdjustWingFlaps(-5.0)));
    }

    #[test]
    fn test_stabilizer_keys() {
        let mapper = InputMapper::default();
        assert_eq!(press(&mapper, KeyCode::KeyT), Some(InputAction::AdjustVerticalStabilizers(5.0)));
        assert_eq!(press(&mapper, KeyCode::KeyG), Some(InputAction::AdjustVerticalStabilizers(-5.0)));
        assert_eq!(press(&mapper, KeyCode::KeyY), Some(InputAction::AdjustHorizontalStabilizers(5.0)));
        assert_eq!(press(&mapper, KeyCode::KeyH), Some(InputAction::AdjustHorizontalStabilizers(-5.0)));
    }

    #[test]
    fn test_body_offset_keys() {
        let mapper = InputMapper::default();
        assert_eq!(press(&mapper, KeyCode::KeyJ), Some(InputAction::AdjustBody([-5.0, 0.0, 0.0])));
        assert_eq!(press(&mapper, KeyCode::KeyL), Some(InputAction::AdjustBody([5.0, 0.0, 0.0])));
        assert_eq!(press(&mapper, KeyCode::KeyI), Some(InputAction::AdjustBody([0.0, 5.0, 0.0])));
        assert_eq!(press(&mapper, KeyCode::KeyK), Some(InputAction::AdjustBody([0.0, -5.0, 0.0])));
        assert_eq!(press(&mapper, KeyCode::KeyU), Some(InputAction::AdjustBody([0.0, 0.0, -5.0])));
        assert_eq!(press(&mapper, KeyCode::KeyO), Some(InputAction::AdjustBody([0.0, 0.0, 5.0])));
        assert_eq!(press(&mapper, KeyCode::KeyC), Some(InputAction::CycleSunColor));
    }

    #[test]
    fn test_steps_from_config() {
        let config = ControlsConfig {
            ipd_step: 0.01,
            body_step: 2.0,
            ..ControlsConfig::default()
        };
        let mapper = InputMapper::from_config(&config);
        assert_eq!(press(&mapper, KeyCode::BracketRight), Some(InputAction::AdjustIpd(0.01)));
        assert_eq!(press(&mapper, KeyCode::KeyL), Some(InputAction::AdjustBody([2.0, 0.0, 0.0])));
    }

    #[test]
    fn test_apply_adjustments() {
        let mut mapper = InputMapper::default();
        let mut controls = ControlState::default();
        assert!(mapper.apply(InputAction::AdjustIpd(0.005), &mut controls));
        assert!(mapper.apply(InputAction::AdjustIpd(0.005), &mut controls));
        assert!(approx_eq(controls.ipd, 0.01));

        assert!(mapper.apply(InputAction::AdjustScrollSpeed(0.1), &mut controls));
        assert!(approx_eq(controls.scroll_speed, 1.6));

        assert!(mapper.apply(InputAction::AdjustWingFlaps(-5.0), &mut controls));
        assert!(approx_eq(controls.wing_flaps, -5.0));
    }

    #[test]
    fn test_apply_surfaces_and_body() {
        let mut mapper = InputMapper::default();
        let mut controls = ControlState::default();
        for key in [KeyCode::KeyT, KeyCode::KeyT, KeyCode::KeyH, KeyCode::KeyL, KeyCode::KeyI, KeyCode::KeyU] {
            let action = press(&mapper, key).unwrap();
            assert!(mapper.apply(action, &mut controls));
        }
        assert_eq!(controls.vertical_stabilizers, 10.0);
        assert_eq!(controls.horizontal_stabilizers, -5.0);
        assert_eq!(controls.body_offsets(), [5.0, 5.0, -5.0]);
    }

    #[test]
    fn test_sun_color_cycles_and_wraps() {
        let config = ControlsConfig {
            sun_presets: vec!["#ffffff".to_string(), "#ff0000".to_string()],
            ..ControlsConfig::default()
        };
        let mut mapper = InputMapper::from_config(&config);
        let mut controls = ControlState::default();

        assert!(mapper.apply(InputAction::CycleSunColor, &mut controls));
        assert_eq!(controls.sun_color, [1.0, 0.0, 0.0]);
        assert_eq!(mapper.sun_preset(), Some("#ff0000"));

        assert!(mapper.apply(InputAction::CycleSunColor, &mut controls));
        assert_eq!(controls.sun_color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_bad_or_missing_sun_presets() {
        let mut controls = ControlState::default();

        let mut bad = InputMapper::from_config(&ControlsConfig {
            sun_presets: vec!["#ffffff".to_string(), "orange".to_string()],
            ..ControlsConfig::default()
        });
        assert!(!bad.apply(InputAction::CycleSunColor, &mut controls));
        assert_eq!(controls.sun_color, [1.0, 1.0, 1.0]);

        let mut empty = InputMapper::from_config(&ControlsConfig {
            sun_presets: Vec::new(),
            ..ControlsConfig::default()
        });
        assert!(!empty.apply(InputAction::CycleSunColor, &mut controls));
        assert_eq!(empty.sun_preset(), None);
    }

    #[test]
    fn test_ipd_never_negative() {
        let mut mapper = InputMapper::default();
        let mut controls = ControlState::default();
        mapper.apply(InputAction::AdjustIpd(-0.005), &mut controls);
        assert_eq!(controls.ipd, 0.0);
    }

    #[test]
    fn test_non_adjustments_leave_controls() {
        let mut mapper = InputMapper::default();
        let mut controls = ControlState::default();
        assert!(!mapper.apply(InputAction::Exit, &mut controls));
        assert!(!mapper.apply(InputAction::ResetView, &mut controls));
        assert_eq!(controls, ControlState::default());
    }
}
