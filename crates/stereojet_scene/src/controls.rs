//! User-adjustable scene knobs
//!
//! Everything a UI can tweak between frames lives in one [`ControlState`],
//! owned by the application and passed by reference into frame composition.

use stereojet_geometry::color::hex_to_rgb;
use stereojet_geometry::GeometryError;

/// UI-driven values read once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    /// Terrain scroll rate in world units per second
    pub scroll_speed: f32,
    /// Sun and light tint (RGB)
    pub sun_color: [f32; 3],
    /// Extra yaw on top of the flight attitude (degrees)
    pub body_yaw: f32,
    /// Extra pitch on top of the flight attitude (degrees)
    pub body_pitch: f32,
    /// Extra roll on top of the flight attitude (degrees)
    pub body_roll: f32,
    /// Wing flap deflection (degrees)
    pub wing_flaps: f32,
    /// Vertical stabilizer deflection (degrees)
    pub vertical_stabilizers: f32,
    /// Horizontal stabilizer deflection (degrees)
    pub horizontal_stabilizers: f32,
    /// Interpupillary distance between the two eyes
    pub ipd: f32,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            scroll_speed: 1.5,
            sun_color: [1.0, 1.0, 1.0],
            body_yaw: 0.0,
            body_pitch: 0.0,
            body_roll: 0.0,
            wing_flaps: 0.0,
            vertical_stabilizers: 0.0,
            horizontal_stabilizers: 0.0,
            ipd: 0.0,
        }
    }
}

impl ControlState {
    /// Set the sun colour from a `#rrggbb` string
    pub fn set_sun_color_hex(&mut self, hex: &str) -> Result<(), GeometryError> {
        self.sun_color = hex_to_rgb(hex)?;
        Ok(())
    }

    /// Nudge the IPD; never goes negative
    pub fn adjust_ipd(&mut self, delta: f32) {
        self.ipd = (self.ipd + delta).max(0.0);
    }

    /// Nudge the terrain scroll speed; never goes negative
    pub fn adjust_scroll_speed(&mut self, delta: f32) {
        self.scroll_speed = (self.scroll_speed + delta).max(0.0);
    }

    pub fn adjust_wing_flaps(&mut self, delta: f32) {
        self.wing_flaps += delta;
    }

    pub fn adjust_vertical_stabilizers(&mut self, delta: f32) {
        self.vertical_stabilizers += delta;
    }

    pub fn adjust_horizontal_stabilizers(&mut self, delta: f32) {
        self.horizontal_stabilizers += delta;
    }

    /// Nudge the body offsets by `[yaw, pitch, roll]` degrees
    pub fn adjust_body_offsets(&mut self, delta: [f32; 3]) {
        self.body_yaw += delta[0];
        self.body_pitch += delta[1];
        self.body_roll += delta[2];
    }

    /// Body attitude offsets as `[yaw, pitch, roll]`
    pub fn body_offsets(&self) -> [f32; 3] {
        [self.body_yaw, self.body_pitch, self.body_roll]
    }
}
