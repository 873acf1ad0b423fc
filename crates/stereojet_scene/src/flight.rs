//! Jet flight model: attitude integration, damping and bounded movement

use stereojet_input::FlightControl;

/// Axis-aligned box the jet is confined to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightBounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Default for FlightBounds {
    fn default() -> Self {
        Self {
            min: [-2.0, -5.0, 0.2],
            max: [2.0, 2.0, 2.5],
        }
    }
}

impl FlightBounds {
    /// Clamp each axis independently
    pub fn clamp(&self, position: [f32; 3]) -> [f32; 3] {
        std::array::from_fn(|i| position[i].max(self.min[i]).min(self.max[i]))
    }
}

/// Position and attitude of the jet
#[derive(Clone, Debug, PartialEq)]
pub struct FlightState {
    pub position: [f32; 3],
    /// Degrees
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    /// Degrees
    pub roll: f32,
    /// Forward speed in world units per second
    pub speed: f32,
    /// Per-frame multiplier applied to yaw, pitch and roll
    pub damping: f32,
    pub bounds: FlightBounds,
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightState {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            speed: 5.0,
            damping: 0.95,
            bounds: FlightBounds::default(),
        }
    }

    /// Builder: set forward speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: set attitude damping
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Builder: set the flight box
    pub fn with_bounds(mut self, bounds: FlightBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Unit-ish heading `(sin yaw, cos yaw, sin pitch)`
    pub fn heading(&self) -> [f32; 3] {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        [yaw.sin(), yaw.cos(), pitch.sin()]
    }

    /// Damp the attitude, then fly along the heading for `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.yaw *= self.damping;
        self.pitch *= self.damping;
        self.roll *= self.damping;

        let heading = self.heading();
        let step = self.speed * dt;
        let moved = std::array::from_fn(|i| self.position[i] + heading[i] * step);
        self.position = self.bounds.clamp(moved);
    }

    /// Attitude as `[yaw, pitch, roll]`
    pub fn attitude(&self) -> [f32; 3] {
        [self.yaw, self.pitch, self.roll]
    }

    /// Back to the start position, level
    pub fn reset(&mut self) {
        self.position = [0.0, 0.0, 0.0];
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.roll = 0.0;
    }
}

impl FlightControl for FlightState {
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_clamp_pins_only_violating_axis() {
        let bounds = FlightBounds::default();
        assert_eq!(bounds.clamp([3.0, 0.0, 1.0]), [2.0, 0.0, 1.0]);
        assert_eq!(bounds.clamp([0.5, -9.0, 1.0]), [0.5, -5.0, 1.0]);
        assert_eq!(bounds.clamp([0.5, 1.0, 0.0]), [0.5, 1.0, 0.2]);
        assert_eq!(bounds.clamp([0.5, 1.0, 3.0]), [0.5, 1.0, 2.5]);
        assert_eq!(bounds.clamp([-0.5, 1.0, 1.0]), [-0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_level_flight_moves_along_y() {
        let mut flight = FlightState::new();
        flight.position = [0.0, 0.0, 1.0];
        flight.advance(0.1);
        assert!(approx_eq(flight.position[0], 0.0));
        assert!(approx_eq(flight.position[1], 0.5));
        assert!(approx_eq(flight.position[2], 1.0));
    }

    #[test]
    fn test_start_position_lifts_to_floor() {
        // The jet starts below the box floor and is pinned there on the first step
        let mut flight = FlightState::new();
        flight.advance(0.0);
        assert_eq!(flight.position, [0.0, 0.0, 0.2]);
    }

    #[test]
    fn test_forward_travel_stops_at_bound() {
        let mut flight = FlightState::new();
        for _ in 0..100 {
            flight.advance(0.1);
        }
        assert_eq!(flight.position[1], 2.0);
    }

    #[test]
    fn test_damping_decays_attitude() {
        let mut flight = FlightState::new();
        flight.rotate(10.0, -20.0);
        flight.roll = 4.0;
        flight.advance(0.0);
        assert!(approx_eq(flight.yaw, 9.5));
        assert!(approx_eq(flight.pitch, -19.0));
        assert!(approx_eq(flight.roll, 3.8));
    }

    #[test]
    fn test_heading_follows_yaw_and_pitch() {
        let mut flight = FlightState::new();
        flight.yaw = 90.0;
        flight.pitch = 30.0;
        let [x, y, z] = flight.heading();
        assert!(approx_eq(x, 1.0));
        assert!(approx_eq(y, 0.0));
        assert!(approx_eq(z, 0.5));
    }

    #[test]
    fn test_reset() {
        let mut flight = FlightState::new().with_speed(2.0).with_damping(0.5);
        flight.rotate(30.0, 10.0);
        flight.advance(1.0);
        flight.reset();
        assert_eq!(flight.position, [0.0, 0.0, 0.0]);
        assert_eq!(flight.attitude(), [0.0, 0.0, 0.0]);
        assert_eq!(flight.speed, 2.0);
    }
}
