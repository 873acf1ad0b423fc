//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SJ_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use stereojet_geometry::color::hex_to_rgb;
use stereojet_scene::{
    ControlState, FanParams, FlightBounds, FlightController, FlightState, SceneSettings,
    StereoCamera, Sun, TerrainParams,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Jet flight model
    #[serde(default)]
    pub flight: FlightConfig,
    /// Terrain generation and scrolling
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Sun placement and colour
    #[serde(default)]
    pub sun: SunConfig,
    /// Jet control-surface and stereo knobs
    #[serde(default)]
    pub controls: ControlsConfig,
    /// Frame timing
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SJ_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SJ_TERRAIN__SCROLL_SPEED=3 -> terrain.scroll_speed = 3.0
        figment = figment.merge(Env::prefixed("SJ_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Initial UI control state
    ///
    /// An unparseable sun colour falls back to white.
    pub fn controls(&self) -> ControlState {
        let sun_color = hex_to_rgb(&self.sun.color).unwrap_or_else(|e| {
            log::warn!("{}; using white", e);
            [1.0, 1.0, 1.0]
        });

        ControlState {
            scroll_speed: self.terrain.scroll_speed,
            sun_color,
            body_yaw: self.controls.body_yaw,
            body_pitch: self.controls.body_pitch,
            body_roll: self.controls.body_roll,
            wing_flaps: self.controls.wing_flaps,
            vertical_stabilizers: self.controls.vertical_stabilizers,
            horizontal_stabilizers: self.controls.horizontal_stabilizers,
            ipd: self.controls.ipd,
        }
    }

    /// Scene construction parameters
    pub fn scene_settings(&self) -> SceneSettings {
        let t = &self.terrain;
        SceneSettings {
            terrain: TerrainParams::new(t.trough_width, t.peak_height, t.length_points, t.width_points),
            section_count: t.section_count,
            section_length: t.section_length,
            sun_disc: FanParams::sun().with_segments(self.sun.segments),
            sun: Sun {
                position: self.sun.position,
                scale: self.sun.scale,
                light_offset: self.sun.light_offset,
            },
        }
    }

    /// Tracked camera at its configured start
    pub fn camera(&self) -> StereoCamera {
        let c = &self.camera;
        StereoCamera::new()
            .with_position(c.start_position)
            .with_projection(c.fov, c.near, c.far)
    }

    /// Jet flight model at its start position
    pub fn flight(&self) -> FlightState {
        let f = &self.flight;
        FlightState::new()
            .with_speed(f.speed)
            .with_damping(f.damping)
            .with_bounds(FlightBounds {
                min: f.bounds_min,
                max: f.bounds_max,
            })
    }

    /// Input controller with configured rates
    pub fn controller(&self) -> FlightController {
        FlightController::new()
            .with_rotation_speed(self.flight.rotation_speed)
            .with_zoom_speed(self.camera.zoom_speed)
            .with_pan_speed(self.camera.pan_speed)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Stereojet - Anaglyph Flight".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Camera height change per wheel pixel
    pub zoom_speed: f32,
    /// Camera move per dragged pixel
    pub pan_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, -5.0, 1.5],
            fov: 45.0,
            near: 0.01,
            far: 33.0,
            zoom_speed: 0.01,
            pan_speed: 0.1,
        }
    }
}

/// Jet flight configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Forward speed (units per second)
    pub speed: f32,
    /// Attitude change while a key is held (degrees per second)
    pub rotation_speed: f32,
    /// Per-frame attitude damping factor
    pub damping: f32,
    /// Lower corner of the flight box [x, y, z]
    pub bounds_min: [f32; 3],
    /// Upper corner of the flight box [x, y, z]
    pub bounds_max: [f32; 3],
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            rotation_speed: 115.0,
            damping: 0.95,
            bounds_min: [-2.0, -5.0, 0.2],
            bounds_max: [2.0, 2.0, 2.5],
        }
    }
}

/// Terrain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Half-width of the flat valley floor, in [0, 1)
    pub trough_width: f32,
    /// Height of the ridges at the patch edges
    pub peak_height: f32,
    /// Grid points along each section's length
    pub length_points: usize,
    /// Grid points across each section
    pub width_points: usize,
    /// Number of sections in the scrolling ring
    pub section_count: usize,
    /// Section length in model units
    pub section_length: f32,
    /// Scroll speed (units per second)
    pub scroll_speed: f32,
    /// Fixed seed for reproducible terrain; fresh randomness when unset
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            trough_width: 0.1,
            peak_height: 2.0,
            length_points: 25,
            width_points: 25,
            section_count: 4,
            section_length: 2.0,
            scroll_speed: 1.5,
            seed: None,
        }
    }
}

/// Sun configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    /// Disc centre [x, y, z]
    pub position: [f32; 3],
    /// Disc scale
    pub scale: f32,
    /// Segments in the half-disc
    pub segments: u32,
    /// Light position relative to the disc
    pub light_offset: [f32; 3],
    /// Tint as `#rrggbb`
    pub color: String,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 5.0, -0.5],
            scale: 2.0,
            segments: 64,
            light_offset: [0.0, 20.0, -10.0],
            color: "#ffffff".to_string(),
        }
    }
}

/// Control-surface and stereo configuration (all angles in degrees)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub body_yaw: f32,
    pub body_pitch: f32,
    pub body_roll: f32,
    pub wing_flaps: f32,
    pub vertical_stabilizers: f32,
    pub horizontal_stabilizers: f32,
    /// Interpupillary distance
    pub ipd: f32,
    /// IPD change per key press
    pub ipd_step: f32,
    /// Scroll speed change per key press
    pub scroll_step: f32,
    /// Flap and stabilizer change per key press
    pub flap_step: f32,
    /// Body yaw/pitch/roll offset change per key press
    pub body_step: f32,
    /// Sun tints cycled with the C key, as `#rrggbb`
    pub sun_presets: Vec<String>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            body_yaw: 0.0,
            body_pitch: 0.0,
            body_roll: 0.0,
            wing_flaps: 0.0,
            vertical_stabilizers: 0.0,
            horizontal_stabilizers: 0.0,
            ipd: 0.0,
            ipd_step: 0.005,
            scroll_step: 0.1,
            flap_step: 5.0,
            body_step: 5.0,
            sun_presets: ["#ffffff", "#ffd27f", "#ff8c42", "#ff4f4f", "#9fd8ff"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Longest frame step in seconds; longer gaps are clamped
    pub max_frame_dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { max_frame_dt: 0.25 }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Colour each eye pass is cleared to [r, g, b, a]
    pub background_color: [f32; 4],
    /// Log every draw call at trace level
    pub trace_draws: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.12, 0.03, 0.132, 1.0],
            trace_draws: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Show jet position and IPD in the window title
    pub show_overlay: bool,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_overlay: true,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.terrain.scroll_speed, 1.5);
        assert_eq!(config.simulation.max_frame_dt, 0.25);
        assert!(config.terrain.seed.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("scroll_speed"));
        assert!(toml.contains("#ffffff"));
    }

    #[test]
    fn test_controls_from_config() {
        let mut config = AppConfig::default();
        config.sun.color = "#00ff00".to_string();
        config.controls.ipd = 0.02;
        config.terrain.scroll_speed = 3.0;

        let controls = config.controls();
        assert_eq!(controls.sun_color, [0.0, 1.0, 0.0]);
        assert_eq!(controls.ipd, 0.02);
        assert_eq!(controls.scroll_speed, 3.0);
    }

    #[test]
    fn test_bad_sun_color_falls_back_to_white() {
        let mut config = AppConfig::default();
        config.sun.color = "yellow".to_string();
        assert_eq!(config.controls().sun_color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_builders_use_config() {
        let mut config = AppConfig::default();
        config.camera.start_position = [1.0, -4.0, 2.0];
        config.flight.speed = 7.0;
        config.flight.rotation_speed = 60.0;
        config.sun.segments = 16;

        assert_eq!(config.camera().position, [1.0, -4.0, 2.0]);
        assert_eq!(config.flight().speed, 7.0);
        assert_eq!(config.controller().rotation_speed, 60.0);

        let settings = config.scene_settings();
        assert_eq!(settings.sun_disc.segments, 16);
        assert_eq!(settings.terrain.length_points, 25);
        assert_eq!(settings.section_count, 4);
    }
}
