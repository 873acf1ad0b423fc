//! Stereo scene composition for stereojet
//!
//! This crate holds the per-frame half of the demo: the flight model, the
//! tracked stereo camera, terrain strip recycling, jet and sun placement,
//! and the composition of all of it into one draw list per eye.
//!
//! ## Key Components
//!
//! - [`StereoCamera`] - tracked camera and per-eye positions
//! - [`FlightState`] - jet position and attitude with damping and bounds
//! - [`ControlState`] - UI knobs read once per frame
//! - [`Scene`] - owns the models and composes [`FrameOutput`]
//! - [`StereoRenderer`] - the trait a graphics backend implements

pub mod camera;
pub mod controls;
pub mod flight;
pub mod frame;
pub mod jet;
mod renderer;
mod scene;
pub mod sun;
pub mod terrain_strip;

pub use camera::{Eye, StereoCamera};
pub use controls::ControlState;
pub use flight::{FlightBounds, FlightState};
pub use frame::{DrawCall, DrawMode, EyePass, FrameOutput, ModelId};
pub use jet::{ControlSurface, JetPose};
pub use renderer::StereoRenderer;
pub use scene::{Scene, SceneSettings};
pub use sun::Sun;
pub use terrain_strip::{SectionSlot, TerrainStrip};

// Re-export the pieces callers need to drive a scene
pub use stereojet_geometry::{DrawableGeometry, FanParams, Model, TerrainParams};
pub use stereojet_input::{CameraRig, FlightControl, FlightController};
