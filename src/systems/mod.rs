//! Application systems
//!
//! Frame simulation, logging renderer and window handling, kept out of
//! main.rs so they can be tested on their own.

mod render;
mod simulation;
mod window;

pub use render::{FrameLogRenderer, FrameStats, RenderError, UploadedModel};
pub use simulation::{FrameState, SimulationResult, SimulationSystem};
pub use window::{WindowError, WindowSystem};
