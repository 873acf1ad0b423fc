//! Flight Input Handling
//!
//! This crate turns winit keyboard and mouse events into jet attitude rates
//! and camera-rig moves.

mod flight_controller;

pub use flight_controller::{CameraRig, FlightControl, FlightController, HeldKeys};
