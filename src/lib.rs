//! Stereojet - anaglyph flight demo
//!
//! Application layer over the `stereojet_*` crates: configuration loading,
//! the per-frame simulation driver, key mapping and the logging renderer.

pub mod config;
pub mod input;
pub mod systems;
