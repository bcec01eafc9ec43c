//! wire4d - interactive 3D/4D wireframe viewer
//!
//! Application layer on top of the engine crates: configuration, key
//! mapping, the per-frame simulation state, and the window/GPU systems.

pub mod config;
pub mod input;
pub mod systems;
