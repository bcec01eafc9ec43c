//! Input handling for wire4d cameras
//!
//! [`InputState`] collects winit events as they arrive. Once per frame it
//! produces an [`InputSnapshot`], a plain value the cameras read in their
//! `update`. Cameras never see window events directly, so they can be driven
//! from tests with hand-built snapshots.

mod snapshot;
mod input_state;

pub use snapshot::{HeldKeys, InputSnapshot};
pub use input_state::InputState;
