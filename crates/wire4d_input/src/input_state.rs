//! Event accumulation for camera input
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Left/right strafe
//! - Space/Shift: Up/down
//! - Q/E: Ana/kata movement (u axis, 4D camera only)
//! - Arrow keys: Roll (3D) or u-plane rotation (4D)
//! - Left-click + drag, or any motion while rotate mode is on: look around
//! - Mouse wheel: Zoom

use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;
use wire4d_math::Vec2;

use crate::snapshot::{HeldKeys, InputSnapshot};

/// Pixels of trackpad scroll that count as one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

/// Accumulates window events between frames
pub struct InputState {
    keys: HeldKeys,

    // Pointer state
    mouse_pressed: bool,
    rotate_mode: bool,
    pending_drag: Vec2,

    zoom: f32,

    // Configuration
    pub zoom_min: f32,
    pub zoom_max: f32,
    /// Zoom change per wheel line
    pub zoom_step: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HeldKeys::empty(),

            mouse_pressed: false,
            rotate_mode: false,
            pending_drag: Vec2::zero(),

            zoom: 500.0,

            zoom_min: 35.0,
            zoom_max: 1000.0,
            zoom_step: 25.0,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true when the key is one of the camera keys.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let flag = match key {
            KeyCode::KeyW => HeldKeys::FORWARD,
            KeyCode::KeyS => HeldKeys::BACKWARD,
            KeyCode::KeyA => HeldKeys::LEFT,
            KeyCode::KeyD => HeldKeys::RIGHT,
            KeyCode::Space => HeldKeys::UP,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => HeldKeys::DOWN,
            KeyCode::KeyQ => HeldKeys::ANA,
            KeyCode::KeyE => HeldKeys::KATA,
            KeyCode::ArrowLeft => HeldKeys::ROT_LEFT,
            KeyCode::ArrowRight => HeldKeys::ROT_RIGHT,
            KeyCode::ArrowUp => HeldKeys::ROT_UP,
            KeyCode::ArrowDown => HeldKeys::ROT_DOWN,
            _ => return false,
        };
        self.keys.set(flag, state == ElementState::Pressed);
        true
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process raw mouse motion
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_drag += Vec2::new([delta_x as f32, delta_y as f32]);
    }

    /// Process a mouse wheel event; scrolling up zooms in
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
        };
        self.set_zoom(self.zoom + lines * self.zoom_step);
    }

    /// Current zoom
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom, clamped to the configured range
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.zoom_min, self.zoom_max);
    }

    /// Whether pointer motion rotates without holding a button
    pub fn rotate_mode(&self) -> bool {
        self.rotate_mode
    }

    /// Switch rotate mode on or off
    pub fn set_rotate_mode(&mut self, enabled: bool) {
        self.rotate_mode = enabled;
        self.pending_drag = Vec2::zero();
    }

    /// Keys currently held
    pub fn held_keys(&self) -> HeldKeys {
        self.keys
    }

    /// Release every key and button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys = HeldKeys::empty();
        self.mouse_pressed = false;
        self.pending_drag = Vec2::zero();
    }

    /// Sample the input for this frame
    ///
    /// The accumulated pointer motion is handed out once and then reset.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            keys: self.keys,
            rotate_drag: self.rotate_mode || self.mouse_pressed,
            drag_delta: self.pending_drag,
            zoom: self.zoom,
        };
        self.pending_drag = Vec2::zero();
        snapshot
    }

    /// Builder: set the zoom range; swapped bounds are put back in order
    pub fn with_zoom_range(mut self, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.zoom_min = min;
        self.zoom_max = max;
        self.set_zoom(self.zoom);
        self
    }

    /// Builder: set the starting zoom
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.set_zoom(zoom);
        self
    }

    /// Builder: set the zoom change per wheel line
    pub fn with_zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }
}
