//! Per-frame input snapshot

use bitflags::bitflags;
use wire4d_math::Vec2;

bitflags! {
    /// Movement and rotation keys held down when the snapshot was taken
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct HeldKeys: u16 {
        /// W
        const FORWARD = 1 << 0;
        /// S
        const BACKWARD = 1 << 1;
        /// A
        const LEFT = 1 << 2;
        /// D
        const RIGHT = 1 << 3;
        /// Space
        const UP = 1 << 4;
        /// Shift
        const DOWN = 1 << 5;
        /// Q - toward +u
        const ANA = 1 << 6;
        /// E - toward -u
        const KATA = 1 << 7;
        /// Left arrow
        const ROT_LEFT = 1 << 8;
        /// Right arrow
        const ROT_RIGHT = 1 << 9;
        /// Up arrow
        const ROT_UP = 1 << 10;
        /// Down arrow
        const ROT_DOWN = 1 << 11;
    }
}

impl HeldKeys {
    /// +1 when only `pos` is held, -1 when only `neg` is held, 0 otherwise
    pub fn axis(self, pos: HeldKeys, neg: HeldKeys) -> f32 {
        (self.contains(pos) as i32 - self.contains(neg) as i32) as f32
    }
}

/// Everything a camera reads from the user in one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSnapshot {
    pub keys: HeldKeys,
    /// Pointer motion rotates the camera
    pub rotate_drag: bool,
    /// Pointer motion accumulated since the previous snapshot, in pixels
    pub drag_delta: Vec2,
    /// Projection scale
    pub zoom: f32,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            keys: HeldKeys::empty(),
            rotate_drag: false,
            drag_delta: Vec2::zero(),
            zoom: 500.0,
        }
    }
}

impl InputSnapshot {
    /// Snapshot with the given keys held and nothing else
    pub fn with_keys(keys: HeldKeys) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Snapshot of an active rotate-drag by (dx, dy)
    pub fn dragging(dx: f32, dy: f32) -> Self {
        Self {
            rotate_drag: true,
            drag_delta: Vec2::new([dx, dy]),
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.keys.is_empty() && (!self.rotate_drag || self.drag_delta == Vec2::zero())
    }
}
