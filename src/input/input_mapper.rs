//! Input mapping from raw events to semantic actions
//!
//! Maps key presses to one-shot actions like cycling the camera or toggling
//! crop. Held movement and rotation keys (WASD, Space, Shift, Q/E, arrows)
//! are NOT mapped here - they go directly to `InputState`.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Release the captured cursor (Escape while rotating)
    ToggleCursor,
    /// Exit application (Escape when not captured)
    Exit,
    /// Show or hide points (1)
    TogglePoints,
    /// Show or hide lines and polygon outlines (2)
    ToggleLines,
    /// Show or hide polygon fills (3)
    TogglePolygons,
    /// Crop points behind the camera (4)
    ToggleCrop,
    /// Rotate with every mouse movement, cursor captured (R)
    ToggleRotate,
    /// Switch to the next camera (C)
    CycleCamera,
    /// Replace the scene with the next catalog shape (Tab)
    NextObject,
    /// Move the camera back to its starting pose (Backspace)
    ResetCamera,
    /// Toggle fullscreen mode (F)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if cursor_captured {
                    Some(InputAction::ToggleCursor)
                } else {
                    Some(InputAction::Exit)
                }
            }
            KeyCode::Digit1 => Some(InputAction::TogglePoints),
            KeyCode::Digit2 => Some(InputAction::ToggleLines),
            KeyCode::Digit3 => Some(InputAction::TogglePolygons),
            KeyCode::Digit4 => Some(InputAction::ToggleCrop),
            KeyCode::KeyR => Some(InputAction::ToggleRotate),
            KeyCode::KeyC => Some(InputAction::CycleCamera),
            KeyCode::Tab => Some(InputAction::NextObject),
            KeyCode::Backspace => Some(InputAction::ResetCamera),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_when_captured_releases() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, true);
        assert_eq!(action, Some(InputAction::ToggleCursor));
    }

    #[test]
    fn test_escape_when_released_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_movement_keys_not_mapped() {
        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::KeyQ,
            KeyCode::KeyE,
            KeyCode::Space,
            KeyCode::ShiftLeft,
            KeyCode::ArrowLeft,
            KeyCode::ArrowUp,
        ] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, true);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Released, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_draw_toggles() {
        let keys = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
        let actions = [
            InputAction::TogglePoints,
            InputAction::ToggleLines,
            InputAction::TogglePolygons,
            InputAction::ToggleCrop,
        ];
        for (key, action) in keys.into_iter().zip(actions) {
            assert_eq!(
                InputMapper::map_keyboard(key, ElementState::Pressed, false),
                Some(action)
            );
        }
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed, false),
            Some(InputAction::ToggleRotate)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyC, ElementState::Pressed, true),
            Some(InputAction::CycleCamera)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Tab, ElementState::Pressed, false),
            Some(InputAction::NextObject)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Backspace, ElementState::Pressed, false),
            Some(InputAction::ResetCamera)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed, true),
            Some(InputAction::ToggleFullscreen)
        );
    }
}
