//! Window management system
//!
//! Handles window creation, cursor capture for rotate mode, fullscreen
//! toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window},
};
use wire4d_math::Vec4;
use crate::config::{CameraKind, WindowConfig};

/// Manages the application window and cursor state
pub struct WindowSystem {
    window: Arc<Window>,
    cursor_captured: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            cursor_captured: false,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Check if cursor is captured
    pub fn is_cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Lock and hide the cursor while in rotate mode
    pub fn capture_cursor(&mut self) -> bool {
        let grab_result = self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));

        if grab_result.is_ok() {
            self.window.set_cursor_visible(false);
            self.cursor_captured = true;
            log::info!("Rotate mode on - Escape or R to leave");
            true
        } else {
            log::warn!("Failed to capture cursor");
            false
        }
    }

    /// Release cursor
    pub fn release_cursor(&mut self) {
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.window.set_cursor_visible(true);
        self.cursor_captured = false;
        log::info!("Rotate mode off - drag to rotate, R to lock");
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with camera state
    pub fn update_title(&self, kind: CameraKind, pos: Vec4, zoom: f32) {
        let title = format_title(&self.base_title, kind, pos, zoom, self.cursor_captured);
        self.window.set_title(&title);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn format_title(base: &str, kind: CameraKind, pos: Vec4, zoom: f32, captured: bool) -> String {
    let hint = if captured { "[Esc to release]" } else { "[R to rotate]" };
    match kind {
        CameraKind::Perspective4d => format!(
            "{} - 4D ({:.1}, {:.1}, {:.1}, {:.1}) Zoom:{:.0} {}",
            base, pos.x(), pos.y(), pos.z(), pos.u(), zoom, hint
        ),
        CameraKind::Orthographic | CameraKind::Perspective => {
            let name = if kind == CameraKind::Orthographic { "Ortho" } else { "Persp" };
            format!(
                "{} - {} ({:.1}, {:.1}, {:.1}) Zoom:{:.0} {}",
                base, name, pos.x(), pos.y(), pos.z(), zoom, hint
            )
        }
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
