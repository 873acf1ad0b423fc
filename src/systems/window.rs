//! Window management system
//!
//! Handles window creation, fullscreen and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
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
            base_title: config.title.clone(),
        })
    }

    /// Width over height of the drawable area
    pub fn aspect_ratio(&self) -> f32 {
        let size = self.window.inner_size();
        aspect_ratio(size.width, size.height)
    }

    /// Update window title with jet position and IPD
    pub fn update_title(&self, jet: [f32; 3], ipd: f32) {
        self.window.set_title(&format_title(&self.base_title, jet, ipd));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    // Minimized windows report 0 height
    width.max(1) as f32 / height.max(1) as f32
}

fn format_title(base: &str, jet: [f32; 3], ipd: f32) -> String {
    format!(
        "{} - jet ({:.1}, {:.1}, {:.1}) IPD:{:.3} [WASD fly, [ ] IPD]",
        base, jet[0], jet[1], jet[2], ipd
    )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting() {
        let title = format_title("Test", [1.0, -2.26, 0.5], 0.015);
        assert_eq!(title, "Test - jet (1.0, -2.3, 0.5) IPD:0.015 [WASD fly, [ ] IPD]");
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio(1280, 720), 1280.0 / 720.0);
        // Minimized window must not divide by zero
        assert_eq!(aspect_ratio(800, 0), 800.0);
    }
}
