//! Window creation parameters
//!
//! Plain data handed to the factory once and never mutated afterwards:
//! bounds, chrome style flags, and start-up behavior.

use bitflags::bitflags;

use crate::error::{WindowError, WindowResult};

/// Requested window geometry.
///
/// Any field may be [`WindowBounds::UNSPECIFIED`], in which case the host
/// picks its default (placement chosen by the window manager, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    /// Left edge in screen coordinates.
    pub x: i32,
    /// Top edge in screen coordinates.
    pub y: i32,
    /// Client area width in pixels.
    pub width: i32,
    /// Client area height in pixels.
    pub height: i32,
}

impl WindowBounds {
    /// Sentinel meaning "let the host decide".
    pub const UNSPECIFIED: i32 = i32::MIN;

    /// Bounds with an explicit position and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }
}

impl Default for WindowBounds {
    /// Host-chosen position, 1280x720 client area.
    fn default() -> Self {
        Self {
            x: Self::UNSPECIFIED,
            y: Self::UNSPECIFIED,
            width: 1280,
            height: 720,
        }
    }
}

bitflags! {
    /// Window chrome style flags.
    ///
    /// `BORDERLESS` excludes every other chrome flag; the factory rejects
    /// contradictory combinations before touching the host.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowStyles: u64 {
        /// Title bar.
        const TITLE_BAR = 1 << 0;
        /// Close button (system menu on Win32).
        const CLOSE_BUTTON = 1 << 1;
        /// Minimize/maximize buttons (miniaturize on macOS).
        const MINIATURIZE_BUTTON = 1 << 2;
        /// User-resizable frame.
        const RESIZABLE = 1 << 3;
        /// No chrome at all; incompatible with the flags above.
        const BORDERLESS = 1 << 4;
    }
}

impl WindowStyles {
    /// Standard decorated chrome without a resize frame.
    pub const CAPTION: Self = Self::TITLE_BAR
        .union(Self::CLOSE_BUTTON)
        .union(Self::MINIATURIZE_BUTTON);

    /// Standard decorated, resizable window.
    pub const DEFAULT: Self = Self::CAPTION.union(Self::RESIZABLE);

    /// Reject structurally contradictory flag combinations.
    pub fn validate(self) -> WindowResult<()> {
        if self.contains(Self::BORDERLESS) && self != Self::BORDERLESS {
            return Err(WindowError::InvalidStyles(
                "BORDERLESS cannot be combined with chrome flags",
            ));
        }
        Ok(())
    }
}

impl Default for WindowStyles {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Start-up behavior applied once at creation.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Show the window immediately.
    pub start_visible: bool,
    /// Give the window key focus immediately.
    pub start_focused: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_visible: true,
            start_focused: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds_leave_position_to_host() {
        let bounds = WindowBounds::default();
        assert_eq!(bounds.x, WindowBounds::UNSPECIFIED);
        assert_eq!(bounds.y, WindowBounds::UNSPECIFIED);
        assert_eq!((bounds.width, bounds.height), (1280, 720));
    }

    #[test]
    fn test_borderless_excludes_chrome() {
        assert!(WindowStyles::BORDERLESS.validate().is_ok());
        assert!(WindowStyles::DEFAULT.validate().is_ok());
        assert!((WindowStyles::BORDERLESS | WindowStyles::TITLE_BAR)
            .validate()
            .is_err());
        assert!((WindowStyles::BORDERLESS | WindowStyles::RESIZABLE)
            .validate()
            .is_err());
    }

    #[test]
    fn test_all_chrome_combinations_valid() {
        // Every subset of the chrome flags (without BORDERLESS) is sane.
        let chrome = [
            WindowStyles::TITLE_BAR,
            WindowStyles::CLOSE_BUTTON,
            WindowStyles::MINIATURIZE_BUTTON,
            WindowStyles::RESIZABLE,
        ];
        for mask in 0u64..16 {
            let mut styles = WindowStyles::empty();
            for (i, flag) in chrome.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    styles |= *flag;
                }
            }
            assert!(styles.validate().is_ok(), "mask {mask} should validate");
        }
    }
}
