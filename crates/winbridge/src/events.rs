//! Event callback model
//!
//! The vocabulary every backend speaks: one boxed callback type per event
//! kind, an aggregate bundle holding an optional callback for each, and the
//! [`EventKind`] enumeration the deduplication controller keys on.
//!
//! Every callback receives the window's opaque user-data pointer as its
//! first argument so that stateless free functions can recover per-window
//! context; closures are free to ignore it and capture state instead.

use crate::input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};

/// Opaque per-window context pointer, passed verbatim to every callback.
pub type UserData = *mut std::ffi::c_void;

/// Close request; the returned bool becomes the should-close flag.
pub type CloseCallback = Box<dyn FnMut(UserData) -> bool>;
/// Window shown or hidden.
pub type VisibilityCallback = Box<dyn FnMut(UserData, bool)>;
/// Input focus gained (`true`) or lost (`false`).
pub type FocusCallback = Box<dyn FnMut(UserData, bool)>;
/// Client area resized to (width, height).
pub type ResizeCallback = Box<dyn FnMut(UserData, u32, u32)>;
/// Window moved to (x, y) in screen coordinates.
pub type MoveCallback = Box<dyn FnMut(UserData, i32, i32)>;
/// An interactive resize is about to begin.
pub type BeforeResizeCallback = Box<dyn FnMut(UserData)>;
/// Window minimized.
pub type MinimizeCallback = Box<dyn FnMut(UserData)>;
/// Window maximized.
pub type MaximizeCallback = Box<dyn FnMut(UserData)>;
/// Window entered (`true`) or left (`false`) fullscreen.
pub type FullscreenCallback = Box<dyn FnMut(UserData, bool)>;
/// Window restored from a minimized or maximized state.
pub type RestoreCallback = Box<dyn FnMut(UserData)>;
/// Pointer entered the client area.
pub type MouseEnterCallback = Box<dyn FnMut(UserData)>;
/// Pointer left the client area.
pub type MouseLeaveCallback = Box<dyn FnMut(UserData)>;
/// Mouse button pressed at a position.
pub type MouseDownCallback = Box<dyn FnMut(UserData, Point, MouseButton)>;
/// Mouse button released at a position.
pub type MouseUpCallback = Box<dyn FnMut(UserData, Point, MouseButton)>;
/// Pointer moved to a position.
pub type MouseMoveCallback = Box<dyn FnMut(UserData, Point)>;
/// Wheel scrolled by an offset at a position.
pub type MouseWheelCallback = Box<dyn FnMut(UserData, Point, ScrollOffset)>;
/// Key pressed; the bool marks an auto-repeat.
pub type KeyDownCallback = Box<dyn FnMut(UserData, KeyCode, Modifiers, bool)>;
/// Key released.
pub type KeyUpCallback = Box<dyn FnMut(UserData, KeyCode, Modifiers)>;
/// Printable character produced by a key press; always preceded by the
/// matching key-down in the same poll cycle.
pub type KeyTypedCallback = Box<dyn FnMut(UserData, char, Modifiers)>;

/// Aggregate of all event callbacks.
///
/// Unset entries are no-ops, never errors. The bundle can be filled in and
/// handed to the factory, which installs it as the last construction step,
/// or applied wholesale to a live window with
/// [`apply_window_events`](crate::window::apply_window_events).
#[derive(Default)]
#[allow(missing_docs)] // Field names mirror the callback aliases above.
pub struct WindowEvents {
    pub on_close: Option<CloseCallback>,
    pub on_window_visibility: Option<VisibilityCallback>,
    pub on_focus: Option<FocusCallback>,
    pub on_resize: Option<ResizeCallback>,
    pub on_move: Option<MoveCallback>,
    pub before_resize: Option<BeforeResizeCallback>,
    pub on_minimize: Option<MinimizeCallback>,
    pub on_maximize: Option<MaximizeCallback>,
    pub on_fullscreen: Option<FullscreenCallback>,
    pub on_restore: Option<RestoreCallback>,
    pub on_mouse_enter: Option<MouseEnterCallback>,
    pub on_mouse_leave: Option<MouseLeaveCallback>,
    pub on_mouse_down: Option<MouseDownCallback>,
    pub on_mouse_up: Option<MouseUpCallback>,
    pub on_mouse_move: Option<MouseMoveCallback>,
    pub on_mouse_wheel: Option<MouseWheelCallback>,
    pub on_key_down: Option<KeyDownCallback>,
    pub on_key_up: Option<KeyUpCallback>,
    pub on_key_typed: Option<KeyTypedCallback>,
}

impl std::fmt::Debug for WindowEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowEvents")
            .field("on_close", &self.on_close.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .finish_non_exhaustive()
    }
}

/// One entry in the event bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EventKind {
    Close,
    Visibility,
    Focus,
    Resize,
    Move,
    BeforeResize,
    Minimize,
    Maximize,
    Fullscreen,
    Restore,
    MouseEnter,
    MouseLeave,
    MouseDown,
    MouseUp,
    MouseMove,
    MouseWheel,
    KeyDown,
    KeyUp,
    KeyTyped,
}

impl EventKind {
    /// Whether repeated delivery within one poll cycle carries no extra
    /// information, making the kind eligible for deduplication.
    ///
    /// Close, focus, button, and key events always fire.
    pub fn side_effect_free(self) -> bool {
        matches!(
            self,
            Self::Resize | Self::Move | Self::MouseMove | Self::MouseWheel
        )
    }

    pub(crate) fn bit(self) -> u32 {
        1 << self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_eligibility() {
        assert!(EventKind::Resize.side_effect_free());
        assert!(EventKind::Move.side_effect_free());
        assert!(EventKind::MouseMove.side_effect_free());
        assert!(EventKind::MouseWheel.side_effect_free());

        assert!(!EventKind::Close.side_effect_free());
        assert!(!EventKind::Focus.side_effect_free());
        assert!(!EventKind::MouseDown.side_effect_free());
        assert!(!EventKind::KeyDown.side_effect_free());
        assert!(!EventKind::KeyTyped.side_effect_free());
    }

    #[test]
    fn test_unset_bundle_is_all_none() {
        let events = WindowEvents::default();
        assert!(events.on_close.is_none());
        assert!(events.on_key_typed.is_none());
    }
}
