//! Backend-agnostic window contract and factory
//!
//! [`Window`] is the full surface every backend must implement: lifecycle
//! queries, mutators, and callback registration for every event kind. It has
//! no behavior of its own; the per-platform translators in
//! [`platform`](crate::platform) provide it.
//!
//! The factory functions validate creation parameters, pick the backend for
//! the compile target, and apply the caller's event bundle as the last
//! construction step. Notifications the host dispatches while the native
//! window is still being built are therefore never delivered; callbacks see
//! only what happens from the first `poll_events` on.

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_void;
use std::rc::Rc;

use raw_window_handle::RawWindowHandle;

use crate::config::{WindowBounds, WindowConfig, WindowStyles};
use crate::cursor::CursorMode;
use crate::error::WindowResult;
use crate::events::{
    BeforeResizeCallback, CloseCallback, FocusCallback, FullscreenCallback, KeyDownCallback,
    KeyTypedCallback, KeyUpCallback, MaximizeCallback, MinimizeCallback, MouseDownCallback,
    MouseEnterCallback, MouseLeaveCallback, MouseMoveCallback, MouseUpCallback,
    MouseWheelCallback, MoveCallback, ResizeCallback, RestoreCallback, UserData,
    VisibilityCallback, WindowEvents,
};
use crate::platform;

/// Abstract window capability every backend satisfies.
///
/// No operation panics or returns an error type beyond what the signatures
/// show: failed native queries surface as `None`, unregistered callbacks are
/// no-ops. All methods must be called from the thread that created the
/// window.
///
/// Callback setters *replace* the registered callback (no chaining); passing
/// `None` unregisters it. Because the callbacks are boxed `FnMut` closures
/// and cannot be cloned, retrieval is ownership transfer: the `take_*`
/// methods move the currently registered callback out, leaving the slot
/// unset.
pub trait Window {
    /// Show or hide the window.
    fn set_visible(&mut self, visible: bool);

    /// Drain every currently queued native notification and invoke the
    /// registered callbacks. Synchronous; bounded per call, not streaming.
    fn poll_events(&mut self);

    /// Whether a close has been requested (by the user, the host, or
    /// [`set_should_close`](Self::set_should_close)).
    fn should_close(&self) -> bool;

    /// Programmatically request or cancel closure. Always wins over any
    /// earlier close-callback verdict.
    fn set_should_close(&mut self, should_close: bool);

    /// Set the title-bar text.
    fn set_title(&mut self, title: &str);

    /// Current title, or `None` if the host query failed.
    fn get_title(&self) -> Option<String>;

    /// Opaque native handle (`HWND`, `NSWindow*`, ...), meaningful only to
    /// collaborators that know the backend. Null for the headless backend.
    fn get_native_handle(&self) -> *mut c_void;

    /// The native handle in `raw-window-handle` terms, for graphics
    /// collaborators; `None` for the headless backend.
    fn raw_window_handle(&self) -> Option<RawWindowHandle>;

    /// Change pointer visibility/confinement.
    fn set_cursor_mode(&mut self, mode: CursorMode);

    /// Opaque context pointer passed as the first argument to every callback.
    fn set_user_data(&mut self, user_data: UserData);
    /// The pointer last passed to [`set_user_data`](Self::set_user_data).
    fn get_user_data(&self) -> UserData;

    /// Deliver side-effect-free events at most once per poll cycle.
    #[cfg(feature = "limit-events")]
    fn set_limit_events(&mut self, limit: bool);
    /// Whether event limiting is currently on.
    #[cfg(feature = "limit-events")]
    fn is_limiting_events(&self) -> bool;

    // ----- Window event callbacks -----

    /// Register the close-request callback; its verdict becomes the
    /// should-close flag.
    fn set_on_close(&mut self, callback: Option<CloseCallback>);
    /// Remove and return the close callback.
    fn take_on_close(&mut self) -> Option<CloseCallback>;

    /// Register the visibility-change callback.
    fn set_on_window_visibility(&mut self, callback: Option<VisibilityCallback>);
    /// Remove and return the visibility callback.
    fn take_on_window_visibility(&mut self) -> Option<VisibilityCallback>;

    /// Register the focus-change callback.
    fn set_on_focus(&mut self, callback: Option<FocusCallback>);
    /// Remove and return the focus callback.
    fn take_on_focus(&mut self) -> Option<FocusCallback>;

    /// Register the resize callback.
    fn set_on_resize(&mut self, callback: Option<ResizeCallback>);
    /// Remove and return the resize callback.
    fn take_on_resize(&mut self) -> Option<ResizeCallback>;

    /// Register the move callback.
    fn set_on_move(&mut self, callback: Option<MoveCallback>);
    /// Remove and return the move callback.
    fn take_on_move(&mut self) -> Option<MoveCallback>;

    /// Register the callback fired before an interactive resize begins.
    fn set_before_resize(&mut self, callback: Option<BeforeResizeCallback>);
    /// Remove and return the before-resize callback.
    fn take_before_resize(&mut self) -> Option<BeforeResizeCallback>;

    /// Register the minimize callback.
    fn set_on_minimize(&mut self, callback: Option<MinimizeCallback>);
    /// Remove and return the minimize callback.
    fn take_on_minimize(&mut self) -> Option<MinimizeCallback>;

    /// Register the maximize callback.
    fn set_on_maximize(&mut self, callback: Option<MaximizeCallback>);
    /// Remove and return the maximize callback.
    fn take_on_maximize(&mut self) -> Option<MaximizeCallback>;

    /// Register the fullscreen-transition callback.
    fn set_on_fullscreen(&mut self, callback: Option<FullscreenCallback>);
    /// Remove and return the fullscreen callback.
    fn take_on_fullscreen(&mut self) -> Option<FullscreenCallback>;

    /// Register the restore callback.
    fn set_on_restore(&mut self, callback: Option<RestoreCallback>);
    /// Remove and return the restore callback.
    fn take_on_restore(&mut self) -> Option<RestoreCallback>;

    // ----- Mouse event callbacks -----

    /// Register the mouse-enter callback.
    fn set_on_mouse_enter(&mut self, callback: Option<MouseEnterCallback>);
    /// Remove and return the mouse-enter callback.
    fn take_on_mouse_enter(&mut self) -> Option<MouseEnterCallback>;

    /// Register the mouse-leave callback.
    fn set_on_mouse_leave(&mut self, callback: Option<MouseLeaveCallback>);
    /// Remove and return the mouse-leave callback.
    fn take_on_mouse_leave(&mut self) -> Option<MouseLeaveCallback>;

    /// Register the button-press callback.
    fn set_on_mouse_down(&mut self, callback: Option<MouseDownCallback>);
    /// Remove and return the button-press callback.
    fn take_on_mouse_down(&mut self) -> Option<MouseDownCallback>;

    /// Register the button-release callback.
    fn set_on_mouse_up(&mut self, callback: Option<MouseUpCallback>);
    /// Remove and return the button-release callback.
    fn take_on_mouse_up(&mut self) -> Option<MouseUpCallback>;

    /// Register the pointer-move callback.
    fn set_on_mouse_move(&mut self, callback: Option<MouseMoveCallback>);
    /// Remove and return the pointer-move callback.
    fn take_on_mouse_move(&mut self) -> Option<MouseMoveCallback>;

    /// Register the wheel callback.
    fn set_on_mouse_wheel(&mut self, callback: Option<MouseWheelCallback>);
    /// Remove and return the wheel callback.
    fn take_on_mouse_wheel(&mut self) -> Option<MouseWheelCallback>;

    // ----- Keyboard event callbacks -----

    /// Register the key-press callback.
    fn set_on_key_down(&mut self, callback: Option<KeyDownCallback>);
    /// Remove and return the key-press callback.
    fn take_on_key_down(&mut self) -> Option<KeyDownCallback>;

    /// Register the key-release callback.
    fn set_on_key_up(&mut self, callback: Option<KeyUpCallback>);
    /// Remove and return the key-release callback.
    fn take_on_key_up(&mut self) -> Option<KeyUpCallback>;

    /// Register the character-typed callback.
    fn set_on_key_typed(&mut self, callback: Option<KeyTypedCallback>);
    /// Remove and return the character-typed callback.
    fn take_on_key_typed(&mut self) -> Option<KeyTypedCallback>;

    /// Concrete-type access for backend-specific functionality (e.g. event
    /// injection on the headless backend).
    fn as_any(&self) -> &dyn Any;
    /// Mutable concrete-type access.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Install a whole event bundle at once, replacing every slot.
pub fn apply_window_events(window: &mut dyn Window, events: WindowEvents) {
    window.set_on_close(events.on_close);
    window.set_on_window_visibility(events.on_window_visibility);
    window.set_on_focus(events.on_focus);
    window.set_on_resize(events.on_resize);
    window.set_on_move(events.on_move);
    window.set_before_resize(events.before_resize);
    window.set_on_minimize(events.on_minimize);
    window.set_on_maximize(events.on_maximize);
    window.set_on_fullscreen(events.on_fullscreen);
    window.set_on_restore(events.on_restore);
    window.set_on_mouse_enter(events.on_mouse_enter);
    window.set_on_mouse_leave(events.on_mouse_leave);
    window.set_on_mouse_down(events.on_mouse_down);
    window.set_on_mouse_up(events.on_mouse_up);
    window.set_on_mouse_move(events.on_mouse_move);
    window.set_on_mouse_wheel(events.on_mouse_wheel);
    window.set_on_key_down(events.on_key_down);
    window.set_on_key_up(events.on_key_up);
    window.set_on_key_typed(events.on_key_typed);
}

fn build_backend(
    title: &str,
    bounds: WindowBounds,
    styles: WindowStyles,
    config: WindowConfig,
    events: Option<WindowEvents>,
) -> WindowResult<platform::NativeWindow> {
    styles.validate()?;
    let mut window = platform::NativeWindow::open(title, bounds, styles, config)?;
    // The bundle goes in last. Hosts dispatch notifications during native
    // creation (focus, the initial size) and those land in an empty bundle;
    // at that point the caller cannot have installed user data yet, so
    // delivering them would hand out a null context pointer.
    if let Some(events) = events {
        apply_window_events(&mut window, events);
    }
    log::debug!("created window \"{title}\" ({}x{})", bounds.width, bounds.height);
    Ok(window)
}

/// Create a uniquely owned window.
///
/// Returns an error instead of a partially usable window when the styles are
/// contradictory or the host refuses creation.
pub fn create_window(
    title: &str,
    bounds: WindowBounds,
    styles: WindowStyles,
    config: WindowConfig,
    events: Option<WindowEvents>,
) -> WindowResult<Box<dyn Window>> {
    Ok(Box::new(build_backend(title, bounds, styles, config, events)?))
}

/// Create a window behind a shared, clonable owning reference.
pub fn create_shared_window(
    title: &str,
    bounds: WindowBounds,
    styles: WindowStyles,
    config: WindowConfig,
    events: Option<WindowEvents>,
) -> WindowResult<Rc<RefCell<dyn Window>>> {
    let window = build_backend(title, bounds, styles, config, events)?;
    Ok(Rc::new(RefCell::new(window)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{WindowBounds, WindowConfig, WindowStyles};
    use crate::error::WindowError;

    #[test]
    fn test_factory_rejects_contradictory_styles() {
        let result = create_window(
            "bad styles",
            WindowBounds::default(),
            WindowStyles::BORDERLESS | WindowStyles::TITLE_BAR,
            WindowConfig::default(),
            None,
        );
        assert!(matches!(result, Err(WindowError::InvalidStyles(_))));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn test_factory_applies_bundle_after_construction() {
        use std::cell::Cell;
        use std::rc::Rc;

        use crate::events::WindowEvents;
        use crate::platform::headless::{HeadlessWindow, SyntheticEvent};

        let visibility = Rc::new(Cell::new(0));
        let resizes = Rc::new(Cell::new(0));
        let mut events = WindowEvents::default();
        let v = Rc::clone(&visibility);
        events.on_window_visibility = Some(Box::new(move |_, _| v.set(v.get() + 1)));
        let r = Rc::clone(&resizes);
        events.on_resize = Some(Box::new(move |_, _, _| r.set(r.get() + 1)));

        let mut window = create_window(
            "bundle last",
            WindowBounds::default(),
            WindowStyles::DEFAULT,
            WindowConfig::default(),
            Some(events),
        )
        .unwrap();

        // Construction-time activity never reaches the callbacks; the
        // caller could not have installed user data yet.
        assert_eq!((visibility.get(), resizes.get()), (0, 0));

        // The bundle is installed by the time the factory returns.
        let headless = window
            .as_any_mut()
            .downcast_mut::<HeadlessWindow>()
            .unwrap();
        headless.push_native_event(SyntheticEvent::Resized(640, 480));
        window.poll_events();
        assert_eq!(resizes.get(), 1);
        window.set_visible(false);
        assert_eq!(visibility.get(), 1);
    }

    #[test]
    fn test_shared_factory_rejects_contradictory_styles() {
        let result = create_shared_window(
            "bad styles",
            WindowBounds::default(),
            WindowStyles::BORDERLESS | WindowStyles::CLOSE_BUTTON,
            WindowConfig::default(),
            None,
        );
        assert!(result.is_err());
    }
}
