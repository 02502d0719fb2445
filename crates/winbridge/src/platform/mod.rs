//! Platform backends
//!
//! One native message translator per host, plus a queue-driven headless
//! backend that serves targets without a native backend and makes the
//! translation policy testable anywhere. Each backend owns its window's
//! [`state::WindowState`] record and recovers it from inside the host's
//! dispatch entry point via a per-window storage slot (no global registry),
//! which is what lets multiple windows coexist.

pub(crate) mod state;

pub mod headless;

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub(crate) type NativeWindow = win32::Win32Window;

#[cfg(target_os = "macos")]
pub(crate) type NativeWindow = macos::CocoaWindow;

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub(crate) type NativeWindow = headless::HeadlessWindow;

/// Implements every `Window` method that only touches the shared state
/// record. Backends supply the host-facing methods themselves and expect a
/// `state` field that derefs to [`state::WindowState`].
macro_rules! state_backed_window_methods {
    () => {
        fn should_close(&self) -> bool {
            self.state.should_close
        }

        fn set_should_close(&mut self, should_close: bool) {
            self.state.should_close = should_close;
        }

        fn set_user_data(&mut self, user_data: crate::events::UserData) {
            self.state.user_data = user_data;
        }

        fn get_user_data(&self) -> crate::events::UserData {
            self.state.user_data
        }

        #[cfg(feature = "limit-events")]
        fn set_limit_events(&mut self, limit: bool) {
            self.state.set_limit_events(limit);
        }

        #[cfg(feature = "limit-events")]
        fn is_limiting_events(&self) -> bool {
            self.state.is_limiting_events()
        }

        fn set_on_close(&mut self, callback: Option<crate::events::CloseCallback>) {
            self.state.events.on_close = callback;
        }
        fn take_on_close(&mut self) -> Option<crate::events::CloseCallback> {
            self.state.events.on_close.take()
        }

        fn set_on_window_visibility(
            &mut self,
            callback: Option<crate::events::VisibilityCallback>,
        ) {
            self.state.events.on_window_visibility = callback;
        }
        fn take_on_window_visibility(&mut self) -> Option<crate::events::VisibilityCallback> {
            self.state.events.on_window_visibility.take()
        }

        fn set_on_focus(&mut self, callback: Option<crate::events::FocusCallback>) {
            self.state.events.on_focus = callback;
        }
        fn take_on_focus(&mut self) -> Option<crate::events::FocusCallback> {
            self.state.events.on_focus.take()
        }

        fn set_on_resize(&mut self, callback: Option<crate::events::ResizeCallback>) {
            self.state.events.on_resize = callback;
        }
        fn take_on_resize(&mut self) -> Option<crate::events::ResizeCallback> {
            self.state.events.on_resize.take()
        }

        fn set_on_move(&mut self, callback: Option<crate::events::MoveCallback>) {
            self.state.events.on_move = callback;
        }
        fn take_on_move(&mut self) -> Option<crate::events::MoveCallback> {
            self.state.events.on_move.take()
        }

        fn set_before_resize(&mut self, callback: Option<crate::events::BeforeResizeCallback>) {
            self.state.events.before_resize = callback;
        }
        fn take_before_resize(&mut self) -> Option<crate::events::BeforeResizeCallback> {
            self.state.events.before_resize.take()
        }

        fn set_on_minimize(&mut self, callback: Option<crate::events::MinimizeCallback>) {
            self.state.events.on_minimize = callback;
        }
        fn take_on_minimize(&mut self) -> Option<crate::events::MinimizeCallback> {
            self.state.events.on_minimize.take()
        }

        fn set_on_maximize(&mut self, callback: Option<crate::events::MaximizeCallback>) {
            self.state.events.on_maximize = callback;
        }
        fn take_on_maximize(&mut self) -> Option<crate::events::MaximizeCallback> {
            self.state.events.on_maximize.take()
        }

        fn set_on_fullscreen(&mut self, callback: Option<crate::events::FullscreenCallback>) {
            self.state.events.on_fullscreen = callback;
        }
        fn take_on_fullscreen(&mut self) -> Option<crate::events::FullscreenCallback> {
            self.state.events.on_fullscreen.take()
        }

        fn set_on_restore(&mut self, callback: Option<crate::events::RestoreCallback>) {
            self.state.events.on_restore = callback;
        }
        fn take_on_restore(&mut self) -> Option<crate::events::RestoreCallback> {
            self.state.events.on_restore.take()
        }

        fn set_on_mouse_enter(&mut self, callback: Option<crate::events::MouseEnterCallback>) {
            self.state.events.on_mouse_enter = callback;
        }
        fn take_on_mouse_enter(&mut self) -> Option<crate::events::MouseEnterCallback> {
            self.state.events.on_mouse_enter.take()
        }

        fn set_on_mouse_leave(&mut self, callback: Option<crate::events::MouseLeaveCallback>) {
            self.state.events.on_mouse_leave = callback;
        }
        fn take_on_mouse_leave(&mut self) -> Option<crate::events::MouseLeaveCallback> {
            self.state.events.on_mouse_leave.take()
        }

        fn set_on_mouse_down(&mut self, callback: Option<crate::events::MouseDownCallback>) {
            self.state.events.on_mouse_down = callback;
        }
        fn take_on_mouse_down(&mut self) -> Option<crate::events::MouseDownCallback> {
            self.state.events.on_mouse_down.take()
        }

        fn set_on_mouse_up(&mut self, callback: Option<crate::events::MouseUpCallback>) {
            self.state.events.on_mouse_up = callback;
        }
        fn take_on_mouse_up(&mut self) -> Option<crate::events::MouseUpCallback> {
            self.state.events.on_mouse_up.take()
        }

        fn set_on_mouse_move(&mut self, callback: Option<crate::events::MouseMoveCallback>) {
            self.state.events.on_mouse_move = callback;
        }
        fn take_on_mouse_move(&mut self) -> Option<crate::events::MouseMoveCallback> {
            self.state.events.on_mouse_move.take()
        }

        fn set_on_mouse_wheel(&mut self, callback: Option<crate::events::MouseWheelCallback>) {
            self.state.events.on_mouse_wheel = callback;
        }
        fn take_on_mouse_wheel(&mut self) -> Option<crate::events::MouseWheelCallback> {
            self.state.events.on_mouse_wheel.take()
        }

        fn set_on_key_down(&mut self, callback: Option<crate::events::KeyDownCallback>) {
            self.state.events.on_key_down = callback;
        }
        fn take_on_key_down(&mut self) -> Option<crate::events::KeyDownCallback> {
            self.state.events.on_key_down.take()
        }

        fn set_on_key_up(&mut self, callback: Option<crate::events::KeyUpCallback>) {
            self.state.events.on_key_up = callback;
        }
        fn take_on_key_up(&mut self) -> Option<crate::events::KeyUpCallback> {
            self.state.events.on_key_up.take()
        }

        fn set_on_key_typed(&mut self, callback: Option<crate::events::KeyTypedCallback>) {
            self.state.events.on_key_typed = callback;
        }
        fn take_on_key_typed(&mut self) -> Option<crate::events::KeyTypedCallback> {
            self.state.events.on_key_typed.take()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    };
}

pub(crate) use state_backed_window_methods;
