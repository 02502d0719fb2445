//! Queue-driven headless backend
//!
//! The "host" here is an in-process queue of [`SyntheticEvent`]
//! notifications. The backend drains it in `poll_events` through the same
//! shared state record the native translators use, so the whole translation
//! policy — close default, enter/leave tracking, KeyDown/KeyTyped pairing,
//! per-cycle deduplication — runs unchanged on any target.
//!
//! This is the selected backend on targets without a native one, and the
//! vehicle for exercising the event contract in tests: downcast a
//! `Box<dyn Window>` via `as_any_mut`, or construct the type directly, then
//! [`push_native_event`](HeadlessWindow::push_native_event) and poll.

use std::any::Any;
use std::collections::VecDeque;
use std::ffi::c_void;

use raw_window_handle::RawWindowHandle;

use crate::config::{WindowBounds, WindowConfig, WindowStyles};
use crate::cursor::CursorMode;
use crate::error::WindowResult;
use crate::events::{UserData, WindowEvents};
use crate::input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};
use crate::platform::state::WindowState;
use crate::platform::state_backed_window_methods;
use crate::window::Window;

/// A native notification of the headless host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum SyntheticEvent {
    CloseRequested,
    VisibilityChanged(bool),
    FocusChanged(bool),
    Resized(u32, u32),
    Moved(i32, i32),
    BeforeResize,
    Minimized,
    Maximized,
    FullscreenChanged(bool),
    Restored,
    /// Pointer movement; entering is derived from the tracking flag, exactly
    /// like hosts that do not report "enter" natively.
    PointerMoved(Point),
    PointerLeft,
    ButtonDown(Point, MouseButton),
    ButtonUp(Point, MouseButton),
    Wheel(Point, ScrollOffset),
    KeyDown {
        code: KeyCode,
        modifiers: Modifiers,
        repeat: bool,
    },
    KeyUp {
        code: KeyCode,
        modifiers: Modifiers,
    },
}

/// Window backed by a synthetic notification queue.
pub struct HeadlessWindow {
    state: WindowState,
    queue: VecDeque<SyntheticEvent>,
    title: String,
    visible: bool,
    cursor_mode: CursorMode,
}

impl HeadlessWindow {
    /// Create the window. Never fails; geometry and styles are accepted and
    /// ignored beyond validation (the factory validated them already).
    #[cfg_attr(
        any(target_os = "windows", target_os = "macos"),
        allow(dead_code)
    )]
    pub(crate) fn open(
        title: &str,
        _bounds: WindowBounds,
        _styles: WindowStyles,
        config: WindowConfig,
    ) -> WindowResult<Self> {
        log::debug!("opening headless window \"{title}\"");
        Ok(Self {
            state: WindowState::new(WindowEvents::default()),
            queue: VecDeque::new(),
            title: title.to_owned(),
            visible: config.start_visible,
            cursor_mode: CursorMode::Normal,
        })
    }

    /// Construct directly, outside the factory. Intended for tests.
    pub fn new(title: &str, events: WindowEvents) -> Self {
        Self {
            state: WindowState::new(events),
            queue: VecDeque::new(),
            title: title.to_owned(),
            visible: true,
            cursor_mode: CursorMode::Normal,
        }
    }

    /// Queue a notification for the next `poll_events` call.
    pub fn push_native_event(&mut self, event: SyntheticEvent) {
        self.queue.push_back(event);
    }

    /// The cursor mode last set. Backend-specific hook; the window contract
    /// itself deliberately has no cursor getter.
    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    /// Whether the window is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn translate(&mut self, event: SyntheticEvent) {
        match event {
            SyntheticEvent::CloseRequested => self.state.close_requested(),
            SyntheticEvent::VisibilityChanged(visible) => {
                self.visible = visible;
                self.state.visibility_changed(visible);
            }
            SyntheticEvent::FocusChanged(focused) => self.state.focus_changed(focused),
            SyntheticEvent::Resized(width, height) => self.state.resized(width, height),
            SyntheticEvent::Moved(x, y) => self.state.moved(x, y),
            SyntheticEvent::BeforeResize => self.state.before_resize(),
            SyntheticEvent::Minimized => self.state.minimized(),
            SyntheticEvent::Maximized => self.state.maximized(),
            SyntheticEvent::FullscreenChanged(fullscreen) => {
                self.state.fullscreen_changed(fullscreen);
            }
            SyntheticEvent::Restored => self.state.restored(),
            SyntheticEvent::PointerMoved(position) => {
                self.state.pointer_moved(position);
            }
            SyntheticEvent::PointerLeft => self.state.mouse_left(),
            SyntheticEvent::ButtonDown(position, button) => {
                self.state.mouse_down(position, button);
            }
            SyntheticEvent::ButtonUp(position, button) => self.state.mouse_up(position, button),
            SyntheticEvent::Wheel(position, offset) => self.state.mouse_wheel(position, offset),
            SyntheticEvent::KeyDown {
                code,
                modifiers,
                repeat,
            } => {
                // No host character facility; fall back to the unshifted
                // US-layout mapping.
                let typed = code.to_char();
                self.state.key_down(code, modifiers, repeat, typed);
            }
            SyntheticEvent::KeyUp { code, modifiers } => self.state.key_up(code, modifiers),
        }
    }
}

impl Window for HeadlessWindow {
    fn set_visible(&mut self, visible: bool) {
        // The synchronous host confirms immediately.
        self.visible = visible;
        self.state.visibility_changed(visible);
    }

    fn poll_events(&mut self) {
        self.state.begin_poll();
        while let Some(event) = self.queue.pop_front() {
            self.translate(event);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn get_title(&self) -> Option<String> {
        Some(self.title.clone())
    }

    fn get_native_handle(&self) -> *mut c_void {
        std::ptr::null_mut()
    }

    fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        None
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
    }

    state_backed_window_methods!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn resize_counter() -> (WindowEvents, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let mut events = WindowEvents::default();
        let c = Rc::clone(&count);
        events.on_resize = Some(Box::new(move |_, _, _| c.set(c.get() + 1)));
        (events, count)
    }

    #[test]
    fn test_should_close_initially_false() {
        let window = HeadlessWindow::new("w", WindowEvents::default());
        assert!(!window.should_close());
    }

    #[test]
    fn test_close_request_without_callback_allows_close() {
        let mut window = HeadlessWindow::new("w", WindowEvents::default());
        window.push_native_event(SyntheticEvent::CloseRequested);
        window.poll_events();
        assert!(window.should_close());
    }

    #[test]
    fn test_close_callback_can_refuse() {
        let mut events = WindowEvents::default();
        events.on_close = Some(Box::new(|_| false));
        let mut window = HeadlessWindow::new("w", events);
        window.push_native_event(SyntheticEvent::CloseRequested);
        window.poll_events();
        assert!(!window.should_close());
    }

    #[test]
    fn test_set_should_close_wins_over_callback_verdict() {
        let mut events = WindowEvents::default();
        events.on_close = Some(Box::new(|_| false));
        let mut window = HeadlessWindow::new("w", events);
        window.push_native_event(SyntheticEvent::CloseRequested);
        window.poll_events();
        window.set_should_close(true);
        assert!(window.should_close());
    }

    #[cfg(feature = "limit-events")]
    #[test]
    fn test_resize_fires_once_per_poll_when_limited() {
        let (events, count) = resize_counter();
        let mut window = HeadlessWindow::new("w", events);
        window.set_limit_events(true);

        for _ in 0..5 {
            window.push_native_event(SyntheticEvent::Resized(640, 480));
        }
        window.poll_events();
        assert_eq!(count.get(), 1);

        window.push_native_event(SyntheticEvent::Resized(800, 600));
        window.poll_events();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_resize_fires_n_times_when_unlimited() {
        let (events, count) = resize_counter();
        let mut window = HeadlessWindow::new("w", events);
        for _ in 0..5 {
            window.push_native_event(SyntheticEvent::Resized(640, 480));
        }
        window.poll_events();
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_enter_once_per_contiguous_span() {
        let enters = Rc::new(Cell::new(0));
        let leaves = Rc::new(Cell::new(0));
        let mut events = WindowEvents::default();
        let e = Rc::clone(&enters);
        events.on_mouse_enter = Some(Box::new(move |_| e.set(e.get() + 1)));
        let l = Rc::clone(&leaves);
        events.on_mouse_leave = Some(Box::new(move |_| l.set(l.get() + 1)));

        let mut window = HeadlessWindow::new("w", events);
        for i in 0..3 {
            window.push_native_event(SyntheticEvent::PointerMoved(Point::new(i as f32, 0.0)));
        }
        window.push_native_event(SyntheticEvent::PointerLeft);
        window.push_native_event(SyntheticEvent::PointerMoved(Point::new(9.0, 9.0)));
        window.poll_events();

        assert_eq!(enters.get(), 2);
        assert_eq!(leaves.get(), 1);
    }

    #[test]
    fn test_printable_key_types_after_key_down() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut events = WindowEvents::default();
        let o = Rc::clone(&order);
        events.on_key_down = Some(Box::new(move |_, code, _, _| {
            o.borrow_mut().push(format!("down:{}", code.name()));
        }));
        let o = Rc::clone(&order);
        events.on_key_typed = Some(Box::new(move |_, c, _| {
            o.borrow_mut().push(format!("typed:{c}"));
        }));

        let mut window = HeadlessWindow::new("w", events);
        window.push_native_event(SyntheticEvent::KeyDown {
            code: KeyCode::Q,
            modifiers: Modifiers::empty(),
            repeat: false,
        });
        window.push_native_event(SyntheticEvent::KeyDown {
            code: KeyCode::Escape,
            modifiers: Modifiers::empty(),
            repeat: false,
        });
        window.poll_events();

        assert_eq!(
            order.borrow().as_slice(),
            ["down:Q", "typed:q", "down:Escape"]
        );
    }

    #[test]
    fn test_user_data_reaches_callbacks() {
        let mut marker: u32 = 7;
        let seen = Rc::new(Cell::new(0u32));
        let mut events = WindowEvents::default();
        let s = Rc::clone(&seen);
        events.on_focus = Some(Box::new(move |user, _| {
            // Recover per-window context the way a stateless free function
            // would.
            let value = unsafe { *(user as *const u32) };
            s.set(value);
        }));

        let mut window = HeadlessWindow::new("w", events);
        window.set_user_data(&mut marker as *mut u32 as UserData);
        window.push_native_event(SyntheticEvent::FocusChanged(true));
        window.poll_events();
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_windows_are_independent() {
        let (events_a, count_a) = resize_counter();
        let (events_b, count_b) = resize_counter();
        let mut a = HeadlessWindow::new("same title", events_a);
        let mut b = HeadlessWindow::new("same title", events_b);

        a.push_native_event(SyntheticEvent::Resized(1, 1));
        a.poll_events();
        b.poll_events();
        assert_eq!((count_a.get(), count_b.get()), (1, 0));

        drop(a);
        b.push_native_event(SyntheticEvent::Resized(2, 2));
        b.poll_events();
        assert_eq!(count_b.get(), 1);
    }

    #[test]
    fn test_callback_take_leaves_slot_unset() {
        let (events, count) = resize_counter();
        let mut window = HeadlessWindow::new("w", events);
        let taken = window.take_on_resize();
        assert!(taken.is_some());
        assert!(window.take_on_resize().is_none());

        window.push_native_event(SyntheticEvent::Resized(1, 1));
        window.poll_events();
        assert_eq!(count.get(), 0, "unset entries are no-ops");
    }

    #[test]
    fn test_set_visible_fires_visibility_callback() {
        let visible = Rc::new(Cell::new(true));
        let mut events = WindowEvents::default();
        let v = Rc::clone(&visible);
        events.on_window_visibility = Some(Box::new(move |_, shown| v.set(shown)));

        let mut window = HeadlessWindow::new("w", events);
        window.set_visible(false);
        assert!(!window.is_visible());
        assert!(!visible.get());
        window.set_visible(true);
        assert!(window.is_visible());
        assert!(visible.get());
    }

    #[test]
    fn test_title_round_trip() {
        let mut window = HeadlessWindow::new("first", WindowEvents::default());
        assert_eq!(window.get_title().as_deref(), Some("first"));
        window.set_title("second");
        assert_eq!(window.get_title().as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_title_is_not_a_failure() {
        let mut window = HeadlessWindow::new("named", WindowEvents::default());
        window.set_title("");
        // `None` is reserved for a failed host query.
        assert_eq!(window.get_title().as_deref(), Some(""));
    }
}
