//! Per-window native state record
//!
//! Every backend owns exactly one [`WindowState`] per window and recovers it
//! from inside the host's dispatch entry point (window procedure, delegate
//! method, or synthetic queue). The record centralizes the translation
//! policy all backends must agree on: the close-request default, enter/leave
//! derivation from the mouse-tracking flag, the fixed KeyDown-then-KeyTyped
//! order, and the per-poll-cycle event deduplication.
//!
//! Backends translate host notifications into calls on this record; the
//! record decides whether and how the registered callbacks fire.

use crate::events::{EventKind, UserData, WindowEvents};
use crate::input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};

/// Mutable per-window record behind every backend.
pub(crate) struct WindowState {
    pub should_close: bool,
    pub user_data: UserData,
    pub events: WindowEvents,
    /// Whether the pointer is currently known to be inside the window.
    pub tracking_mouse: bool,
    #[cfg(feature = "limit-events")]
    limit_events: bool,
    /// Bitset of [`EventKind`]s already delivered this poll cycle.
    #[cfg(feature = "limit-events")]
    delivered: u32,
}

impl WindowState {
    pub fn new(events: WindowEvents) -> Self {
        Self {
            should_close: false,
            user_data: std::ptr::null_mut(),
            events,
            tracking_mouse: false,
            #[cfg(feature = "limit-events")]
            limit_events: false,
            #[cfg(feature = "limit-events")]
            delivered: 0,
        }
    }

    /// Reset the per-cycle delivery set. Called at the top of every
    /// `poll_events`, before the host queue is drained.
    pub fn begin_poll(&mut self) {
        #[cfg(feature = "limit-events")]
        {
            self.delivered = 0;
        }
    }

    /// Check-then-insert delivery gate for side-effect-free events.
    ///
    /// First-wins: the first notification of a kind in a poll cycle is
    /// delivered, later ones are suppressed. Only callback invocation is
    /// suppressed; callers must perform any state updates regardless.
    #[cfg(feature = "limit-events")]
    fn should_deliver(&mut self, kind: EventKind) -> bool {
        if !self.limit_events || !kind.side_effect_free() {
            return true;
        }
        if self.delivered & kind.bit() != 0 {
            return false;
        }
        self.delivered |= kind.bit();
        true
    }

    #[cfg(not(feature = "limit-events"))]
    fn should_deliver(&mut self, _kind: EventKind) -> bool {
        true
    }

    #[cfg(feature = "limit-events")]
    pub fn set_limit_events(&mut self, limit: bool) {
        self.limit_events = limit;
    }

    #[cfg(feature = "limit-events")]
    pub fn is_limiting_events(&self) -> bool {
        self.limit_events
    }

    // --- Translation entry points, one per contract event ---

    /// Close request. The callback's verdict becomes the should-close flag;
    /// with no callback registered the close is allowed.
    pub fn close_requested(&mut self) {
        self.should_close = match self.events.on_close.as_mut() {
            Some(on_close) => on_close(self.user_data),
            None => true,
        };
    }

    pub fn visibility_changed(&mut self, visible: bool) {
        if let Some(cb) = self.events.on_window_visibility.as_mut() {
            cb(self.user_data, visible);
        }
    }

    pub fn focus_changed(&mut self, focused: bool) {
        if let Some(cb) = self.events.on_focus.as_mut() {
            cb(self.user_data, focused);
        }
    }

    pub fn resized(&mut self, width: u32, height: u32) {
        if !self.should_deliver(EventKind::Resize) {
            return;
        }
        if let Some(cb) = self.events.on_resize.as_mut() {
            cb(self.user_data, width, height);
        }
    }

    pub fn moved(&mut self, x: i32, y: i32) {
        if !self.should_deliver(EventKind::Move) {
            return;
        }
        if let Some(cb) = self.events.on_move.as_mut() {
            cb(self.user_data, x, y);
        }
    }

    pub fn before_resize(&mut self) {
        if let Some(cb) = self.events.before_resize.as_mut() {
            cb(self.user_data);
        }
    }

    pub fn minimized(&mut self) {
        if let Some(cb) = self.events.on_minimize.as_mut() {
            cb(self.user_data);
        }
    }

    pub fn maximized(&mut self) {
        if let Some(cb) = self.events.on_maximize.as_mut() {
            cb(self.user_data);
        }
    }

    pub fn restored(&mut self) {
        if let Some(cb) = self.events.on_restore.as_mut() {
            cb(self.user_data);
        }
    }

    pub fn fullscreen_changed(&mut self, fullscreen: bool) {
        if let Some(cb) = self.events.on_fullscreen.as_mut() {
            cb(self.user_data, fullscreen);
        }
    }

    /// Explicit enter notification (hosts that report it natively).
    pub fn mouse_entered(&mut self) {
        self.tracking_mouse = true;
        if let Some(cb) = self.events.on_mouse_enter.as_mut() {
            cb(self.user_data);
        }
    }

    /// Leave notification; resets tracking so the next inside-movement
    /// raises enter again.
    pub fn mouse_left(&mut self) {
        self.tracking_mouse = false;
        if let Some(cb) = self.events.on_mouse_leave.as_mut() {
            cb(self.user_data);
        }
    }

    /// Pointer movement. Derives the enter event on the first movement of a
    /// contiguous inside-span. Returns `true` when this movement entered the
    /// window, so backends can arm host-level leave tracking.
    pub fn pointer_moved(&mut self, position: Point) -> bool {
        let entered = !self.tracking_mouse;
        if entered {
            self.mouse_entered();
        }
        if self.should_deliver(EventKind::MouseMove) {
            if let Some(cb) = self.events.on_mouse_move.as_mut() {
                cb(self.user_data, position);
            }
        }
        entered
    }

    pub fn mouse_down(&mut self, position: Point, button: MouseButton) {
        if let Some(cb) = self.events.on_mouse_down.as_mut() {
            cb(self.user_data, position, button);
        }
    }

    pub fn mouse_up(&mut self, position: Point, button: MouseButton) {
        if let Some(cb) = self.events.on_mouse_up.as_mut() {
            cb(self.user_data, position, button);
        }
    }

    pub fn mouse_wheel(&mut self, position: Point, offset: ScrollOffset) {
        if !self.should_deliver(EventKind::MouseWheel) {
            return;
        }
        if let Some(cb) = self.events.on_mouse_wheel.as_mut() {
            cb(self.user_data, position, offset);
        }
    }

    /// Key press. Fires KeyDown, then KeyTyped when the host mapped the key
    /// to a printable character; the order is fixed.
    pub fn key_down(
        &mut self,
        code: KeyCode,
        modifiers: Modifiers,
        repeat: bool,
        typed: Option<char>,
    ) {
        if let Some(cb) = self.events.on_key_down.as_mut() {
            cb(self.user_data, code, modifiers, repeat);
        }
        if let Some(character) = typed {
            if let Some(cb) = self.events.on_key_typed.as_mut() {
                cb(self.user_data, character, modifiers);
            }
        }
    }

    pub fn key_up(&mut self, code: KeyCode, modifiers: Modifiers) {
        if let Some(cb) = self.events.on_key_up.as_mut() {
            cb(self.user_data, code, modifiers);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_state(log: &Rc<RefCell<Vec<&'static str>>>) -> WindowState {
        let mut events = WindowEvents::default();
        let l = Rc::clone(log);
        events.on_resize = Some(Box::new(move |_, _, _| l.borrow_mut().push("resize")));
        let l = Rc::clone(log);
        events.on_move = Some(Box::new(move |_, _, _| l.borrow_mut().push("move")));
        let l = Rc::clone(log);
        events.on_mouse_enter = Some(Box::new(move |_| l.borrow_mut().push("enter")));
        let l = Rc::clone(log);
        events.on_mouse_leave = Some(Box::new(move |_| l.borrow_mut().push("leave")));
        let l = Rc::clone(log);
        events.on_mouse_move = Some(Box::new(move |_, _| l.borrow_mut().push("mouse_move")));
        let l = Rc::clone(log);
        events.on_key_down = Some(Box::new(move |_, _, _, _| l.borrow_mut().push("key_down")));
        let l = Rc::clone(log);
        events.on_key_typed = Some(Box::new(move |_, _, _| l.borrow_mut().push("key_typed")));
        WindowState::new(events)
    }

    #[test]
    fn test_close_defaults_to_allow() {
        let mut state = WindowState::new(WindowEvents::default());
        assert!(!state.should_close);
        state.close_requested();
        assert!(state.should_close);
    }

    #[test]
    fn test_close_callback_verdict_wins() {
        let mut events = WindowEvents::default();
        events.on_close = Some(Box::new(|_| false));
        let mut state = WindowState::new(events);
        state.close_requested();
        assert!(!state.should_close);
    }

    #[test]
    fn test_enter_leave_tracking() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = counting_state(&log);

        assert!(state.pointer_moved(Point::new(1.0, 1.0)));
        assert!(!state.pointer_moved(Point::new(2.0, 2.0)));
        state.mouse_left();
        assert!(state.pointer_moved(Point::new(3.0, 3.0)));

        let recorded = log.borrow().clone();
        assert_eq!(
            recorded,
            vec![
                "enter",
                "mouse_move",
                "mouse_move",
                "leave",
                "enter",
                "mouse_move"
            ]
        );
    }

    #[test]
    fn test_key_down_precedes_key_typed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = counting_state(&log);

        state.key_down(KeyCode::A, Modifiers::empty(), false, Some('a'));
        state.key_down(KeyCode::F1, Modifiers::empty(), false, None);

        let recorded = log.borrow().clone();
        assert_eq!(recorded, vec!["key_down", "key_typed", "key_down"]);
    }

    #[cfg(feature = "limit-events")]
    #[test]
    fn test_resize_deduplicated_first_wins() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = counting_state(&log);
        state.set_limit_events(true);

        state.begin_poll();
        state.resized(100, 100);
        state.resized(200, 200);
        state.resized(300, 300);
        state.moved(5, 5);
        state.moved(6, 6);
        assert_eq!(log.borrow().as_slice(), ["resize", "move"]);

        // Next cycle delivers again.
        state.begin_poll();
        state.resized(400, 400);
        assert_eq!(log.borrow().as_slice(), ["resize", "move", "resize"]);
    }

    #[cfg(feature = "limit-events")]
    #[test]
    fn test_dedup_disabled_delivers_all() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = counting_state(&log);

        state.begin_poll();
        state.resized(100, 100);
        state.resized(200, 200);
        assert_eq!(log.borrow().len(), 2);
    }

    #[cfg(feature = "limit-events")]
    #[test]
    fn test_key_events_never_deduplicated() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut state = counting_state(&log);
        state.set_limit_events(true);

        state.begin_poll();
        state.key_down(KeyCode::A, Modifiers::empty(), false, Some('a'));
        state.key_down(KeyCode::A, Modifiers::empty(), true, Some('a'));
        assert_eq!(
            log.borrow().as_slice(),
            ["key_down", "key_typed", "key_down", "key_typed"]
        );
    }
}
