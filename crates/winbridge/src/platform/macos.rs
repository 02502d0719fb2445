//! Cocoa native message translator
//!
//! Bridges AppKit to the window contract. A custom `NSView` subclass,
//! registered once through the ObjC runtime, is both the window's content
//! view and its delegate; every responder override and delegate notification
//! recovers the per-window state record from an ivar on the view, so any
//! number of windows can coexist without a global registry.
//!
//! AppKit windows must be driven from the main thread; creation off the main
//! thread fails instead of crashing inside the host.

use std::ffi::c_void;
use std::sync::OnceLock;

use objc2::declare::ClassBuilder;
use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
use objc2::{msg_send, sel};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSBackingStoreType, NSCursor, NSEvent,
    NSEventMask, NSEventModifierFlags, NSScreen, NSTrackingArea, NSTrackingAreaOptions, NSView,
    NSWindow, NSWindowStyleMask,
};
use objc2_foundation::{
    ns_string, MainThreadMarker, NSDate, NSPoint, NSRect, NSSize, NSString,
};
use raw_window_handle::{AppKitWindowHandle, RawWindowHandle};

use crate::config::{WindowBounds, WindowConfig, WindowStyles};
use crate::cursor::CursorMode;
use crate::error::{WindowError, WindowResult};
use crate::events::WindowEvents;
use crate::input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};
use crate::platform::state::WindowState;
use crate::platform::state_backed_window_methods;
use crate::window::Window;

const STATE_IVAR: &str = "_winbridge_state";

const DEFAULT_WIDTH: f64 = 1280.0;
const DEFAULT_HEIGHT: f64 = 720.0;

/// Window backed by an AppKit `NSWindow`.
pub struct CocoaWindow {
    window: Retained<NSWindow>,
    view: Retained<NSView>,
    /// Boxed so the address stored in the view's ivar stays stable when the
    /// window struct itself moves.
    state: Box<WindowState>,
    cursor_hidden: bool,
    mtm: MainThreadMarker,
}

fn style_mask(styles: WindowStyles) -> NSWindowStyleMask {
    if styles.contains(WindowStyles::BORDERLESS) {
        return NSWindowStyleMask::Borderless;
    }
    let mut mask = NSWindowStyleMask::empty();
    if styles.contains(WindowStyles::TITLE_BAR) {
        mask |= NSWindowStyleMask::Titled;
    }
    if styles.contains(WindowStyles::CLOSE_BUTTON) {
        mask |= NSWindowStyleMask::Closable;
    }
    if styles.contains(WindowStyles::MINIATURIZE_BUTTON) {
        mask |= NSWindowStyleMask::Miniaturizable;
    }
    if styles.contains(WindowStyles::RESIZABLE) {
        mask |= NSWindowStyleMask::Resizable;
    }
    mask
}

fn content_rect(bounds: WindowBounds, mtm: MainThreadMarker) -> NSRect {
    let width = if bounds.width == WindowBounds::UNSPECIFIED {
        DEFAULT_WIDTH
    } else {
        f64::from(bounds.width)
    };
    let height = if bounds.height == WindowBounds::UNSPECIFIED {
        DEFAULT_HEIGHT
    } else {
        f64::from(bounds.height)
    };
    let (x, y) = if bounds.x == WindowBounds::UNSPECIFIED || bounds.y == WindowBounds::UNSPECIFIED
    {
        (0.0, 0.0)
    } else {
        // Caller coordinates are top-left based; AppKit's origin is the
        // bottom-left of the primary screen.
        let screen_height = NSScreen::mainScreen(mtm)
            .map(|screen| screen.frame().size.height)
            .unwrap_or(0.0);
        (
            f64::from(bounds.x),
            screen_height - f64::from(bounds.y) - height,
        )
    };
    NSRect::new(NSPoint::new(x, y), NSSize::new(width, height))
}

/// One-time process-level AppKit setup shared by every window.
fn bootstrap_application(mtm: MainThreadMarker) {
    static BOOTSTRAP: OnceLock<()> = OnceLock::new();
    BOOTSTRAP.get_or_init(|| {
        let app = NSApplication::sharedApplication(mtm);
        app.setActivationPolicy(NSApplicationActivationPolicy::Regular);
        unsafe {
            app.finishLaunching();
            app.activate();
        }
    });
}

impl CocoaWindow {
    pub(crate) fn open(
        title: &str,
        bounds: WindowBounds,
        styles: WindowStyles,
        config: WindowConfig,
    ) -> WindowResult<Self> {
        let mtm = MainThreadMarker::new().ok_or(WindowError::NotMainThread)?;
        bootstrap_application(mtm);

        let mask = style_mask(styles);
        let rect = content_rect(bounds, mtm);
        let window = unsafe {
            NSWindow::initWithContentRect_styleMask_backing_defer(
                mtm.alloc(),
                rect,
                mask,
                NSBackingStoreType::NSBackingStoreBuffered,
                false,
            )
        };
        // The Retained wrapper owns the window; AppKit must not release it
        // behind our back when the user clicks close.
        unsafe {
            let _: () = msg_send![&*window, setReleasedWhenClosed: Bool::NO];
        }
        window.setTitle(&NSString::from_str(title));
        if bounds.x == WindowBounds::UNSPECIFIED || bounds.y == WindowBounds::UNSPECIFIED {
            window.center();
        }

        // The bundle is still empty during construction; the factory
        // installs the caller's callbacks only after the window exists.
        let mut state = Box::new(WindowState::new(WindowEvents::default()));

        let view = create_view(rect, &mut state)?;
        window.setContentView(Some(&view));
        unsafe {
            // The view doubles as the window delegate.
            let _: () = msg_send![&*window, setDelegate: &*view];
            window.setAcceptsMouseMovedEvents(true);
            let _: Bool = msg_send![&*window, makeFirstResponder: &*view];
        }

        let cocoa = Self {
            window,
            view,
            state,
            cursor_hidden: false,
            mtm,
        };
        if config.start_visible {
            if config.start_focused {
                cocoa.window.makeKeyAndOrderFront(None);
            } else {
                unsafe {
                    cocoa.window.orderFront(None);
                }
            }
        }
        Ok(cocoa)
    }

    fn show_cursor(&mut self, show: bool) {
        // hide/unhide keep a display counter; only move it when the desired
        // visibility actually changes.
        if self.cursor_hidden == !show {
            return;
        }
        self.cursor_hidden = !show;
        unsafe {
            if show {
                NSCursor::unhide();
            } else {
                NSCursor::hide();
            }
        }
    }
}

impl Window for CocoaWindow {
    fn set_visible(&mut self, visible: bool) {
        if visible {
            self.window.makeKeyAndOrderFront(None);
        } else {
            unsafe {
                self.window.orderOut(None);
            }
        }
        // AppKit has no ordering notification; visibility is reported from
        // the transition itself.
        self.state.visibility_changed(visible);
    }

    fn poll_events(&mut self) {
        self.state.begin_poll();
        let app = NSApplication::sharedApplication(self.mtm);
        let mode = ns_string!("kCFRunLoopDefaultMode");
        unsafe {
            while let Some(event) = app.nextEventMatchingMask_untilDate_inMode_dequeue(
                NSEventMask::Any,
                Some(&NSDate::distantPast()),
                mode,
                true,
            ) {
                app.sendEvent(&event);
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        self.window.setTitle(&NSString::from_str(title));
    }

    fn get_title(&self) -> Option<String> {
        Some(self.window.title().to_string())
    }

    fn get_native_handle(&self) -> *mut c_void {
        Retained::as_ptr(&self.window) as *mut c_void
    }

    fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        let mut handle = AppKitWindowHandle::empty();
        handle.ns_window = Retained::as_ptr(&self.window) as *mut c_void;
        handle.ns_view = Retained::as_ptr(&self.view) as *mut c_void;
        Some(RawWindowHandle::AppKit(handle))
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        match mode {
            CursorMode::Normal => self.show_cursor(true),
            CursorMode::Hidden => self.show_cursor(false),
            // TODO: confine the pointer with
            // CGAssociateMouseAndMouseCursorPosition, which needs a
            // CoreGraphics binding this crate does not carry yet.
            CursorMode::Captured => self.show_cursor(false),
        }
    }

    state_backed_window_methods!();
}

impl Drop for CocoaWindow {
    fn drop(&mut self) {
        self.show_cursor(true);
        unsafe {
            // Detach the delegate and the state ivar before closing so no
            // late notification dereferences the record mid-teardown.
            let _: () = msg_send![&*self.window, setDelegate: std::ptr::null::<AnyObject>()];
            store_state_ptr(&self.view, std::ptr::null_mut());
            self.window.close();
        }
    }
}

// ---------------------------------------------------------------------------
// NSView subclass
// ---------------------------------------------------------------------------

fn create_view(frame: NSRect, state: &mut WindowState) -> WindowResult<Retained<NSView>> {
    let class = view_class();
    let view: Retained<NSView> = unsafe {
        let raw: *mut AnyObject = msg_send![class, alloc];
        let raw: *mut AnyObject = msg_send![raw, initWithFrame: frame];
        Retained::from_raw(raw.cast()).ok_or(WindowError::CreationFailed)?
    };
    unsafe {
        store_state_ptr(&view, state as *mut WindowState);
    }

    // Enter/leave and movement tracking across the whole visible rect,
    // regardless of key status.
    let options = NSTrackingAreaOptions::NSTrackingMouseEnteredAndExited
        | NSTrackingAreaOptions::NSTrackingMouseMoved
        | NSTrackingAreaOptions::NSTrackingActiveAlways
        | NSTrackingAreaOptions::NSTrackingInVisibleRect;
    unsafe {
        let area = NSTrackingArea::initWithRect_options_owner_userInfo(
            NSTrackingArea::alloc(),
            frame,
            options,
            Some(&view),
            None,
        );
        view.addTrackingArea(&area);
    }
    Ok(view)
}

unsafe fn store_state_ptr(view: &NSView, ptr: *mut WindowState) {
    let object: &AnyObject = view.as_ref();
    let ivar = object
        .class()
        .instance_variable(STATE_IVAR)
        .expect("view class registered without state ivar");
    let base = object as *const AnyObject as *mut u8;
    let slot = base.offset(ivar.offset()) as *mut *mut c_void;
    *slot = ptr.cast();
}

unsafe fn state_from(view: &AnyObject) -> Option<&mut WindowState> {
    let ivar = view.class().instance_variable(STATE_IVAR)?;
    let ptr = *ivar.load::<*mut c_void>(view) as *mut WindowState;
    if ptr.is_null() {
        return None;
    }
    Some(&mut *ptr)
}

fn view_class() -> &'static AnyClass {
    static CLASS: OnceLock<&'static AnyClass> = OnceLock::new();
    CLASS.get_or_init(|| {
        let superclass = AnyClass::get("NSView").expect("NSView missing from runtime");
        let mut builder =
            ClassBuilder::new("WinbridgeView", superclass).expect("view class name collision");
        builder.add_ivar::<*mut c_void>(STATE_IVAR);
        let class = builder.register();
        let class_ptr = class as *const _ as *mut objc2::ffi::objc_class;

        unsafe fn add_method_raw(
            class: *mut objc2::ffi::objc_class,
            sel: Sel,
            imp: objc2::ffi::IMP,
            types: &std::ffi::CStr,
        ) {
            objc2::ffi::class_addMethod(class, sel.as_ptr(), imp, types.as_ptr());
        }

        macro_rules! bool_method {
            ($sel:expr, $imp:ident) => {
                add_method_raw(
                    class_ptr,
                    $sel,
                    Some(std::mem::transmute::<
                        extern "C" fn(&AnyObject, Sel) -> Bool,
                        unsafe extern "C" fn(),
                    >($imp)),
                    c"B@:",
                )
            };
        }
        macro_rules! object_method {
            ($sel:expr, $imp:ident) => {
                add_method_raw(
                    class_ptr,
                    $sel,
                    Some(std::mem::transmute::<
                        extern "C" fn(&AnyObject, Sel, *mut AnyObject),
                        unsafe extern "C" fn(),
                    >($imp)),
                    c"v@:@",
                )
            };
        }

        // Type encodings: B = BOOL, v = void, @ = id, : = SEL.
        unsafe {
            bool_method!(sel!(acceptsFirstResponder), accepts_first_responder);
            bool_method!(sel!(isFlipped), is_flipped);

            object_method!(sel!(mouseEntered:), mouse_entered);
            object_method!(sel!(mouseExited:), mouse_exited);
            object_method!(sel!(mouseMoved:), mouse_moved);
            object_method!(sel!(mouseDragged:), mouse_moved);
            object_method!(sel!(rightMouseDragged:), mouse_moved);
            object_method!(sel!(otherMouseDragged:), mouse_moved);
            object_method!(sel!(mouseDown:), mouse_down);
            object_method!(sel!(mouseUp:), mouse_up);
            object_method!(sel!(rightMouseDown:), right_mouse_down);
            object_method!(sel!(rightMouseUp:), right_mouse_up);
            object_method!(sel!(otherMouseDown:), other_mouse_down);
            object_method!(sel!(otherMouseUp:), other_mouse_up);
            object_method!(sel!(scrollWheel:), scroll_wheel);
            object_method!(sel!(keyDown:), key_down);
            object_method!(sel!(keyUp:), key_up);

            // NSWindowDelegate methods; the view is its window's delegate.
            add_method_raw(
                class_ptr,
                sel!(windowShouldClose:),
                Some(std::mem::transmute::<
                    extern "C" fn(&AnyObject, Sel, *mut AnyObject) -> Bool,
                    unsafe extern "C" fn(),
                >(window_should_close)),
                c"B@:@",
            );
            object_method!(sel!(windowDidResize:), window_did_resize);
            object_method!(sel!(windowDidMove:), window_did_move);
            object_method!(sel!(windowWillStartLiveResize:), window_will_start_live_resize);
            object_method!(sel!(windowDidMiniaturize:), window_did_miniaturize);
            object_method!(sel!(windowDidDeminiaturize:), window_did_deminiaturize);
            object_method!(sel!(windowDidBecomeKey:), window_did_become_key);
            object_method!(sel!(windowDidResignKey:), window_did_resign_key);
            object_method!(sel!(windowDidEnterFullScreen:), window_did_enter_full_screen);
            object_method!(sel!(windowDidExitFullScreen:), window_did_exit_full_screen);
        }

        class
    })
}

extern "C" fn accepts_first_responder(_this: &AnyObject, _sel: Sel) -> Bool {
    Bool::YES
}

/// Flipped so view coordinates match the contract's top-left origin.
extern "C" fn is_flipped(_this: &AnyObject, _sel: Sel) -> Bool {
    Bool::YES
}

unsafe fn event_ref(raw: *mut AnyObject) -> &'static NSEvent {
    &*(raw as *const NSEvent)
}

fn event_position(this: &AnyObject, event: &NSEvent) -> Point {
    unsafe {
        let in_window: NSPoint = event.locationInWindow();
        let in_view: NSPoint =
            msg_send![this, convertPoint: in_window fromView: std::ptr::null::<AnyObject>()];
        Point::new(in_view.x as f32, in_view.y as f32)
    }
}

fn event_modifiers(event: &NSEvent) -> Modifiers {
    let flags = unsafe { event.modifierFlags() };
    let mut modifiers = Modifiers::empty();
    if flags.contains(NSEventModifierFlags::NSEventModifierFlagShift) {
        modifiers |= Modifiers::SHIFT;
    }
    if flags.contains(NSEventModifierFlags::NSEventModifierFlagControl) {
        modifiers |= Modifiers::CONTROL;
    }
    if flags.contains(NSEventModifierFlags::NSEventModifierFlagOption) {
        modifiers |= Modifiers::ALT;
    }
    if flags.contains(NSEventModifierFlags::NSEventModifierFlagCommand) {
        modifiers |= Modifiers::SUPER;
    }
    modifiers
}

extern "C" fn mouse_entered(this: &AnyObject, _sel: Sel, _event: *mut AnyObject) {
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_entered();
    }
}

extern "C" fn mouse_exited(this: &AnyObject, _sel: Sel, _event: *mut AnyObject) {
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_left();
    }
}

extern "C" fn mouse_moved(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    if let Some(state) = unsafe { state_from(this) } {
        // The tracking area already reports enter/leave; the return value is
        // only meaningful to hosts that need explicit arming.
        let _ = state.pointer_moved(event_position(this, event));
    }
}

extern "C" fn mouse_down(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_down(event_position(this, event), MouseButton::LEFT);
    }
}

extern "C" fn mouse_up(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_up(event_position(this, event), MouseButton::LEFT);
    }
}

extern "C" fn right_mouse_down(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_down(event_position(this, event), MouseButton::RIGHT);
    }
}

extern "C" fn right_mouse_up(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_up(event_position(this, event), MouseButton::RIGHT);
    }
}

extern "C" fn other_mouse_down(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    let button = MouseButton::from_index(unsafe { event.buttonNumber() } as u8);
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_down(event_position(this, event), button);
    }
}

extern "C" fn other_mouse_up(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    let button = MouseButton::from_index(unsafe { event.buttonNumber() } as u8);
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_up(event_position(this, event), button);
    }
}

extern "C" fn scroll_wheel(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    let (mut dx, mut dy) = unsafe { (event.scrollingDeltaX(), event.scrollingDeltaY()) };
    let precise: Bool = unsafe { msg_send![event, hasPreciseScrollingDeltas] };
    // Precise deltas are pixels; scale to roughly one tick per wheel line.
    if precise.as_bool() {
        dx /= 10.0;
        dy /= 10.0;
    }
    if let Some(state) = unsafe { state_from(this) } {
        state.mouse_wheel(
            event_position(this, event),
            ScrollOffset::new(dx as f32, dy as f32),
        );
    }
}

extern "C" fn key_down(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    let code = keycode_from_host(unsafe { event.keyCode() });
    let modifiers = event_modifiers(event);
    let repeat = unsafe { event.isARepeat() };
    let typed = typed_char(event);
    if let Some(state) = unsafe { state_from(this) } {
        state.key_down(code, modifiers, repeat, typed);
    }
}

extern "C" fn key_up(this: &AnyObject, _sel: Sel, event: *mut AnyObject) {
    let event = unsafe { event_ref(event) };
    let code = keycode_from_host(unsafe { event.keyCode() });
    if let Some(state) = unsafe { state_from(this) } {
        state.key_up(code, event_modifiers(event));
    }
}

extern "C" fn window_should_close(this: &AnyObject, _sel: Sel, _window: *mut AnyObject) -> Bool {
    if let Some(state) = unsafe { state_from(this) } {
        state.close_requested();
    }
    // Closure is owner-driven through the should-close flag; AppKit never
    // tears the window down on its own.
    Bool::NO
}

extern "C" fn window_did_resize(this: &AnyObject, _sel: Sel, _notification: *mut AnyObject) {
    unsafe {
        let frame: NSRect = msg_send![this, frame];
        if let Some(state) = state_from(this) {
            state.resized(frame.size.width as u32, frame.size.height as u32);
        }
    }
}

extern "C" fn window_did_move(this: &AnyObject, _sel: Sel, _notification: *mut AnyObject) {
    unsafe {
        let window: *mut AnyObject = msg_send![this, window];
        if window.is_null() {
            return;
        }
        let frame: NSRect = msg_send![window, frame];
        if let Some(state) = state_from(this) {
            state.moved(frame.origin.x as i32, frame.origin.y as i32);
        }
    }
}

extern "C" fn window_will_start_live_resize(
    this: &AnyObject,
    _sel: Sel,
    _notification: *mut AnyObject,
) {
    if let Some(state) = unsafe { state_from(this) } {
        state.before_resize();
    }
}

extern "C" fn window_did_miniaturize(this: &AnyObject, _sel: Sel, _notification: *mut AnyObject) {
    if let Some(state) = unsafe { state_from(this) } {
        state.minimized();
    }
}

extern "C" fn window_did_deminiaturize(
    this: &AnyObject,
    _sel: Sel,
    _notification: *mut AnyObject,
) {
    if let Some(state) = unsafe { state_from(this) } {
        state.restored();
    }
}

extern "C" fn window_did_become_key(this: &AnyObject, _sel: Sel, _notification: *mut AnyObject) {
    if let Some(state) = unsafe { state_from(this) } {
        state.focus_changed(true);
    }
}

extern "C" fn window_did_resign_key(this: &AnyObject, _sel: Sel, _notification: *mut AnyObject) {
    if let Some(state) = unsafe { state_from(this) } {
        state.focus_changed(false);
    }
}

extern "C" fn window_did_enter_full_screen(
    this: &AnyObject,
    _sel: Sel,
    _notification: *mut AnyObject,
) {
    if let Some(state) = unsafe { state_from(this) } {
        state.fullscreen_changed(true);
    }
}

extern "C" fn window_did_exit_full_screen(
    this: &AnyObject,
    _sel: Sel,
    _notification: *mut AnyObject,
) {
    if let Some(state) = unsafe { state_from(this) } {
        state.fullscreen_changed(false);
    }
}

fn typed_char(event: &NSEvent) -> Option<char> {
    let characters = unsafe { event.characters() }?;
    let character = characters.to_string().chars().next()?;
    // Printable ASCII only; everything else is key-down without key-typed.
    if (' '..='~').contains(&character) {
        Some(character)
    } else {
        None
    }
}

/// ANSI-layout virtual key codes (HIToolbox `kVK_*` values).
fn keycode_from_host(code: u16) -> KeyCode {
    match code {
        0x00 => KeyCode::A,
        0x01 => KeyCode::S,
        0x02 => KeyCode::D,
        0x03 => KeyCode::F,
        0x04 => KeyCode::H,
        0x05 => KeyCode::G,
        0x06 => KeyCode::Z,
        0x07 => KeyCode::X,
        0x08 => KeyCode::C,
        0x09 => KeyCode::V,
        0x0B => KeyCode::B,
        0x0C => KeyCode::Q,
        0x0D => KeyCode::W,
        0x0E => KeyCode::E,
        0x0F => KeyCode::R,
        0x10 => KeyCode::Y,
        0x11 => KeyCode::T,
        0x12 => KeyCode::D1,
        0x13 => KeyCode::D2,
        0x14 => KeyCode::D3,
        0x15 => KeyCode::D4,
        0x16 => KeyCode::D6,
        0x17 => KeyCode::D5,
        0x18 => KeyCode::Equal,
        0x19 => KeyCode::D9,
        0x1A => KeyCode::D7,
        0x1B => KeyCode::Minus,
        0x1C => KeyCode::D8,
        0x1D => KeyCode::D0,
        0x1E => KeyCode::RightBracket,
        0x1F => KeyCode::O,
        0x20 => KeyCode::U,
        0x21 => KeyCode::LeftBracket,
        0x22 => KeyCode::I,
        0x23 => KeyCode::P,
        0x24 => KeyCode::Enter,
        0x25 => KeyCode::L,
        0x26 => KeyCode::J,
        0x27 => KeyCode::Apostrophe,
        0x28 => KeyCode::K,
        0x29 => KeyCode::Semicolon,
        0x2A => KeyCode::Backslash,
        0x2B => KeyCode::Comma,
        0x2C => KeyCode::Slash,
        0x2D => KeyCode::N,
        0x2E => KeyCode::M,
        0x2F => KeyCode::Period,
        0x30 => KeyCode::Tab,
        0x31 => KeyCode::Space,
        0x32 => KeyCode::GraveAccent,
        0x33 => KeyCode::Backspace,
        0x35 => KeyCode::Escape,
        0x36 => KeyCode::RightSuper,
        0x37 => KeyCode::LeftSuper,
        0x38 => KeyCode::LeftShift,
        0x39 => KeyCode::CapsLock,
        0x3A => KeyCode::LeftAlt,
        0x3B => KeyCode::LeftControl,
        0x3C => KeyCode::RightShift,
        0x3D => KeyCode::RightAlt,
        0x3E => KeyCode::RightControl,
        0x40 => KeyCode::F17,
        0x41 => KeyCode::KpDecimal,
        0x43 => KeyCode::KpMultiply,
        0x45 => KeyCode::KpAdd,
        0x47 => KeyCode::NumLock,
        0x4B => KeyCode::KpDivide,
        0x4C => KeyCode::KpEnter,
        0x4E => KeyCode::KpSubtract,
        0x4F => KeyCode::F18,
        0x50 => KeyCode::F19,
        0x51 => KeyCode::KpEqual,
        0x52 => KeyCode::Kp0,
        0x53 => KeyCode::Kp1,
        0x54 => KeyCode::Kp2,
        0x55 => KeyCode::Kp3,
        0x56 => KeyCode::Kp4,
        0x57 => KeyCode::Kp5,
        0x58 => KeyCode::Kp6,
        0x59 => KeyCode::Kp7,
        0x5A => KeyCode::F20,
        0x5B => KeyCode::Kp8,
        0x5C => KeyCode::Kp9,
        0x60 => KeyCode::F5,
        0x61 => KeyCode::F6,
        0x62 => KeyCode::F7,
        0x63 => KeyCode::F3,
        0x64 => KeyCode::F8,
        0x65 => KeyCode::F9,
        0x67 => KeyCode::F11,
        0x69 => KeyCode::F13,
        0x6A => KeyCode::F16,
        0x6B => KeyCode::F14,
        0x6D => KeyCode::F10,
        0x6E => KeyCode::Menu,
        0x6F => KeyCode::F12,
        0x71 => KeyCode::F15,
        0x72 => KeyCode::Insert,
        0x73 => KeyCode::Home,
        0x74 => KeyCode::PageUp,
        0x75 => KeyCode::Delete,
        0x76 => KeyCode::F4,
        0x77 => KeyCode::End,
        0x78 => KeyCode::F2,
        0x79 => KeyCode::PageDown,
        0x7A => KeyCode::F1,
        0x7B => KeyCode::Left,
        0x7C => KeyCode::Right,
        0x7D => KeyCode::Down,
        0x7E => KeyCode::Up,
        _ => KeyCode::Unknown,
    }
}
