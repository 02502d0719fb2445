//! Win32 native message translator
//!
//! Bridges the Win32 message queue to the window contract. Each window
//! registers its own uniquely named window class whose window procedure is
//! the single dispatch entry point; the per-window state record is attached
//! to the `HWND` through the `GWLP_USERDATA` slot during `WM_CREATE` and
//! recovered on every later message, so any number of windows can coexist
//! without a global registry.

use std::ffi::c_void;
use std::os::windows::ffi::OsStrExt;
use std::sync::atomic::{AtomicUsize, Ordering};

use raw_window_handle::{RawWindowHandle, Win32WindowHandle};
use winapi::shared::basetsd::LONG_PTR;
use winapi::shared::minwindef::{DWORD, HIWORD, HINSTANCE, LOWORD, LPARAM, LRESULT, UINT, WPARAM};
use winapi::shared::windef::{HWND, POINT, RECT};
use winapi::um::errhandlingapi::{GetLastError, SetLastError};
use winapi::um::libloaderapi::GetModuleHandleW;
use winapi::um::winuser::{
    ClientToScreen, ClipCursor, CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW,
    GetClientRect, GetKeyState, GetWindowLongPtrW, GetWindowTextLengthW, GetWindowTextW,
    LoadCursorW, MapVirtualKeyW, PeekMessageW, RegisterClassW, ScreenToClient, SetFocus,
    SetWindowLongPtrW, SetWindowTextW, ShowCursor, ShowWindow, TrackMouseEvent, TranslateMessage,
    UnregisterClassW, CREATESTRUCTW, CW_USEDEFAULT, GET_WHEEL_DELTA_WPARAM, GET_XBUTTON_WPARAM,
    GWLP_USERDATA, IDC_ARROW, MAPVK_VK_TO_CHAR, MSG, PM_REMOVE, SIZE_MAXIMIZED, SIZE_MINIMIZED,
    SIZE_RESTORED, SW_HIDE, SW_SHOW, TME_LEAVE, TRACKMOUSEEVENT, VK_ADD, VK_APPS, VK_BACK,
    VK_CAPITAL, VK_CONTROL, VK_DECIMAL, VK_DELETE, VK_DIVIDE, VK_DOWN, VK_END, VK_ESCAPE, VK_F1,
    VK_F10, VK_F11, VK_F12, VK_F13, VK_F14, VK_F15, VK_F16, VK_F17, VK_F18, VK_F19, VK_F2,
    VK_F20, VK_F21, VK_F22, VK_F23, VK_F24, VK_F3, VK_F4, VK_F5, VK_F6, VK_F7, VK_F8, VK_F9,
    VK_HOME, VK_INSERT, VK_LCONTROL, VK_LEFT, VK_LMENU, VK_LSHIFT, VK_LWIN, VK_MENU,
    VK_MULTIPLY, VK_NEXT, VK_NUMLOCK, VK_NUMPAD0, VK_NUMPAD1, VK_NUMPAD2, VK_NUMPAD3,
    VK_NUMPAD4, VK_NUMPAD5, VK_NUMPAD6, VK_NUMPAD7, VK_NUMPAD8, VK_NUMPAD9, VK_OEM_1,
    VK_OEM_102, VK_OEM_2, VK_OEM_3, VK_OEM_4, VK_OEM_5, VK_OEM_6, VK_OEM_7, VK_OEM_COMMA,
    VK_OEM_MINUS, VK_OEM_PERIOD, VK_OEM_PLUS, VK_PAUSE, VK_PRIOR, VK_RCONTROL, VK_RETURN,
    VK_RIGHT, VK_RMENU, VK_RSHIFT, VK_RWIN, VK_SCROLL, VK_SHIFT, VK_SNAPSHOT, VK_SPACE,
    VK_SUBTRACT, VK_TAB, VK_UP, WHEEL_DELTA, WM_CLOSE, WM_CREATE, WM_ENTERSIZEMOVE, WM_KEYDOWN,
    WM_KEYUP, WM_KILLFOCUS, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP,
    WM_MOUSELEAVE, WM_MOUSEMOVE, WM_MOUSEWHEEL, WM_MOVE, WM_RBUTTONDOWN, WM_RBUTTONUP,
    WM_SETFOCUS, WM_SHOWWINDOW, WM_SIZE, WM_XBUTTONDOWN, WM_XBUTTONUP, WNDCLASSW, WS_CAPTION,
    WS_MAXIMIZEBOX, WS_MINIMIZEBOX, WS_POPUP, WS_SYSMENU, WS_THICKFRAME, WS_VISIBLE, XBUTTON1,
};

use crate::config::{WindowBounds, WindowConfig, WindowStyles};
use crate::cursor::CursorMode;
use crate::error::{WindowError, WindowResult};
use crate::events::WindowEvents;
use crate::input::{KeyCode, Modifiers, MouseButton, Point, ScrollOffset};
use crate::platform::state::WindowState;
use crate::platform::state_backed_window_methods;
use crate::window::Window;

static CLASS_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// State record attached to the `HWND`, extending the shared record with the
/// size-state tracking `WM_SIZE` disambiguation needs: plain interactive
/// resizes also arrive as `SIZE_RESTORED`, so a restore transition is only
/// reported after an actual minimize or maximize.
struct Win32State {
    common: WindowState,
    minimized: bool,
    maximized: bool,
}

impl std::ops::Deref for Win32State {
    type Target = WindowState;
    fn deref(&self) -> &WindowState {
        &self.common
    }
}

impl std::ops::DerefMut for Win32State {
    fn deref_mut(&mut self) -> &mut WindowState {
        &mut self.common
    }
}

/// Window backed by a Win32 `HWND`.
pub struct Win32Window {
    hwnd: HWND,
    hinstance: HINSTANCE,
    /// Wide, null-terminated; kept alive for `UnregisterClassW`.
    class_name: Vec<u16>,
    /// Boxed so the address stored in `GWLP_USERDATA` stays stable when the
    /// window struct itself moves.
    state: Box<Win32State>,
    cursor_hidden: bool,
}

fn to_wide(s: &str) -> Vec<u16> {
    std::ffi::OsStr::new(s)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}

fn style_mask(styles: WindowStyles, config: WindowConfig) -> DWORD {
    let mut mask = 0;
    if styles.contains(WindowStyles::BORDERLESS) {
        mask |= WS_POPUP;
    }
    if styles.contains(WindowStyles::TITLE_BAR) {
        mask |= WS_CAPTION;
    }
    if styles.contains(WindowStyles::CLOSE_BUTTON) {
        mask |= WS_SYSMENU;
    }
    if styles.contains(WindowStyles::MINIATURIZE_BUTTON) {
        mask |= WS_MINIMIZEBOX | WS_MAXIMIZEBOX;
    }
    if styles.contains(WindowStyles::RESIZABLE) {
        mask |= WS_THICKFRAME;
    }
    if config.start_visible {
        mask |= WS_VISIBLE;
    }
    mask
}

fn host_or(value: i32) -> i32 {
    if value == WindowBounds::UNSPECIFIED {
        CW_USEDEFAULT
    } else {
        value
    }
}

impl Win32Window {
    pub(crate) fn open(
        title: &str,
        bounds: WindowBounds,
        styles: WindowStyles,
        config: WindowConfig,
    ) -> WindowResult<Self> {
        let class_name = to_wide(&format!(
            "WinbridgeWindow{}",
            CLASS_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        let hinstance = unsafe { GetModuleHandleW(std::ptr::null()) };

        // The record must be live before CreateWindowExW: the host dispatches
        // WM_CREATE, WM_SHOWWINDOW and the first WM_SIZE during creation.
        // Its bundle is still empty then; the factory installs the caller's
        // callbacks only after construction.
        let mut state = Box::new(Win32State {
            common: WindowState::new(WindowEvents::default()),
            minimized: false,
            maximized: false,
        });

        let wc = WNDCLASSW {
            style: 0,
            lpfnWndProc: Some(wnd_proc),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: hinstance,
            hIcon: std::ptr::null_mut(),
            hCursor: unsafe { LoadCursorW(std::ptr::null_mut(), IDC_ARROW) },
            hbrBackground: std::ptr::null_mut(),
            lpszMenuName: std::ptr::null(),
            lpszClassName: class_name.as_ptr(),
        };
        if unsafe { RegisterClassW(&wc) } == 0 {
            return Err(WindowError::CreationFailed);
        }

        let title_wide = to_wide(title);
        let hwnd = unsafe {
            CreateWindowExW(
                0,
                class_name.as_ptr(),
                title_wide.as_ptr(),
                style_mask(styles, config),
                host_or(bounds.x),
                host_or(bounds.y),
                host_or(bounds.width),
                host_or(bounds.height),
                std::ptr::null_mut(),
                std::ptr::null_mut(),
                hinstance,
                (&mut *state as *mut Win32State).cast(),
            )
        };
        if hwnd.is_null() {
            unsafe {
                UnregisterClassW(class_name.as_ptr(), hinstance);
            }
            log::warn!("CreateWindowExW refused window \"{title}\"");
            return Err(WindowError::CreationFailed);
        }

        if config.start_visible && config.start_focused {
            unsafe {
                SetFocus(hwnd);
            }
        }

        Ok(Self {
            hwnd,
            hinstance,
            class_name,
            state,
            cursor_hidden: false,
        })
    }

    fn show_cursor(&mut self, show: bool) {
        // ShowCursor keeps a display counter; only move it when the desired
        // visibility actually changes.
        if self.cursor_hidden == !show {
            return;
        }
        self.cursor_hidden = !show;
        unsafe {
            ShowCursor(i32::from(show));
        }
    }

    fn client_rect_on_screen(&self) -> RECT {
        let mut rect = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        unsafe {
            GetClientRect(self.hwnd, &mut rect);
            let mut top_left = POINT {
                x: rect.left,
                y: rect.top,
            };
            let mut bottom_right = POINT {
                x: rect.right,
                y: rect.bottom,
            };
            ClientToScreen(self.hwnd, &mut top_left);
            ClientToScreen(self.hwnd, &mut bottom_right);
            RECT {
                left: top_left.x,
                top: top_left.y,
                right: bottom_right.x,
                bottom: bottom_right.y,
            }
        }
    }
}

impl Window for Win32Window {
    fn set_visible(&mut self, visible: bool) {
        unsafe {
            ShowWindow(self.hwnd, if visible { SW_SHOW } else { SW_HIDE });
        }
    }

    fn poll_events(&mut self) {
        self.state.begin_poll();
        let mut msg: MSG = unsafe { std::mem::zeroed() };
        unsafe {
            while PeekMessageW(&mut msg, std::ptr::null_mut(), 0, 0, PM_REMOVE) != 0 {
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        let title_wide = to_wide(title);
        unsafe {
            SetWindowTextW(self.hwnd, title_wide.as_ptr());
        }
    }

    fn get_title(&self) -> Option<String> {
        // Zero length is also a legitimately empty title; only an error
        // code left by the host means the query failed.
        unsafe { SetLastError(0) };
        let len = unsafe { GetWindowTextLengthW(self.hwnd) };
        if len == 0 {
            if unsafe { GetLastError() } != 0 {
                return None;
            }
            return Some(String::new());
        }
        let mut buffer = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(self.hwnd, buffer.as_mut_ptr(), len + 1) };
        if copied == 0 {
            return None;
        }
        Some(String::from_utf16_lossy(&buffer[..copied as usize]))
    }

    fn get_native_handle(&self) -> *mut c_void {
        self.hwnd.cast()
    }

    fn raw_window_handle(&self) -> Option<RawWindowHandle> {
        let mut handle = Win32WindowHandle::empty();
        handle.hwnd = self.hwnd.cast();
        handle.hinstance = self.hinstance.cast();
        Some(RawWindowHandle::Win32(handle))
    }

    fn set_cursor_mode(&mut self, mode: CursorMode) {
        match mode {
            CursorMode::Normal => {
                self.show_cursor(true);
                unsafe {
                    ClipCursor(std::ptr::null());
                }
            }
            CursorMode::Hidden => {
                self.show_cursor(false);
                unsafe {
                    ClipCursor(std::ptr::null());
                }
            }
            CursorMode::Captured => {
                self.show_cursor(false);
                let rect = self.client_rect_on_screen();
                unsafe {
                    ClipCursor(&rect);
                }
            }
        }
    }

    state_backed_window_methods!();
}

impl Drop for Win32Window {
    fn drop(&mut self) {
        self.set_cursor_mode(CursorMode::Normal);
        unsafe {
            DestroyWindow(self.hwnd);
            UnregisterClassW(self.class_name.as_ptr(), self.hinstance);
        }
    }
}

fn modifiers() -> Modifiers {
    let mut mods = Modifiers::empty();
    let down = |vk: i32| unsafe { GetKeyState(vk) as u16 & 0x8000 != 0 };
    if down(VK_SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if down(VK_CONTROL) {
        mods |= Modifiers::CONTROL;
    }
    if down(VK_MENU) {
        mods |= Modifiers::ALT;
    }
    if down(VK_LWIN) || down(VK_RWIN) {
        mods |= Modifiers::SUPER;
    }
    mods
}

fn mouse_position(lparam: LPARAM) -> Point {
    Point::new(
        winapi::um::windowsx::GET_X_LPARAM(lparam) as f32,
        winapi::um::windowsx::GET_Y_LPARAM(lparam) as f32,
    )
}

/// Wheel messages report screen coordinates, unlike every other mouse
/// message.
fn wheel_position(hwnd: HWND, lparam: LPARAM) -> Point {
    let mut point = POINT {
        x: winapi::um::windowsx::GET_X_LPARAM(lparam),
        y: winapi::um::windowsx::GET_Y_LPARAM(lparam),
    };
    unsafe {
        ScreenToClient(hwnd, &mut point);
    }
    Point::new(point.x as f32, point.y as f32)
}

fn keycode_from_vk(vk: i32) -> KeyCode {
    match vk {
        0x41..=0x5A => {
            // 'A'..='Z'
            const LETTERS: [KeyCode; 26] = [
                KeyCode::A,
                KeyCode::B,
                KeyCode::C,
                KeyCode::D,
                KeyCode::E,
                KeyCode::F,
                KeyCode::G,
                KeyCode::H,
                KeyCode::I,
                KeyCode::J,
                KeyCode::K,
                KeyCode::L,
                KeyCode::M,
                KeyCode::N,
                KeyCode::O,
                KeyCode::P,
                KeyCode::Q,
                KeyCode::R,
                KeyCode::S,
                KeyCode::T,
                KeyCode::U,
                KeyCode::V,
                KeyCode::W,
                KeyCode::X,
                KeyCode::Y,
                KeyCode::Z,
            ];
            LETTERS[(vk - 0x41) as usize]
        }
        0x30..=0x39 => {
            // '0'..='9'
            const DIGITS: [KeyCode; 10] = [
                KeyCode::D0,
                KeyCode::D1,
                KeyCode::D2,
                KeyCode::D3,
                KeyCode::D4,
                KeyCode::D5,
                KeyCode::D6,
                KeyCode::D7,
                KeyCode::D8,
                KeyCode::D9,
            ];
            DIGITS[(vk - 0x30) as usize]
        }
        VK_BACK => KeyCode::Backspace,
        VK_TAB => KeyCode::Tab,
        VK_RETURN => KeyCode::Enter,
        VK_SHIFT | VK_LSHIFT => KeyCode::LeftShift,
        VK_RSHIFT => KeyCode::RightShift,
        VK_CONTROL | VK_LCONTROL => KeyCode::LeftControl,
        VK_RCONTROL => KeyCode::RightControl,
        VK_MENU | VK_LMENU => KeyCode::LeftAlt,
        VK_RMENU => KeyCode::RightAlt,
        VK_LWIN => KeyCode::LeftSuper,
        VK_RWIN => KeyCode::RightSuper,
        VK_APPS => KeyCode::Menu,
        VK_PAUSE => KeyCode::Pause,
        VK_CAPITAL => KeyCode::CapsLock,
        VK_ESCAPE => KeyCode::Escape,
        VK_SPACE => KeyCode::Space,
        VK_PRIOR => KeyCode::PageUp,
        VK_NEXT => KeyCode::PageDown,
        VK_END => KeyCode::End,
        VK_HOME => KeyCode::Home,
        VK_LEFT => KeyCode::Left,
        VK_UP => KeyCode::Up,
        VK_RIGHT => KeyCode::Right,
        VK_DOWN => KeyCode::Down,
        VK_SNAPSHOT => KeyCode::PrintScreen,
        VK_INSERT => KeyCode::Insert,
        VK_DELETE => KeyCode::Delete,
        VK_F1 => KeyCode::F1,
        VK_F2 => KeyCode::F2,
        VK_F3 => KeyCode::F3,
        VK_F4 => KeyCode::F4,
        VK_F5 => KeyCode::F5,
        VK_F6 => KeyCode::F6,
        VK_F7 => KeyCode::F7,
        VK_F8 => KeyCode::F8,
        VK_F9 => KeyCode::F9,
        VK_F10 => KeyCode::F10,
        VK_F11 => KeyCode::F11,
        VK_F12 => KeyCode::F12,
        VK_F13 => KeyCode::F13,
        VK_F14 => KeyCode::F14,
        VK_F15 => KeyCode::F15,
        VK_F16 => KeyCode::F16,
        VK_F17 => KeyCode::F17,
        VK_F18 => KeyCode::F18,
        VK_F19 => KeyCode::F19,
        VK_F20 => KeyCode::F20,
        VK_F21 => KeyCode::F21,
        VK_F22 => KeyCode::F22,
        VK_F23 => KeyCode::F23,
        VK_F24 => KeyCode::F24,
        VK_NUMLOCK => KeyCode::NumLock,
        VK_SCROLL => KeyCode::ScrollLock,
        VK_NUMPAD0 => KeyCode::Kp0,
        VK_NUMPAD1 => KeyCode::Kp1,
        VK_NUMPAD2 => KeyCode::Kp2,
        VK_NUMPAD3 => KeyCode::Kp3,
        VK_NUMPAD4 => KeyCode::Kp4,
        VK_NUMPAD5 => KeyCode::Kp5,
        VK_NUMPAD6 => KeyCode::Kp6,
        VK_NUMPAD7 => KeyCode::Kp7,
        VK_NUMPAD8 => KeyCode::Kp8,
        VK_NUMPAD9 => KeyCode::Kp9,
        VK_MULTIPLY => KeyCode::KpMultiply,
        VK_ADD => KeyCode::KpAdd,
        VK_SUBTRACT => KeyCode::KpSubtract,
        VK_DECIMAL => KeyCode::KpDecimal,
        VK_DIVIDE => KeyCode::KpDivide,
        VK_OEM_1 => KeyCode::Semicolon,
        VK_OEM_PLUS => KeyCode::Equal,
        VK_OEM_COMMA => KeyCode::Comma,
        VK_OEM_MINUS => KeyCode::Minus,
        VK_OEM_PERIOD => KeyCode::Period,
        VK_OEM_2 => KeyCode::Slash,
        VK_OEM_3 => KeyCode::GraveAccent,
        VK_OEM_4 => KeyCode::LeftBracket,
        VK_OEM_5 | VK_OEM_102 => KeyCode::Backslash,
        VK_OEM_6 => KeyCode::RightBracket,
        VK_OEM_7 => KeyCode::Apostrophe,
        _ => KeyCode::Unknown,
    }
}

fn typed_char(vk: UINT) -> Option<char> {
    let mapped = unsafe { MapVirtualKeyW(vk, MAPVK_VK_TO_CHAR) };
    // Printable ASCII only; everything else is key-down without key-typed.
    if (32..=126).contains(&mapped) {
        char::from_u32(mapped)
    } else {
        None
    }
}

unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: UINT,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_CREATE {
        let create = &*(lparam as *const CREATESTRUCTW);
        SetWindowLongPtrW(hwnd, GWLP_USERDATA, create.lpCreateParams as LONG_PTR);
        return 0;
    }

    let state_ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut Win32State;
    if state_ptr.is_null() {
        // Messages before WM_CREATE (WM_NCCREATE, WM_GETMINMAXINFO).
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }
    let state = &mut *state_ptr;

    match msg {
        WM_SHOWWINDOW => state.visibility_changed(wparam != 0),
        WM_CLOSE => state.close_requested(),
        WM_SETFOCUS => state.focus_changed(true),
        WM_KILLFOCUS => state.focus_changed(false),
        WM_SIZE => match wparam {
            SIZE_MINIMIZED => {
                state.minimized = true;
                state.common.minimized();
            }
            SIZE_MAXIMIZED => {
                state.maximized = true;
                state.common.maximized();
            }
            SIZE_RESTORED if state.minimized || state.maximized => {
                state.minimized = false;
                state.maximized = false;
                state.common.restored();
            }
            _ => {
                let width = u32::from(LOWORD(lparam as DWORD));
                let height = u32::from(HIWORD(lparam as DWORD));
                state.common.resized(width, height);
            }
        },
        WM_MOVE => {
            let x = winapi::um::windowsx::GET_X_LPARAM(lparam);
            let y = winapi::um::windowsx::GET_Y_LPARAM(lparam);
            state.common.moved(x, y);
        }
        WM_ENTERSIZEMOVE => state.before_resize(),
        WM_MOUSEMOVE => {
            if state.common.pointer_moved(mouse_position(lparam)) {
                // Newly entered; arm the host's leave notification.
                let mut tme = TRACKMOUSEEVENT {
                    cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as DWORD,
                    dwFlags: TME_LEAVE,
                    hwndTrack: hwnd,
                    dwHoverTime: 0,
                };
                TrackMouseEvent(&mut tme);
            }
        }
        WM_MOUSELEAVE => state.mouse_left(),
        WM_LBUTTONDOWN => state.mouse_down(mouse_position(lparam), MouseButton::Button0),
        WM_LBUTTONUP => state.mouse_up(mouse_position(lparam), MouseButton::Button0),
        WM_RBUTTONDOWN => state.mouse_down(mouse_position(lparam), MouseButton::Button1),
        WM_RBUTTONUP => state.mouse_up(mouse_position(lparam), MouseButton::Button1),
        WM_MBUTTONDOWN => state.mouse_down(mouse_position(lparam), MouseButton::Button2),
        WM_MBUTTONUP => state.mouse_up(mouse_position(lparam), MouseButton::Button2),
        WM_XBUTTONDOWN | WM_XBUTTONUP => {
            let button = if GET_XBUTTON_WPARAM(wparam) == XBUTTON1 {
                MouseButton::Button3
            } else {
                MouseButton::Button4
            };
            let position = mouse_position(lparam);
            if msg == WM_XBUTTONDOWN {
                state.mouse_down(position, button);
            } else {
                state.mouse_up(position, button);
            }
        }
        WM_MOUSEWHEEL => {
            let ticks = f32::from(GET_WHEEL_DELTA_WPARAM(wparam)) / f32::from(WHEEL_DELTA);
            state.common.mouse_wheel(
                wheel_position(hwnd, lparam),
                ScrollOffset::new(0.0, ticks),
            );
        }
        WM_KEYDOWN => {
            let repeat = lparam & (1 << 30) != 0;
            state.common.key_down(
                keycode_from_vk(wparam as i32),
                modifiers(),
                repeat,
                typed_char(wparam as UINT),
            );
        }
        WM_KEYUP => state.common.key_up(keycode_from_vk(wparam as i32), modifiers()),
        // Never silently dropped: everything else goes to host default
        // processing.
        _ => return DefWindowProcW(hwnd, msg, wparam, lparam),
    }

    0
}
