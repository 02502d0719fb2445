//! Input value types
//!
//! Keyboard and mouse codes plus the small coordinate pairs that ride along
//! with pointer events. These are pure value types with no lifecycle; the
//! per-backend translators map host scancodes and button indices onto them.

use bitflags::bitflags;

/// A 2D coordinate pair in window client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal component, pixels from the left edge of the client area.
    pub x: f32,
    /// Vertical component, pixels from the top edge of the client area.
    pub y: f32,
}

impl Point {
    /// Create a point from its components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scroll wheel offset; `y` is the vertical wheel axis in ticks.
pub type ScrollOffset = Point;

bitflags! {
    /// Modifier keys held down while an input event fired.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Either shift key.
        const SHIFT = 0x01;
        /// Either control key.
        const CONTROL = 0x02;
        /// Either alt/option key.
        const ALT = 0x04;
        /// Either super key (Windows key, Command key).
        const SUPER = 0x08;
    }
}

/// Mouse buttons, numbered the way the host reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Button 0 (left).
    Button0,
    /// Button 1 (right).
    Button1,
    /// Button 2 (middle).
    Button2,
    /// Button 3 (first extended button).
    Button3,
    /// Button 4 (second extended button).
    Button4,
    /// Button 5.
    Button5,
    /// Button 6.
    Button6,
    /// Button 7.
    Button7,
    /// A button this crate does not map.
    Unknown,
}

impl MouseButton {
    /// The primary button.
    pub const LEFT: Self = Self::Button0;
    /// The secondary button.
    pub const RIGHT: Self = Self::Button1;
    /// The wheel button.
    pub const MIDDLE: Self = Self::Button2;

    /// Map a zero-based host button index onto a button code.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Button0,
            1 => Self::Button1,
            2 => Self::Button2,
            3 => Self::Button3,
            4 => Self::Button4,
            5 => Self::Button5,
            6 => Self::Button6,
            7 => Self::Button7,
            _ => Self::Unknown,
        }
    }
}

/// Physical key codes
///
/// A closed enumeration of physical keys. Keys the backend cannot map are
/// reported as [`KeyCode::Unknown`] rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)] // Variant names are the documentation.
pub enum KeyCode {
    Unknown,

    Space,
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    Semicolon,
    Equal,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,
    World1,
    World2,

    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    F25,

    Kp0,
    Kp1,
    Kp2,
    Kp3,
    Kp4,
    Kp5,
    Kp6,
    Kp7,
    Kp8,
    Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    KpEqual,

    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    Menu,
}

impl KeyCode {
    /// Human-readable name of the key, for diagnostics and debug overlays.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Space => "Space",
            Self::Apostrophe => "Apostrophe",
            Self::Comma => "Comma",
            Self::Minus => "Minus",
            Self::Period => "Period",
            Self::Slash => "Slash",
            Self::D0 => "0",
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
            Self::Semicolon => "Semicolon",
            Self::Equal => "Equal",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::LeftBracket => "Left bracket",
            Self::Backslash => "Backslash",
            Self::RightBracket => "Right bracket",
            Self::GraveAccent => "Grave accent",
            Self::World1 => "World 1",
            Self::World2 => "World 2",
            Self::Escape => "Escape",
            Self::Enter => "Enter",
            Self::Tab => "Tab",
            Self::Backspace => "Backspace",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Down => "Down",
            Self::Up => "Up",
            Self::PageUp => "Page up",
            Self::PageDown => "Page down",
            Self::Home => "Home",
            Self::End => "End",
            Self::CapsLock => "Caps lock",
            Self::ScrollLock => "Scroll lock",
            Self::NumLock => "Num lock",
            Self::PrintScreen => "Print screen",
            Self::Pause => "Pause",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::F13 => "F13",
            Self::F14 => "F14",
            Self::F15 => "F15",
            Self::F16 => "F16",
            Self::F17 => "F17",
            Self::F18 => "F18",
            Self::F19 => "F19",
            Self::F20 => "F20",
            Self::F21 => "F21",
            Self::F22 => "F22",
            Self::F23 => "F23",
            Self::F24 => "F24",
            Self::F25 => "F25",
            Self::Kp0 => "Keypad 0",
            Self::Kp1 => "Keypad 1",
            Self::Kp2 => "Keypad 2",
            Self::Kp3 => "Keypad 3",
            Self::Kp4 => "Keypad 4",
            Self::Kp5 => "Keypad 5",
            Self::Kp6 => "Keypad 6",
            Self::Kp7 => "Keypad 7",
            Self::Kp8 => "Keypad 8",
            Self::Kp9 => "Keypad 9",
            Self::KpDecimal => "Keypad decimal",
            Self::KpDivide => "Keypad divide",
            Self::KpMultiply => "Keypad multiply",
            Self::KpSubtract => "Keypad subtract",
            Self::KpAdd => "Keypad add",
            Self::KpEnter => "Keypad enter",
            Self::KpEqual => "Keypad equal",
            Self::LeftShift => "Left shift",
            Self::LeftControl => "Left control",
            Self::LeftAlt => "Left alt",
            Self::LeftSuper => "Left super",
            Self::RightShift => "Right shift",
            Self::RightControl => "Right control",
            Self::RightAlt => "Right alt",
            Self::RightSuper => "Right super",
            Self::Menu => "Menu",
        }
    }

    /// Unshifted US-layout character for printable keys, `None` otherwise.
    ///
    /// Backends with richer host facilities (e.g. `MapVirtualKey` on Win32,
    /// `NSEvent.characters` on macOS) derive the typed character from the
    /// host instead; this mapping drives the headless backend.
    pub fn to_char(self) -> Option<char> {
        let c = match self {
            Self::Space => ' ',
            Self::Apostrophe => '\'',
            Self::Comma => ',',
            Self::Minus => '-',
            Self::Period => '.',
            Self::Slash => '/',
            Self::D0 => '0',
            Self::D1 => '1',
            Self::D2 => '2',
            Self::D3 => '3',
            Self::D4 => '4',
            Self::D5 => '5',
            Self::D6 => '6',
            Self::D7 => '7',
            Self::D8 => '8',
            Self::D9 => '9',
            Self::Semicolon => ';',
            Self::Equal => '=',
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
            Self::H => 'h',
            Self::I => 'i',
            Self::J => 'j',
            Self::K => 'k',
            Self::L => 'l',
            Self::M => 'm',
            Self::N => 'n',
            Self::O => 'o',
            Self::P => 'p',
            Self::Q => 'q',
            Self::R => 'r',
            Self::S => 's',
            Self::T => 't',
            Self::U => 'u',
            Self::V => 'v',
            Self::W => 'w',
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::LeftBracket => '[',
            Self::Backslash => '\\',
            Self::RightBracket => ']',
            Self::GraveAccent => '`',
            Self::Kp0 => '0',
            Self::Kp1 => '1',
            Self::Kp2 => '2',
            Self::Kp3 => '3',
            Self::Kp4 => '4',
            Self::Kp5 => '5',
            Self::Kp6 => '6',
            Self::Kp7 => '7',
            Self::Kp8 => '8',
            Self::Kp9 => '9',
            Self::KpDecimal => '.',
            Self::KpDivide => '/',
            Self::KpMultiply => '*',
            Self::KpSubtract => '-',
            Self::KpAdd => '+',
            Self::KpEqual => '=',
            _ => return None,
        };
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_aliases() {
        assert_eq!(MouseButton::LEFT, MouseButton::Button0);
        assert_eq!(MouseButton::RIGHT, MouseButton::Button1);
        assert_eq!(MouseButton::MIDDLE, MouseButton::Button2);
        assert_eq!(MouseButton::from_index(9), MouseButton::Unknown);
    }

    #[test]
    fn test_printable_keys() {
        assert_eq!(KeyCode::A.to_char(), Some('a'));
        assert_eq!(KeyCode::D7.to_char(), Some('7'));
        assert_eq!(KeyCode::Space.to_char(), Some(' '));
        assert_eq!(KeyCode::F1.to_char(), None);
        assert_eq!(KeyCode::LeftShift.to_char(), None);
        assert_eq!(KeyCode::Escape.to_char(), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(KeyCode::GraveAccent.name(), "Grave accent");
        assert_eq!(KeyCode::Kp4.name(), "Keypad 4");
        assert_eq!(KeyCode::Unknown.name(), "Unknown");
    }

    #[test]
    fn test_modifier_bits() {
        let mods = Modifiers::SHIFT | Modifiers::CONTROL;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
        assert_eq!(Modifiers::default(), Modifiers::empty());
    }
}
