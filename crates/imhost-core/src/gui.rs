//! Immediate-mode GUI library input vocabulary.
//!
//! Mirrors the identifiers a Dear ImGui-style input API expects: named keys
//! (including the four modifier pseudo-keys), mouse buttons, pointer sources,
//! desired cursor shapes and the configuration/backend flag words.

use bitflags::bitflags;

/// Pointer device reported to the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseSource {
    /// Mouse or trackpad.
    Mouse,
    /// Touch screen.
    TouchScreen,
    /// Stylus.
    Pen,
}

/// Mouse button reported to the GUI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
}

/// Cursor shape the GUI library would like displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GuiCursor {
    /// No cursor at all.
    None,
    /// Default arrow.
    #[default]
    Arrow,
    /// Text input I-beam.
    TextInput,
    /// Move in all directions.
    ResizeAll,
    /// Vertical resize.
    ResizeNS,
    /// Horizontal resize.
    ResizeEW,
    /// Resize along the bottom-left/top-right diagonal.
    ResizeNESW,
    /// Resize along the bottom-right/top-left diagonal.
    ResizeNWSE,
    /// Pointing hand (links, buttons).
    Hand,
    /// Operation not allowed.
    NotAllowed,
}

bitflags! {
    /// User-facing configuration flags the backend honours.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ConfigFlags: u32 {
        /// The backend must never change the host cursor.
        const NO_MOUSE_CURSOR_CHANGE = 1 << 5;
    }
}

bitflags! {
    /// Capabilities a platform backend advertises to the GUI library.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct BackendFlags: u32 {
        /// The backend applies [`GuiCursor`] shapes to the host cursor.
        const HAS_MOUSE_CURSORS = 1 << 1;
    }
}

/// Key identity understood by the GUI library.
///
/// `None` is the "no key" sentinel. The `Mod*` variants are the modifier
/// pseudo-keys fed by the modifier diff, never by the per-keystroke table.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GuiKey {
    #[default]
    None,

    Tab,
    LeftArrow,
    RightArrow,
    UpArrow,
    DownArrow,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,
    Backspace,
    Space,
    Enter,
    Escape,

    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

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

    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Semicolon,
    Equal,
    LeftBracket,
    Backslash,
    RightBracket,
    GraveAccent,

    Keypad0,
    Keypad1,
    Keypad2,
    Keypad3,
    Keypad4,
    Keypad5,
    Keypad6,
    Keypad7,
    Keypad8,
    Keypad9,
    KeypadDecimal,
    KeypadDivide,
    KeypadMultiply,
    KeypadSubtract,
    KeypadAdd,
    KeypadEqual,

    ModCtrl,
    ModShift,
    ModAlt,
    ModSuper,
}

impl GuiKey {
    /// Digit keys in order, indexable by digit value.
    pub const DIGITS: [GuiKey; 10] = [
        GuiKey::Key0,
        GuiKey::Key1,
        GuiKey::Key2,
        GuiKey::Key3,
        GuiKey::Key4,
        GuiKey::Key5,
        GuiKey::Key6,
        GuiKey::Key7,
        GuiKey::Key8,
        GuiKey::Key9,
    ];

    /// Letter keys in alphabetical order.
    pub const LETTERS: [GuiKey; 26] = [
        GuiKey::A,
        GuiKey::B,
        GuiKey::C,
        GuiKey::D,
        GuiKey::E,
        GuiKey::F,
        GuiKey::G,
        GuiKey::H,
        GuiKey::I,
        GuiKey::J,
        GuiKey::K,
        GuiKey::L,
        GuiKey::M,
        GuiKey::N,
        GuiKey::O,
        GuiKey::P,
        GuiKey::Q,
        GuiKey::R,
        GuiKey::S,
        GuiKey::T,
        GuiKey::U,
        GuiKey::V,
        GuiKey::W,
        GuiKey::X,
        GuiKey::Y,
        GuiKey::Z,
    ];

    /// Function keys `F1..=F24`, indexable by `n - 1`.
    pub const FUNCTION: [GuiKey; 24] = [
        GuiKey::F1,
        GuiKey::F2,
        GuiKey::F3,
        GuiKey::F4,
        GuiKey::F5,
        GuiKey::F6,
        GuiKey::F7,
        GuiKey::F8,
        GuiKey::F9,
        GuiKey::F10,
        GuiKey::F11,
        GuiKey::F12,
        GuiKey::F13,
        GuiKey::F14,
        GuiKey::F15,
        GuiKey::F16,
        GuiKey::F17,
        GuiKey::F18,
        GuiKey::F19,
        GuiKey::F20,
        GuiKey::F21,
        GuiKey::F22,
        GuiKey::F23,
        GuiKey::F24,
    ];

    /// Keypad digits, indexable by digit value.
    pub const KEYPAD_DIGITS: [GuiKey; 10] = [
        GuiKey::Keypad0,
        GuiKey::Keypad1,
        GuiKey::Keypad2,
        GuiKey::Keypad3,
        GuiKey::Keypad4,
        GuiKey::Keypad5,
        GuiKey::Keypad6,
        GuiKey::Keypad7,
        GuiKey::Keypad8,
        GuiKey::Keypad9,
    ];

    /// `true` for the four modifier pseudo-keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            GuiKey::ModCtrl | GuiKey::ModShift | GuiKey::ModAlt | GuiKey::ModSuper
        )
    }

    /// `true` unless this is the [`GuiKey::None`] sentinel.
    pub fn is_some(self) -> bool {
        self != GuiKey::None
    }
}
