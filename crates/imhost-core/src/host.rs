//! Host framework event vocabulary.
//!
//! These types describe what the windowing framework hands to its mouse and
//! key listeners. They carry no behaviour; the host adapter fills them in and
//! [`crate::translate`] maps them onto the GUI library's vocabulary.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys and mouse buttons held at the time of an event.
    ///
    /// `COMMAND` is the platform's shortcut modifier (Cmd on macOS/iOS). Hosts
    /// whose shortcut key *is* Ctrl may set both bits; the modifier diff folds
    /// them together.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        /// Either shift key.
        const SHIFT = 1;
        /// Either control key.
        const CTRL = 1 << 1;
        /// Either alt/option key.
        const ALT = 1 << 2;
        /// Platform command key.
        const COMMAND = 1 << 3;
        /// Left mouse button.
        const LEFT_BUTTON = 1 << 4;
        /// Right mouse button.
        const RIGHT_BUTTON = 1 << 5;
        /// Middle mouse button.
        const MIDDLE_BUTTON = 1 << 6;

        /// All keyboard modifiers.
        const KEYBOARD = Self::SHIFT.bits() | Self::CTRL.bits() | Self::ALT.bits() | Self::COMMAND.bits();
        /// All mouse buttons.
        const MOUSE_BUTTONS = Self::LEFT_BUTTON.bits() | Self::RIGHT_BUTTON.bits() | Self::MIDDLE_BUTTON.bits();
    }
}

/// Kind of device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSourceType {
    /// Mouse or trackpad.
    Mouse,
    /// Touch screen.
    Touch,
    /// Stylus.
    Pen,
}

/// Numeric keypad keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumPadKey {
    /// Keypad digit `0..=9`.
    Digit(u8),
    /// Keypad `+`.
    Add,
    /// Keypad `-`.
    Subtract,
    /// Keypad `*`.
    Multiply,
    /// Keypad `/`.
    Divide,
    /// Keypad thousands separator.
    Separator,
    /// Keypad `.`.
    DecimalPoint,
    /// Keypad `=`.
    Equals,
    /// Keypad delete.
    Delete,
}

/// Identity of a physical key as the host reports it.
///
/// Printable keys arrive as [`HostKey::Char`] carrying the key code's
/// character (letters are usually upper case); everything else has a named
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKey {
    /// Digit, letter or punctuation key.
    Char(char),
    /// Space bar.
    Space,
    /// Escape.
    Escape,
    /// Return / enter.
    Return,
    /// Tab.
    Tab,
    /// Forward delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Insert.
    Insert,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Function key `F1..=F35`.
    Function(u8),
    /// Numeric keypad key.
    NumPad(NumPadKey),
    /// Media play.
    Play,
    /// Media stop.
    Stop,
    /// Media fast forward.
    FastForward,
    /// Media rewind.
    Rewind,
}

/// A key-press notification.
///
/// Hosts call the key-pressed listener repeatedly while a key is held
/// (auto-repeat); each call carries an equal `KeyPress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Which key.
    pub key: HostKey,
    /// Modifiers held when the key went down.
    pub modifiers: ModifierFlags,
    /// Character the key produces, if any.
    pub text: Option<char>,
}

impl KeyPress {
    /// A press of `key` with no modifiers and no text.
    pub fn new(key: HostKey) -> Self {
        Self {
            key,
            modifiers: ModifierFlags::empty(),
            text: None,
        }
    }

    /// Set the modifiers held at press time.
    pub fn with_modifiers(mut self, modifiers: ModifierFlags) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the produced text character.
    pub fn with_text(mut self, text: char) -> Self {
        self.text = Some(text);
        self
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    /// Device kind.
    pub source: InputSourceType,
    /// X position relative to the owning surface, in logical pixels.
    pub x: f32,
    /// Y position relative to the owning surface, in logical pixels.
    pub y: f32,
    /// Modifiers and buttons held.
    ///
    /// On button-up events hosts report the buttons as they were *before*
    /// the release, so the released button is still set.
    pub mods: ModifierFlags,
}

impl MouseEvent {
    /// A plain mouse event at `(x, y)` with nothing held.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            source: InputSourceType::Mouse,
            x,
            y,
            mods: ModifierFlags::empty(),
        }
    }

    /// Set the device kind.
    pub fn with_source(mut self, source: InputSourceType) -> Self {
        self.source = source;
        self
    }

    /// Set held modifiers and buttons.
    pub fn with_mods(mut self, mods: ModifierFlags) -> Self {
        self.mods = mods;
        self
    }
}

/// Scroll amounts from a wheel or trackpad.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseWheelDetails {
    /// Horizontal scroll, positive to the right.
    pub delta_x: f32,
    /// Vertical scroll, positive away from the user.
    pub delta_y: f32,
}

/// Cursor shapes the host can display.
///
/// Only some have a GUI-library counterpart; see
/// [`standard_cursor`](crate::translate::standard_cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardCursor {
    /// Inherit the parent component's cursor.
    Parent,
    /// Hidden.
    NoCursor,
    /// Default arrow.
    Normal,
    /// Busy.
    Wait,
    /// Text I-beam.
    IBeam,
    /// Crosshair.
    Crosshair,
    /// Copy indicator.
    Copying,
    /// Pointing hand.
    PointingHand,
    /// Closed hand.
    DraggingHand,
    /// Horizontal resize.
    LeftRightResize,
    /// Vertical resize.
    UpDownResize,
    /// Move / resize in all directions.
    UpDownLeftRightResize,
    /// Top edge resize.
    TopEdgeResize,
    /// Bottom edge resize.
    BottomEdgeResize,
    /// Left edge resize.
    LeftEdgeResize,
    /// Right edge resize.
    RightEdgeResize,
    /// Top-left corner resize.
    TopLeftCornerResize,
    /// Top-right corner resize.
    TopRightCornerResize,
    /// Bottom-left corner resize.
    BottomLeftCornerResize,
    /// Bottom-right corner resize.
    BottomRightCornerResize,
}
