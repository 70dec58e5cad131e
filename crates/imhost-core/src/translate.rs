//! Translate host events into the GUI library's input vocabulary.
//!
//! Every function here is total and side-effect free. Input with no
//! counterpart on the other side maps to a documented sentinel:
//! [`GuiKey::None`] for keys, `None` for mouse buttons, and
//! [`StandardCursor::Normal`] for cursor shapes.

use crate::config::CommandKey;
use crate::gui::{GuiCursor, GuiKey, MouseButton, MouseSource};
use crate::host::{HostKey, InputSourceType, KeyPress, ModifierFlags, NumPadKey, StandardCursor};

/// Map the host's pointer device kind onto the GUI library's.
pub const fn mouse_source(source: InputSourceType) -> MouseSource {
    match source {
        InputSourceType::Mouse => MouseSource::Mouse,
        InputSourceType::Touch => MouseSource::TouchScreen,
        InputSourceType::Pen => MouseSource::Pen,
    }
}

/// Pick the mouse button a pointer event refers to.
///
/// Chorded clicks resolve left, then right, then middle. Returns `None` when
/// no button is held.
pub fn mouse_button(mods: ModifierFlags) -> Option<MouseButton> {
    if mods.contains(ModifierFlags::LEFT_BUTTON) {
        Some(MouseButton::Left)
    } else if mods.contains(ModifierFlags::RIGHT_BUTTON) {
        Some(MouseButton::Right)
    } else if mods.contains(ModifierFlags::MIDDLE_BUTTON) {
        Some(MouseButton::Middle)
    } else {
        None
    }
}

/// Map a desired GUI cursor onto the host's standard cursor set.
///
/// [`GuiCursor::NotAllowed`] has no host counterpart and falls back to the
/// arrow. In the other direction, [`StandardCursor::Parent`], `Wait`,
/// `Crosshair`, `Copying`, `DraggingHand`, the four edge resizes and the two
/// top corner resizes are never produced.
pub const fn standard_cursor(cursor: GuiCursor) -> StandardCursor {
    match cursor {
        GuiCursor::None => StandardCursor::NoCursor,
        GuiCursor::Arrow => StandardCursor::Normal,
        GuiCursor::TextInput => StandardCursor::IBeam,
        GuiCursor::ResizeAll => StandardCursor::UpDownLeftRightResize,
        GuiCursor::ResizeNS => StandardCursor::UpDownResize,
        GuiCursor::ResizeEW => StandardCursor::LeftRightResize,
        GuiCursor::ResizeNESW => StandardCursor::BottomLeftCornerResize,
        GuiCursor::ResizeNWSE => StandardCursor::BottomRightCornerResize,
        GuiCursor::Hand => StandardCursor::PointingHand,
        GuiCursor::NotAllowed => StandardCursor::Normal,
    }
}

/// Map a host key press onto a GUI key. See [`gui_key_for`].
pub fn gui_key(press: &KeyPress) -> GuiKey {
    gui_key_for(press.key)
}

/// Map a host key identity onto a GUI key.
///
/// Modifier keys never reach this table; they are reported through
/// [`modifier_transitions`]. Unmapped keys return [`GuiKey::None`]:
///
/// - host keys the GUI library lacks: `F25..=F35`, keypad separator and
///   delete, the media keys
/// - GUI keys the host never reports: menu, num lock, print screen, pause,
///   keypad enter, app back/forward, left/right-specific modifiers
pub fn gui_key_for(key: HostKey) -> GuiKey {
    match key {
        HostKey::Char(c) => char_key(c),

        HostKey::Space => GuiKey::Space,
        HostKey::Escape => GuiKey::Escape,
        HostKey::Return => GuiKey::Enter,
        HostKey::Tab => GuiKey::Tab,
        HostKey::Delete => GuiKey::Delete,
        HostKey::Backspace => GuiKey::Backspace,
        HostKey::Insert => GuiKey::Insert,
        HostKey::Up => GuiKey::UpArrow,
        HostKey::Down => GuiKey::DownArrow,
        HostKey::Left => GuiKey::LeftArrow,
        HostKey::Right => GuiKey::RightArrow,
        HostKey::PageUp => GuiKey::PageUp,
        HostKey::PageDown => GuiKey::PageDown,
        HostKey::Home => GuiKey::Home,
        HostKey::End => GuiKey::End,

        HostKey::Function(n @ 1..=24) => GuiKey::FUNCTION[usize::from(n - 1)],
        HostKey::Function(_) => GuiKey::None,

        HostKey::NumPad(pad) => numpad_key(pad),

        HostKey::Play | HostKey::Stop | HostKey::FastForward | HostKey::Rewind => GuiKey::None,
    }
}

fn char_key(c: char) -> GuiKey {
    match c {
        '0'..='9' => GuiKey::DIGITS[(c as u8 - b'0') as usize],
        'A'..='Z' => GuiKey::LETTERS[(c as u8 - b'A') as usize],
        'a'..='z' => GuiKey::LETTERS[(c as u8 - b'a') as usize],

        '\'' => GuiKey::Apostrophe,
        ',' => GuiKey::Comma,
        '-' => GuiKey::Minus,
        '.' => GuiKey::Period,
        '/' => GuiKey::Slash,
        ';' => GuiKey::Semicolon,
        '=' => GuiKey::Equal,
        '[' => GuiKey::LeftBracket,
        ']' => GuiKey::RightBracket,
        '\\' => GuiKey::Backslash,
        '`' => GuiKey::GraveAccent,

        _ => GuiKey::None,
    }
}

fn numpad_key(pad: NumPadKey) -> GuiKey {
    match pad {
        NumPadKey::Digit(d @ 0..=9) => GuiKey::KEYPAD_DIGITS[usize::from(d)],
        NumPadKey::Digit(_) => GuiKey::None,
        NumPadKey::Add => GuiKey::KeypadAdd,
        NumPadKey::Subtract => GuiKey::KeypadSubtract,
        NumPadKey::Multiply => GuiKey::KeypadMultiply,
        NumPadKey::Divide => GuiKey::KeypadDivide,
        NumPadKey::DecimalPoint => GuiKey::KeypadDecimal,
        NumPadKey::Equals => GuiKey::KeypadEqual,
        NumPadKey::Separator | NumPadKey::Delete => GuiKey::None,
    }
}

/// Diff two modifier snapshots into GUI modifier key events.
///
/// Yields `(key, is_down)` for every GUI modifier whose state differs between
/// `previous` and `current`, in the order shift, ctrl, alt, super. The
/// command key is folded into whichever modifier `command_key` names, so a
/// host that sets both `CTRL` and `COMMAND` for one physical key produces a
/// single Ctrl event. Mouse-button bits are ignored.
///
/// ```rust
/// use imhost_core::{CommandKey, GuiKey, ModifierFlags, modifier_transitions};
///
/// let events: Vec<_> = modifier_transitions(
///     ModifierFlags::SHIFT,
///     ModifierFlags::COMMAND,
///     CommandKey::Super,
/// )
/// .collect();
/// assert_eq!(events, [(GuiKey::ModShift, false), (GuiKey::ModSuper, true)]);
/// ```
pub fn modifier_transitions(
    previous: ModifierFlags,
    current: ModifierFlags,
    command_key: CommandKey,
) -> impl Iterator<Item = (GuiKey, bool)> {
    const ORDER: [GuiKey; 4] = [
        GuiKey::ModShift,
        GuiKey::ModCtrl,
        GuiKey::ModAlt,
        GuiKey::ModSuper,
    ];

    ORDER.into_iter().filter_map(move |key| {
        let was_down = modifier_held(previous, key, command_key);
        let is_down = modifier_held(current, key, command_key);
        (was_down != is_down).then_some((key, is_down))
    })
}

fn modifier_held(flags: ModifierFlags, key: GuiKey, command_key: CommandKey) -> bool {
    let command = flags.contains(ModifierFlags::COMMAND) && command_key.gui_key() == key;
    let direct = match key {
        GuiKey::ModShift => flags.contains(ModifierFlags::SHIFT),
        GuiKey::ModCtrl => flags.contains(ModifierFlags::CTRL),
        GuiKey::ModAlt => flags.contains(ModifierFlags::ALT),
        _ => false,
    };
    direct || command
}
