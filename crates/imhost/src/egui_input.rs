//! [`GuiContext`] over egui's [`RawInput`].
//!
//! [`EguiInput`] collects what the backend writes into an [`egui::RawInput`].
//! Once per frame the caller hands [`EguiInput::take_raw_input`] to
//! [`egui::Context::run`] and feeds the resulting [`egui::PlatformOutput`]
//! back through [`EguiInput::apply_output`], which is where the desired
//! cursor and the text-input request come from.
//!
//! Coordinates arrive in the host's logical pixels, which are egui points.
//! The modifier pseudo-keys update [`RawInput::modifiers`] instead of being
//! sent as key events. Command+C/X/V become `Copy`, `Cut` and `Paste` events,
//! the last one reading the host clipboard through the installed
//! [`ClipboardBackend`].

use egui::{
    CursorIcon, Event, Key, MouseWheelUnit, PlatformOutput, PointerButton, Pos2,
    RawInput, Rect, Vec2,
};
use imhost_core::{BackendFlags, ConfigFlags, GuiCursor, GuiKey, MouseButton, MouseSource};

use crate::context::{ClipboardBackend, GuiContext};

const DIGITS: [Key; 10] = [
    Key::Num0,
    Key::Num1,
    Key::Num2,
    Key::Num3,
    Key::Num4,
    Key::Num5,
    Key::Num6,
    Key::Num7,
    Key::Num8,
    Key::Num9,
];

const LETTERS: [Key; 26] = [
    Key::A,
    Key::B,
    Key::C,
    Key::D,
    Key::E,
    Key::F,
    Key::G,
    Key::H,
    Key::I,
    Key::J,
    Key::K,
    Key::L,
    Key::M,
    Key::N,
    Key::O,
    Key::P,
    Key::Q,
    Key::R,
    Key::S,
    Key::T,
    Key::U,
    Key::V,
    Key::W,
    Key::X,
    Key::Y,
    Key::Z,
];

const FUNCTION: [Key; 24] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
    Key::F13,
    Key::F14,
    Key::F15,
    Key::F16,
    Key::F17,
    Key::F18,
    Key::F19,
    Key::F20,
    Key::F21,
    Key::F22,
    Key::F23,
    Key::F24,
];

/// Input accumulator for one egui context.
pub struct EguiInput {
    raw: RawInput,
    pointer: Pos2,
    pixels_per_point: f32,
    time: f64,
    want_text_input: bool,
    cursor: GuiCursor,
    config_flags: ConfigFlags,
    clipboard: Option<Box<dyn ClipboardBackend>>,
    platform_name: Option<&'static str>,
    backend_flags: BackendFlags,
}

impl Default for EguiInput {
    fn default() -> Self {
        Self {
            raw: RawInput::default(),
            pointer: Pos2::ZERO,
            pixels_per_point: 1.0,
            time: 0.0,
            want_text_input: false,
            cursor: GuiCursor::Arrow,
            config_flags: ConfigFlags::empty(),
            clipboard: None,
            platform_name: None,
            backend_flags: BackendFlags::empty(),
        }
    }
}

impl EguiInput {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration flags reported to the backend.
    pub fn set_config_flags(&mut self, flags: ConfigFlags) {
        self.config_flags = flags;
    }

    /// The input gathered since the last call. Events are drained; screen
    /// rect, modifiers and timing carry over.
    pub fn take_raw_input(&mut self) -> RawInput {
        self.raw.take()
    }

    /// Pending input, for inspection.
    pub fn raw_input(&self) -> &RawInput {
        &self.raw
    }

    /// The framebuffer scale last published by the backend.
    pub fn pixels_per_point(&self) -> f32 {
        self.pixels_per_point
    }

    /// Adopt what egui asked for in the frame that just ran.
    pub fn apply_output(&mut self, ctx: &egui::Context, output: &PlatformOutput) {
        self.want_text_input = ctx.wants_keyboard_input();
        self.cursor = gui_cursor(output.cursor_icon);
    }

    /// Write egui's copied text to the host clipboard. No-op before the
    /// backend installs its clipboard handler.
    pub fn copy_to_clipboard(&mut self, text: &str) {
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set(text);
        }
    }

    /// Name registered by the backend, if any.
    pub fn platform_name(&self) -> Option<&'static str> {
        self.platform_name
    }

    /// Capabilities registered by the backend.
    pub fn backend_flags(&self) -> BackendFlags {
        self.backend_flags
    }

    fn set_modifier(&mut self, key: GuiKey, down: bool) {
        let m = &mut self.raw.modifiers;
        match key {
            GuiKey::ModCtrl => m.ctrl = down,
            GuiKey::ModShift => m.shift = down,
            GuiKey::ModAlt => m.alt = down,
            GuiKey::ModSuper => m.mac_cmd = down,
            _ => return,
        }
        m.command = if cfg!(target_os = "macos") { m.mac_cmd } else { m.ctrl };
    }

    fn clipboard_event(&mut self, key: Key) -> Option<Event> {
        match key {
            Key::C => Some(Event::Copy),
            Key::X => Some(Event::Cut),
            Key::V => self
                .clipboard
                .as_mut()
                .and_then(|clipboard| clipboard.get().map(str::to_owned))
                .map(Event::Paste),
            _ => None,
        }
    }
}

impl std::fmt::Debug for EguiInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EguiInput")
            .field("pending_events", &self.raw.events.len())
            .field("modifiers", &self.raw.modifiers)
            .field("pixels_per_point", &self.pixels_per_point)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl GuiContext for EguiInput {
    fn add_mouse_source_event(&mut self, _source: MouseSource) {}

    fn add_mouse_pos_event(&mut self, x: f32, y: f32) {
        self.pointer = Pos2::new(x, y);
        self.raw.events.push(Event::PointerMoved(self.pointer));
    }

    fn add_mouse_button_event(&mut self, button: MouseButton, down: bool) {
        self.raw.events.push(Event::PointerButton {
            pos: self.pointer,
            button: pointer_button(button),
            pressed: down,
            modifiers: self.raw.modifiers,
        });
    }

    fn add_mouse_wheel_event(&mut self, wheel_x: f32, wheel_y: f32) {
        self.raw.events.push(Event::MouseWheel {
            unit: MouseWheelUnit::Line,
            delta: Vec2::new(wheel_x, wheel_y),
            modifiers: self.raw.modifiers,
        });
    }

    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        if key.is_modifier() {
            self.set_modifier(key, down);
            return;
        }
        let Some(key) = egui_key(key) else {
            return;
        };
        let modifiers = self.raw.modifiers;
        if down && modifiers.command {
            if let Some(event) = self.clipboard_event(key) {
                self.raw.events.push(event);
            }
        }
        self.raw.events.push(Event::Key {
            key,
            physical_key: None,
            pressed: down,
            repeat: false,
            modifiers,
        });
    }

    fn add_input_character(&mut self, c: char) {
        if !c.is_control() {
            self.raw.events.push(Event::Text(c.to_string()));
        }
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.raw.screen_rect = Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(width, height)));
    }

    fn set_display_framebuffer_scale(&mut self, x: f32, _y: f32) {
        self.pixels_per_point = x;
        let viewport = self.raw.viewport_id;
        self.raw
            .viewports
            .entry(viewport)
            .or_default()
            .native_pixels_per_point = Some(x);
    }

    fn set_delta_time(&mut self, seconds: f32) {
        self.time += f64::from(seconds);
        self.raw.time = Some(self.time);
        self.raw.predicted_dt = seconds;
    }

    fn want_text_input(&self) -> bool {
        self.want_text_input
    }

    fn mouse_cursor(&self) -> GuiCursor {
        self.cursor
    }

    fn config_flags(&self) -> ConfigFlags {
        self.config_flags
    }

    fn mouse_draw_cursor(&self) -> bool {
        false
    }

    fn set_clipboard_backend(&mut self, backend: Option<Box<dyn ClipboardBackend>>) {
        self.clipboard = backend;
    }

    fn set_backend_platform_name(&mut self, name: Option<&'static str>) {
        self.platform_name = name;
    }

    fn insert_backend_flags(&mut self, flags: BackendFlags) {
        self.backend_flags |= flags;
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

/// egui's name for `key`. Keys egui has no name for, such as keypad
/// multiply, map to `None`.
pub fn egui_key(key: GuiKey) -> Option<Key> {
    let position = |table: &[GuiKey]| table.iter().position(|&k| k == key);
    if let Some(i) = position(&GuiKey::LETTERS) {
        return Some(LETTERS[i]);
    }
    if let Some(i) = position(&GuiKey::DIGITS).or_else(|| position(&GuiKey::KEYPAD_DIGITS)) {
        return Some(DIGITS[i]);
    }
    if let Some(i) = position(&GuiKey::FUNCTION) {
        return Some(FUNCTION[i]);
    }
    let named = match key {
        GuiKey::Tab => Key::Tab,
        GuiKey::LeftArrow => Key::ArrowLeft,
        GuiKey::RightArrow => Key::ArrowRight,
        GuiKey::UpArrow => Key::ArrowUp,
        GuiKey::DownArrow => Key::ArrowDown,
        GuiKey::PageUp => Key::PageUp,
        GuiKey::PageDown => Key::PageDown,
        GuiKey::Home => Key::Home,
        GuiKey::End => Key::End,
        GuiKey::Insert => Key::Insert,
        GuiKey::Delete => Key::Delete,
        GuiKey::Backspace => Key::Backspace,
        GuiKey::Space => Key::Space,
        GuiKey::Enter => Key::Enter,
        GuiKey::Escape => Key::Escape,
        GuiKey::Apostrophe => Key::Quote,
        GuiKey::Comma => Key::Comma,
        GuiKey::Minus | GuiKey::KeypadSubtract => Key::Minus,
        GuiKey::Period | GuiKey::KeypadDecimal => Key::Period,
        GuiKey::Slash | GuiKey::KeypadDivide => Key::Slash,
        GuiKey::Semicolon => Key::Semicolon,
        GuiKey::Equal | GuiKey::KeypadEqual => Key::Equals,
        GuiKey::LeftBracket => Key::OpenBracket,
        GuiKey::Backslash => Key::Backslash,
        GuiKey::RightBracket => Key::CloseBracket,
        GuiKey::GraveAccent => Key::Backtick,
        GuiKey::KeypadAdd => Key::Plus,
        _ => return None,
    };
    Some(named)
}

/// The cursor shape closest to egui's `icon`.
pub fn gui_cursor(icon: CursorIcon) -> GuiCursor {
    match icon {
        CursorIcon::None => GuiCursor::None,
        CursorIcon::Text | CursorIcon::VerticalText => GuiCursor::TextInput,
        CursorIcon::Move | CursorIcon::AllScroll => GuiCursor::ResizeAll,
        CursorIcon::ResizeVertical
        | CursorIcon::ResizeRow
        | CursorIcon::ResizeNorth
        | CursorIcon::ResizeSouth => GuiCursor::ResizeNS,
        CursorIcon::ResizeHorizontal
        | CursorIcon::ResizeColumn
        | CursorIcon::ResizeEast
        | CursorIcon::ResizeWest => GuiCursor::ResizeEW,
        CursorIcon::ResizeNeSw | CursorIcon::ResizeNorthEast | CursorIcon::ResizeSouthWest => {
            GuiCursor::ResizeNESW
        }
        CursorIcon::ResizeNwSe | CursorIcon::ResizeNorthWest | CursorIcon::ResizeSouthEast => {
            GuiCursor::ResizeNWSE
        }
        CursorIcon::PointingHand | CursorIcon::Grab | CursorIcon::Grabbing => GuiCursor::Hand,
        CursorIcon::NotAllowed | CursorIcon::NoDrop => GuiCursor::NotAllowed,
        _ => GuiCursor::Arrow,
    }
}
