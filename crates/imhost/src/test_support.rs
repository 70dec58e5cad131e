//! Fakes for the frame-unit tests. Backend-level behaviour is tested against
//! the fuller simulated host in `tests/common`.

use std::collections::HashSet;
use std::sync::Arc;

use imhost_core::{
    BackendFlags, ConfigFlags, GuiCursor, GuiKey, HostKey, ModifierFlags, MouseButton,
    MouseSource, StandardCursor,
};
use parking_lot::Mutex;

use crate::context::{ClipboardBackend, GuiContext};
use crate::host::{HostComponent, KeyEventSink, Keyboard, PointerEventSink};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GuiEvent {
    Key(GuiKey, bool),
    Char(char),
}

/// Records key and character input; frame metrics and registration are
/// accepted and dropped.
#[derive(Default)]
pub(crate) struct RecordingContext {
    pub(crate) events: Vec<GuiEvent>,
    pub(crate) want_text_input: bool,
    pub(crate) cursor: GuiCursor,
    pub(crate) config_flags: ConfigFlags,
    pub(crate) draw_cursor: bool,
}

impl GuiContext for RecordingContext {
    fn add_mouse_source_event(&mut self, _source: MouseSource) {}
    fn add_mouse_pos_event(&mut self, _x: f32, _y: f32) {}
    fn add_mouse_button_event(&mut self, _button: MouseButton, _down: bool) {}
    fn add_mouse_wheel_event(&mut self, _wheel_x: f32, _wheel_y: f32) {}
    fn add_key_event(&mut self, key: GuiKey, down: bool) {
        self.events.push(GuiEvent::Key(key, down));
    }
    fn add_input_character(&mut self, c: char) {
        self.events.push(GuiEvent::Char(c));
    }
    fn set_display_size(&mut self, _width: f32, _height: f32) {}
    fn set_display_framebuffer_scale(&mut self, _x: f32, _y: f32) {}
    fn set_delta_time(&mut self, _seconds: f32) {}
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
        self.draw_cursor
    }
    fn set_clipboard_backend(&mut self, _backend: Option<Box<dyn ClipboardBackend>>) {}
    fn set_backend_platform_name(&mut self, _name: Option<&'static str>) {}
    fn insert_backend_flags(&mut self, _flags: BackendFlags) {}
}

#[derive(Default)]
pub(crate) struct FakeKeyboard {
    modifiers: Mutex<ModifierFlags>,
    down: Mutex<HashSet<HostKey>>,
}

impl FakeKeyboard {
    pub(crate) fn set_modifiers(&self, flags: ModifierFlags) {
        *self.modifiers.lock() = flags;
    }
    pub(crate) fn press(&self, key: HostKey) {
        self.down.lock().insert(key);
    }
}

impl Keyboard for FakeKeyboard {
    fn current_modifiers(&self) -> ModifierFlags {
        *self.modifiers.lock()
    }
    fn is_key_currently_down(&self, key: HostKey) -> bool {
        self.down.lock().contains(&key)
    }
}

/// A surface that only records cursor changes.
#[derive(Default)]
pub(crate) struct FakeSurface {
    cursors: Mutex<Vec<StandardCursor>>,
}

impl FakeSurface {
    pub(crate) fn cursors(&self) -> Vec<StandardCursor> {
        self.cursors.lock().clone()
    }
}

impl HostComponent for FakeSurface {
    fn width(&self) -> u32 {
        640
    }
    fn height(&self) -> u32 {
        480
    }
    fn set_mouse_cursor(&self, cursor: StandardCursor) {
        self.cursors.lock().push(cursor);
    }
    fn add_mouse_listener(&self, _listener: Arc<dyn PointerEventSink>) {}
    fn remove_mouse_listener(&self, _listener: &Arc<dyn PointerEventSink>) {}
    fn add_key_listener(&self, _listener: Arc<dyn KeyEventSink>) {}
    fn remove_key_listener(&self, _listener: &Arc<dyn KeyEventSink>) {}
}
