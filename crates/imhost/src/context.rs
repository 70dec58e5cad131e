//! GUI library input contract.
//!
//! [`GuiContext`] is the slice of an immediate-mode GUI library's IO state the
//! backend writes to and reads from. A library adapter implements it over the
//! library's real context. The backend never reaches for a "current" context:
//! every call receives the instance it belongs to.

use std::sync::Arc;

use imhost_core::{BackendFlags, ConfigFlags, GuiCursor, GuiKey, MouseButton, MouseSource};
use parking_lot::Mutex;

/// A GUI context shared between the UI thread and the render thread.
///
/// Locked for the duration of one translation step at a time.
pub type SharedContext<C> = Arc<Mutex<C>>;

/// Wrap a context for sharing with a backend.
pub fn shared_context<C: GuiContext>(context: C) -> SharedContext<C> {
    Arc::new(Mutex::new(context))
}

/// Input side of an immediate-mode GUI context.
pub trait GuiContext: Send + 'static {
    /// Queue a change of pointer kind.
    fn add_mouse_source_event(&mut self, source: MouseSource);
    /// Queue an absolute pointer position in logical pixels.
    fn add_mouse_pos_event(&mut self, x: f32, y: f32);
    /// Queue a button transition.
    fn add_mouse_button_event(&mut self, button: MouseButton, down: bool);
    /// Queue a scroll, already scaled.
    fn add_mouse_wheel_event(&mut self, wheel_x: f32, wheel_y: f32);
    /// Queue a key transition. Modifier pseudo-keys arrive here too.
    fn add_key_event(&mut self, key: GuiKey, down: bool);
    /// Queue one character of text input.
    fn add_input_character(&mut self, c: char);

    /// Surface size in logical pixels.
    fn set_display_size(&mut self, width: f32, height: f32);
    /// Physical pixels per logical pixel on each axis.
    fn set_display_framebuffer_scale(&mut self, x: f32, y: f32);
    /// Seconds since the previous frame. Always positive.
    fn set_delta_time(&mut self, seconds: f32);

    /// Whether a text field has focus.
    fn want_text_input(&self) -> bool;
    /// The cursor shape the GUI wants.
    fn mouse_cursor(&self) -> GuiCursor;
    /// User configuration flags.
    fn config_flags(&self) -> ConfigFlags;
    /// Whether the GUI draws its own software cursor.
    fn mouse_draw_cursor(&self) -> bool;

    /// Install or remove the clipboard handler.
    fn set_clipboard_backend(&mut self, backend: Option<Box<dyn ClipboardBackend>>);
    /// Name the platform backend, or clear the name.
    fn set_backend_platform_name(&mut self, name: Option<&'static str>);
    /// Advertise backend capabilities.
    fn insert_backend_flags(&mut self, flags: BackendFlags);
}

/// Clipboard handler the GUI library calls into.
pub trait ClipboardBackend: Send {
    /// Current clipboard text. The borrow lasts until the next call.
    fn get(&mut self) -> Option<&str>;
    /// Replace the clipboard text.
    fn set(&mut self, text: &str);
}
