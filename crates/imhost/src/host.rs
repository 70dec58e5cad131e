//! Host framework collaborator contracts.
//!
//! The backend never talks to a real windowing toolkit. It sees the host
//! through these traits, which a host adapter implements on top of whatever
//! framework owns the window and the UI thread.
//!
//! Inbound notifications arrive through two narrow sinks,
//! [`PointerEventSink`] and [`KeyEventSink`], registered on the
//! [`HostComponent`]. Everything else is polled: surface size and scale,
//! keyboard state, the system clipboard.

use std::sync::Arc;

use imhost_core::{HostKey, KeyPress, ModifierFlags, MouseEvent, MouseWheelDetails, StandardCursor};

use crate::message_thread::MessageThread;

/// Receiver of pointer notifications from the host.
///
/// Called on the UI thread.
pub trait PointerEventSink: Send + Sync {
    /// Pointer moved with no button held.
    fn mouse_move(&self, event: &MouseEvent);
    /// Pointer entered the surface.
    fn mouse_enter(&self, event: &MouseEvent);
    /// Pointer left the surface.
    fn mouse_exit(&self, event: &MouseEvent);
    /// A button went down. `event.mods` carries the button.
    fn mouse_down(&self, event: &MouseEvent);
    /// Pointer moved with a button held.
    fn mouse_drag(&self, event: &MouseEvent);
    /// A button went up. `event.mods` carries the button.
    fn mouse_up(&self, event: &MouseEvent);
    /// Double click.
    fn mouse_double_click(&self, event: &MouseEvent);
    /// Wheel or trackpad scroll.
    fn mouse_wheel_move(&self, event: &MouseEvent, wheel: &MouseWheelDetails);
    /// Pinch gesture.
    fn mouse_magnify(&self, event: &MouseEvent, scale_factor: f32);
}

/// Receiver of keyboard notifications from the host.
///
/// Called on the UI thread.
pub trait KeyEventSink: Send + Sync {
    /// A key was pressed (or auto-repeated). Returns `true` to consume it.
    fn key_pressed(&self, press: &KeyPress) -> bool;
    /// Some key changed state. Returns `true` to consume the notification.
    fn key_state_changed(&self, is_key_down: bool) -> bool;
}

/// The host surface the GUI renders into.
pub trait HostComponent: Send + Sync {
    /// Width in logical pixels.
    fn width(&self) -> u32;
    /// Height in logical pixels.
    fn height(&self) -> u32;
    /// Change the cursor shown over the surface.
    fn set_mouse_cursor(&self, cursor: StandardCursor);
    /// Start delivering pointer notifications to `listener`.
    fn add_mouse_listener(&self, listener: Arc<dyn PointerEventSink>);
    /// Stop delivering pointer notifications to `listener`.
    fn remove_mouse_listener(&self, listener: &Arc<dyn PointerEventSink>);
    /// Start delivering key notifications to `listener`.
    fn add_key_listener(&self, listener: Arc<dyn KeyEventSink>);
    /// Stop delivering key notifications to `listener`.
    fn remove_key_listener(&self, listener: &Arc<dyn KeyEventSink>);
}

/// The rendering context attached to the surface.
pub trait RenderContext: Send + Sync {
    /// Physical pixels per logical pixel.
    fn rendering_scale(&self) -> f64;
}

/// Polled keyboard state.
pub trait Keyboard: Send + Sync {
    /// Modifier keys and mouse buttons held right now.
    fn current_modifiers(&self) -> ModifierFlags;
    /// Whether `key` is physically down right now.
    fn is_key_currently_down(&self, key: HostKey) -> bool;
}

/// System clipboard.
pub trait Clipboard: Send + Sync {
    /// Current clipboard text, empty if there is none.
    fn text(&self) -> String;
    /// Replace the clipboard contents.
    fn set_text(&self, text: &str);
}

/// Process-level host services shared by every backend on a UI thread.
#[derive(Clone)]
pub struct HostServices {
    /// Dispatch onto the UI thread.
    pub message_thread: Arc<dyn MessageThread>,
    /// Keyboard polling.
    pub keyboard: Arc<dyn Keyboard>,
    /// System clipboard.
    pub clipboard: Arc<dyn Clipboard>,
}

impl HostServices {
    /// Bundle the three services.
    pub fn new(
        message_thread: Arc<dyn MessageThread>,
        keyboard: Arc<dyn Keyboard>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            message_thread,
            keyboard,
            clipboard,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
