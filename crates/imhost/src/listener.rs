//! Input listener registered on the host surface.
//!
//! Pointer notifications are translated on the spot and written to the GUI
//! context. Key presses are only queued; the frame units decide when they
//! reach the GUI so that modifiers are always applied first.
//!
//! The host keeps the listener alive for as long as it likes, so the listener
//! owns nothing: it reaches the backend through a [`Weak`] and checks the
//! liveness token on every call.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Weak};

use imhost_core::{KeyPress, MouseEvent, MouseWheelDetails, mouse_button, mouse_source};
use tracing::trace;

use crate::backend::Shared;
use crate::context::GuiContext;
use crate::host::{KeyEventSink, PointerEventSink};
use crate::liveness::upgrade_live;
use crate::message_thread::on_message_thread;

/// Lock-free wheel multiplier, stored as `f32` bits.
#[derive(Debug)]
pub(crate) struct WheelSensitivity(AtomicU32);

impl WheelSensitivity {
    pub(crate) fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    pub(crate) fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub(crate) fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

pub(crate) struct InputListener<C: GuiContext> {
    shared: Weak<Shared<C>>,
}

impl<C: GuiContext> InputListener<C> {
    pub(crate) fn new(shared: Weak<Shared<C>>) -> Self {
        Self { shared }
    }

    fn live(&self, callback: &'static str) -> Option<Arc<Shared<C>>> {
        let shared = upgrade_live(&self.shared, callback)?;
        on_message_thread(shared.services.message_thread.as_ref(), callback).then_some(shared)
    }

    fn pointer_moved(&self, event: &MouseEvent, callback: &'static str) {
        let Some(shared) = self.live(callback) else {
            return;
        };
        trace!(callback, x = event.x, y = event.y);
        let mut ctx = shared.context.lock();
        ctx.add_mouse_source_event(mouse_source(event.source));
        ctx.add_mouse_pos_event(event.x, event.y);
    }

    fn button_changed(&self, event: &MouseEvent, down: bool, callback: &'static str) {
        let Some(shared) = self.live(callback) else {
            return;
        };
        let mut ctx = shared.context.lock();
        ctx.add_mouse_source_event(mouse_source(event.source));
        match mouse_button(event.mods) {
            Some(button) => {
                trace!(callback, ?button, down);
                ctx.add_mouse_button_event(button, down);
            }
            None => trace!(callback, mods = ?event.mods, "no button in event"),
        }
    }

    fn ignored(&self, callback: &'static str) {
        if self.live(callback).is_some() {
            trace!(callback, "ignored");
        }
    }
}

impl<C: GuiContext> PointerEventSink for InputListener<C> {
    fn mouse_move(&self, event: &MouseEvent) {
        self.pointer_moved(event, "mouse_move");
    }

    fn mouse_enter(&self, _event: &MouseEvent) {
        self.ignored("mouse_enter");
    }

    fn mouse_exit(&self, _event: &MouseEvent) {
        self.ignored("mouse_exit");
    }

    fn mouse_down(&self, event: &MouseEvent) {
        self.button_changed(event, true, "mouse_down");
    }

    fn mouse_drag(&self, event: &MouseEvent) {
        self.pointer_moved(event, "mouse_drag");
    }

    fn mouse_up(&self, event: &MouseEvent) {
        self.button_changed(event, false, "mouse_up");
    }

    fn mouse_double_click(&self, _event: &MouseEvent) {
        self.ignored("mouse_double_click");
    }

    fn mouse_wheel_move(&self, _event: &MouseEvent, wheel: &MouseWheelDetails) {
        let Some(shared) = self.live("mouse_wheel_move") else {
            return;
        };
        let s = shared.wheel_sensitivity.get();
        trace!(dx = wheel.delta_x, dy = wheel.delta_y, sensitivity = s, "wheel");
        shared
            .context
            .lock()
            .add_mouse_wheel_event(wheel.delta_x * s, wheel.delta_y * s);
    }

    fn mouse_magnify(&self, _event: &MouseEvent, _scale_factor: f32) {
        self.ignored("mouse_magnify");
    }
}

impl<C: GuiContext> KeyEventSink for InputListener<C> {
    fn key_pressed(&self, press: &KeyPress) -> bool {
        let Some(shared) = self.live("key_pressed") else {
            return false;
        };
        trace!(key = ?press.key, mods = ?press.modifiers, "key pressed");
        shared.frame.lock().pending.push(*press);
        shared.consume_key_presses
    }

    fn key_state_changed(&self, _is_key_down: bool) -> bool {
        // Releases are reconstructed by polling; this notification is unreliable.
        let _ = self.live("key_state_changed");
        true
    }
}
