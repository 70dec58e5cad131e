//! imhost - run an immediate-mode GUI inside a host framework's surface
//!
//! The host framework owns the window, the message thread and the input
//! events. The GUI library wants a flat stream of input events and a handful
//! of per-frame metrics. [`Backend`] sits between them.
//!
//! # Architecture
//!
//! ```text
//!   host UI thread                          render thread
//!   ──────────────                          ─────────────
//!   PointerEventSink ─┐                     Backend::new_frame
//!   KeyEventSink ─────┤                       │ display size, scale, delta ──► GuiContext
//!                     ▼                       │
//!               InputListener                 └─ call_async ─┐
//!                │ pointer ──► GuiContext                    ▼
//!                └ key press ─► pending queue ──► frame units (message thread)
//!                                                 modifiers → presses → releases → cursor
//! ```
//!
//! - Pointer events are translated as they arrive.
//! - Key presses are queued and merged once per frame, after the modifier
//!   diff, so shortcuts see their modifiers first.
//! - Key releases are reconstructed by polling the host keyboard for every
//!   held key, because hosts report releases unreliably.
//! - The cursor is pushed to the host only when the GUI's desired shape
//!   changes.
//!
//! # Collaborators
//!
//! - [`host`] - What the host provides: [`HostComponent`], [`RenderContext`],
//!   [`Keyboard`], [`Clipboard`], [`MessageThread`]
//! - [`context`] - What the GUI library provides: [`GuiContext`],
//!   [`ClipboardBackend`]
//!
//! With the `egui` feature, `egui_input::EguiInput` is a ready-made
//! [`GuiContext`] that accumulates an `egui::RawInput`.
//!
//! Translation tables and vocabularies live in [`imhost_core`]; the types a
//! host adapter needs are re-exported here.
//!
//! # Example
//!
//! See `examples/headless.rs` for a complete host simulation with a render
//! thread.

pub use imhost_core;

pub mod backend;
pub mod clipboard;
pub mod context;
pub mod host;
pub mod message_thread;

#[cfg(feature = "egui")]
pub mod egui_input;

mod frame;
mod listener;
mod liveness;

#[cfg(test)]
mod test_support;

pub use backend::{Backend, PLATFORM_NAME};
pub use clipboard::HostClipboardBridge;
pub use context::{ClipboardBackend, GuiContext, SharedContext, shared_context};
pub use host::{
    Clipboard, HostComponent, HostServices, KeyEventSink, Keyboard, PointerEventSink,
    RenderContext,
};
pub use message_thread::{Job, MessageThread, QueuedMessageThread};

#[cfg(feature = "egui")]
pub use egui_input::EguiInput;

pub use imhost_core::{
    BackendConfig, BackendFlags, CommandKey, ConfigFlags, Error, GuiCursor, GuiKey, HostKey,
    InputSourceType, KeyPress, ModifierFlags, MouseButton, MouseEvent, MouseSource,
    MouseWheelDetails, NumPadKey, Result, StandardCursor,
};
