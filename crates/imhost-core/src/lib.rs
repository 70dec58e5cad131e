//! imhost Core - input vocabularies and translation tables
//!
//! This crate holds everything in imhost that does not touch a thread: the two
//! event vocabularies (the host framework's and the immediate-mode GUI
//! library's), the pure functions that map one onto the other, and the small
//! pieces of per-frame bookkeeping the backend builds on.
//!
//! # Core Abstractions
//!
//! ## Vocabularies
//!
//! - [`host`] - What the host framework reports: [`KeyPress`], [`HostKey`],
//!   [`ModifierFlags`], [`MouseEvent`], [`StandardCursor`]
//! - [`gui`] - What the GUI library consumes: [`GuiKey`], [`MouseButton`],
//!   [`MouseSource`], [`GuiCursor`], [`ConfigFlags`], [`BackendFlags`]
//!
//! ## Translation
//!
//! - [`mouse_source`], [`mouse_button`], [`standard_cursor`], [`gui_key`] -
//!   Total functions; anything unmappable comes back as a documented sentinel
//! - [`modifier_transitions`] - Diff two modifier snapshots into key events
//!
//! ## Bookkeeping
//!
//! - [`HeldKeyTable`] - Bounded cache that reconstructs key releases the host
//!   fails to report
//! - [`FrameClock`] - Monotonic frame delta that is never zero
//! - [`BackendConfig`] - Wheel sensitivity, key consumption, command-key mapping
//!
//! # Example
//!
//! ```rust
//! use imhost_core::{GuiKey, HostKey, KeyPress, gui_key};
//!
//! let press = KeyPress::new(HostKey::Char('A')).with_text('a');
//! assert_eq!(gui_key(&press), GuiKey::A);
//! assert_eq!(gui_key(&KeyPress::new(HostKey::Play)), GuiKey::None);
//! ```

pub mod config;
pub mod error;
pub mod frame_time;
pub mod gui;
pub mod held_keys;
pub mod host;
pub mod translate;

pub use config::{BackendConfig, CommandKey};
pub use error::{Error, Result};
pub use frame_time::{FIRST_FRAME_DELTA_TIME, FrameClock, MIN_DELTA_TIME, clamp_delta_time};
pub use gui::{BackendFlags, ConfigFlags, GuiCursor, GuiKey, MouseButton, MouseSource};
pub use held_keys::{HELD_KEY_CAPACITY, HeldKeyTable};
pub use host::{
    HostKey, InputSourceType, KeyPress, ModifierFlags, MouseEvent, MouseWheelDetails, NumPadKey,
    StandardCursor,
};
pub use translate::{
    gui_key, gui_key_for, modifier_transitions, mouse_button, mouse_source, standard_cursor,
};
