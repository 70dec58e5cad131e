//! Per-frame synchronization units.
//!
//! `Backend::new_frame` posts four units to the message thread, in this
//! order:
//!
//! 1. [`update_modifier_keys`] - diff the host's modifier snapshot against
//!    the last one applied and emit the modifier pseudo-key transitions
//! 2. [`update_key_presses`] - drain the key presses queued by the listener
//!    since the previous frame
//! 3. [`update_key_releases`] - poll every held key and release the ones the
//!    host no longer reports as down
//! 4. [`update_mouse_cursor`] - push the GUI's desired cursor to the host
//!
//! Modifiers go first so shortcuts like Ctrl+C see the modifier before the
//! key. Releases follow presses so a key pressed and released within one
//! frame still produces a down and an up.
//!
//! Each unit takes the [`FrameState`] lock and then the context lock, never
//! the other way round.

use imhost_core::{
    CommandKey, ConfigFlags, GuiCursor, HeldKeyTable, KeyPress, ModifierFlags, StandardCursor,
    gui_key, modifier_transitions, standard_cursor,
};
use parking_lot::Mutex;
use tracing::{debug, error, trace};

use crate::context::GuiContext;
use crate::host::{HostComponent, Keyboard};

/// Message-thread-owned input bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct FrameState {
    /// Key presses received since the last drain, in arrival order.
    pub(crate) pending: Vec<KeyPress>,
    /// Keys the GUI currently believes are down.
    pub(crate) held: HeldKeyTable,
    /// Modifier snapshot most recently applied.
    pub(crate) modifiers: ModifierFlags,
    /// Cursor shape most recently applied.
    pub(crate) cursor: GuiCursor,
}

pub(crate) fn update_modifier_keys<C: GuiContext>(
    state: &mut FrameState,
    keyboard: &dyn Keyboard,
    command_key: CommandKey,
    context: &Mutex<C>,
) {
    let current = keyboard.current_modifiers() & ModifierFlags::KEYBOARD;
    if current == state.modifiers {
        return;
    }
    debug!(previous = ?state.modifiers, ?current, "modifiers changed");

    let mut ctx = context.lock();
    for (key, down) in modifier_transitions(state.modifiers, current, command_key) {
        trace!(?key, down, "modifier");
        ctx.add_key_event(key, down);
    }
    state.modifiers = current;
}

pub(crate) fn update_key_presses<C: GuiContext>(state: &mut FrameState, context: &Mutex<C>) {
    if state.pending.is_empty() {
        return;
    }
    debug!(count = state.pending.len(), "draining key presses");

    let mut ctx = context.lock();
    for press in state.pending.drain(..) {
        let key = gui_key(&press);
        if key.is_some() {
            trace!(?key, "key down");
            ctx.add_key_event(key, true);
        } else {
            trace!(host_key = ?press.key, "unmapped key press");
        }

        if let Some(c) = press.text {
            if ctx.want_text_input() {
                ctx.add_input_character(c);
            }
        }

        let tracked = state.held.track(press);
        debug_assert!(tracked.is_ok(), "held-key table overflow: {tracked:?}");
        if let Err(err) = tracked {
            error!(%err, host_key = ?press.key, "key will not be released");
        }
    }
}

pub(crate) fn update_key_releases<C: GuiContext>(
    state: &mut FrameState,
    keyboard: &dyn Keyboard,
    context: &Mutex<C>,
) {
    if state.held.is_empty() {
        return;
    }
    let released = state
        .held
        .release_up(|key| keyboard.is_key_currently_down(key));
    if released.is_empty() {
        return;
    }
    debug!(count = released.len(), held = state.held.len(), "releasing keys");

    let mut ctx = context.lock();
    for press in released {
        let key = gui_key(&press);
        if key.is_some() {
            trace!(?key, "key up");
            ctx.add_key_event(key, false);
        }
    }
}

pub(crate) fn update_mouse_cursor<C: GuiContext>(
    state: &mut FrameState,
    surface: &dyn HostComponent,
    context: &Mutex<C>,
) {
    let (flags, desired, draws_own) = {
        let ctx = context.lock();
        (ctx.config_flags(), ctx.mouse_cursor(), ctx.mouse_draw_cursor())
    };
    if flags.contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE) || desired == state.cursor {
        return;
    }
    state.cursor = desired;

    let shape = if draws_own || desired == GuiCursor::None {
        StandardCursor::NoCursor
    } else {
        standard_cursor(desired)
    };
    debug!(?desired, ?shape, "cursor changed");
    surface.set_mouse_cursor(shape);
}
