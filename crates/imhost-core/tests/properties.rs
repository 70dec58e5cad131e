//! Property-based tests for imhost-core translation and bookkeeping.
//!
//! Covers key-table determinism, cursor-table stability, modifier diffing
//! and held-key table invariants using proptest for randomized input.

use std::time::{Duration, Instant};

use imhost_core::{
    CommandKey, FrameClock, GuiCursor, GuiKey, HELD_KEY_CAPACITY, HeldKeyTable, HostKey,
    KeyPress, MIN_DELTA_TIME, ModifierFlags, NumPadKey, gui_key_for, modifier_transitions,
    standard_cursor,
};
use proptest::prelude::*;

fn any_host_key() -> impl Strategy<Value = HostKey> {
    prop_oneof![
        any::<char>().prop_map(HostKey::Char),
        (0u8..40).prop_map(HostKey::Function),
        (0u8..12).prop_map(|d| HostKey::NumPad(NumPadKey::Digit(d))),
        Just(HostKey::Space),
        Just(HostKey::Escape),
        Just(HostKey::Return),
        Just(HostKey::Tab),
        Just(HostKey::Delete),
        Just(HostKey::Backspace),
        Just(HostKey::Home),
        Just(HostKey::End),
        Just(HostKey::NumPad(NumPadKey::Separator)),
        Just(HostKey::NumPad(NumPadKey::Equals)),
        Just(HostKey::Play),
        Just(HostKey::Stop),
    ]
}

fn any_modifiers() -> impl Strategy<Value = ModifierFlags> {
    (0u32..128).prop_map(ModifierFlags::from_bits_truncate)
}

fn any_command_key() -> impl Strategy<Value = CommandKey> {
    prop_oneof![Just(CommandKey::Super), Just(CommandKey::Ctrl)]
}

const ALL_CURSORS: [GuiCursor; 10] = [
    GuiCursor::None,
    GuiCursor::Arrow,
    GuiCursor::TextInput,
    GuiCursor::ResizeAll,
    GuiCursor::ResizeNS,
    GuiCursor::ResizeEW,
    GuiCursor::ResizeNESW,
    GuiCursor::ResizeNWSE,
    GuiCursor::Hand,
    GuiCursor::NotAllowed,
];

#[test]
fn cursor_table_is_stable_and_injective_on_supported_shapes() {
    let supported: Vec<_> = ALL_CURSORS
        .iter()
        .copied()
        .filter(|&c| c != GuiCursor::NotAllowed)
        .collect();

    for &cursor in &supported {
        let first = standard_cursor(cursor);
        for _ in 0..3 {
            assert_eq!(standard_cursor(cursor), first, "{cursor:?} not stable");
        }
    }

    for (i, &a) in supported.iter().enumerate() {
        for &b in &supported[i + 1..] {
            assert_ne!(
                standard_cursor(a),
                standard_cursor(b),
                "{a:?} and {b:?} collide"
            );
        }
    }
}

#[test]
fn held_key_table_fills_to_capacity_exactly() {
    let mut table = HeldKeyTable::new();
    let mut tracked = 0;
    for c in (0u32..).filter_map(char::from_u32).take(HELD_KEY_CAPACITY) {
        assert_eq!(table.track(KeyPress::new(HostKey::Char(c))), Ok(true));
        tracked += 1;
    }
    assert_eq!(table.len(), tracked);
    assert_eq!(table.len(), HELD_KEY_CAPACITY);
    assert!(table.track(KeyPress::new(HostKey::Space)).is_err());
    assert_eq!(table.len(), HELD_KEY_CAPACITY);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The key table is a pure function and never yields a modifier key.
    #[test]
    fn key_table_is_deterministic(key in any_host_key()) {
        let first = gui_key_for(key);
        prop_assert_eq!(gui_key_for(key), first);
        prop_assert!(!first.is_modifier());
    }

    /// Characters outside the printable ASCII table always map to None.
    #[test]
    fn non_ascii_chars_are_unmapped(c in prop::char::range('\u{80}', char::MAX)) {
        prop_assert_eq!(gui_key_for(HostKey::Char(c)), GuiKey::None);
    }

    /// Two identical snapshots never produce events.
    #[test]
    fn unchanged_modifiers_are_silent(flags in any_modifiers(), cmd in any_command_key()) {
        prop_assert_eq!(modifier_transitions(flags, flags, cmd).count(), 0);
    }

    /// With the command key on Super, each changed keyboard bit yields
    /// exactly one event whose direction matches the new state.
    #[test]
    fn one_event_per_bit_transition(prev in any_modifiers(), cur in any_modifiers()) {
        let events: Vec<_> = modifier_transitions(prev, cur, CommandKey::Super).collect();
        let changed = (prev ^ cur) & ModifierFlags::KEYBOARD;
        prop_assert_eq!(events.len(), changed.bits().count_ones() as usize);

        for (key, down) in events {
            let bit = match key {
                GuiKey::ModShift => ModifierFlags::SHIFT,
                GuiKey::ModCtrl => ModifierFlags::CTRL,
                GuiKey::ModAlt => ModifierFlags::ALT,
                GuiKey::ModSuper => ModifierFlags::COMMAND,
                other => return Err(TestCaseError::fail(format!("unexpected key {other:?}"))),
            };
            prop_assert!(changed.contains(bit));
            prop_assert_eq!(down, cur.contains(bit));
        }
    }

    /// Replaying the transitions from an all-up baseline reproduces the
    /// held state of every modifier.
    #[test]
    fn transitions_compose(snapshots in prop::collection::vec(any_modifiers(), 1..12), cmd in any_command_key()) {
        let mut held = std::collections::HashSet::new();
        let mut prev = ModifierFlags::empty();
        for cur in snapshots {
            for (key, down) in modifier_transitions(prev, cur, cmd) {
                if down {
                    prop_assert!(held.insert(key), "{:?} pressed twice", key);
                } else {
                    prop_assert!(held.remove(&key), "{:?} released while up", key);
                }
            }
            prev = cur;
        }
    }

    /// The table's length always equals the number of distinct identities
    /// tracked, and duplicates never grow it.
    #[test]
    fn held_key_count_matches_distinct_keys(keys in prop::collection::vec(any_host_key(), 0..64)) {
        let mut table = HeldKeyTable::new();
        let mut distinct = std::collections::HashSet::new();
        for key in keys {
            let newly = table.track(KeyPress::new(key)).unwrap();
            prop_assert_eq!(newly, distinct.insert(key));
            prop_assert_eq!(table.len(), distinct.len());
            prop_assert!(table.len() <= table.capacity());
        }

        let released = table.release_up(|_| false);
        prop_assert_eq!(released.len(), distinct.len());
        prop_assert!(table.is_empty());
    }

    /// Frame deltas are strictly positive whatever the timestamps do.
    #[test]
    fn frame_delta_is_positive(offsets in prop::collection::vec(0u64..50, 1..20)) {
        let base = Instant::now();
        let mut clock = FrameClock::new();
        for ms in offsets {
            let delta = clock.tick_at(base + Duration::from_millis(ms));
            prop_assert!(delta >= MIN_DELTA_TIME);
        }
    }
}
