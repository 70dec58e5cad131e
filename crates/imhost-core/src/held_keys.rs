//! Held-key tracking.
//!
//! Hosts report key presses reliably but key releases poorly: the aggregate
//! "key state changed" notification has been seen misreporting state, most
//! often inside plugin hosts. The backend therefore remembers every key it
//! has sent a key-down for, and once per frame asks the host whether each one
//! is still physically down. [`HeldKeyTable`] is that memory.
//!
//! Keys are identified by [`HostKey`] alone, so auto-repeat presses and the
//! same key pressed under different modifiers occupy a single entry and
//! release exactly once.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::host::{HostKey, KeyPress};

/// Maximum number of simultaneously tracked keys.
///
/// No keyboard reports this many keys at once; reaching it means releases
/// are not being reconciled.
pub const HELD_KEY_CAPACITY: usize = 256;

/// Bounded set of keys the GUI library currently believes are down.
#[derive(Debug, Clone)]
pub struct HeldKeyTable {
    keys: HashMap<HostKey, KeyPress>,
    capacity: usize,
}

impl Default for HeldKeyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HeldKeyTable {
    /// Empty table with [`HELD_KEY_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(HELD_KEY_CAPACITY)
    }

    /// Empty table with a smaller bound. Values above
    /// [`HELD_KEY_CAPACITY`] are clamped to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(HELD_KEY_CAPACITY);
        Self {
            keys: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Start tracking `press`.
    ///
    /// Returns `Ok(true)` if the key was newly tracked, `Ok(false)` if its
    /// identity was already tracked (the table is unchanged), and
    /// [`Error::HeldKeyTableFull`] if every slot is occupied.
    pub fn track(&mut self, press: KeyPress) -> Result<bool> {
        if self.keys.contains_key(&press.key) {
            return Ok(false);
        }
        if self.keys.len() >= self.capacity {
            return Err(Error::HeldKeyTableFull {
                capacity: self.capacity,
            });
        }
        self.keys.insert(press.key, press);
        Ok(true)
    }

    /// Whether `key` is tracked.
    pub fn contains(&self, key: HostKey) -> bool {
        self.keys.contains_key(&key)
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// `true` when nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Slot bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every tracked key for which `is_down` returns `false`.
    ///
    /// Returns the removed presses in unspecified order.
    pub fn release_up(&mut self, mut is_down: impl FnMut(HostKey) -> bool) -> Vec<KeyPress> {
        if self.keys.is_empty() {
            return Vec::new();
        }
        let mut released = Vec::new();
        self.keys.retain(|&key, press| {
            if is_down(key) {
                true
            } else {
                released.push(*press);
                false
            }
        });
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ModifierFlags;

    #[test]
    fn track_then_release() {
        let mut table = HeldKeyTable::new();
        let a = KeyPress::new(HostKey::Char('A'));
        assert_eq!(table.track(a), Ok(true));
        assert!(table.contains(HostKey::Char('A')));
        assert_eq!(table.len(), 1);

        let released = table.release_up(|_| false);
        assert_eq!(released, vec![a]);
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_identity_is_not_counted() {
        let mut table = HeldKeyTable::new();
        let plain = KeyPress::new(HostKey::Char('A')).with_text('a');
        let shifted = plain.with_modifiers(ModifierFlags::SHIFT).with_text('A');

        assert_eq!(table.track(plain), Ok(true));
        assert_eq!(table.track(plain), Ok(false));
        assert_eq!(table.track(shifted), Ok(false));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn held_keys_survive_reconciliation() {
        let mut table = HeldKeyTable::new();
        table.track(KeyPress::new(HostKey::Char('W'))).unwrap();
        table.track(KeyPress::new(HostKey::Space)).unwrap();

        let released = table.release_up(|key| key == HostKey::Char('W'));
        assert_eq!(released, vec![KeyPress::new(HostKey::Space)]);
        assert!(table.contains(HostKey::Char('W')));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn overflow_is_reported() {
        let mut table = HeldKeyTable::with_capacity(2);
        table.track(KeyPress::new(HostKey::Function(1))).unwrap();
        table.track(KeyPress::new(HostKey::Function(2))).unwrap();

        assert_eq!(
            table.track(KeyPress::new(HostKey::Function(3))),
            Err(Error::HeldKeyTableFull { capacity: 2 })
        );
        // Already-tracked keys are still accepted when full.
        assert_eq!(table.track(KeyPress::new(HostKey::Function(1))), Ok(false));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn default_capacity() {
        let table = HeldKeyTable::default();
        assert_eq!(table.capacity(), HELD_KEY_CAPACITY);
        assert!(table.is_empty());
    }

    #[test]
    fn custom_capacity_is_clamped() {
        assert_eq!(HeldKeyTable::with_capacity(1000).capacity(), HELD_KEY_CAPACITY);
        assert_eq!(HeldKeyTable::with_capacity(8).capacity(), 8);
    }

    #[test]
    fn empty_table_skips_the_query() {
        let mut table = HeldKeyTable::new();
        let mut queried = false;
        let released = table.release_up(|_| {
            queried = true;
            false
        });
        assert!(released.is_empty());
        assert!(!queried);
    }
}
