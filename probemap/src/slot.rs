use std::mem;

/// A single storage cell in the slot array.
///
/// The three states mirror the open-addressing lifecycle: a slot starts
/// `Empty`, holds exactly one entry while `Occupied`, and becomes a
/// `Deleted` tombstone on removal so probe chains running through it stay
/// walkable. Tombstones turn back into `Empty` only when the whole array
/// is rebuilt or reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<K, V> {
    Empty,
    Occupied(K, V),
    Deleted,
}

// Manual impl: slot arrays are built for arbitrary K and V, so the
// derive's K: Default + V: Default bounds are too strict.
impl<K, V> Default for Slot<K, V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<K, V> Slot<K, V> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(..))
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, Slot::Deleted)
    }

    /// The stored key, or `None` unless the slot is occupied.
    pub fn key(&self) -> Option<&K> {
        match self {
            Slot::Occupied(key, _) => Some(key),
            _ => None,
        }
    }

    /// The stored value, or `None` unless the slot is occupied.
    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn key_value(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied(key, value) => Some((key, value)),
            _ => None,
        }
    }

    /// Stores an entry and marks the slot occupied, dropping whatever the
    /// slot held before. Returns the displaced entry if there was one.
    pub fn write(&mut self, key: K, value: V) -> Option<(K, V)> {
        match mem::replace(self, Slot::Occupied(key, value)) {
            Slot::Occupied(old_key, old_value) => Some((old_key, old_value)),
            _ => None,
        }
    }

    /// Swaps the mapped value of an occupied slot, keeping the key
    /// identity. Returns `None` (and stores nothing) unless occupied.
    pub fn replace_value(&mut self, value: V) -> Option<V> {
        match self {
            Slot::Occupied(_, old) => Some(mem::replace(old, value)),
            _ => None,
        }
    }

    /// Drops the entry if present and resets the slot to `Empty`.
    ///
    /// An `Empty` slot terminates every probe chain crossing it, so this
    /// is only correct on a whole-table reset or a fresh rebuild array;
    /// single-entry removal goes through [`Slot::mark_deleted`].
    pub fn clear_to_empty(&mut self) {
        *self = Slot::Empty;
    }

    /// Turns the slot into a tombstone, returning the entry it displaced.
    pub fn mark_deleted(&mut self) -> Option<(K, V)> {
        match mem::replace(self, Slot::Deleted) {
            Slot::Occupied(key, value) => Some((key, value)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let slot: Slot<u64, String> = Slot::default();

        assert!(slot.is_empty());
        assert!(!slot.is_occupied());
        assert!(!slot.is_deleted());
        assert_eq!(slot.key(), None);
        assert_eq!(slot.value(), None);
        assert_eq!(slot.key_value(), None);
    }

    #[test]
    fn write_occupies_and_displaces() {
        let mut slot = Slot::Empty;

        assert_eq!(slot.write(1u64, "one".to_string()), None);
        assert!(slot.is_occupied());
        assert_eq!(slot.key(), Some(&1));
        assert_eq!(slot.value(), Some(&"one".to_string()));

        let displaced = slot.write(2, "two".to_string());
        assert_eq!(displaced, Some((1, "one".to_string())));
        assert_eq!(slot.key_value(), Some((&2, &"two".to_string())));
    }

    #[test]
    fn replace_value_keeps_the_key() {
        let mut slot = Slot::Occupied(7u64, "old".to_string());

        assert_eq!(slot.replace_value("new".to_string()), Some("old".to_string()));
        assert_eq!(slot.key_value(), Some((&7, &"new".to_string())));

        let mut empty: Slot<u64, String> = Slot::Empty;
        assert_eq!(empty.replace_value("x".to_string()), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn mark_deleted_returns_the_entry() {
        let mut slot = Slot::Occupied(3u64, 30u64);

        assert_eq!(slot.mark_deleted(), Some((3, 30)));
        assert!(slot.is_deleted());
        assert_eq!(slot.key(), None);

        // deleting a tombstone again yields nothing
        assert_eq!(slot.mark_deleted(), None);
        assert!(slot.is_deleted());
    }

    #[test]
    fn clear_resets_any_state() {
        let mut occupied = Slot::Occupied(1u64, 1u64);
        occupied.clear_to_empty();
        assert!(occupied.is_empty());

        let mut deleted: Slot<u64, u64> = Slot::Deleted;
        deleted.clear_to_empty();
        assert!(deleted.is_empty());
    }

    #[test]
    fn value_mut_edits_in_place() {
        let mut slot = Slot::Occupied(1u64, 10u64);

        *slot.value_mut().unwrap() += 5;
        assert_eq!(slot.value(), Some(&15));

        let mut deleted: Slot<u64, u64> = Slot::Deleted;
        assert_eq!(deleted.value_mut(), None);
    }
}
