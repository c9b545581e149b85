//! Program store
//!
//! This module holds the data a program operates on:
//! - [`universe`]: the interned element names
//! - [`value`]: sorted [`value::Set`] and [`value::Relation`] values
//! - [`entry`]: the tagged [`entry::Entry`] slot, one per input line
//!
//! # Layout
//!
//! Slot `i` (0-based) holds line `i + 1` of the input. Slot 0 is always the
//! universe materialized as a set. Slots are only ever appended during
//! parsing and replaced in place while running; nothing is removed.

pub mod entry;
pub mod universe;
pub mod value;

use entry::Entry;
use universe::Universe;
use value::{Relation, Set};

/// Ordered sequence of typed entries plus the universe they index into
#[derive(Debug, Clone)]
pub struct Store {
    universe: Universe,
    entries: Vec<Entry>,
    empty_set: Set,
    empty_relation: Relation,
}

impl Store {
    /// Create a store whose first slot is `universe` as a set.
    pub fn new(universe: Universe) -> Self {
        let entries = vec![Entry::Set(universe.to_set())];
        Store {
            universe,
            entries,
            empty_set: Set::new(),
            empty_relation: Relation::new(),
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Slot at 0-based `index`
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Slot holding 1-based `line`
    pub fn line(&self, line: usize) -> Option<&Entry> {
        line.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    /// Overwrite the slot at `index`, returning what it held.
    pub fn replace(&mut self, index: usize, entry: Entry) -> Option<Entry> {
        self.entries
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, entry))
    }

    /// Shared empty set substituted for unresolved command slots
    pub fn empty_set(&self) -> &Set {
        &self.empty_set
    }

    /// Shared empty relation substituted for unresolved command slots
    pub fn empty_relation(&self) -> &Relation {
        &self.empty_relation
    }

    pub fn command_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_command()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_is_universe() {
        let universe = Universe::from_names(["a", "b"]).unwrap();
        let store = Store::new(universe);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).and_then(Entry::as_set).unwrap().elements(), &[0, 1]);
        assert!(store.line(0).is_none());
        assert!(store.line(1).is_some());
        assert!(store.line(2).is_none());
    }

    #[test]
    fn test_replace_changes_tag() {
        let universe = Universe::from_names(["a"]).unwrap();
        let mut store = Store::new(universe);
        store.push(Entry::Relation(Relation::new()));

        let old = store.replace(1, Entry::Set(Set::from_sorted(vec![0])));

        assert!(matches!(old, Some(Entry::Relation(_))));
        assert!(matches!(store.line(2), Some(Entry::Set(_))));
        assert!(store.replace(5, Entry::Set(Set::new())).is_none());
    }
}
