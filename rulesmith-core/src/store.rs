//! Ordered rule storage with per-session identities.
//!
//! Order is both the display order and the execution order, so the store
//! never reorders entries: it appends at the end and removes in place.
//! Entries are addressed by a [`RuleId`] handed out on append. Two rules with
//! the same contents are still two distinct entries.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use log::debug;

/// Identity of one entry inside a single [`RuleStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u64);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An ordered list of rules of one kind.
///
/// Ids and rules are kept in parallel vectors so the rules themselves can be
/// handed out as a contiguous slice (the save transaction works on `&mut [T]`).
#[derive(Debug, Clone)]
pub struct RuleStore<T> {
    ids: Vec<RuleId>,
    rules: Vec<T>,
    next_id: u64,
}

impl<T> Default for RuleStore<T> {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            rules: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> RuleStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an existing ordered list, preserving its order.
    pub fn from_rules<I: IntoIterator<Item = T>>(rules: I) -> Self {
        let mut store = Self::new();
        for rule in rules {
            store.append(rule);
        }
        store
    }

    /// Adds `rule` at the end. No validation happens here: empty or invalid
    /// rules are expected to exist while the user is still typing.
    pub fn append(&mut self, rule: T) -> RuleId {
        let id = RuleId(self.next_id);
        self.next_id += 1;
        self.ids.push(id);
        self.rules.push(rule);
        debug!("Appended rule {} (store now holds {}).", id, self.rules.len());
        id
    }

    /// Removes the entry with identity `id`. Returns `None` when it is not
    /// present, which is not an error.
    pub fn remove_by_identity(&mut self, id: RuleId) -> Option<T> {
        let index = self.position(id)?;
        self.ids.remove(index);
        let removed = self.rules.remove(index);
        debug!("Removed rule {} at position {}.", id, index);
        Some(removed)
    }

    pub fn position(&self, id: RuleId) -> Option<usize> {
        self.ids.iter().position(|candidate| *candidate == id)
    }

    /// Identity of the entry at `index` in the current order.
    pub fn id_at(&self, index: usize) -> Option<RuleId> {
        self.ids.get(index).copied()
    }

    pub fn get(&self, id: RuleId) -> Option<&T> {
        self.position(id).map(|index| &self.rules[index])
    }

    pub fn get_mut(&mut self, id: RuleId) -> Option<&mut T> {
        let index = self.position(id)?;
        self.rules.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rules
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.rules
    }
}

impl<T: Clone> RuleStore<T> {
    /// Snapshot of the current ordered sequence.
    pub fn to_ordered_list(&self) -> Vec<T> {
        self.rules.clone()
    }
}
