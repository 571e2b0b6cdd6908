use crate::consolidation::domain::{ComponentRef, FlatComponent};
use std::collections::btree_map::{BTreeMap, Entry};

/// Merged component records, one per `(component_type, component_id)`
///
/// Iteration is ordered by component type, then component id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupedSet {
    entries: BTreeMap<ComponentRef, FlatComponent>,
}

impl DedupedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a record to the set.
    ///
    /// The record is stored when its key is new, or when its creation time is
    /// strictly later than the stored record's. On equal times the stored
    /// record stays. Returns whether the record was stored.
    pub fn offer(&mut self, record: FlatComponent) -> bool {
        match self.entries.entry(record.key().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
            Entry::Occupied(mut slot) => {
                if record.created_time() > slot.get().created_time() {
                    slot.insert(record);
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn get(&self, key: &ComponentRef) -> Option<&FlatComponent> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlatComponent> {
        self.entries.values()
    }
}

impl Extend<FlatComponent> for DedupedSet {
    fn extend<I: IntoIterator<Item = FlatComponent>>(&mut self, records: I) {
        for record in records {
            self.offer(record);
        }
    }
}

impl FromIterator<FlatComponent> for DedupedSet {
    fn from_iter<I: IntoIterator<Item = FlatComponent>>(records: I) -> Self {
        let mut set = Self::new();
        set.extend(records);
        set
    }
}

/// Deduplicator keeps the most recently created version of each component
pub struct Deduplicator;

impl Deduplicator {
    /// Streams all records into a [`DedupedSet`]
    ///
    /// O(n) over the records, O(k) space for k distinct keys. Empty input
    /// gives an empty set.
    pub fn deduplicate<I>(records: I) -> DedupedSet
    where
        I: IntoIterator<Item = FlatComponent>,
    {
        records.into_iter().collect()
    }
}
