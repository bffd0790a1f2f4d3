//! The user's creature collection
//!
//! [`Collection`] is the ordered list that gets persisted; entries are
//! addressed by position and insertion order is display order.
//! [`CollectionManager`] runs each user action as one
//! load → mutate → save pass against the [`crate::Store`].

mod evolution;
mod manager;

#[cfg(test)]
pub(crate) mod test_support;

pub use evolution::next_evolution;
pub use manager::{CollectionManager, Removal};

use serde::{Deserialize, Serialize};

use crate::catalog::CreatureRecord;

/// Ordered list of creature records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    entries: Vec<CreatureRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CreatureRecord> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CreatureRecord> {
        self.entries.iter()
    }

    /// Names in display order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn push(&mut self, record: CreatureRecord) {
        self.entries.push(record);
    }

    /// Remove the entry at `index`, `None` if out of range
    pub fn remove_at(&mut self, index: usize) -> Option<CreatureRecord> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Replace the entry at `index` in place, returning the previous record
    pub fn replace_at(&mut self, index: usize, record: CreatureRecord) -> Option<CreatureRecord> {
        let slot = self.entries.get_mut(index)?;
        Some(std::mem::replace(slot, record))
    }

    pub fn into_vec(self) -> Vec<CreatureRecord> {
        self.entries
    }
}

impl From<Vec<CreatureRecord>> for Collection {
    fn from(entries: Vec<CreatureRecord>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a CreatureRecord;
    type IntoIter = std::slice::Iter<'a, CreatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::creature;
    use super::*;
    use pretty_assertions::assert_eq;

    fn abc() -> Collection {
        Collection::from(vec![creature(1, "a"), creature(2, "b"), creature(3, "c")])
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut collection = Collection::new();
        collection.push(creature(25, "pikachu"));
        collection.push(creature(1, "bulbasaur"));
        collection.push(creature(25, "pikachu"));

        assert_eq!(collection.names(), vec!["pikachu", "bulbasaur", "pikachu"]);
    }

    #[test]
    fn test_remove_at() {
        let mut collection = abc();

        let removed = collection.remove_at(1).unwrap();
        assert_eq!(removed.name, "b");
        assert_eq!(collection.names(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut collection = abc();

        assert!(collection.remove_at(3).is_none());
        assert!(collection.remove_at(usize::MAX).is_none());
        assert_eq!(collection, abc());
    }

    #[test]
    fn test_replace_at() {
        let mut collection = abc();

        let previous = collection.replace_at(0, creature(9, "z")).unwrap();
        assert_eq!(previous.name, "a");
        assert_eq!(collection.names(), vec!["z", "b", "c"]);

        assert!(collection.replace_at(3, creature(10, "y")).is_none());
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let value = serde_json::to_value(abc()).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 3);
    }
}
