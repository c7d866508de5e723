//! Arena-style owning collection keyed by natural-key ids.

use crate::model::employee::Employee;
use crate::model::ids::{EmployeeId, ProjectId, TaskId};
use crate::model::project::Project;
use crate::model::task::Task;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Entity that can be stored in a [`Catalog`].
pub trait CatalogEntry {
    type Id: Copy + Eq + Hash + Debug;

    fn entry_id(&self) -> Self::Id;

    /// Maps a natural key to the id an entry with that key would carry.
    fn id_for_key(key: &str) -> Self::Id;
}

impl CatalogEntry for Employee {
    type Id = EmployeeId;

    fn entry_id(&self) -> EmployeeId {
        self.id()
    }

    fn id_for_key(key: &str) -> EmployeeId {
        EmployeeId::from_key(key)
    }
}

impl CatalogEntry for Project {
    type Id = ProjectId;

    fn entry_id(&self) -> ProjectId {
        self.id()
    }

    fn id_for_key(key: &str) -> ProjectId {
        ProjectId::from_key(key)
    }
}

impl CatalogEntry for Task {
    type Id = TaskId;

    fn entry_id(&self) -> TaskId {
        self.id()
    }

    fn id_for_key(key: &str) -> TaskId {
        TaskId::from_key(key)
    }
}

/// Sole owner of one entity type.
#[derive(Debug, Clone)]
pub struct Catalog<T: CatalogEntry> {
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: CatalogEntry> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entry` unless one with the same id exists.
    ///
    /// Returns `false` when the entry was discarded as a duplicate; the
    /// first stored instance always wins.
    pub fn insert_if_absent(&mut self, entry: T) -> bool {
        let id = entry.entry_id();
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        match self.index.get(&id) {
            Some(&position) => Some(&mut self.entries[position]),
            None => None,
        }
    }

    pub fn find_by_key(&self, key: &str) -> Option<&T> {
        self.get(T::id_for_key(key))
    }

    /// Removes and returns the entry for `id`.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let position = self.index.remove(&id)?;
        let removed = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// Entries in first-seen order.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CatalogEntry> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.insert_if_absent(entry);
        }
        catalog
    }
}

impl<'a, T: CatalogEntry> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
