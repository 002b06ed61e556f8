use std::collections::HashMap;
use std::sync::Arc;

use super::model::NamedEntity;
use super::normalizer::intern_key;

/// Interned instances of one entity type, kept in first-seen order.
#[derive(Debug)]
pub struct EntityRegistry<T> {
    entries: Vec<Arc<T>>,
    by_key: HashMap<String, usize>,
}

impl<T> Default for EntityRegistry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_key: HashMap::new(),
        }
    }
}

impl<T: NamedEntity> EntityRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing instance whose name matches `name` ignoring case,
    /// or registers a new one carrying `name` verbatim.
    pub fn intern(&mut self, name: &str) -> Arc<T> {
        let key = intern_key(name);
        if let Some(&index) = self.by_key.get(&key) {
            return Arc::clone(&self.entries[index]);
        }

        let entity = Arc::new(T::from_name(name.to_string()));
        self.by_key.insert(key, self.entries.len());
        self.entries.push(Arc::clone(&entity));
        entity
    }

    pub fn get(&self, name: &str) -> Option<Arc<T>> {
        self.by_key
            .get(&intern_key(name))
            .map(|&index| Arc::clone(&self.entries[index]))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of the registry ordered by name. Equal names keep first-seen order.
    pub fn sorted(&self) -> Vec<Arc<T>> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|left, right| left.name().cmp(right.name()));
        sorted
    }
}
