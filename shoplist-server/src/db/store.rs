//! In-memory item store
//!
//! One `Store` is built at startup and injected into the application state.
//! All access goes through a single `RwLock`: readers share it, writers hold
//! it exclusively for their whole check-then-act sequence.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Item;

/// Ordered collection of items, insertion order preserved.
///
/// No uniqueness enforcement at this level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Items(Vec<Item>);

impl Items {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end.
    pub fn add(&mut self, item: Item) {
        self.0.push(item);
    }

    /// Remove the first element equal to `item`. Returns whether one was removed.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.0.iter().position(|i| i == item) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Current ordered view.
    pub fn all(&self) -> &[Item] {
        &self.0
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Item> {
        self.0.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Item> for Items {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Shared, lock-guarded store
#[derive(Debug, Default)]
pub struct Store {
    items: RwLock<Items>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store, mostly for tests.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: RwLock::new(items.into_iter().collect()),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Items> {
        self.items.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Items> {
        self.items.write().await
    }

    /// Drop every item. Test isolation only.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_insertion_order() {
        let mut items = Items::new();
        items.add(Item::new("b", 1));
        items.add(Item::new("a", 2));
        items.add(Item::new("c", 3));

        let names: Vec<_> = items.all().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn remove_takes_first_equal_only() {
        let mut items: Items = [
            Item::new("a", 1),
            Item::new("b", 1),
            Item::new("a", 1),
        ]
        .into_iter()
        .collect();

        assert!(items.remove(&Item::new("a", 1)));
        assert_eq!(items.all(), [Item::new("b", 1), Item::new("a", 1)]);

        assert!(!items.remove(&Item::new("zzz", 1)));
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn clear_empties_store() {
        let store = Store::with_items([Item::new("a", 1), Item::new("b", 2)]);
        assert_eq!(store.len().await, 2);

        store.clear().await;
        assert!(store.read().await.is_empty());
    }

    #[tokio::test]
    async fn writes_are_visible_to_readers() {
        let store = Store::new();
        store.write().await.add(Item::new("Milk", 2));

        assert_eq!(store.read().await.all(), [Item::new("Milk", 2)]);
    }
}
