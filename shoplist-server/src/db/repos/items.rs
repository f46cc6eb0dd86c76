//! Item repository
//!
//! List semantics over the store: insertion order, first match wins for
//! writes. Lookups assert the name is unique; a duplicate is reported, never
//! resolved by picking one.
//!
//! The repository borrows whatever guard the caller holds, so a read guard
//! gives the query methods and a write guard adds the mutating ones.

use std::ops::{Deref, DerefMut};

use crate::db::store::Items;
use crate::models::{CreateItemRequest, Item, PageOptions, UpdateItemRequest};

/// Repository error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("invariant violated: {count} items named '{name}'")]
    DuplicateName { name: String, count: usize },

    #[error("not found: item '{name}'")]
    NotFound { name: String },
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Item repository
pub struct ItemRepo<S> {
    items: S,
}

impl<S> ItemRepo<S>
where
    S: Deref<Target = Items>,
{
    pub fn new(items: S) -> Self {
        Self { items }
    }

    /// Snapshot of the list, paged when `options` is valid.
    ///
    /// A page past the end is empty, not an error.
    pub fn list(&self, options: Option<&PageOptions>) -> Vec<Item> {
        let all = self.items.all();

        match options.and_then(PageOptions::window) {
            Some((offset, limit)) => all.iter().skip(offset).take(limit).cloned().collect(),
            None => all.to_vec(),
        }
    }

    /// The single item with exactly this name.
    pub fn get(&self, name: &str) -> RepoResult<Option<Item>> {
        let mut matches = self.items.all().iter().filter(|i| i.name == name);

        let first = matches.next();
        let extra = matches.count();
        if extra > 0 {
            return Err(RepoError::DuplicateName {
                name: name.to_owned(),
                count: extra + 1,
            });
        }

        Ok(first.cloned())
    }
}

impl<S> ItemRepo<S>
where
    S: DerefMut<Target = Items>,
{
    /// Append a new item. Duplicate names are the caller's concern.
    pub fn insert(&mut self, request: CreateItemRequest) -> Item {
        let item = Item::new(request.item_name, request.quantity);
        self.items.add(item.clone());
        item
    }

    /// Replace the quantity of the first item with the request's name.
    pub fn update(&mut self, request: &UpdateItemRequest) -> RepoResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.name == request.item_name)
            .ok_or_else(|| RepoError::NotFound {
                name: request.item_name.clone(),
            })?;

        item.quantity = request.quantity;
        Ok(())
    }

    /// Remove the first item with this name. Missing names are a no-op.
    pub fn delete(&mut self, name: &str) {
        let found = self.items.all().iter().find(|i| i.name == name).cloned();

        if let Some(item) = found {
            self.items.remove(&item);
        }
    }
}
