//! Shopping list use-case service
//!
//! # Responsibility
//! - Validate already-bound requests.
//! - Run repository calls under the store lock.
//! - Classify each outcome as success, validation failure, not found, or
//!   internal fault.
//!
//! # Invariants
//! - Stateless between calls; everything lives in the `Store`.
//! - A mutating call holds the write guard from its existence check through
//!   its write, so concurrent creates cannot both pass the duplicate check.
//! - Update on a missing name is a validation failure, not a not-found.

use crate::db::{ItemRepo, RepoError, Store};
use crate::models::{
    require_non_blank, CreateItemRequest, Item, PageOptions, ShoppingList, UpdateItemRequest,
    ValidationError,
};

const ITEM_NAME: &str = "ItemName";

/// Failed outcome of a service call
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request rejected before touching the store
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Lookup miss
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Store invariant broken
    #[error("repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Base path of the collection, as used in `Location` headers.
pub const COLLECTION_PATH: &str = "api/shoppinglist";

/// Result of a successful create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub item: Item,
    /// Query-style locator of the new item
    pub location: String,
}

/// Location of an item: `api/shoppinglist/?itemname={name}`, name percent-encoded.
pub fn item_location(name: &str) -> String {
    format!("{}/?itemname={}", COLLECTION_PATH, urlencoding::encode(name))
}

/// Request handler for the shopping list
pub struct ShoppingListService<'a> {
    store: &'a Store,
}

impl<'a> ShoppingListService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Whole list, or one page of it. Never fails.
    pub async fn list(&self, options: Option<PageOptions>) -> ShoppingList {
        let items = self.store.read().await;
        let repo = ItemRepo::new(&*items);

        ShoppingList::from(repo.list(options.as_ref()))
    }

    /// Single item by exact name.
    pub async fn get(&self, name: Option<&str>) -> Result<Item, ServiceError> {
        let name = require_non_blank(name, ITEM_NAME)?;

        let items = self.store.read().await;
        let found = ItemRepo::new(&*items).get(name)?;

        found.ok_or_else(|| ServiceError::NotFound {
            resource: "item",
            id: name.to_owned(),
        })
    }

    /// Add a new item. Blank or duplicate names are rejected.
    pub async fn create(
        &self,
        request: Option<CreateItemRequest>,
    ) -> Result<Created, ServiceError> {
        let request = request.ok_or(ValidationError::MissingBody { request: "create" })?;
        require_non_blank(Some(request.item_name.as_str()), ITEM_NAME)?;

        let mut items = self.store.write().await;
        let mut repo = ItemRepo::new(&mut *items);

        if repo.get(&request.item_name)?.is_some() {
            return Err(ValidationError::Duplicate {
                name: request.item_name,
            }
            .into());
        }

        let item = repo.insert(request);
        tracing::info!(name = %item.name, quantity = item.quantity, "item created");

        Ok(Created {
            location: item_location(&item.name),
            item,
        })
    }

    /// Replace the quantity of an existing item.
    pub async fn update(
        &self,
        request: Option<UpdateItemRequest>,
    ) -> Result<(), ServiceError> {
        let request = request.ok_or(ValidationError::MissingBody { request: "update" })?;
        require_non_blank(Some(request.item_name.as_str()), ITEM_NAME)?;

        let mut items = self.store.write().await;
        let mut repo = ItemRepo::new(&mut *items);

        if repo.get(&request.item_name)?.is_none() {
            return Err(ValidationError::UnknownItem {
                name: request.item_name,
            }
            .into());
        }

        repo.update(&request)?;
        tracing::info!(name = %request.item_name, quantity = request.quantity, "item updated");

        Ok(())
    }

    /// Remove an item by name. Succeeds whether or not it existed.
    pub async fn delete(&self, name: Option<&str>) -> Result<(), ServiceError> {
        let name = require_non_blank(name, ITEM_NAME)?;

        let mut items = self.store.write().await;
        ItemRepo::new(&mut *items).delete(name);
        tracing::info!(name = %name, "item deleted");

        Ok(())
    }
}
