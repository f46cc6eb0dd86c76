//! Domain models and request/response shapes
//!
//! Presence checks happen in the service, not at deserialization, so an
//! incomplete request still reaches it and gets a validation failure.

pub mod validation;
pub mod item;
pub mod request;
pub mod pagination;

pub use validation::{require_non_blank, ValidationError};
pub use item::{Item, ShoppingList};
pub use request::{CreateItemRequest, UpdateItemRequest};
pub use pagination::{PageOptions, PageParams};
