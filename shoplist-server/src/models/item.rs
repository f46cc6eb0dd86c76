//! Shopping list item and list envelope
//!
//! Wire names are PascalCase (`ItemName`, `Quantity`, `Data`, `Count`) and
//! must stay that way; clients match on them exactly.

use serde::{Deserialize, Serialize};

/// A named, quantified entry on the shopping list.
///
/// The name is the identity key (case-sensitive) and never changes after
/// creation. Only the quantity is mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ItemName")]
    pub name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// List response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(rename = "Data")]
    pub data: Vec<Item>,
    #[serde(rename = "Count")]
    pub count: usize,
}

impl From<Vec<Item>> for ShoppingList {
    fn from(data: Vec<Item>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
