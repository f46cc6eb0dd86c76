//! Request bodies for create and update
//!
//! Field binding is lenient about key casing. A missing `ItemName` binds to an
//! empty string and a missing `Quantity` to 0; the service decides what is
//! acceptable.

use serde::Deserialize;

/// POST body
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "ItemName", alias = "itemName", alias = "itemname", default)]
    pub item_name: String,
    #[serde(rename = "Quantity", alias = "quantity", default)]
    pub quantity: i32,
}

impl CreateItemRequest {
    pub fn new(item_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}

/// PUT body. The name selects the item, the quantity replaces the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(rename = "ItemName", alias = "itemName", alias = "itemname", default)]
    pub item_name: String,
    #[serde(rename = "Quantity", alias = "quantity", default)]
    pub quantity: i32,
}

impl UpdateItemRequest {
    pub fn new(item_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_pascal_and_camel_case() {
        let req: CreateItemRequest =
            serde_json::from_str(r#"{"ItemName":"Item1","Quantity":3}"#).unwrap();
        assert_eq!(req, CreateItemRequest::new("Item1", 3));

        let req: UpdateItemRequest =
            serde_json::from_str(r#"{"itemName":"Item1","quantity":5}"#).unwrap();
        assert_eq!(req, UpdateItemRequest::new("Item1", 5));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let req: CreateItemRequest = serde_json::from_str(r#"{"Quantity":2}"#).unwrap();
        assert_eq!(req.item_name, "");

        let req: CreateItemRequest = serde_json::from_str(r#"{"ItemName":"Bread"}"#).unwrap();
        assert_eq!(req.quantity, 0);
    }

    #[test]
    fn non_integer_quantity_is_rejected() {
        assert!(serde_json::from_str::<CreateItemRequest>(r#"{"ItemName":"A","Quantity":"x"}"#)
            .is_err());
        assert!(serde_json::from_str::<CreateItemRequest>(
            r#"{"ItemName":"A","Quantity":4294967296}"#
        )
        .is_err());
    }
}
