//! Shopping list endpoints
//!
//! One collection resource, `/api/shoppinglist`, addressed by query string.
//! A GET with an `itemname` key is a single lookup, any other GET is a list.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::OptionalJson;
use crate::http::server::AppState;
use crate::models::{CreateItemRequest, PageOptions, PageParams, UpdateItemRequest};
use crate::service::ShoppingListService;

/// Query string of GET and DELETE
///
/// Keys match case-insensitively. A repeated key keeps its first value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShoppingListQuery {
    pub item_name: Option<String>,
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl ShoppingListQuery {
    /// Pick the known keys out of decoded query pairs, ignoring the rest.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();

        for (key, value) in pairs {
            let slot = if key.eq_ignore_ascii_case("itemname") {
                &mut query.item_name
            } else if key.eq_ignore_ascii_case("pagenumber") {
                &mut query.page_number
            } else if key.eq_ignore_ascii_case("pagesize") {
                &mut query.page_size
            } else {
                continue;
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        query
    }

    /// Paging options, `None` when neither parameter was given.
    pub fn page_options(&self) -> Option<PageOptions> {
        PageParams {
            page_number: self.page_number.clone(),
            page_size: self.page_size.clone(),
        }
        .into_options()
    }
}

/// GET /api/shoppinglist - list (optionally paged) or single item by name
async fn get_items(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = ShoppingListQuery::from_pairs(pairs);
    let service = ShoppingListService::new(&state.store);

    match query.item_name.as_deref() {
        Some(name) => {
            let item = service.get(Some(name)).await?;
            Ok(Json(item).into_response())
        }
        None => {
            let list = service.list(query.page_options()).await;
            Ok(Json(list).into_response())
        }
    }
}

/// POST /api/shoppinglist - create an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    OptionalJson(request): OptionalJson<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let created = ShoppingListService::new(&state.store)
        .create(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        Json(created.item),
    ))
}

/// PUT /api/shoppinglist - replace an item's quantity
async fn update_item(
    State(state): State<Arc<AppState>>,
    OptionalJson(request): OptionalJson<UpdateItemRequest>,
) -> Result<StatusCode, ApiError> {
    ShoppingListService::new(&state.store)
        .update(request)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /api/shoppinglist?itemname=X - remove an item (idempotent)
async fn delete_item(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let query = ShoppingListQuery::from_pairs(pairs);
    ShoppingListService::new(&state.store)
        .delete(query.item_name.as_deref())
        .await?;

    Ok(StatusCode::OK)
}

/// Shopping list routes
pub fn router() -> Router<Arc<AppState>> {
    let collection = get(get_items)
        .post(create_item)
        .put(update_item)
        .delete(delete_item);

    Router::new()
        .route("/api/shoppinglist", collection.clone())
        .route("/api/shoppinglist/", collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> ShoppingListQuery {
        let uri = format!("/x?{raw}").parse().unwrap();
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri).unwrap();
        ShoppingListQuery::from_pairs(pairs)
    }

    #[test]
    fn query_binds_name_case_insensitively() {
        for raw in [
            "itemname=Milk",
            "itemName=Milk",
            "ItemName=Milk",
            "ITEMNAME=Milk",
        ] {
            assert_eq!(parse(raw).item_name.as_deref(), Some("Milk"), "{raw}");
        }
    }

    #[test]
    fn query_binds_paging() {
        let query = parse("pageNumber=2&pageSize=10");

        assert_eq!(query.item_name, None);
        let options = query.page_options().unwrap();
        assert_eq!(options.window(), Some((10, 10)));
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let query = parse("pagenumber=1&PAGENUMBER=3&pageNumber=2&pageSize=2");

        assert_eq!(query.page_number.as_deref(), Some("1"));
        assert_eq!(query.page_options().unwrap().window(), Some((0, 2)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(parse("sort=desc&x=1"), ShoppingListQuery::default());
    }

    #[test]
    fn values_are_percent_decoded() {
        assert_eq!(
            parse("itemname=Green%20Tea").item_name.as_deref(),
            Some("Green Tea")
        );
    }

    #[test]
    fn non_numeric_paging_disables_paging() {
        let query = parse("PageNumber=two&pagesize=10");

        let options = query.page_options().unwrap();
        assert_eq!(options, PageOptions::new(None, Some(10)));
        assert_eq!(options.window(), None);
    }

    #[test]
    fn empty_item_name_is_still_a_lookup() {
        assert_eq!(parse("itemname=").item_name.as_deref(), Some(""));
    }
}
