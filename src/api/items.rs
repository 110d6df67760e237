use poem::Request;
use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::api::helpers::ensure_known_query_keys;
use crate::errors::ValidationError;
use crate::types::dto::items::{
    Item, ItemDetailResponse, ItemFilters, ItemListResponse, ItemSummary, ItemWithTaxResponse,
    OrderBy,
};

/// Items API
pub struct ItemsApi;

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item browsing and creation endpoints
    Items,
}

/// Query parameter names declared by the filter endpoint; anything else is rejected
const FILTER_QUERY_KEYS: &[&str] = &["limit", "offset", "order_by", "tags"];

fn default_item_query() -> String {
    "findindex".to_string()
}

fn default_limit() -> i32 {
    10
}

fn default_offset() -> i32 {
    0
}

fn default_tags() -> Vec<String> {
    Vec::new()
}

#[OpenApi]
impl ItemsApi {
    /// List items
    ///
    /// Returns the fixed demonstration listing; the effective search string is
    /// echoed back under `q` when non-empty. The `item-query` parameter is kept
    /// for older clients and marked deprecated in the generated document.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        #[oai(
            name = "item-query",
            deprecated,
            default = "default_item_query",
            validator(min_length = 3, max_length = 50, pattern = "^[A-Za-z]+$")
        )]
        query: Query<String>,
    ) -> Json<ItemListResponse> {
        let q = query.0;

        Json(ItemListResponse {
            items: vec![
                ItemSummary {
                    item_id: "Foo".to_string(),
                },
                ItemSummary {
                    item_id: "Bar".to_string(),
                },
            ],
            q: (!q.is_empty()).then_some(q),
        })
    }

    /// Create an item
    ///
    /// Echoes the submitted item plus the gross price computed from the net
    /// price and the optional tax
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<Item>) -> Json<ItemWithTaxResponse> {
        let item = body.0;
        let price_with_tax = item.price + item.tax.unwrap_or(0.0);

        Json(ItemWithTaxResponse {
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            price_with_tax,
        })
    }

    /// Read an item by its ID
    ///
    /// `q` is required here, unlike on the listing endpoint. An optional item
    /// payload is echoed back when the caller supplies one.
    #[oai(path = "/items/:item_id", method = "get", tag = "ApiTags::Items")]
    async fn read_item_by_id(
        &self,
        #[oai(validator(minimum(value = 1.0), maximum(value = 1000.0)))] item_id: Path<i64>,
        q: Query<String>,
        item: Json<Option<Item>>,
    ) -> Json<ItemDetailResponse> {
        let q = q.0;

        Json(ItemDetailResponse {
            item_id: item_id.0,
            q: (!q.is_empty()).then_some(q),
            item: item.0,
        })
    }

    /// Filter items
    ///
    /// Binds the filter shape from individual query parameters and echoes it
    /// back verbatim. The shape is closed: undeclared query keys are rejected.
    #[oai(path = "/itemes/about", method = "get", tag = "ApiTags::Items")]
    async fn about_items(
        &self,
        req: &Request,
        #[oai(
            default = "default_limit",
            validator(minimum(value = 1.0), maximum(value = 100.0))
        )]
        limit: Query<i32>,
        #[oai(default = "default_offset", validator(minimum(value = 0.0)))] offset: Query<i32>,
        #[oai(default = "OrderBy::default")] order_by: Query<OrderBy>,
        #[oai(default = "default_tags")] tags: Query<Vec<String>>,
    ) -> Result<Json<ItemFilters>, ValidationError> {
        ensure_known_query_keys(req, FILTER_QUERY_KEYS)?;

        Ok(Json(ItemFilters {
            limit: limit.0,
            offset: offset.0,
            order_by: order_by.0,
            tags: tags.0,
        }))
    }
}
