use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

/// Item payload used by the item and user endpoints
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Name of the item
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Net price of the item
    pub price: f64,

    /// Optional tax amount added on top of the net price
    pub tax: Option<f64>,
}

/// Summary entry in the fixed item listing
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Listing identifier
    pub item_id: String,
}

/// Response model for the item listing endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemListResponse {
    /// Fixed demonstration listing
    pub items: Vec<ItemSummary>,

    /// Search string echoed back when one was supplied
    pub q: Option<String>,
}

/// Response model for item creation: the submitted fields plus the gross price
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemWithTaxResponse {
    /// Name of the item
    pub name: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Net price of the item
    pub price: f64,

    /// Optional tax amount
    pub tax: Option<f64>,

    /// Net price plus tax, with a missing tax counted as zero
    pub price_with_tax: f64,
}

/// Response model for the item detail endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    /// Identifier taken from the request path
    pub item_id: i64,

    /// Search string echoed back when one was supplied
    pub q: Option<String>,

    /// Item payload echoed back when the caller supplied one
    pub item: Option<Item>,
}

/// Sort key accepted by the item filter endpoint
///
/// `update_at` is the spelling published by the HTTP contract.
#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[oai(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    CreatedAt,
    UpdateAt,
}

impl Default for OrderBy {
    fn default() -> Self {
        OrderBy::CreatedAt
    }
}

/// Validated filter set echoed by the filter endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ItemFilters {
    /// Page size, 1 to 100
    pub limit: i32,

    /// Number of entries to skip
    pub offset: i32,

    /// Sort key applied to the listing
    pub order_by: OrderBy,

    /// Tag filters, in request order
    pub tags: Vec<String>,
}
