use serde::{Deserialize, Serialize};

/// Core catalog entity. `item` doubles as the business key; lookups match it
/// exactly and case-sensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub item: String,
    pub price: f64,
    pub quantity: i64,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body for `POST /products`. Every field is optional at the deserialization
/// layer so the handler can report the first missing one itself; unknown body
/// fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProduct {
    pub item: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Body for `PUT`/`PATCH /products/:item`. Absent fields leave the stored
/// value untouched; `item` itself is never writable.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}
