//! The product entity managed by this service.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::ToSchema;

/// A single product record.
///
/// `id` is assigned by the store on creation and is immutable afterwards.
/// Ids increase monotonically across the process lifetime and are never
/// reused, even after deletion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Sample Product")]
    pub name: String,
    #[schema(example = 19.99, minimum = 0)]
    pub price: f64,
    /// Kept as a raw JSON number: a hand-edited snapshot may carry a
    /// negative or fractional quantity, and such records stay in the
    /// collection untouched (they contribute 0 to the total balance).
    /// Quantities that arrive through the API are always integers >= 0.
    #[schema(value_type = u64, example = 5, minimum = 0)]
    pub quantity: Number,
}

/// The caller-supplied fields of a product (everything except `id`).
///
/// Produced by [`crate::domain::validate::parse_fields`] after a payload
/// passes full validation; `name` is already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub quantity: u64,
}

impl Product {
    pub fn new(id: u64, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            quantity: Number::from(fields.quantity),
        }
    }
}
