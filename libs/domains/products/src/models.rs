use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity - one row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Auto-increment identifier, never reused after deletion
    pub id: i32,
    /// Display name, stored trimmed
    #[schema(example = "Curved Monitor 27\"")]
    pub name: String,
    /// Unit price, strictly positive
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product is currently available
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a product.
///
/// `availability` may be omitted and defaults to true.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Curved Monitor 27\"")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[serde(default)]
    pub availability: Option<bool>,
}

/// Payload for replacing a product.
///
/// All three fields are required; partial changes go through PATCH.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[schema(example = "Curved Monitor 27\"")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    pub availability: bool,
}

/// Envelope for single-product responses: `{ "data": { ... } }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// Envelope for list responses: `{ "data": [ ... ] }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}
