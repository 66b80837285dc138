//! # Domain Model: Products
//!
//! A [`Product`] is one inventory item. Products are identified by a
//! user-assigned numeric `code` rather than a generated id, so the store is
//! the only place that can tell whether a code is taken.
//!
//! ## Persisted Shape
//!
//! Products are serialized as plain JSON records. The creation timestamp uses
//! the `createdAt` key and is written as an RFC 3339 string:
//!
//! ```text
//! {
//!   "code": 1,
//!   "name": "Widget",
//!   "description": "A basic widget",
//!   "quantity": 10,
//!   "createdAt": "2024-05-01T10:15:00.123456Z"
//! }
//! ```
//!
//! ## Lifecycle
//!
//! There is no update path. A product is built once (see [`crate::form`]),
//! added to the store, and eventually deleted by code. `created_at` is stamped
//! when the product is constructed and never touched again.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub code: u64,
    pub name: String,
    pub description: String,
    pub quantity: u64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product stamped with the current time.
    ///
    /// Does not validate; callers coming from user input should go through
    /// [`crate::form::ProductDraft::validate`] first.
    pub fn new(code: u64, name: String, description: String, quantity: u64) -> Self {
        Self::with_created_at(code, name, description, quantity, Utc::now())
    }

    pub fn with_created_at(
        code: u64,
        name: String,
        description: String,
        quantity: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            name,
            description,
            quantity,
            created_at,
        }
    }
}

/// Serializes a whole collection into the persisted representation.
pub fn encode_products(products: &[Product]) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(products)
}

/// Parses the persisted representation back into products.
pub fn decode_products(bytes: &[u8]) -> serde_json::Result<Vec<Product>> {
    serde_json::from_slice(bytes)
}
