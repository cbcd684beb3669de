//! Product domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bravenza_core::{Category, Price, ProductId};

/// A catalog product.
///
/// Immutable after seeding; the catalog exposes no mutation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, assigned at seeding.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Decimal price, serialized as text (e.g. `"289.00"`).
    pub price: Price,
    pub category: Category,
    /// Image URL for the product card.
    pub image: String,
    /// Available sizes, in display order. The first entry is the default.
    pub sizes: Vec<String>,
    /// Shown in the bestsellers curated list.
    pub bestseller: bool,
    /// Shown in the featured curated list.
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The default size offered when none has been picked yet.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }
}
