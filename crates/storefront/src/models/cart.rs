//! Cart domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bravenza_core::{CartLineId, ProductId, UserId};

use super::product::Product;

/// One (product, size, quantity) entry in a cart.
///
/// At most one line exists per (user, product, size); repeated adds merge
/// into the existing line. Quantity is at least 1 while the line exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: CartLineId,
    /// Owning user; `None` for an anonymous cart.
    pub user_id: Option<UserId>,
    pub product_id: ProductId,
    pub size: String,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

/// A cart line joined with its current product snapshot.
///
/// Serializes as the line's fields plus a nested `product` object, the
/// shape the cart endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineWithProduct {
    #[serde(flatten)]
    pub line: CartLine,
    pub product: Product,
}
