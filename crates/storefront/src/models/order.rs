//! Order snapshot types.
//!
//! An order exists only transiently as the checkout confirmation payload;
//! nothing here is persisted. Storage or forwarding (email receipts, a
//! ledger) is an external collaborator's responsibility.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bravenza_core::{Price, ProductId};

/// Customer contact fields captured by the checkout wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Shipping address captured by the checkout wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Snapshot of one cart line at submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub size: String,
    pub quantity: u32,
    /// Unit price x quantity, rounded for display.
    #[serde(with = "rust_decimal::serde::str")]
    pub line_total: Decimal,
}

/// The user-visible confirmation payload assembled at submission time.
///
/// Monetary figures are rounded to two decimal places here, at the
/// presentation boundary; the underlying accumulation is unrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable order identifier, unique per submission.
    pub id: String,
    pub placed_at: DateTime<Utc>,
    pub customer: CustomerInfo,
    pub shipping_address: ShippingAddress,
    pub lines: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub shipping: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}
