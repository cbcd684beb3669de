//! Client-side cart mirror persisted to durable local storage.
//!
//! The single-page client keeps its own cart (product snapshot, size,
//! quantity) and writes the full line-item list to local storage under a
//! fixed key on every mutation, rehydrating it on load. This is that
//! mirror: a JSON file under [`CART_STORAGE_KEY`]. Malformed stored state
//! is discarded and treated as an empty cart, never propagated as an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bravenza_core::ProductId;

use crate::models::Product;

/// Fixed storage key for the persisted cart snapshot.
pub const CART_STORAGE_KEY: &str = "bravenza-cart";

/// One locally stored cart entry: a full product snapshot plus the chosen
/// size and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalCartItem {
    pub product: Product,
    pub size: String,
    pub quantity: u32,
}

/// The client cart, rehydrated from and persisted to a JSON file.
#[derive(Debug)]
pub struct LocalCart {
    path: PathBuf,
    items: Vec<LocalCartItem>,
}

impl LocalCart {
    /// Open the cart stored under `dir`, rehydrating any saved state.
    ///
    /// Missing state starts an empty cart; malformed state is discarded
    /// (and the stale file removed) rather than surfaced as an error.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(format!("{CART_STORAGE_KEY}.json"));
        let items = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<Vec<LocalCartItem>>(&bytes) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(error = %err, "discarding malformed cart snapshot");
                    let _ = fs::remove_file(&path);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, items }
    }

    /// Current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LocalCartItem] {
        &self.items
    }

    /// Add a product/size, merging into an existing entry if present.
    /// A quantity of 0 counts as 1.
    pub fn add(&mut self, product: Product, size: &str, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product.id && i.size == size)
        {
            item.quantity = item.quantity.saturating_add(quantity);
        } else {
            self.items.push(LocalCartItem {
                product,
                size: size.to_owned(),
                quantity,
            });
        }
        self.persist();
    }

    /// Overwrite an entry's quantity; zero or less removes the entry.
    pub fn set_quantity(&mut self, product_id: ProductId, size: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id, size);
            return;
        }
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product_id && i.size == size)
        {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.persist();
        }
    }

    /// Remove an entry.
    pub fn remove(&mut self, product_id: ProductId, size: &str) {
        self.items
            .retain(|i| !(i.product.id == product_id && i.size == size));
        self.persist();
    }

    /// Remove everything and delete the stored snapshot.
    pub fn clear(&mut self) {
        self.items.clear();
        let _ = fs::remove_file(&self.path);
    }

    /// Total quantity across entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of unit price x quantity across entries, unrounded.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| i.product.price.line_total(i.quantity))
            .sum()
    }

    /// Write the full item list; persistence failures are logged, not
    /// surfaced.
    fn persist(&self) {
        match serde_json::to_vec(&self.items) {
            Ok(bytes) => {
                if let Err(err) = fs::write(&self.path, bytes) {
                    tracing::warn!(error = %err, "failed to persist cart snapshot");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to serialize cart snapshot"),
        }
    }
}
