//! In-memory storage for the storefront.
//!
//! One [`Store`] is constructed at process start and handed to request
//! handlers through the application state; tests build fresh instances for
//! isolation. There is no global.
//!
//! # Collections
//!
//! - [`ProductCatalog`] - fixed catalog, seeded once, read-only afterwards
//! - [`CartStore`] - per-user cart lines with merge-on-duplicate adds
//! - [`UserStore`] - account records keyed by sequential id, unique email
//! - [`NewsletterStore`] - subscribed email addresses
//!
//! Every mutable collection is guarded by its own `RwLock`, so mutations
//! are serialized per collection and the one-line-per-(product, size)
//! cart invariant holds under concurrent requests.

pub mod cart;
pub mod catalog;
pub mod newsletter;
pub mod snapshot;
pub mod users;

use thiserror::Error;

use bravenza_core::{ProductId, UserId};

use crate::models::CartLineWithProduct;

pub use cart::CartStore;
pub use catalog::ProductCatalog;
pub use newsletter::NewsletterStore;
pub use snapshot::{LocalCart, LocalCartItem};
pub use users::UserStore;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced cart line does not exist.
    #[error("cart line not found")]
    LineNotFound,

    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),

    /// A cart line references a product missing from the catalog.
    ///
    /// Defensive: the catalog is immutable post-seed, so this indicates an
    /// inconsistency rather than a user error.
    #[error("product not found: {0}")]
    ProductMissing(ProductId),
}

/// The in-memory store backing all API handlers.
pub struct Store {
    catalog: ProductCatalog,
    carts: CartStore,
    users: UserStore,
    newsletter: NewsletterStore,
}

impl Store {
    /// Create a store with the seeded product catalog and empty
    /// cart/user/newsletter collections.
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: ProductCatalog::seeded(),
            carts: CartStore::new(),
            users: UserStore::new(),
            newsletter: NewsletterStore::new(),
        }
    }

    /// The read-only product catalog.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// The cart line collection.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.carts
    }

    /// The user account collection.
    #[must_use]
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// The newsletter subscription collection.
    #[must_use]
    pub fn newsletter(&self) -> &NewsletterStore {
        &self.newsletter
    }

    /// List a user's cart lines, each joined with its current product
    /// snapshot from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductMissing` if a line references a product
    /// absent from the catalog.
    pub fn cart_with_products(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartLineWithProduct>, StoreError> {
        self.carts
            .lines_for(user_id)
            .into_iter()
            .map(|line| {
                let product = self
                    .catalog
                    .get(line.product_id)
                    .ok_or(StoreError::ProductMissing(line.product_id))?;
                Ok(CartLineWithProduct { line, product })
            })
            .collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
