//! Cart line storage with merge-on-duplicate add semantics.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{PoisonError, RwLock};

use chrono::Utc;

use bravenza_core::{CartLineId, ProductId, UserId};

use crate::models::CartLine;

use super::StoreError;

/// Per-user cart line collection.
///
/// All mutations take the single write lock, so the at-most-one-line-per
/// (user, product, size) invariant holds under concurrent requests. Line
/// ids come from one sequential counter shared across users.
pub struct CartStore {
    lines: RwLock<BTreeMap<CartLineId, CartLine>>,
    next_id: AtomicI32,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Add a product/size to a cart.
    ///
    /// If a line with the same (user, product, size) exists its quantity is
    /// incremented by `quantity`; otherwise a new line is created. A
    /// `quantity` of 0 counts as 1, like an omitted quantity.
    /// Returns the resulting line.
    pub fn add(
        &self,
        user_id: Option<UserId>,
        product_id: ProductId,
        size: &str,
        quantity: u32,
    ) -> CartLine {
        let quantity = quantity.max(1);
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = lines
            .values_mut()
            .find(|l| l.user_id == user_id && l.product_id == product_id && l.size == size)
        {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return existing.clone();
        }

        let id = CartLineId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let line = CartLine {
            id,
            user_id,
            product_id,
            size: size.to_owned(),
            quantity,
            created_at: Utc::now(),
        };
        lines.insert(id, line.clone());
        line
    }

    /// Overwrite a line's quantity.
    ///
    /// A quantity of zero or less is equivalent to removing the line, in
    /// which case `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LineNotFound` if the line id does not exist.
    pub fn set_quantity(
        &self,
        id: CartLineId,
        quantity: i64,
    ) -> Result<Option<CartLine>, StoreError> {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);

        if quantity <= 0 {
            return match lines.remove(&id) {
                Some(_) => Ok(None),
                None => Err(StoreError::LineNotFound),
            };
        }

        let line = lines.get_mut(&id).ok_or(StoreError::LineNotFound)?;
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Ok(Some(line.clone()))
    }

    /// Delete a line. Returns `false` if it did not exist.
    pub fn remove(&self, id: CartLineId) -> bool {
        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    /// Delete all lines owned by a user. Always succeeds; returns the
    /// number of removed lines (0 for an already-empty cart).
    pub fn clear(&self, user_id: UserId) -> usize {
        let mut lines = self.lines.write().unwrap_or_else(PoisonError::into_inner);
        let before = lines.len();
        lines.retain(|_, l| l.user_id != Some(user_id));
        before - lines.len()
    }

    /// All lines for a user, in creation order.
    #[must_use]
    pub fn lines_for(&self, user_id: UserId) -> Vec<CartLine> {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|l| l.user_id == Some(user_id))
            .cloned()
            .collect()
    }

}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const USER: UserId = UserId::new(1);
    const PRODUCT: ProductId = ProductId::new(1);

    #[test]
    fn test_add_creates_line_with_default_quantity() {
        let carts = CartStore::new();
        // 0 falls back to 1, like an omitted quantity
        let line = carts.add(Some(USER), PRODUCT, "M", 0);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.user_id, Some(USER));
    }

    #[test]
    fn test_add_same_product_and_size_merges() {
        let carts = CartStore::new();
        let first = carts.add(Some(USER), PRODUCT, "M", 2);
        let merged = carts.add(Some(USER), PRODUCT, "M", 3);

        assert_eq!(merged.id, first.id);
        assert_eq!(merged.quantity, 5);
        assert_eq!(carts.lines_for(USER).len(), 1);
    }

    #[test]
    fn test_add_different_size_creates_second_line() {
        let carts = CartStore::new();
        carts.add(Some(USER), PRODUCT, "M", 1);
        carts.add(Some(USER), PRODUCT, "L", 1);

        assert_eq!(carts.lines_for(USER).len(), 2);
    }

    #[test]
    fn test_add_same_product_different_users_do_not_merge() {
        let carts = CartStore::new();
        carts.add(Some(USER), PRODUCT, "M", 1);
        carts.add(Some(UserId::new(2)), PRODUCT, "M", 1);
        carts.add(None, PRODUCT, "M", 1);

        assert_eq!(carts.lines_for(USER).len(), 1);
        assert_eq!(carts.lines_for(UserId::new(2)).len(), 1);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let carts = CartStore::new();
        let line = carts.add(Some(USER), PRODUCT, "M", 2);

        let updated = carts.set_quantity(line.id, 7).unwrap().unwrap();
        assert_eq!(updated.quantity, 7);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let carts = CartStore::new();
        let line = carts.add(Some(USER), PRODUCT, "M", 2);

        assert!(carts.set_quantity(line.id, 0).unwrap().is_none());
        assert!(carts.lines_for(USER).is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes_line() {
        let carts = CartStore::new();
        let line = carts.add(Some(USER), PRODUCT, "M", 2);

        assert!(carts.set_quantity(line.id, -1).unwrap().is_none());
        assert!(carts.lines_for(USER).is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_line_is_not_found() {
        let carts = CartStore::new();
        let err = carts.set_quantity(CartLineId::new(42), 3).unwrap_err();
        assert!(matches!(err, StoreError::LineNotFound));
    }

    #[test]
    fn test_remove_reports_absence_as_false() {
        let carts = CartStore::new();
        let line = carts.add(Some(USER), PRODUCT, "M", 1);

        assert!(carts.remove(line.id));
        assert!(!carts.remove(line.id));
    }

    #[test]
    fn test_clear_removes_only_that_users_lines() {
        let carts = CartStore::new();
        carts.add(Some(USER), PRODUCT, "M", 1);
        carts.add(Some(USER), ProductId::new(2), "L", 1);
        carts.add(Some(UserId::new(2)), PRODUCT, "M", 1);

        assert_eq!(carts.clear(USER), 2);
        assert!(carts.lines_for(USER).is_empty());
        assert_eq!(carts.lines_for(UserId::new(2)).len(), 1);
    }

    #[test]
    fn test_clear_empty_cart_is_noop() {
        let carts = CartStore::new();
        assert_eq!(carts.clear(USER), 0);
    }

    #[test]
    fn test_ids_are_sequential() {
        let carts = CartStore::new();
        let a = carts.add(Some(USER), PRODUCT, "M", 1);
        let b = carts.add(Some(USER), PRODUCT, "L", 1);
        assert!(a.id < b.id);
    }
}
