//! Checkout: wizard state, order assembly, and order placement.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use thiserror::Error;

use bravenza_core::UserId;

use crate::models::{CartLineWithProduct, CustomerInfo, Order, OrderLine, ShippingAddress};
use crate::store::{Store, StoreError};

use super::payment::{PaymentError, PaymentGateway};
use super::pricing;

/// Human-readable prefix on every order identifier.
pub const ORDER_ID_PREFIX: &str = "BRV";

/// Default time allowed for payment authorization.
const DEFAULT_PAYMENT_TIMEOUT: Duration = Duration::from_secs(30);

/// The linear checkout wizard.
///
/// Steps run customer-info, shipping, payment-review, confirmation.
/// Navigation is forward/back only; there is no branching. Closing the
/// flow resets to the initial step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    CustomerInfo,
    Shipping,
    PaymentReview,
    Confirmation,
}

impl CheckoutStep {
    /// The next step forward. Stops at `PaymentReview`; `Confirmation` is
    /// reached only through a successful [`CheckoutService::place_order`].
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::CustomerInfo => Self::Shipping,
            Self::Shipping | Self::PaymentReview => Self::PaymentReview,
            Self::Confirmation => Self::Confirmation,
        }
    }

    /// The previous step, saturating at the start.
    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::CustomerInfo | Self::Shipping => Self::CustomerInfo,
            Self::PaymentReview => Self::Shipping,
            Self::Confirmation => Self::Confirmation,
        }
    }

    /// Return to the initial step (closing the flow).
    pub fn reset(&mut self) {
        *self = Self::CustomerInfo;
    }

    /// Whether the order has been confirmed.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Confirmation)
    }
}

/// Errors from placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// There is nothing in the cart to order.
    #[error("cart is empty")]
    EmptyCart,

    /// Listing the cart failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Payment authorization failed; the cart is left untouched.
    #[error("payment failed: {0}")]
    Payment(#[from] PaymentError),
}

/// Assembles order snapshots and runs the order placement flow.
///
/// Order identifiers come from a monotonic counter behind the
/// human-readable prefix, so they stay unique under concurrent
/// submissions within the same clock tick.
pub struct CheckoutService<P> {
    gateway: P,
    payment_timeout: Duration,
    next_order_number: AtomicU64,
}

impl<P: PaymentGateway> CheckoutService<P> {
    /// Create a checkout service over a payment gateway.
    #[must_use]
    pub fn new(gateway: P) -> Self {
        Self {
            gateway,
            payment_timeout: DEFAULT_PAYMENT_TIMEOUT,
            next_order_number: AtomicU64::new(1),
        }
    }

    /// Override the payment authorization timeout.
    #[must_use]
    pub fn with_payment_timeout(mut self, timeout: Duration) -> Self {
        self.payment_timeout = timeout;
        self
    }

    fn next_order_id(&self) -> String {
        format!(
            "{ORDER_ID_PREFIX}-{:06}",
            self.next_order_number.fetch_add(1, Ordering::Relaxed)
        )
    }

    /// Assemble the ephemeral order snapshot for the given lines.
    ///
    /// Monetary figures are rounded here, at the presentation boundary;
    /// the accumulation underneath is unrounded.
    pub fn build_order(
        &self,
        lines: &[CartLineWithProduct],
        customer: CustomerInfo,
        shipping_address: ShippingAddress,
    ) -> Order {
        let totals = pricing::totals(lines);

        let lines = lines
            .iter()
            .map(|l| OrderLine {
                product_id: l.product.id,
                name: l.product.name.clone(),
                unit_price: l.product.price,
                size: l.line.size.clone(),
                quantity: l.line.quantity,
                line_total: pricing::round_money(l.product.price.line_total(l.line.quantity)),
            })
            .collect();

        Order {
            id: self.next_order_id(),
            placed_at: chrono::Utc::now(),
            customer,
            shipping_address,
            lines,
            subtotal: pricing::round_money(totals.subtotal),
            shipping: pricing::round_money(totals.shipping),
            tax: pricing::round_money(totals.tax),
            total: pricing::round_money(totals.total),
        }
    }

    /// Place an order for a user's cart.
    ///
    /// Lists the cart, assembles the snapshot, authorizes payment (bounded
    /// by the payment timeout and raceable against `cancel`, which the
    /// caller resolves if the shopper aborts checkout), then clears the
    /// cart. The order itself is returned to the caller for display and
    /// is not stored.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty cart,
    /// `CheckoutError::Store` if the cart cannot be listed, and
    /// `CheckoutError::Payment` if authorization is declined, times out,
    /// or is cancelled - in every failure case the cart is left intact.
    pub async fn place_order(
        &self,
        store: &Store,
        user_id: UserId,
        customer: CustomerInfo,
        shipping_address: ShippingAddress,
        cancel: impl Future<Output = ()> + Send,
    ) -> Result<Order, CheckoutError> {
        let lines = store.cart_with_products(user_id)?;
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = self.build_order(&lines, customer, shipping_address);

        let receipt = tokio::select! {
            result = tokio::time::timeout(self.payment_timeout, self.gateway.authorize(order.total)) => {
                match result {
                    Ok(outcome) => outcome?,
                    Err(_) => return Err(CheckoutError::Payment(PaymentError::TimedOut)),
                }
            }
            () = cancel => return Err(CheckoutError::Payment(PaymentError::Cancelled)),
        };

        tracing::info!(
            order_id = %order.id,
            payment_reference = %receipt.reference,
            total = %order.total,
            "order placed"
        );

        store.carts().clear(user_id);
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::future::pending;

    use rust_decimal::Decimal;

    use super::*;
    use crate::services::payment::SimulatedGateway;
    use bravenza_core::ProductId;

    const USER: UserId = UserId::new(1);

    fn seeded_cart() -> Store {
        let store = Store::new();
        store.carts().add(Some(USER), ProductId::new(1), "M", 2);
        store.carts().add(Some(USER), ProductId::new(3), "L", 1);
        store
    }

    fn service() -> CheckoutService<SimulatedGateway> {
        CheckoutService::new(SimulatedGateway::with_delay(Duration::from_secs(3)))
    }

    // =========================================================================
    // Wizard
    // =========================================================================

    #[test]
    fn test_wizard_advances_linearly_and_stops_at_review() {
        let step = CheckoutStep::default();
        assert_eq!(step, CheckoutStep::CustomerInfo);

        let step = step.advance();
        assert_eq!(step, CheckoutStep::Shipping);
        let step = step.advance();
        assert_eq!(step, CheckoutStep::PaymentReview);
        // advance does not confirm
        assert_eq!(step.advance(), CheckoutStep::PaymentReview);
    }

    #[test]
    fn test_wizard_back_saturates_at_start() {
        assert_eq!(CheckoutStep::PaymentReview.back(), CheckoutStep::Shipping);
        assert_eq!(CheckoutStep::Shipping.back(), CheckoutStep::CustomerInfo);
        assert_eq!(CheckoutStep::CustomerInfo.back(), CheckoutStep::CustomerInfo);
    }

    #[test]
    fn test_wizard_reset_returns_to_initial() {
        let mut step = CheckoutStep::PaymentReview;
        step.reset();
        assert_eq!(step, CheckoutStep::CustomerInfo);
        assert!(!step.is_complete());
        assert!(CheckoutStep::Confirmation.is_complete());
    }

    // =========================================================================
    // Order assembly
    // =========================================================================

    #[test]
    fn test_build_order_snapshots_lines_and_totals() {
        let store = seeded_cart();
        let lines = store.cart_with_products(USER).unwrap();
        let order = service().build_order(
            &lines,
            CustomerInfo::default(),
            ShippingAddress::default(),
        );

        assert_eq!(order.lines.len(), 2);
        let first = order.lines.first().unwrap();
        assert_eq!(first.name, "Elegant Silk Blouse");
        assert_eq!(first.quantity, 2);
        assert_eq!(first.line_total, Decimal::new(57800, 2));

        assert_eq!(order.subtotal, Decimal::new(80300, 2));
        assert_eq!(order.shipping, Decimal::new(0, 2));
        assert_eq!(order.tax, Decimal::new(6424, 2));
        assert_eq!(order.total, Decimal::new(86724, 2));
    }

    #[test]
    fn test_order_ids_are_unique_and_prefixed() {
        let store = seeded_cart();
        let lines = store.cart_with_products(USER).unwrap();
        let service = service();

        let a = service.build_order(&lines, CustomerInfo::default(), ShippingAddress::default());
        let b = service.build_order(&lines, CustomerInfo::default(), ShippingAddress::default());

        assert_eq!(a.id, "BRV-000001");
        assert_eq!(b.id, "BRV-000002");
        assert_ne!(a.id, b.id);
    }

    // =========================================================================
    // Order placement
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_place_order_authorizes_and_clears_cart() {
        let store = seeded_cart();
        let order = service()
            .place_order(
                &store,
                USER,
                CustomerInfo::default(),
                ShippingAddress::default(),
                pending(),
            )
            .await
            .unwrap();

        assert_eq!(order.total, Decimal::new(86724, 2));
        assert!(store.cart_with_products(USER).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_place_order_empty_cart_fails() {
        let store = Store::new();
        let err = service()
            .place_order(
                &store,
                USER,
                CustomerInfo::default(),
                ShippingAddress::default(),
                pending(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CheckoutError::EmptyCart));
    }

    #[tokio::test(start_paused = true)]
    async fn test_declined_payment_leaves_cart_intact() {
        let store = seeded_cart();
        let service =
            CheckoutService::new(SimulatedGateway::declining(Duration::from_millis(10)));

        let err = service
            .place_order(
                &store,
                USER,
                CustomerInfo::default(),
                ShippingAddress::default(),
                pending(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Payment(PaymentError::Declined)
        ));
        assert_eq!(store.cart_with_products(USER).unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_gateway_times_out() {
        let store = seeded_cart();
        let service = CheckoutService::new(SimulatedGateway::with_delay(Duration::from_secs(60)))
            .with_payment_timeout(Duration::from_secs(5));

        let err = service
            .place_order(
                &store,
                USER,
                CustomerInfo::default(),
                ShippingAddress::default(),
                pending(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Payment(PaymentError::TimedOut)
        ));
        assert_eq!(store.cart_with_products(USER).unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborting_checkout_cancels_payment() {
        let store = seeded_cart();
        let err = service()
            .place_order(
                &store,
                USER,
                CustomerInfo::default(),
                ShippingAddress::default(),
                async {},
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CheckoutError::Payment(PaymentError::Cancelled)
        ));
        assert_eq!(store.cart_with_products(USER).unwrap().len(), 2);
    }
}
