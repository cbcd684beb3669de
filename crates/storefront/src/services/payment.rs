//! Payment provider collaborator boundary.
//!
//! The core's job is only to compute totals and assemble the order
//! snapshot; charging the card belongs to an external provider behind
//! this interface. The simulated gateway stands in with an artificial
//! processing delay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

/// Payment outcomes that fail an order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    /// The provider rejected the charge.
    #[error("payment was declined")]
    Declined,
    /// The provider did not answer within the allowed time.
    #[error("payment provider timed out")]
    TimedOut,
    /// The shopper aborted checkout while authorization was in flight.
    #[error("payment was cancelled")]
    Cancelled,
}

/// Proof of a successful authorization.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    /// Provider-side reference for the charge.
    pub reference: String,
}

/// An external payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Authorize a charge for `amount`.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] describing why the charge did not go
    /// through.
    async fn authorize(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError>;
}

/// In-process gateway standing in for a real provider.
///
/// Sleeps for a configurable delay before answering, and can be set to
/// decline every charge for failure-path tests.
pub struct SimulatedGateway {
    delay: Duration,
    decline: bool,
    next_reference: AtomicU64,
}

impl SimulatedGateway {
    /// Default gateway: a 3 second processing delay, always approves.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(3))
    }

    /// Approving gateway with a custom processing delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            decline: false,
            next_reference: AtomicU64::new(1),
        }
    }

    /// Gateway that declines every charge after its delay.
    #[must_use]
    pub fn declining(delay: Duration) -> Self {
        Self {
            delay,
            decline: true,
            next_reference: AtomicU64::new(1),
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, amount: Decimal) -> Result<PaymentReceipt, PaymentError> {
        tokio::time::sleep(self.delay).await;

        if self.decline {
            return Err(PaymentError::Declined);
        }

        let reference = format!(
            "PAY-{:06}",
            self.next_reference.fetch_add(1, Ordering::Relaxed)
        );
        tracing::debug!(%amount, reference, "simulated payment authorized");
        Ok(PaymentReceipt { reference })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_authorize_issues_sequential_references() {
        let gateway = SimulatedGateway::with_delay(Duration::from_secs(3));

        let first = gateway.authorize(Decimal::new(100, 0)).await.unwrap();
        let second = gateway.authorize(Decimal::new(100, 0)).await.unwrap();

        assert_eq!(first.reference, "PAY-000001");
        assert_eq!(second.reference, "PAY-000002");
    }

    #[tokio::test(start_paused = true)]
    async fn test_declining_gateway_declines() {
        let gateway = SimulatedGateway::declining(Duration::from_millis(10));
        let err = gateway.authorize(Decimal::new(100, 0)).await.unwrap_err();
        assert_eq!(err, PaymentError::Declined);
    }
}
