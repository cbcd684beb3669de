//! Newsletter subscription storage.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use bravenza_core::Email;

/// Subscribed email addresses, unique by exact match.
pub struct NewsletterStore {
    emails: RwLock<HashSet<String>>,
}

impl NewsletterStore {
    /// Create an empty subscription store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            emails: RwLock::new(HashSet::new()),
        }
    }

    /// Record a subscription. Returns `false` if the email is already
    /// subscribed, `true` if it was newly recorded.
    pub fn subscribe(&self, email: &Email) -> bool {
        self.emails
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(email.as_str().to_owned())
    }

    /// Whether an email is currently subscribed.
    #[must_use]
    pub fn is_subscribed(&self, email: &Email) -> bool {
        self.emails
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(email.as_str())
    }
}

impl Default for NewsletterStore {
    fn default() -> Self {
        Self::new()
    }
}
