//! Pure monetary calculations over cart lines.
//!
//! All arithmetic is decimal-valued; accumulation is never rounded.
//! Rounding to two decimal places (half-up) happens only when a figure is
//! put in front of the user - see [`round_money`] and the order snapshot
//! assembly in [`super::checkout`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::CartLineWithProduct;

/// Order over this subtotal ships free; at or below it, flat-rate.
fn free_shipping_threshold() -> Decimal {
    Decimal::new(200, 0)
}

/// Flat shipping rate below the free-shipping threshold.
fn flat_shipping_rate() -> Decimal {
    Decimal::new(15, 0)
}

/// Flat tax rate, no jurisdiction logic.
fn tax_rate() -> Decimal {
    // 8%
    Decimal::new(8, 2)
}

/// The four monetary figures of an order, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

/// Sum of unit price x quantity over all lines.
#[must_use]
pub fn subtotal(lines: &[CartLineWithProduct]) -> Decimal {
    lines
        .iter()
        .map(|l| l.product.price.line_total(l.line.quantity))
        .sum()
}

/// Free shipping strictly above 200.00, else a flat 15.00.
#[must_use]
pub fn shipping(subtotal: Decimal) -> Decimal {
    if subtotal > free_shipping_threshold() {
        Decimal::ZERO
    } else {
        flat_shipping_rate()
    }
}

/// Subtotal x 8%.
#[must_use]
pub fn tax(subtotal: Decimal) -> Decimal {
    subtotal * tax_rate()
}

/// Sum of the three components.
#[must_use]
pub fn total(subtotal: Decimal, shipping: Decimal, tax: Decimal) -> Decimal {
    subtotal + shipping + tax
}

/// All four figures for a set of lines.
#[must_use]
pub fn totals(lines: &[CartLineWithProduct]) -> OrderTotals {
    let subtotal = self::subtotal(lines);
    let shipping = self::shipping(subtotal);
    let tax = self::tax(subtotal);
    let total = self::total(subtotal, shipping, tax);
    OrderTotals {
        subtotal,
        shipping,
        tax,
        total,
    }
}

/// Presentation-time rounding: two decimal places, half-up.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
