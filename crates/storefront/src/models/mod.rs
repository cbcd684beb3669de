//! Domain and wire types for the storefront.
//!
//! Wire shapes use camelCase JSON keys to match the single-page client.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartLine, CartLineWithProduct};
pub use order::{CustomerInfo, Order, OrderLine, ShippingAddress};
pub use product::Product;
pub use user::{User, UserResponse};
