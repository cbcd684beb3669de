//! Cart route handlers.
//!
//! Carts are keyed by an explicit user id in the path or body; there is
//! no session. Anonymous lines (no `userId`) are accepted on add but only
//! reachable through their line id.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use tracing::instrument;

use bravenza_core::{CartLineId, ProductId, UserId};

use crate::error::{AppError, AppJson, Result};
use crate::models::{CartLine, CartLineWithProduct};
use crate::routes::Message;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartBody {
    #[serde(default)]
    pub user_id: Option<i32>,
    pub product_id: i32,
    pub size: String,
    /// Defaults to 1 when omitted (or 0).
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Quantity-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityBody {
    pub quantity: i64,
}

/// List a user's cart lines joined with their product snapshots.
///
/// GET /api/cart/{userId}
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<CartLineWithProduct>>> {
    let lines = state.store().cart_with_products(UserId::new(user_id))?;
    Ok(Json(lines))
}

/// Add a product/size to a cart, merging into an existing line.
///
/// POST /api/cart
#[instrument(skip(state, body), fields(product_id = body.product_id, size = %body.size))]
pub async fn add(
    State(state): State<AppState>,
    AppJson(body): AppJson<AddToCartBody>,
) -> Result<Json<CartLine>> {
    let quantity = body.quantity.unwrap_or(1);
    if quantity < 0 {
        return Err(AppError::BadRequest("Invalid cart item data".to_owned()));
    }

    let line = state.store().carts().add(
        body.user_id.map(UserId::new),
        ProductId::new(body.product_id),
        &body.size,
        u32::try_from(quantity).unwrap_or(u32::MAX),
    );

    Ok(Json(line))
}

/// Overwrite a line's quantity.
///
/// PUT /api/cart/{id}
///
/// Quantities below 1 are rejected at this boundary; removal goes through
/// DELETE.
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(body): AppJson<UpdateQuantityBody>,
) -> Result<Json<CartLine>> {
    if body.quantity < 1 {
        return Err(AppError::BadRequest("Invalid quantity".to_owned()));
    }

    let updated = state
        .store()
        .carts()
        .set_quantity(CartLineId::new(id), body.quantity)
        .map_err(|_| AppError::NotFound("Cart item not found".to_owned()))?;

    updated.map_or_else(
        || Err(AppError::BadRequest("Invalid quantity".to_owned())),
        |line| Ok(Json(line)),
    )
}

/// Remove a line.
///
/// DELETE /api/cart/{id}
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Message>> {
    if state.store().carts().remove(CartLineId::new(id)) {
        Ok(Json(Message::new("Item removed from cart")))
    } else {
        Err(AppError::NotFound("Cart item not found".to_owned()))
    }
}

/// Clear a user's cart. A no-op for an already-empty cart.
///
/// DELETE /api/cart/user/{userId}
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Json<Message> {
    let removed = state.store().carts().clear(UserId::new(user_id));
    tracing::debug!(removed, "cart cleared");
    Json(Message::new("Cart cleared"))
}
