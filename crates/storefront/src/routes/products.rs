//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use bravenza_core::{Category, ProductId};

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Catalog listing query parameters.
///
/// Filters are mutually exclusive with a fixed precedence: bestsellers,
/// then search, then category. Empty strings count as absent.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub bestsellers: Option<String>,
}

/// List products, optionally filtered.
///
/// GET /api/products?search=&category=&bestsellers=
///
/// An unknown category matches nothing and yields an empty list.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.store().catalog();

    if query.bestsellers.as_deref() == Some("true") {
        return Json(catalog.bestsellers());
    }

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        return Json(catalog.search(search));
    }

    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        let products = category
            .parse::<Category>()
            .map_or_else(|_| Vec::new(), |c| catalog.by_category(c));
        return Json(products);
    }

    Json(catalog.all())
}

/// Fetch a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>> {
    state
        .store()
        .catalog()
        .get(ProductId::new(id))
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product not found".to_owned()))
}
