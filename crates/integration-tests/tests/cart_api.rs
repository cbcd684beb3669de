//! Integration tests for the cart endpoints.

use axum::http::StatusCode;
use bravenza_integration_tests::TestApp;
use serde_json::{Value, json};

// =============================================================================
// Adding lines
// =============================================================================

#[tokio::test]
async fn test_add_creates_a_line() {
    let app = TestApp::new();
    let (status, line) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M", "quantity": 2}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["userId"], 1);
    assert_eq!(line["productId"], 1);
    assert_eq!(line["size"], "M");
    assert_eq!(line["quantity"], 2);
}

#[tokio::test]
async fn test_add_without_quantity_defaults_to_one() {
    let app = TestApp::new();
    let (status, line) = app
        .post("/api/cart", json!({"userId": 1, "productId": 1, "size": "M"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["quantity"], 1);
}

#[tokio::test]
async fn test_add_same_product_and_size_merges_quantities() {
    let app = TestApp::new();
    let (_, first) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M", "quantity": 2}),
        )
        .await;
    let (_, merged) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M", "quantity": 3}),
        )
        .await;

    assert_eq!(merged["id"], first["id"]);
    assert_eq!(merged["quantity"], 5);

    // One line, never two
    let (_, cart) = app.get("/api/cart/1").await;
    assert_eq!(cart.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_add_different_size_creates_second_line() {
    let app = TestApp::new();
    app.post(
        "/api/cart",
        json!({"userId": 1, "productId": 1, "size": "M"}),
    )
    .await;
    app.post(
        "/api/cart",
        json!({"userId": 1, "productId": 1, "size": "L"}),
    )
    .await;

    let (_, cart) = app.get("/api/cart/1").await;
    assert_eq!(cart.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_add_anonymous_line_is_accepted() {
    let app = TestApp::new();
    let (status, line) = app
        .post("/api/cart", json!({"productId": 1, "size": "M"}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["userId"], Value::Null);

    // Anonymous lines do not show up in any user's cart
    let (_, cart) = app.get("/api/cart/1").await;
    assert_eq!(cart.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn test_add_negative_quantity_is_rejected() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M", "quantity": -2}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid cart item data");
}

#[tokio::test]
async fn test_add_missing_fields_is_rejected() {
    let app = TestApp::new();
    let (status, _) = app.post("/api/cart", json!({"userId": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_joins_product_snapshots() {
    let app = TestApp::new();
    app.post(
        "/api/cart",
        json!({"userId": 1, "productId": 1, "size": "M", "quantity": 2}),
    )
    .await;

    let (status, cart) = app.get("/api/cart/1").await;
    assert_eq!(status, StatusCode::OK);

    let line = cart.as_array().expect("array").first().expect("one line").clone();
    assert_eq!(line["quantity"], 2);
    assert_eq!(line["product"]["name"], "Elegant Silk Blouse");
    assert_eq!(line["product"]["price"], "289.00");
}

#[tokio::test]
async fn test_list_empty_cart_is_empty_array() {
    let app = TestApp::new();
    let (status, cart) = app.get("/api/cart/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart, Value::Array(Vec::new()));
}

// =============================================================================
// Updating quantities
// =============================================================================

#[tokio::test]
async fn test_update_quantity() {
    let app = TestApp::new();
    let (_, line) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M", "quantity": 2}),
        )
        .await;

    let uri = format!("/api/cart/{}", line["id"]);
    let (status, updated) = app.put(&uri, json!({"quantity": 7})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["quantity"], 7);
}

#[tokio::test]
async fn test_update_quantity_below_one_is_rejected() {
    let app = TestApp::new();
    let (_, line) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M"}),
        )
        .await;

    let uri = format!("/api/cart/{}", line["id"]);
    let (status, body) = app.put(&uri, json!({"quantity": 0})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid quantity");

    // The line is still there
    let (_, cart) = app.get("/api/cart/1").await;
    assert_eq!(cart.as_array().expect("array").len(), 1);
}

#[tokio::test]
async fn test_update_unknown_line_is_404() {
    let app = TestApp::new();
    let (status, body) = app.put("/api/cart/999", json!({"quantity": 3})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cart item not found");
}

// =============================================================================
// Removing and clearing
// =============================================================================

#[tokio::test]
async fn test_remove_line_then_remove_again_is_404() {
    let app = TestApp::new();
    let (_, line) = app
        .post(
            "/api/cart",
            json!({"userId": 1, "productId": 1, "size": "M"}),
        )
        .await;

    let uri = format!("/api/cart/{}", line["id"]);
    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item removed from cart");

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Cart item not found");
}

#[tokio::test]
async fn test_clear_cart() {
    let app = TestApp::new();
    app.post(
        "/api/cart",
        json!({"userId": 1, "productId": 1, "size": "M"}),
    )
    .await;
    app.post(
        "/api/cart",
        json!({"userId": 1, "productId": 3, "size": "L"}),
    )
    .await;

    let (status, body) = app.delete("/api/cart/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart cleared");

    let (_, cart) = app.get("/api/cart/1").await;
    assert_eq!(cart, Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_clear_empty_cart_is_a_successful_noop() {
    let app = TestApp::new();
    let (status, body) = app.delete("/api/cart/user/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart cleared");
}
