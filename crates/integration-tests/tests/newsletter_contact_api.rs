//! Integration tests for newsletter subscriptions and the contact form.

use axum::http::StatusCode;
use bravenza_integration_tests::TestApp;
use serde_json::json;

// =============================================================================
// Newsletter
// =============================================================================

#[tokio::test]
async fn test_subscribe_then_duplicate() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/newsletter", json!({"email": "fan@example.com"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully subscribed to newsletter");

    let (status, body) = app
        .post("/api/newsletter", json!({"email": "fan@example.com"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already subscribed");
}

#[tokio::test]
async fn test_subscribe_invalid_email_is_400() {
    let app = TestApp::new();
    let (status, body) = app
        .post("/api/newsletter", json!({"email": "not-an-email"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email");
}

#[tokio::test]
async fn test_subscribe_different_emails_both_succeed() {
    let app = TestApp::new();

    let (status, _) = app
        .post("/api/newsletter", json!({"email": "a@example.com"}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .post("/api/newsletter", json!({"email": "b@example.com"}))
        .await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Contact form
// =============================================================================

fn contact_body() -> serde_json::Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "subject": "Sizing question",
        "message": "Does the blazer run small?"
    })
}

#[tokio::test]
async fn test_contact_submission_succeeds() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/contact", contact_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Thank you for your message! We'll get back to you soon."
    );
}

#[tokio::test]
async fn test_contact_subject_is_optional() {
    let app = TestApp::new();
    let mut body = contact_body();
    body.as_object_mut().expect("object").remove("subject");

    let (status, _) = app.post("/api/contact", body).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_contact_empty_message_is_400() {
    let app = TestApp::new();
    let mut body = contact_body();
    body["message"] = json!("   ");

    let (status, response) = app.post("/api/contact", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "Invalid contact form data");
}

#[tokio::test]
async fn test_contact_invalid_email_is_400() {
    let app = TestApp::new();
    let mut body = contact_body();
    body["email"] = json!("nope");

    let (status, _) = app.post("/api/contact", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_missing_fields_is_400() {
    let app = TestApp::new();
    let (status, _) = app
        .post("/api/contact", json!({"firstName": "Ada"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
