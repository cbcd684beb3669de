//! Contact form route handlers.
//!
//! Submissions are validated and logged; delivery (email, ticketing) is
//! an external collaborator's responsibility, so no state is touched.

use axum::Json;
use serde::Deserialize;
use tracing::instrument;

use bravenza_core::Email;

use crate::error::{AppError, AppJson, Result};
use crate::routes::Message;

/// Contact form request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Submit the contact form.
///
/// POST /api/contact
#[instrument(skip(body), fields(email = %body.email))]
pub async fn submit(AppJson(body): AppJson<ContactBody>) -> Result<Json<Message>> {
    if body.first_name.trim().is_empty()
        || body.last_name.trim().is_empty()
        || body.message.trim().is_empty()
        || Email::parse(body.email.trim()).is_err()
    {
        return Err(AppError::BadRequest(
            "Invalid contact form data".to_owned(),
        ));
    }

    tracing::info!(
        first_name = %body.first_name.trim(),
        last_name = %body.last_name.trim(),
        subject = body.subject.as_deref().unwrap_or(""),
        "contact form submission"
    );

    Ok(Json(Message::new(
        "Thank you for your message! We'll get back to you soon.",
    )))
}
