//! Newsletter subscription route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use bravenza_core::Email;

use crate::error::{AppError, AppJson, Result};
use crate::routes::Message;
use crate::state::AppState;

/// Newsletter subscription request body.
#[derive(Debug, Deserialize)]
pub struct SubscribeBody {
    pub email: String,
}

/// Subscribe an email to the newsletter.
///
/// POST /api/newsletter
///
/// An already-subscribed email is a 400, not a success.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn subscribe(
    State(state): State<AppState>,
    AppJson(body): AppJson<SubscribeBody>,
) -> Result<Json<Message>> {
    let email = Email::parse(body.email.trim())
        .map_err(|_| AppError::BadRequest("Invalid email".to_owned()))?;

    if state.store().newsletter().subscribe(&email) {
        tracing::info!("newsletter subscription recorded");
        Ok(Json(Message::new("Successfully subscribed to newsletter")))
    } else {
        Err(AppError::BadRequest("Email already subscribed".to_owned()))
    }
}
