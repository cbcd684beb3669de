//! Auth route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppJson, Result};
use crate::models::UserResponse;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Register a new account.
///
/// POST /api/auth/register
///
/// Duplicate emails are a 400 conflict; the response never carries the
/// password in any form.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterBody>,
) -> Result<Json<UserResponse>> {
    let auth = AuthService::new(state.store().users());
    let user = auth.register(
        body.email.trim(),
        &body.password,
        body.first_name.trim(),
        body.last_name.trim(),
    )?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(user.into()))
}

/// Verify credentials.
///
/// POST /api/auth/login
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginBody>,
) -> Result<Json<UserResponse>> {
    let auth = AuthService::new(state.store().users());
    let user = auth.login(body.email.trim(), &body.password)?;

    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(user.into()))
}
