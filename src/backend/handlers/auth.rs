use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::require_text;
use crate::backend::auth::{hash_password, issue_token, verify_password};
use crate::backend::error::ApiError;
use crate::backend::AppState;
use crate::database::db::queries;

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let email = require_text(payload.email.as_deref(), "email")?;
    let password = require_text(payload.password.as_deref(), "password")?;

    if queries::find_user_by_email(&state.db, email).await?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(password)?;
    let user_id =
        queries::create_user(&state.db, email, payload.name.as_deref(), &password_hash)
            .await?;
    tracing::info!(user_id, "registered user");

    Ok((StatusCode::CREATED, Json(json!({ "msg": "registered" }))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<Value>, ApiError> {
    // Unknown email, missing fields and wrong password all yield the same
    // error, so the endpoint cannot be used to enumerate accounts.
    let email = payload.email.as_deref().unwrap_or("");
    let password = payload.password.as_deref().unwrap_or("");

    let user = queries::find_user_by_email(&state.db, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;
    if !verify_password(password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = issue_token(&state.keys, user.id)?;
    Ok(Json(json!({ "access_token": token })))
}
