use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::backend::auth::AuthUser;
use crate::backend::dto::TransactionDto;
use crate::backend::error::ApiError;
use crate::backend::AppState;
use crate::database::db::queries;

#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub category_id: Option<i64>,
}

pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TransactionDto>>, ApiError> {
    let transactions = queries::list_transactions(&state.db, user_id).await?;
    Ok(Json(
        transactions.into_iter().map(TransactionDto::from).collect(),
    ))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTransaction>,
) -> Result<(StatusCode, Json<TransactionDto>), ApiError> {
    let amount = payload.amount.ok_or(ApiError::MissingField("amount"))?;

    // A category reference must resolve within the caller's own rows; a
    // foreign or missing id is rejected before anything is written.
    if let Some(category_id) = payload.category_id {
        queries::get_category(&state.db, category_id, user_id)
            .await?
            .ok_or(ApiError::NotFound("category"))?;
    }

    let transaction = queries::create_transaction(
        &state.db,
        user_id,
        payload.description.as_deref(),
        amount,
        Utc::now().naive_utc(),
        payload.category_id,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(transaction.into())))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !queries::delete_transaction(&state.db, id, user_id).await? {
        return Err(ApiError::NotFound("transaction"));
    }
    Ok(Json(json!({ "msg": "deleted" })))
}
