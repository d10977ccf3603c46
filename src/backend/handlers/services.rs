use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use super::require_text;
use crate::backend::auth::AuthUser;
use crate::backend::dto::{ServiceDto, ServiceRecordDto};
use crate::backend::error::ApiError;
use crate::backend::AppState;
use crate::database::db::queries;
use crate::database::models::Service;

#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateService {
    pub name: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateServiceRecord {
    pub amount: Option<f64>,
    pub date: Option<NaiveDateTime>,
}

pub async fn list_services(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<ServiceDto>>, ApiError> {
    let services = queries::list_services(&state.db, user_id).await?;
    Ok(Json(services.into_iter().map(ServiceDto::from).collect()))
}

pub async fn create_service(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateService>,
) -> Result<(StatusCode, Json<ServiceDto>), ApiError> {
    let name = require_text(payload.name.as_deref(), "name")?;
    let amount = payload.amount.unwrap_or(0.0);
    let service = queries::create_service(&state.db, user_id, name, amount).await?;
    Ok((StatusCode::CREATED, Json(service.into())))
}

pub async fn update_service(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateService>,
) -> Result<Json<ServiceDto>, ApiError> {
    let existing = require_service(&state, id, user_id).await?;

    let name = match payload.name.as_deref() {
        Some(name) => require_text(Some(name), "name")?.to_string(),
        None => existing.name,
    };
    let amount = payload.amount.unwrap_or(existing.amount);

    let updated = queries::update_service(&state.db, id, user_id, &name, amount)
        .await?
        .ok_or(ApiError::NotFound("service"))?;
    Ok(Json(updated.into()))
}

pub async fn delete_service(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !queries::delete_service(&state.db, id, user_id).await? {
        return Err(ApiError::NotFound("service"));
    }
    Ok(Json(json!({ "msg": "deleted" })))
}

/*==========Service records===========*/
// Records have no user_id of their own; ownership flows through the
// parent service, so every record route resolves the service first.

pub async fn list_service_records(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ServiceRecordDto>>, ApiError> {
    let service = require_service(&state, id, user_id).await?;
    let records = queries::list_service_records(&state.db, service.id).await?;
    Ok(Json(records.into_iter().map(ServiceRecordDto::from).collect()))
}

pub async fn create_service_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<CreateServiceRecord>,
) -> Result<(StatusCode, Json<ServiceRecordDto>), ApiError> {
    let service = require_service(&state, id, user_id).await?;
    let date = payload.date.unwrap_or_else(|| Utc::now().naive_utc());
    let amount = payload.amount.unwrap_or(0.0);
    let record =
        queries::create_service_record(&state.db, service.id, date, amount).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

pub async fn delete_service_record(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path((id, record_id)): Path<(i64, i64)>,
) -> Result<Json<Value>, ApiError> {
    let service = require_service(&state, id, user_id).await?;
    if !queries::delete_service_record(&state.db, record_id, service.id).await? {
        return Err(ApiError::NotFound("record"));
    }
    Ok(Json(json!({ "msg": "deleted" })))
}

async fn require_service(
    state: &AppState,
    id: i64,
    user_id: i64,
) -> Result<Service, ApiError> {
    queries::get_service(&state.db, id, user_id)
        .await?
        .ok_or(ApiError::NotFound("service"))
}
