use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::require_text;
use crate::backend::auth::AuthUser;
use crate::backend::dto::CategoryDto;
use crate::backend::error::ApiError;
use crate::backend::AppState;
use crate::database::db::queries;

#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    // Double Option so an absent key keeps the stored color while an
    // explicit null clears it.
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub color: Option<Option<String>>,
}

// Maps a present key (including JSON null) to Some(..) so it can be
// told apart from an absent key, which stays None via serde(default).
fn deserialize_explicit_null<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub async fn list_categories(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let categories = queries::list_categories(&state.db, user_id).await?;
    Ok(Json(categories.into_iter().map(CategoryDto::from).collect()))
}

pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateCategory>,
) -> Result<(StatusCode, Json<CategoryDto>), ApiError> {
    let name = require_text(payload.name.as_deref(), "name")?;
    let category =
        queries::create_category(&state.db, user_id, name, payload.color.as_deref())
            .await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn update_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCategory>,
) -> Result<Json<CategoryDto>, ApiError> {
    let existing = queries::get_category(&state.db, id, user_id)
        .await?
        .ok_or(ApiError::NotFound("category"))?;

    // Patch semantics: absent fields keep their current value.
    let name = match payload.name.as_deref() {
        Some(name) => require_text(Some(name), "name")?.to_string(),
        None => existing.name,
    };
    let color = match payload.color {
        Some(color) => color,
        None => existing.color,
    };

    let updated = queries::update_category(&state.db, id, user_id, &name, color.as_deref())
        .await?
        .ok_or(ApiError::NotFound("category"))?;
    Ok(Json(updated.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    if !queries::delete_category(&state.db, id, user_id).await? {
        return Err(ApiError::NotFound("category"));
    }
    Ok(Json(json!({ "msg": "deleted" })))
}
