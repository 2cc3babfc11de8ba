use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use entityinfo_core::User;
use serde_json::{Map, Value};

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::ApiResponse;

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    username: Result<Path<String>, PathRejection>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let Path(username) = username?;
    let user = state.user_service.get_user(&username).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// Body is a flat JSON object of properties to set on the user node.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    username: Result<Path<String>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let Path(username) = username?;
    let Json(properties) = body?;
    let updated = state.user_service.update_user(&username, &properties).await?;
    Ok(Json(ApiResponse::ok(updated)))
}
