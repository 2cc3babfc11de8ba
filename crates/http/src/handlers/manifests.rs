use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use entityinfo_core::DataManifest;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ManifestQuery;
use crate::response_types::ApiResponse;

pub async fn list_manifests(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ManifestQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<DataManifest>>>, ApiError> {
    let Query(query) = query?;
    let manifests = state.manifest_service.list_by_project(&query.project_code).await?;
    Ok(Json(ApiResponse::ok(manifests)))
}

pub async fn get_manifest(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ApiResponse<DataManifest>>, ApiError> {
    let Path(id) = id?;
    let manifest = state.manifest_service.get_by_id(id).await?;
    Ok(Json(ApiResponse::ok(manifest)))
}
