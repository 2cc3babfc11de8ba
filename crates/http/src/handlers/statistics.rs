use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use entityinfo_core::StatisticsResult;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::StatisticsQuery;
use crate::response_types::ApiResponse;

/// `GET /v1/project/{project_geid}/files/statistics`
pub async fn get_file_statistics(
    State(state): State<Arc<AppState>>,
    project_geid: Result<Path<String>, PathRejection>,
    query: Result<Query<StatisticsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<StatisticsResult>>, ApiError> {
    let Path(project_geid) = project_geid?;
    let Query(query) = query?;
    let result = state
        .statistics_service
        .get_statistics(&project_geid, query.window(), query.operator())
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}
