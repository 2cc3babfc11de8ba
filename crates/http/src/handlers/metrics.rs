use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use entityinfo_core::SystemMetrics;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::MetricsQuery;
use crate::response_types::ApiResponse;

/// `GET /v1/stats?date=YYYY-MM-DD`
pub async fn get_system_metrics(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<SystemMetrics>>, ApiError> {
    let Query(query) = query?;
    let metrics = state.metrics_service.get_system_metrics(query.date.as_deref()).await?;
    Ok(Json(ApiResponse::ok(metrics)))
}
