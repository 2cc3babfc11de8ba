//! HTTP API server for entityinfo.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

#[cfg(test)]
mod router_tests;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use entityinfo_service::{ManifestService, MetricsService, StatisticsService, UserService};

pub use api_error::ApiError;
pub use response_types::{ApiResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
///
/// Built once at startup and wrapped in `Arc`; holds no mutable state.
pub struct AppState {
    /// Reported by `/version`.
    pub app_name: String,
    /// Project file statistics across the audit log and graph store
    pub statistics_service: Arc<StatisticsService>,
    /// Daily platform metrics
    pub metrics_service: Arc<MetricsService>,
    /// Data manifests and attributes
    pub manifest_service: Arc<ManifestService>,
    /// Graph-backed user lookup and update
    pub user_service: Arc<UserService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/project/{project_geid}/files/statistics",
            get(handlers::statistics::get_file_statistics),
        )
        .route("/stats", get(handlers::metrics::get_system_metrics))
        .route("/manifests", get(handlers::manifests::list_manifests))
        .route("/manifest/{id}", get(handlers::manifests::get_manifest))
        .route(
            "/users/{username}",
            get(handlers::users::get_user).put(handlers::users::update_user),
        );

    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .nest("/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<VersionResponse> {
    Json(VersionResponse { name: state.app_name.clone(), version: env!("CARGO_PKG_VERSION") })
}
