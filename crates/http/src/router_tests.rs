use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use chrono::NaiveDate;
use entityinfo_core::{
    AuditLogQuery, DataAttribute, DataManifest, FileCountQuery, OperationKind, Project,
    SystemMetrics, User, Zone,
};
use entityinfo_service::{ManifestService, MetricsService, StatisticsService, UserService};
use entityinfo_storage::{ManifestStore, MetricsStore, StorageError};
use entityinfo_upstream::{AuditLog, GraphStore, ProjectDirectory, UpstreamError, UserDirectory};
use serde_json::{Map, Value, json};
use tower::ServiceExt;

use crate::{AppState, create_router};

struct Graph {
    fail_core: bool,
    counted: Mutex<usize>,
}

#[async_trait]
impl ProjectDirectory for Graph {
    async fn lookup_by_external_id(&self, id: &str) -> Result<Project, UpstreamError> {
        if id != "P1" {
            return Err(UpstreamError::NotFound { entity: "project", id: id.to_owned() });
        }
        let mut properties = Map::new();
        properties.insert("name".to_owned(), json!("Indoc Test Project"));
        Ok(Project { global_entity_id: "P1".to_owned(), code: "0407".to_owned(), properties })
    }
}

#[async_trait]
impl GraphStore for Graph {
    async fn count_files(&self, query: &FileCountQuery) -> Result<u64, UpstreamError> {
        *self.counted.lock().unwrap() += 1;
        match query.zone {
            Zone::Staging => Ok(10),
            Zone::Core if self.fail_core => Err(UpstreamError::HttpStatus {
                service: "neo4j",
                code: 500,
                body: "boom".to_owned(),
            }),
            Zone::Core => Ok(7),
        }
    }
}

#[async_trait]
impl UserDirectory for Graph {
    async fn find_user(&self, name: &str) -> Result<User, UpstreamError> {
        if name != "alice" {
            return Err(UpstreamError::NotFound { entity: "user", id: name.to_owned() });
        }
        Ok(User { id: 57, name: "alice".to_owned(), properties: Map::new() })
    }

    async fn update_user(&self, id: i64, properties: &Map<String, Value>) -> Result<Value, UpstreamError> {
        Ok(json!([{ "id": id, "name": "alice", "email": properties["email"] }]))
    }
}

struct Audit;

#[async_trait]
impl AuditLog for Audit {
    async fn count_events(&self, query: &AuditLogQuery) -> Result<u64, UpstreamError> {
        Ok(match query.operation {
            OperationKind::Upload => 3,
            OperationKind::Download => 1,
            OperationKind::Transfer => 0,
        })
    }
}

struct Store;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, d).unwrap()
}

#[async_trait]
impl MetricsStore for Store {
    async fn get_system_metrics(&self, date: Option<NaiveDate>) -> Result<Option<SystemMetrics>, StorageError> {
        let date = date.unwrap_or(day(12));
        if date != day(12) {
            return Ok(None);
        }
        Ok(Some(SystemMetrics { active_user: 20, project: 20, storage: 250, vm: 30, cores: 20, ram: 80, date }))
    }
}

#[async_trait]
impl ManifestStore for Store {
    async fn list_manifests(&self, project_code: &str) -> Result<Vec<DataManifest>, StorageError> {
        Ok(if project_code == "0407" { vec![manifest()] } else { Vec::new() })
    }

    async fn get_manifest(&self, id: i32) -> Result<Option<DataManifest>, StorageError> {
        Ok((id == 1).then(manifest))
    }
}

fn manifest() -> DataManifest {
    DataManifest {
        id: 1,
        name: "Manifest A".to_owned(),
        project_code: "0407".to_owned(),
        attributes: vec![DataAttribute {
            id: 4,
            manifest_id: 1,
            name: "grade".to_owned(),
            attribute_type: "multiple_choice".to_owned(),
            value: Some("a,b,c".to_owned()),
            project_code: "0407".to_owned(),
            optional: false,
        }],
    }
}

fn app_with(fail_core: bool) -> (Router, Arc<Graph>) {
    let graph = Arc::new(Graph { fail_core, counted: Mutex::new(0) });
    let store = Arc::new(Store);
    let state = AppState {
        app_name: "service_entityinfo".to_owned(),
        statistics_service: Arc::new(StatisticsService::new(graph.clone(), Arc::new(Audit), graph.clone())),
        metrics_service: Arc::new(MetricsService::new(store.clone())),
        manifest_service: Arc::new(ManifestService::new(store)),
        user_service: Arc::new(UserService::new(graph.clone())),
    };
    (create_router(Arc::new(state)), graph)
}

fn app() -> Router {
    app_with(false).0
}

async fn call(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    call(app, Method::GET, uri, None).await
}

const STATS_URI: &str = "/v1/project/P1/files/statistics?start_date=1618200000&end_date=1618286399";

#[tokio::test]
async fn test_statistics_success_envelope() {
    let (status, body) = get(app(), STATS_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["error_msg"], "");
    let result = &body["result"];
    assert_eq!(result["uploaded"], 3);
    assert_eq!(result["downloaded"], 1);
    assert_eq!(result["approved"], 0);
    assert_eq!(result["greenroom"], 10);
    assert_eq!(result["core"], 7);
    assert_eq!(result["project_info"]["code"], "0407");
    assert_eq!(result["project_info"]["name"], "Indoc Test Project");
}

#[tokio::test]
async fn test_statistics_unknown_project_is_404_without_counts() {
    let (app, graph) = app_with(false);
    let (status, body) =
        get(app, "/v1/project/nope/files/statistics?start_date=1&end_date=2").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert!(body["result"].is_null());
    assert!(body["error_msg"].as_str().unwrap().contains("nope"));
    assert_eq!(*graph.counted.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_statistics_upstream_failure_is_502() {
    let (app, _) = app_with(true);
    let (status, body) = get(app, STATS_URI).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn test_statistics_missing_or_bad_dates_are_400() {
    let (status, body) = get(app(), "/v1/project/P1/files/statistics?start_date=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, _) =
        get(app(), "/v1/project/P1/files/statistics?start_date=yesterday&end_date=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_metrics_routes() {
    let (status, body) = get(app(), "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["date"], "2022-01-12");
    assert_eq!(body["result"]["storage"], 250);

    let (status, _) = get(app(), "/v1/stats?date=2022-01-12").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(app(), "/v1/stats?date=2021-01-01").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["result"].is_null());

    let (status, _) = get(app(), "/v1/stats?date=Jan-12").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_manifest_routes() {
    let (status, body) = get(app(), "/v1/manifests?project_code=0407").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][0]["attributes"][0]["type"], "multiple_choice");

    let (status, _) = get(app(), "/v1/manifests").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(app(), "/v1/manifest/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["name"], "Manifest A");

    let (status, _) = get(app(), "/v1/manifest/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app(), "/v1/manifest/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_routes() {
    let (status, body) = get(app(), "/v1/users/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["id"], 57);

    let (status, _) = get(app(), "/v1/users/bob").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) =
        call(app(), Method::PUT, "/v1/users/alice", Some(json!({"email": "a@example.org"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"][0]["email"], "a@example.org");

    let (status, _) = call(app(), Method::PUT, "/v1/users/alice", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call(app(), Method::PUT, "/v1/users/alice", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_and_version() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = get(app(), "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "service_entityinfo");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
