//! In-memory collaborator doubles that record every query they receive.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use entityinfo_core::{
    AuditLogQuery, DataManifest, FileCountQuery, OperationKind, Project, SystemMetrics, User, Zone,
};
use entityinfo_storage::{ManifestStore, MetricsStore, StorageError};
use entityinfo_upstream::{AuditLog, GraphStore, ProjectDirectory, UpstreamError, UserDirectory};
use serde_json::{Map, Value, json};

pub(crate) fn project(geid: &str, code: &str) -> Project {
    let mut properties = Map::new();
    properties.insert("name".to_owned(), json!(format!("Project {code}")));
    Project { global_entity_id: geid.to_owned(), code: code.to_owned(), properties }
}

fn unavailable(service: &'static str) -> UpstreamError {
    UpstreamError::HttpStatus { service, code: 503, body: "unavailable".to_owned() }
}

pub(crate) struct FakeProjects {
    projects: Vec<Project>,
    calls: Mutex<Vec<String>>,
}

impl FakeProjects {
    pub(crate) fn with(projects: Vec<Project>) -> Self {
        Self { projects, calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectDirectory for FakeProjects {
    async fn lookup_by_external_id(&self, global_entity_id: &str) -> Result<Project, UpstreamError> {
        self.calls.lock().unwrap().push(global_entity_id.to_owned());
        self.projects
            .iter()
            .find(|p| p.global_entity_id == global_entity_id)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound {
                entity: "project",
                id: global_entity_id.to_owned(),
            })
    }
}

/// Operations without a configured count fail with a 503.
pub(crate) struct FakeAuditLog {
    counts: HashMap<OperationKind, u64>,
    calls: Mutex<Vec<AuditLogQuery>>,
}

impl FakeAuditLog {
    pub(crate) fn with_counts<const N: usize>(counts: [(OperationKind, u64); N]) -> Self {
        Self { counts: counts.into_iter().collect(), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<AuditLogQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLog for FakeAuditLog {
    async fn count_events(&self, query: &AuditLogQuery) -> Result<u64, UpstreamError> {
        self.calls.lock().unwrap().push(query.clone());
        self.counts.get(&query.operation).copied().ok_or_else(|| unavailable("provenance"))
    }
}

/// Zones without a configured count fail with a 503.
pub(crate) struct FakeGraph {
    counts: HashMap<Zone, u64>,
    calls: Mutex<Vec<FileCountQuery>>,
}

impl FakeGraph {
    pub(crate) fn with_counts<const N: usize>(counts: [(Zone, u64); N]) -> Self {
        Self { counts: counts.into_iter().collect(), calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn calls(&self) -> Vec<FileCountQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphStore for FakeGraph {
    async fn count_files(&self, query: &FileCountQuery) -> Result<u64, UpstreamError> {
        self.calls.lock().unwrap().push(query.clone());
        self.counts.get(&query.zone).copied().ok_or_else(|| unavailable("neo4j"))
    }
}

#[derive(Default)]
pub(crate) struct FakeUsers {
    pub(crate) users: Vec<User>,
    pub(crate) updates: Mutex<Vec<(i64, Map<String, Value>)>>,
}

#[async_trait]
impl UserDirectory for FakeUsers {
    async fn find_user(&self, name: &str) -> Result<User, UpstreamError> {
        self.users
            .iter()
            .find(|u| u.name == name)
            .cloned()
            .ok_or_else(|| UpstreamError::NotFound { entity: "user", id: name.to_owned() })
    }

    async fn update_user(
        &self,
        id: i64,
        properties: &Map<String, Value>,
    ) -> Result<Value, UpstreamError> {
        self.updates.lock().unwrap().push((id, properties.clone()));
        Ok(json!([{ "id": id, "properties": properties }]))
    }
}

#[derive(Default)]
pub(crate) struct FakeStore {
    pub(crate) metrics: Vec<SystemMetrics>,
    pub(crate) manifests: Vec<DataManifest>,
}

#[async_trait]
impl MetricsStore for FakeStore {
    async fn get_system_metrics(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Option<SystemMetrics>, StorageError> {
        let matching = self.metrics.iter().filter(|m| date.is_none_or(|d| m.date == d));
        Ok(matching.max_by_key(|m| m.date).cloned())
    }
}

#[async_trait]
impl ManifestStore for FakeStore {
    async fn list_manifests(&self, project_code: &str) -> Result<Vec<DataManifest>, StorageError> {
        Ok(self.manifests.iter().filter(|m| m.project_code == project_code).cloned().collect())
    }

    async fn get_manifest(&self, id: i32) -> Result<Option<DataManifest>, StorageError> {
        Ok(self.manifests.iter().find(|m| m.id == id).cloned())
    }
}
