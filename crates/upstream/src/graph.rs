//! Client for the graph-database (neo4j) service.

use async_trait::async_trait;
use entityinfo_core::{FileCountQuery, Project, User};
use serde_json::{Map, Value};

use crate::client::UpstreamClient;
use crate::error::UpstreamError;
use crate::traits::{GraphStore, ProjectDirectory, UserDirectory};
use crate::wire::{ProjectLookup, QuickCount, UserLookup, file_count_params};

const SERVICE: &str = "graph service";

/// Typed access to `{NEO4J_SERVICE}/v1/neo4j/`.
#[derive(Clone, Debug)]
pub struct GraphServiceClient {
    http: UpstreamClient,
    base_url: String,
}

impl GraphServiceClient {
    /// `service_root` is the bare service URL; the `/v1/neo4j` prefix is added here.
    #[must_use]
    pub fn new(http: UpstreamClient, service_root: &str) -> Self {
        let base_url = format!("{}/v1/neo4j", service_root.trim_end_matches('/'));
        Self { http, base_url }
    }

    async fn query_nodes<B, T>(&self, label: &str, body: &B) -> Result<Vec<T>, UpstreamError>
    where
        B: serde::Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let request = self
            .http
            .http_client()
            .post(format!("{}/nodes/{label}/query", self.base_url))
            .json(body);
        self.http.send_json(SERVICE, "node query", request).await
    }
}

#[async_trait]
impl ProjectDirectory for GraphServiceClient {
    async fn lookup_by_external_id(
        &self,
        global_entity_id: &str,
    ) -> Result<Project, UpstreamError> {
        let nodes: Vec<Project> =
            self.query_nodes("Container", &ProjectLookup { global_entity_id }).await?;
        if nodes.len() > 1 {
            tracing::warn!(global_entity_id, matches = nodes.len(), "project id is ambiguous, using first");
        }
        nodes.into_iter().next().ok_or_else(|| UpstreamError::NotFound {
            entity: "project",
            id: global_entity_id.to_owned(),
        })
    }
}

#[async_trait]
impl GraphStore for GraphServiceClient {
    async fn count_files(&self, query: &FileCountQuery) -> Result<u64, UpstreamError> {
        let request = self
            .http
            .http_client()
            .get(format!("{}/file/quick/count", self.base_url))
            .query(&file_count_params(query));
        let count: QuickCount = self.http.send_json(SERVICE, "quick count", request).await?;
        tracing::debug!(project_code = %query.project_code, zone = %query.zone, count = count.result, "file count");
        Ok(count.result)
    }
}

#[async_trait]
impl UserDirectory for GraphServiceClient {
    async fn find_user(&self, name: &str) -> Result<User, UpstreamError> {
        let not_found = || UpstreamError::NotFound { entity: "user", id: name.to_owned() };
        let users: Vec<User> = match self.query_nodes("User", &UserLookup { name }).await {
            Ok(users) => users,
            Err(UpstreamError::HttpStatus { code: 404, .. }) => return Err(not_found()),
            Err(e) => return Err(e),
        };
        users.into_iter().next().ok_or_else(not_found)
    }

    async fn update_user(
        &self,
        id: i64,
        properties: &Map<String, Value>,
    ) -> Result<Value, UpstreamError> {
        let request = self
            .http
            .http_client()
            .put(format!("{}/nodes/User/node/{id}", self.base_url))
            .json(properties);
        self.http.send_json(SERVICE, "node update", request).await
    }
}
