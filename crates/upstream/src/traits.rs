//! Collaborator seams.
//!
//! The service layer depends on these traits only, so aggregation logic can be
//! exercised against in-memory doubles.

use async_trait::async_trait;
use entityinfo_core::{AuditLogQuery, FileCountQuery, Project, User};
use serde_json::{Map, Value};

use crate::error::UpstreamError;

/// Resolves projects by their opaque external identifier.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Exactly one project, or [`UpstreamError::NotFound`].
    async fn lookup_by_external_id(&self, global_entity_id: &str)
    -> Result<Project, UpstreamError>;
}

/// Counts audited events.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn count_events(&self, query: &AuditLogQuery) -> Result<u64, UpstreamError>;
}

/// Counts file nodes in the graph.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn count_files(&self, query: &FileCountQuery) -> Result<u64, UpstreamError>;
}

/// Reads and updates `User` nodes.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// First user named `name`, or [`UpstreamError::NotFound`].
    async fn find_user(&self, name: &str) -> Result<User, UpstreamError>;

    /// Replaces the given properties on node `id`, returning the graph
    /// service's response body unchanged.
    async fn update_user(
        &self,
        id: i64,
        properties: &Map<String, Value>,
    ) -> Result<Value, UpstreamError>;
}
