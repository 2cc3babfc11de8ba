//! Storage trait abstraction
//!
//! Async read traits over the relational tables, implemented by
//! [`crate::PgStorage`] and by in-memory doubles in tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use entityinfo_core::{DataManifest, SystemMetrics};

use crate::error::StorageError;

/// Daily platform metrics.
#[async_trait]
pub trait MetricsStore: Send + Sync {
    /// Most recent snapshot, or the snapshot recorded on `date`.
    ///
    /// `Ok(None)` when no row matches.
    async fn get_system_metrics(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Option<SystemMetrics>, StorageError>;
}

/// Data manifests and their attributes.
#[async_trait]
pub trait ManifestStore: Send + Sync {
    /// All manifests of a project, attributes ordered by id.
    async fn list_manifests(&self, project_code: &str) -> Result<Vec<DataManifest>, StorageError>;

    /// One manifest with its attributes.
    async fn get_manifest(&self, id: i32) -> Result<Option<DataManifest>, StorageError>;
}
