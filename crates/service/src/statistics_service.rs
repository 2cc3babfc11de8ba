use std::sync::Arc;

use entityinfo_core::{
    AuditLogQuery, FileCountQuery, OperationKind, StatisticsResult, TimeWindow, Zone,
};
use entityinfo_upstream::{AuditLog, GraphStore, ProjectDirectory};
use futures_util::future::try_join_all;

use crate::ServiceError;

/// Builds per-project file statistics from the project directory, the audit
/// log and the graph store.
///
/// Fail-fast: if any of the five counts fails, the whole request fails and the
/// remaining in-flight counts are dropped.
pub struct StatisticsService {
    projects: Arc<dyn ProjectDirectory>,
    audit_log: Arc<dyn AuditLog>,
    graph: Arc<dyn GraphStore>,
}

impl StatisticsService {
    #[must_use]
    pub fn new(
        projects: Arc<dyn ProjectDirectory>,
        audit_log: Arc<dyn AuditLog>,
        graph: Arc<dyn GraphStore>,
    ) -> Self {
        Self { projects, audit_log, graph }
    }

    #[tracing::instrument(skip(self), fields(project_code = tracing::field::Empty))]
    pub async fn get_statistics(
        &self,
        project_geid: &str,
        window: TimeWindow,
        operator: Option<&str>,
    ) -> Result<StatisticsResult, ServiceError> {
        let project = self.projects.lookup_by_external_id(project_geid).await?;
        tracing::Span::current().record("project_code", project.code.as_str());
        let code = project.code.as_str();

        let operation_counts = try_join_all(OperationKind::ALL.map(|operation| {
            let query = AuditLogQuery::files(code, operation, window, operator);
            async move { self.audit_log.count_events(&query).await }
        }));
        let zone_counts = try_join_all(Zone::ALL.map(|zone| {
            let query = FileCountQuery::live(code, zone, operator);
            async move { self.graph.count_files(&query).await }
        }));
        let (operation_counts, zone_counts) = tokio::try_join!(operation_counts, zone_counts)?;

        let mut result = StatisticsResult::for_project(project);
        for (operation, count) in OperationKind::ALL.into_iter().zip(operation_counts) {
            result.record_operation(operation, count);
        }
        for (zone, count) in Zone::ALL.into_iter().zip(zone_counts) {
            result.record_zone(zone, count);
        }

        tracing::info!(
            uploaded = result.uploaded,
            downloaded = result.downloaded,
            approved = result.approved,
            greenroom = result.greenroom,
            core = result.core,
            "file statistics aggregated"
        );
        Ok(result)
    }
}
