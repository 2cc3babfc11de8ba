//! Client for the audit/provenance service.

use async_trait::async_trait;
use entityinfo_core::AuditLogQuery;

use crate::client::UpstreamClient;
use crate::error::UpstreamError;
use crate::traits::AuditLog;
use crate::wire::{AuditLogPage, audit_log_params};

const SERVICE: &str = "provenance service";

/// Typed access to `{PROVENANCE_SERVICE}/v1/`.
#[derive(Clone, Debug)]
pub struct ProvenanceClient {
    http: UpstreamClient,
    base_url: String,
}

impl ProvenanceClient {
    #[must_use]
    pub fn new(http: UpstreamClient, service_root: &str) -> Self {
        let base_url = format!("{}/v1", service_root.trim_end_matches('/'));
        Self { http, base_url }
    }
}

#[async_trait]
impl AuditLog for ProvenanceClient {
    async fn count_events(&self, query: &AuditLogQuery) -> Result<u64, UpstreamError> {
        let request = self
            .http
            .http_client()
            .get(format!("{}/audit-logs", self.base_url))
            .query(&audit_log_params(query));
        let page: AuditLogPage = self.http.send_json(SERVICE, "audit log page", request).await?;
        tracing::debug!(
            project_code = %query.project_code,
            action = query.operation.action(),
            total = page.total,
            "audit log count"
        );
        Ok(page.total)
    }
}
