//! Request and response schemas for collaborator endpoints.

use entityinfo_core::{
    ARCHIVED_FALSE, ARCHIVED_TRUE, AUDIT_LOG_PAGE_SIZE, AuditLogQuery, FileCountQuery,
};
use serde::{Deserialize, Serialize};

/// Body of `POST nodes/Container/query`.
#[derive(Debug, Serialize)]
pub(crate) struct ProjectLookup<'a> {
    pub global_entity_id: &'a str,
}

/// Body of `POST nodes/User/query`.
#[derive(Debug, Serialize)]
pub(crate) struct UserLookup<'a> {
    pub name: &'a str,
}

/// Audit log search page; only the match total is used.
#[derive(Debug, Deserialize)]
pub(crate) struct AuditLogPage {
    pub total: u64,
}

/// Response of `GET file/quick/count`.
#[derive(Debug, Deserialize)]
pub(crate) struct QuickCount {
    pub result: u64,
}

/// Query-string pairs for the audit log search.
pub fn audit_log_params(query: &AuditLogQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("project_code", query.project_code.clone()),
        ("action", query.operation.action().to_owned()),
        ("start_date", query.window.start.to_string()),
        ("end_date", query.window.end.to_string()),
        ("page_size", AUDIT_LOG_PAGE_SIZE.to_string()),
    ];
    if !query.resource.is_empty() {
        params.push(("resource", query.resource.to_owned()));
    }
    if let Some(ref operator) = query.operator {
        params.push(("operator", operator.clone()));
    }
    params
}

/// Query-string pairs for the graph quick-count endpoint.
///
/// The uploader filter is expressed as `display_path=<uploader>` plus
/// `startwith=display_path`, i.e. a prefix match on the node's display path.
pub fn file_count_params(query: &FileCountQuery) -> Vec<(&'static str, String)> {
    let archived = if query.archived { ARCHIVED_TRUE } else { ARCHIVED_FALSE };
    let mut params = vec![
        ("labels", query.zone.labels().to_owned()),
        ("project_code", query.project_code.clone()),
        ("archived", archived.to_owned()),
    ];
    if let Some(ref prefix) = query.display_path_prefix {
        params.push(("display_path", prefix.clone()));
        params.push(("startwith", "display_path".to_owned()));
    }
    params
}
