//! File statistics domain types.
//!
//! The aggregate is a read-only projection over two collaborators: audit-log
//! event counts per operation kind and graph-node counts per storage zone.

use serde::{Deserialize, Serialize};

use crate::constants::FILE_RESOURCE;
use crate::project::Project;

/// Category of an audited file action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Upload,
    Download,
    Transfer,
}

impl OperationKind {
    /// Fixed query order used by the statistics aggregate.
    pub const ALL: [Self; 3] = [Self::Upload, Self::Download, Self::Transfer];

    /// Action name understood by the audit log service.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Upload => "data_upload",
            Self::Download => "data_download",
            Self::Transfer => "data_transfer",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action())
    }
}

/// Storage partition of a project's files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Upload landing area, labelled `Greenroom` in the graph.
    Staging,
    /// Promoted area, labelled `Core` in the graph.
    Core,
}

impl Zone {
    /// Fixed query order used by the statistics aggregate.
    pub const ALL: [Self; 2] = [Self::Staging, Self::Core];

    /// Graph label set selecting file nodes of this zone.
    #[must_use]
    pub const fn labels(self) -> &'static str {
        match self {
            Self::Staging => "Greenroom:File",
            Self::Core => "Core:File",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staging => f.write_str("greenroom"),
            Self::Core => f.write_str("core"),
        }
    }
}

/// Half-open window `[start, end)` in epoch seconds.
///
/// Not checked for `start <= end`; the audit log service decides what an
/// inverted window means.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// One audit-log count request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogQuery {
    pub project_code: String,
    pub operation: OperationKind,
    pub window: TimeWindow,
    pub resource: &'static str,
    pub operator: Option<String>,
}

impl AuditLogQuery {
    /// File-resource count for `operation` within `window`.
    #[must_use]
    pub fn files(
        project_code: &str,
        operation: OperationKind,
        window: TimeWindow,
        operator: Option<&str>,
    ) -> Self {
        Self {
            project_code: project_code.to_owned(),
            operation,
            window,
            resource: FILE_RESOURCE,
            operator: operator.map(str::to_owned),
        }
    }
}

/// One graph node-count request.
///
/// `display_path_prefix` narrows by the node's display path, which starts
/// with the uploader's name. It is a naming convention, not an identity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCountQuery {
    pub project_code: String,
    pub zone: Zone,
    pub archived: bool,
    pub display_path_prefix: Option<String>,
}

impl FileCountQuery {
    /// Count of live (non-archived) files in `zone`.
    #[must_use]
    pub fn live(project_code: &str, zone: Zone, uploader: Option<&str>) -> Self {
        Self {
            project_code: project_code.to_owned(),
            zone,
            archived: false,
            display_path_prefix: uploader.map(str::to_owned),
        }
    }
}

/// Per-request file statistics for one project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatisticsResult {
    pub uploaded: u64,
    pub downloaded: u64,
    /// Sourced from the `transfer` operation count.
    pub approved: u64,
    pub greenroom: u64,
    pub core: u64,
    pub project_info: Project,
}

impl StatisticsResult {
    /// Zeroed counts for `project`, filled in by the `record_*` methods.
    #[must_use]
    pub const fn for_project(project_info: Project) -> Self {
        Self { uploaded: 0, downloaded: 0, approved: 0, greenroom: 0, core: 0, project_info }
    }

    pub fn record_operation(&mut self, operation: OperationKind, count: u64) {
        match operation {
            OperationKind::Upload => self.uploaded = count,
            OperationKind::Download => self.downloaded = count,
            OperationKind::Transfer => self.approved = count,
        }
    }

    pub fn record_zone(&mut self, zone: Zone, count: u64) {
        match zone {
            Zone::Staging => self.greenroom = count,
            Zone::Core => self.core = count,
        }
    }
}
