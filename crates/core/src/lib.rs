//! Core types for entityinfo
//!
//! Domain records, shared constants and startup configuration used by every
//! other crate in the workspace.

pub mod constants;
pub mod env_config;

mod config;
mod error;
mod manifest;
mod metrics;
mod project;
mod statistics;

pub use config::ServiceConfig;
pub use constants::*;
pub use error::ConfigError;
pub use manifest::{DataAttribute, DataManifest};
pub use metrics::{SystemMetrics, parse_metrics_date};
pub use project::{Project, User};
pub use statistics::{
    AuditLogQuery, FileCountQuery, OperationKind, StatisticsResult, TimeWindow, Zone,
};
