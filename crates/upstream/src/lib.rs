//! Collaborator clients for entityinfo
//!
//! JSON-over-HTTP access to the graph-database service (projects, users, file
//! counts) and the provenance service (audit-log counts). Every payload is
//! decoded into an explicit schema at this boundary.

mod client;
mod error;
mod graph;
mod provenance;
pub mod traits;
mod wire;


pub use client::{MAX_ERROR_BODY_LEN, UpstreamClient, truncate};
pub use error::UpstreamError;
pub use graph::GraphServiceClient;
pub use provenance::ProvenanceClient;
pub use traits::{AuditLog, GraphStore, ProjectDirectory, UserDirectory};
pub use wire::{audit_log_params, file_count_params};
