//! Storage layer for entityinfo
//!
//! Read access to the two table groups this service owns in PostgreSQL:
//! daily system metrics and data manifests with their attributes.

mod error;
mod pg_migrations;
mod pg_storage;
pub mod traits;

pub use error::StorageError;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::{ManifestStore, MetricsStore};
