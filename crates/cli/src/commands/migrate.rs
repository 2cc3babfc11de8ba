//! Creates the `system_metrics`, `data_manifest` and `data_attribute` tables.
//!
//! Idempotent: every statement is `IF NOT EXISTS`.

use anyhow::Result;
use entityinfo_core::ServiceConfig;

pub(crate) async fn run(config: &ServiceConfig) -> Result<()> {
    let storage = super::connect_storage(config).await?;
    storage.migrate().await?;
    tracing::info!(schema = %config.rds_schema, "migrations applied");
    Ok(())
}
