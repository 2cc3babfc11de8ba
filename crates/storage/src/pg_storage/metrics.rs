//! MetricsStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::NaiveDate;
use entityinfo_core::SystemMetrics;
use sqlx::Row;

use super::{PgStorage, Result};
use crate::traits::MetricsStore;

const METRICS_COLUMNS: &str =
    "SELECT active_user, project, storage, vm, cores, ram, CAST(date AS DATE) AS day
       FROM system_metrics";

fn row_to_metrics(row: &sqlx::postgres::PgRow) -> Result<SystemMetrics> {
    Ok(SystemMetrics {
        active_user: row.try_get("active_user")?,
        project: row.try_get("project")?,
        storage: row.try_get("storage")?,
        vm: row.try_get("vm")?,
        cores: row.try_get("cores")?,
        ram: row.try_get("ram")?,
        date: row.try_get("day")?,
    })
}

#[async_trait]
impl MetricsStore for PgStorage {
    async fn get_system_metrics(&self, date: Option<NaiveDate>) -> Result<Option<SystemMetrics>> {
        let row = if let Some(day) = date {
            sqlx::query(&format!(
                "{METRICS_COLUMNS} WHERE CAST(date AS DATE) = $1 ORDER BY date DESC LIMIT 1"
            ))
            .bind(day)
            .fetch_optional(&self.pool)
            .await?
        } else {
            sqlx::query(&format!("{METRICS_COLUMNS} ORDER BY date DESC LIMIT 1"))
                .fetch_optional(&self.pool)
                .await?
        };
        row.as_ref().map(row_to_metrics).transpose()
    }
}
