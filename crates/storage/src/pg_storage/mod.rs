//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by table group.

mod manifests;
mod metrics;

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use entityinfo_core::{
    DataAttribute, DataManifest, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

type Result<T> = std::result::Result<T, StorageError>;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
    schema: String,
}

impl PgStorage {
    /// Connects a pool whose sessions resolve unqualified table names in `schema`.
    pub async fn new(database_url: &str, schema: &str, max_connections: u32) -> Result<Self> {
        if !is_valid_identifier(schema) {
            return Err(StorageError::Config(format!("invalid schema name: {schema:?}")));
        }
        let options = PgConnectOptions::from_str(database_url)?
            .options([("search_path", schema)]);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect_with(options)
            .await?;
        tracing::info!(schema, "PgStorage initialized");
        Ok(Self { pool, schema: schema.to_owned() })
    }

    /// Creates the schema and tables if missing. Safe to run repeatedly.
    pub async fn migrate(&self) -> Result<()> {
        run_pg_migrations(&self.pool, &self.schema).await.map_err(|e| match e {
            StorageError::Database(db) => StorageError::Migration(db.to_string()),
            other => other,
        })
    }

    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Plain lowercase SQL identifier: `[a-z_][a-z0-9_]*`, at most 63 bytes.
pub(crate) fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= 63
        && (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

pub(crate) fn row_to_attribute(row: &sqlx::postgres::PgRow) -> Result<DataAttribute> {
    Ok(DataAttribute {
        id: row.try_get("id")?,
        manifest_id: row.try_get("manifest_id")?,
        name: row.try_get("name")?,
        attribute_type: row.try_get("type")?,
        value: row.try_get("value")?,
        project_code: row.try_get("project_code")?,
        optional: row.try_get("optional")?,
    })
}

pub(crate) fn row_to_manifest(row: &sqlx::postgres::PgRow) -> Result<DataManifest> {
    Ok(DataManifest {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        project_code: row.try_get("project_code")?,
        attributes: Vec::new(),
    })
}

/// Distributes `attributes` onto their manifests, keeping the incoming order.
pub(crate) fn attach_attributes(manifests: &mut [DataManifest], attributes: Vec<DataAttribute>) {
    let mut by_manifest: HashMap<i32, Vec<DataAttribute>> = HashMap::new();
    for attr in attributes {
        by_manifest.entry(attr.manifest_id).or_default().push(attr);
    }
    for manifest in manifests.iter_mut() {
        manifest.attributes = by_manifest.remove(&manifest.id).unwrap_or_default();
    }
    if !by_manifest.is_empty() {
        tracing::warn!(orphans = by_manifest.len(), "attributes without a loaded manifest");
    }
}
