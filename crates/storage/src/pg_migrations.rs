//! PostgreSQL schema migrations for the entityinfo tables.
//!
//! Every statement is idempotent; existing tables owned by other services are
//! left untouched.

use sqlx::PgPool;

use crate::error::StorageError;
use crate::pg_storage::is_valid_identifier;

/// Run all PostgreSQL migrations in `schema`.
pub async fn run_pg_migrations(pool: &PgPool, schema: &str) -> Result<(), StorageError> {
    if !is_valid_identifier(schema) {
        return Err(StorageError::Config(format!("invalid schema name: {schema:?}")));
    }

    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {schema}")).execute(pool).await?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {schema}.system_metrics (
            id SERIAL PRIMARY KEY,
            active_user INTEGER NOT NULL DEFAULT 0,
            project INTEGER NOT NULL DEFAULT 0,
            storage INTEGER NOT NULL DEFAULT 0,
            vm INTEGER NOT NULL DEFAULT 0,
            cores INTEGER NOT NULL DEFAULT 0,
            ram INTEGER NOT NULL DEFAULT 0,
            date TIMESTAMP NOT NULL DEFAULT NOW()
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_system_metrics_date ON {schema}.system_metrics (date DESC)"
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {schema}.data_manifest (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            project_code TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_manifest_project ON {schema}.data_manifest (project_code)"
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {schema}.data_attribute (
            id SERIAL PRIMARY KEY,
            manifest_id INTEGER NOT NULL REFERENCES {schema}.data_manifest (id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            type TEXT NOT NULL DEFAULT 'text',
            value TEXT,
            project_code TEXT NOT NULL,
            optional BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#
    ))
    .execute(pool)
    .await?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_attribute_manifest ON {schema}.data_attribute (manifest_id)"
    ))
    .execute(pool)
    .await?;

    tracing::info!(schema, "PostgreSQL migrations applied");
    Ok(())
}
