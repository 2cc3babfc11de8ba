//! Service configuration assembled once at startup.
//!
//! Every collaborator base URL lives here and is handed to constructors
//! explicitly; nothing reads the environment after startup.

use std::time::Duration;

use crate::constants::{
    DEFAULT_APP_NAME, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RDS_SCHEMA,
    DEFAULT_UPSTREAM_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use crate::env_config::{non_empty, parse_with_default, process_env};
use crate::error::ConfigError;

/// Runtime settings for the entityinfo service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Graph-database service root, e.g. `http://neo4j.utility:5062`.
    pub neo4j_service: String,
    /// Audit/provenance service root, e.g. `http://provenance.utility:5077`.
    pub provenance_service: String,
    /// PostgreSQL URL for the metrics and manifest tables.
    pub rds_db_uri: Option<String>,
    pub rds_schema: String,
    pub upstream_timeout_secs: u64,
    pub pg_max_connections: u32,
}

impl ServiceConfig {
    /// Load from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] when a collaborator URL is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    /// Load from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] when a collaborator URL is unset and
    /// [`ConfigError::Invalid`] when one is not an http(s) URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let neo4j_service = service_url(&lookup, "NEO4J_SERVICE")?;
        let provenance_service = service_url(&lookup, "PROVENANCE_SERVICE")?;

        Ok(Self {
            app_name: non_empty(&lookup, "APP_NAME")
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
            host: non_empty(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_with_default(&lookup, "PORT", DEFAULT_PORT),
            neo4j_service,
            provenance_service,
            rds_db_uri: non_empty(&lookup, "RDS_DB_URI"),
            rds_schema: non_empty(&lookup, "RDS_SCHEMA_DEFAULT")
                .unwrap_or_else(|| DEFAULT_RDS_SCHEMA.to_owned()),
            upstream_timeout_secs: parse_with_default(
                &lookup,
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            ),
            pg_max_connections: parse_with_default(
                &lookup,
                "PG_POOL_MAX_CONNECTIONS",
                PG_POOL_MAX_CONNECTIONS,
            ),
        })
    }

    /// Database URL, required by commands that touch PostgreSQL.
    ///
    /// # Errors
    /// Returns [`ConfigError::Missing`] if `RDS_DB_URI` was not set.
    pub fn require_database_url(&self) -> Result<&str, ConfigError> {
        self.rds_db_uri.as_deref().ok_or(ConfigError::Missing("RDS_DB_URI"))
    }

    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn service_url<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let url = non_empty(lookup, var).ok_or(ConfigError::Missing(var))?;
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::Invalid { var, reason: format!("not an http(s) URL: {url}") });
    }
    Ok(url.trim_end_matches('/').to_owned())
}
