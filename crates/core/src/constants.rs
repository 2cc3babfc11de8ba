//! Shared constants for entityinfo.
//!
//! Centralizes defaults and upstream wire constants used across crates.

/// Default application name reported in logs.
pub const DEFAULT_APP_NAME: &str = "service_entityinfo";

/// Default bind host for the HTTP server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port for the HTTP server.
pub const DEFAULT_PORT: u16 = 5066;

/// Default timeout for every outbound collaborator call, in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Default schema holding the metrics and manifest tables.
pub const DEFAULT_RDS_SCHEMA: &str = "public";

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Page size requested from the audit log search. Only `total` is read.
pub const AUDIT_LOG_PAGE_SIZE: u32 = 1;

/// Resource kind used when counting file operations in the audit log.
pub const FILE_RESOURCE: &str = "file";

/// Graph-service encoding of `archived = false` in quick-count queries.
pub const ARCHIVED_FALSE: &str = "[bool]False";

/// Graph-service encoding of `archived = true` in quick-count queries.
pub const ARCHIVED_TRUE: &str = "[bool]True";
