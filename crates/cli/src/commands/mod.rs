pub(crate) mod migrate;
pub(crate) mod serve;
pub(crate) mod statistics;

use std::sync::Arc;

use anyhow::Result;
use entityinfo_core::ServiceConfig;
use entityinfo_storage::PgStorage;
use entityinfo_upstream::{GraphServiceClient, ProvenanceClient, UpstreamClient};

/// One shared connection pool behind both collaborator clients.
pub(crate) fn upstream_clients(
    config: &ServiceConfig,
) -> Result<(Arc<GraphServiceClient>, Arc<ProvenanceClient>)> {
    let http = UpstreamClient::new(config.upstream_timeout())?;
    let graph = Arc::new(GraphServiceClient::new(http.clone(), &config.neo4j_service));
    let provenance = Arc::new(ProvenanceClient::new(http, &config.provenance_service));
    Ok((graph, provenance))
}

pub(crate) async fn connect_storage(config: &ServiceConfig) -> Result<Arc<PgStorage>> {
    let url = config.require_database_url()?;
    let storage = PgStorage::new(url, &config.rds_schema, config.pg_max_connections).await?;
    Ok(Arc::new(storage))
}
