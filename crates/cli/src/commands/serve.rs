use std::sync::Arc;

use anyhow::Result;
use entityinfo_core::ServiceConfig;
use entityinfo_http::{AppState, create_router};
use entityinfo_service::{ManifestService, MetricsService, StatisticsService, UserService};
use tokio::signal;

pub(crate) async fn run(config: &ServiceConfig) -> Result<()> {
    let (graph, provenance) = super::upstream_clients(config)?;
    let storage = super::connect_storage(config).await?;

    let state = Arc::new(AppState {
        app_name: config.app_name.clone(),
        statistics_service: Arc::new(StatisticsService::new(
            graph.clone(),
            provenance,
            graph.clone(),
        )),
        metrics_service: Arc::new(MetricsService::new(storage.clone())),
        manifest_service: Arc::new(ManifestService::new(storage)),
        user_service: Arc::new(UserService::new(graph)),
    });

    let router = create_router(state);
    let addr = config.bind_addr();
    tracing::info!(
        app = %config.app_name,
        neo4j = %config.neo4j_service,
        provenance = %config.provenance_service,
        "Starting HTTP server on {}",
        addr
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            },
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received terminate signal"),
    }
}
