use anyhow::Result;
use entityinfo_core::{ServiceConfig, TimeWindow};
use entityinfo_service::StatisticsService;

pub(crate) async fn run(
    config: &ServiceConfig,
    project_geid: &str,
    start_date: i64,
    end_date: i64,
    operator: Option<&str>,
) -> Result<()> {
    let (graph, provenance) = super::upstream_clients(config)?;
    let service = StatisticsService::new(graph.clone(), provenance, graph);
    let result = service
        .get_statistics(project_geid, TimeWindow::new(start_date, end_date), operator)
        .await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
