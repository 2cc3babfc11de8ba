use std::sync::Arc;

use entityinfo_core::{SystemMetrics, parse_metrics_date};
use entityinfo_storage::MetricsStore;

use crate::ServiceError;

pub struct MetricsService {
    store: Arc<dyn MetricsStore>,
}

impl MetricsService {
    #[must_use]
    pub fn new(store: Arc<dyn MetricsStore>) -> Self {
        Self { store }
    }

    /// Latest snapshot when `date` is absent, otherwise the snapshot for that day.
    pub async fn get_system_metrics(&self, date: Option<&str>) -> Result<SystemMetrics, ServiceError> {
        let day = date.map(parse_metrics_date).transpose().map_err(ServiceError::InvalidInput)?;
        self.store.get_system_metrics(day).await?.ok_or_else(|| ServiceError::NotFound {
            entity: "system metrics",
            id: date.unwrap_or("latest").to_owned(),
        })
    }
}
