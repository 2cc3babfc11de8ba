//! Request/query types (Deserialize)

use entityinfo_core::TimeWindow;
use serde::Deserialize;

/// `?start_date=<epoch>&end_date=<epoch>&operator=<name>`
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    pub start_date: i64,
    pub end_date: i64,
    pub operator: Option<String>,
}

impl StatisticsQuery {
    pub const fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_date, self.end_date)
    }

    /// `operator=` with an empty value counts as absent; anything else is
    /// forwarded verbatim.
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref().filter(|op| !op.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestQuery {
    pub project_code: String,
}
