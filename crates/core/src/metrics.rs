use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Platform-wide usage snapshot for one day, as recorded in `system_metrics`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemMetrics {
    pub active_user: i32,
    pub project: i32,
    pub storage: i32,
    pub vm: i32,
    pub cores: i32,
    pub ram: i32,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Parse a `YYYY-MM-DD` query value.
///
/// # Errors
/// Returns a message naming the offending value.
pub fn parse_metrics_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{raw}', expected YYYY-MM-DD: {e}"))
}
