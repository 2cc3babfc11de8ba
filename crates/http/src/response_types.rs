//! Response types (Serialize)

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Envelope wrapped around every JSON body: `{code, error_msg, result}`.
///
/// `code` mirrors the HTTP status; `result` is `null` on failure.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub error_msg: String,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self { code: StatusCode::OK.as_u16(), error_msg: String::new(), result: Some(result) }
    }

    pub fn error(status: StatusCode, error_msg: String) -> Self {
        Self { code: status.as_u16(), error_msg, result: None }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub name: String,
    pub version: &'static str,
}
