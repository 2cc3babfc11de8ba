//! Typed API error for HTTP handlers.
//!
//! Converts service errors and extractor rejections into the JSON envelope
//! `{code, error_msg, result: null}` with a matching status code.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use entityinfo_service::ServiceError;
use entityinfo_storage::StorageError;

use crate::response_types::ApiResponse;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing or malformed parameters.
    BadRequest(String),
    /// 404 Not Found: the project, user, manifest or metrics row does not exist.
    NotFound(String),
    /// 502 Bad Gateway: a collaborator failed or answered with an unexpected payload.
    BadGateway { service: Option<&'static str>, message: String },
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg,
            Self::BadGateway { service, message } => {
                tracing::warn!(service = service.unwrap_or("unknown"), error = %message, "upstream failure");
                message
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                "internal server error".to_owned()
            },
        };
        (status, Json(ApiResponse::<()>::error(status, message))).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Upstream(ref e) if e.is_not_found() => Self::NotFound(e.to_string()),
            ServiceError::Upstream(e) => {
                Self::BadGateway { service: e.service(), message: e.to_string() }
            },
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
