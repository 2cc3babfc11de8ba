//! Typed error enum for collaborator calls.

use thiserror::Error;

/// Errors from graph and provenance service calls.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{service} request failed: {source}")]
    HttpRequest {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned HTTP {code}: {body}")]
    HttpStatus { service: &'static str, code: u16, body: String },
    #[error("{service} sent an unexpected {context} payload: {source}")]
    JsonParse {
        service: &'static str,
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl UpstreamError {
    /// Whether a lookup resolved to no record.
    ///
    /// An HTTP 404 from a collaborator is a transport failure, not a missing
    /// record; lookups that treat it as absence convert it themselves.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Collaborator that produced this error, if any.
    #[must_use]
    pub const fn service(&self) -> Option<&'static str> {
        match self {
            Self::HttpRequest { service, .. }
            | Self::HttpStatus { service, .. }
            | Self::JsonParse { service, .. } => Some(*service),
            Self::NotFound { .. } | Self::ClientInit(_) => None,
        }
    }
}
