use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::UpstreamError;

/// Maximum number of response-body bytes quoted in error messages.
pub const MAX_ERROR_BODY_LEN: usize = 300;

/// Shared JSON-over-HTTP plumbing for collaborator clients.
///
/// Cheap to clone: the underlying `reqwest::Client` is a pooled handle.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Builds a client whose every request is bounded by `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::ClientInit(e.to_string()))?;
        Ok(Self { client })
    }

    /// Returns a reference to the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Sends `request` and decodes a 2xx JSON body into `T`.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses and schema mismatches each map to
    /// their own [`UpstreamError`] variant.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        context: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request
            .send()
            .await
            .map_err(|source| UpstreamError::HttpRequest { service, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| UpstreamError::HttpRequest { service, source })?;

        if !status.is_success() {
            tracing::warn!(service, context, status = status.as_u16(), "collaborator call failed");
            return Err(UpstreamError::HttpStatus {
                service,
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(
                service,
                context,
                body = truncate(&body, MAX_ERROR_BODY_LEN),
                "collaborator payload did not match schema"
            );
            UpstreamError::JsonParse { service, context, source }
        })
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
