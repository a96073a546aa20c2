//! HTTP boundary.
//!
//! Network I/O is an injected capability with a single `post` operation so
//! the signing and decoding core stays testable without a live endpoint.
//! Timeout, retry and backoff policy belong to the implementation, not the
//! core.

use async_trait::async_trait;
use error_stack::{report, ResultExt};

use crate::errors::{CustomResult, TransportError};

/// One synchronous request/response exchange over TLS.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> CustomResult<String, TransportError>;
}

/// Default transport backed by a shared [`reqwest::Client`].
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> CustomResult<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .change_context(TransportError::RequestConstructionFailed)?;
        Ok(Self { client })
    }

    /// Wraps a caller-configured client (proxies, timeouts, certificates).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        body: String,
        headers: Vec<(String, String)>,
    ) -> CustomResult<String, TransportError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request
            .send()
            .await
            .change_context(TransportError::SendFailed)?;
        let status = response.status();
        if !status.is_success() {
            return Err(report!(TransportError::UnexpectedStatus {
                status_code: status.as_u16(),
            }));
        }
        response
            .text()
            .await
            .change_context(TransportError::BodyReadFailed)
    }
}
