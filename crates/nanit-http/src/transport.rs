//! reqwest implementation of the transport contract.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, trace};

use nanit_core::error::{Error, TransportError};
use nanit_core::{ApiUrl, Result, Transport, TransportResponse};

/// HTTP transport for the Nanit cloud API.
///
/// Every HTTP status is reported to the session layer as a plain
/// [`TransportResponse`]; only round-trip failures (connect, timeout, etc.)
/// surface as errors. Bodies are decoded leniently so failure statuses with
/// non-JSON bodies still carry diagnostics.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base: ApiUrl,
}

impl HttpTransport {
    /// Create a transport targeting the production API root.
    pub fn new() -> Self {
        Self::with_base_url(ApiUrl::production())
    }

    /// Create a transport targeting an arbitrary base URL.
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nanit-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this transport is configured for.
    pub fn base_url(&self) -> &ApiUrl {
        &self.base
    }

    /// Decode a response into status plus lenient JSON body.
    async fn decode(response: reqwest::Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                // Carry non-JSON bodies as text for diagnostics
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        trace!(status, "response decoded");
        Ok(TransportResponse::new(status, body))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, body, headers), fields(base = %self.base))]
    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        headers: &[(&str, String)],
    ) -> Result<TransportResponse> {
        let url = self.base.endpoint(path);
        debug!(path, "POST");

        let mut request = self.client.post(&url).json(body);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        Self::decode(response).await
    }

    #[instrument(skip(self, query, headers), fields(base = %self.base))]
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<TransportResponse> {
        let url = self.base.endpoint(path);
        debug!(path, "GET");

        let mut request = self.client.get(&url).query(query);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        Self::decode(response).await
    }
}

/// Classify a reqwest error into the transport error categories.
///
/// A standalone function because the orphan rule keeps the `From` impl out
/// of this crate.
fn map_reqwest_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}
