//! HTTP transport collaborator contract.

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

/// A decoded HTTP response: status code plus decoded JSON body.
///
/// Bodies are decoded leniently: non-JSON text is carried as a JSON string
/// and an empty body as `null`, so that failure statuses with arbitrary
/// bodies still surface diagnostics instead of a decode error.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded response body.
    pub body: Value,
}

impl TransportResponse {
    /// Create a response from a status code and decoded body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }
}

/// Request/response capability over the networked JSON API.
///
/// The session layer is bound to one transport instance for its whole life
/// and issues exactly one round trip per operation. Implementations must
/// report every HTTP status as a plain [`TransportResponse`] rather than an
/// error: status interpretation belongs to the session layer, which treats
/// the MFA-challenge status as a success path. Only failures to complete
/// the round trip at all (DNS, TLS, connect, timeout) are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a POST with a JSON body and extra headers.
    async fn post_json(
        &self,
        path: &str,
        body: &Value,
        headers: &[(&str, String)],
    ) -> Result<TransportResponse>;

    /// Issue a GET with query parameters and extra headers.
    async fn get_json(
        &self,
        path: &str,
        query: &[(&str, String)],
        headers: &[(&str, String)],
    ) -> Result<TransportResponse>;
}
