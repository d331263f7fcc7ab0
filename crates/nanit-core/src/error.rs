//! Error types for the nanit client libraries.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, protocol, and input validation errors. Each
//! failure mode is a distinguishable variant so callers can branch on
//! "need a new MFA code" vs "need a full re-login" vs "transient request
//! error" without string matching.

use thiserror::Error;

/// The unified error type for nanit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (rejected credentials, rejected refresh,
    /// operations attempted before login).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// A success status whose body is missing required fields.
    #[error("{0}")]
    MalformedResponse(#[from] MalformedResponse),

    /// An authorized data request that the server refused.
    #[error("{0}")]
    Request(#[from] RequestFailed),

    /// Failed to encode a request body.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Input validation errors (invalid API URL, invalid baby UID).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
///
/// The classification from concrete HTTP client errors is done by the
/// transport implementation; this crate only defines the categories.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server rejected the credentials or the MFA code.
    ///
    /// Carries the status and decoded body for diagnostics. The caller must
    /// restart the login flow; nothing is retried internally.
    #[error("login rejected (status {status}): {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// The server rejected the stored refresh token.
    ///
    /// Distinct from [`AuthError::AuthenticationFailed`]: the usual reaction
    /// is to fall back to a full login rather than retry the refresh.
    #[error("token refresh rejected (status {status}): {body}")]
    RefreshFailed { status: u16, body: String },

    /// An operation that requires stored tokens was called before any
    /// successful login.
    #[error("not authenticated; complete a login first")]
    NotAuthenticated,
}

/// A success status was returned but the body is missing required fields.
///
/// This indicates protocol drift on the server side and is fatal to the
/// operation that produced it.
#[derive(Debug, Error)]
#[error("malformed {operation} response: {reason}")]
pub struct MalformedResponse {
    /// The logical operation whose response failed validation.
    pub operation: &'static str,
    /// What was wrong with the body.
    pub reason: String,
}

/// An authorized data request returned a failure status (>= 400).
#[derive(Debug, Error)]
#[error("request failed with status {status}")]
pub struct RequestFailed {
    /// HTTP status code reported by the server.
    pub status: u16,
}

impl RequestFailed {
    /// True when the status suggests an expired or invalid access token.
    ///
    /// Callers typically react by refreshing the session and retrying; the
    /// library never does so on its own.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid baby/device UID.
    #[error("invalid baby UID '{value}': {reason}")]
    BabyUid { value: String, reason: String },
}
