//! Wire-level endpoint paths, headers, and request/response bodies.
//!
//! Response bodies are modeled as a small closed set of typed structs
//! validated at the boundary, so a success status with missing fields is
//! detected centrally instead of through late-bound field access.

use serde::{Deserialize, Serialize};

use crate::types::BabyUid;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Credential check and MFA completion.
pub const LOGIN: &str = "/login";

/// Token rotation.
pub const REFRESH_TOKENS: &str = "/tokens/refresh";

/// Devices on the account.
pub const BABIES: &str = "/babies";

/// Messages recorded for one device.
pub fn baby_messages(uid: &BabyUid) -> String {
    format!("/babies/{}/messages", uid)
}

/// Events recorded for one device.
pub fn baby_events(uid: &BabyUid) -> String {
    format!("/babies/{}/events", uid)
}

// ============================================================================
// Headers and Statuses
// ============================================================================

/// Protocol version header sent on both login phases.
pub const API_VERSION_HEADER: &str = "nanit-api-version";

/// Protocol version this client speaks.
pub const API_VERSION: &str = "1";

/// Authorization header carrying the raw access token (no `Bearer` prefix).
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// MFA delivery channel declared on login.
pub const MFA_CHANNEL: &str = "email";

/// Status the server uses to signal that an MFA challenge was issued.
///
/// A success path for login initiation, not an authentication rejection.
pub const STATUS_MFA_REQUIRED: u16 = 482;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for both phases of `/login`.
///
/// The MFA fields are present only on the completion phase.
#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub channel: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_code: Option<&'a str>,
}

/// Request body for `/tokens/refresh`.
#[derive(Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Response carrying an MFA challenge token, returned by login initiation.
#[derive(Deserialize)]
pub struct LoginChallengeResponse {
    pub mfa_token: String,
}

/// Response carrying a freshly issued token pair, returned by login
/// completion and by token refresh.
#[derive(Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}
