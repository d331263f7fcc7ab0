//! MFA challenge token type.

use std::fmt;

/// An opaque, server-issued handle linking an initial login attempt to its
/// follow-up one-time-code submission.
///
/// Returned by [`SessionManager::initiate_login`] and consumed by the
/// immediately following [`SessionManager::complete_login`]. The manager
/// never stores it; its validity window is short and server-defined. Treat
/// it as an opaque capability string: never inspect or modify the value.
///
/// [`SessionManager::initiate_login`]: crate::SessionManager::initiate_login
/// [`SessionManager::complete_login`]: crate::SessionManager::complete_login
#[derive(Clone)]
pub struct MfaToken(String);

impl MfaToken {
    /// Wrap a server-issued MFA token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for resubmission to the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for MfaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MfaToken").field(&"[REDACTED]").finish()
    }
}
