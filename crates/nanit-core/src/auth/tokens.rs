//! Bearer token types for Nanit authentication.

use std::fmt;

/// A short-lived bearer credential authorizing data requests and
/// media-stream connections.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers and
    /// stream URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A longer-lived, single-use-per-rotation credential used to mint a new
/// access/refresh pair without re-entering a password.
///
/// The server invalidates a refresh token the moment it is used; holders
/// must always replace a stored token with the one returned by the refresh.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in refresh requests.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// An access token and the refresh token issued alongside it.
///
/// The two are always set together: the API issues them as a pair on login
/// completion and rotates them as a pair on refresh. Storing them as one
/// value makes a half-initialized session unrepresentable.
#[derive(Clone)]
pub struct TokenPair {
    access: AccessToken,
    refresh: RefreshToken,
}

impl TokenPair {
    /// Create a pair from tokens issued together by the server.
    pub fn new(access: AccessToken, refresh: RefreshToken) -> Self {
        Self { access, refresh }
    }

    /// Returns the access token.
    pub fn access(&self) -> &AccessToken {
        &self.access
    }

    /// Returns the refresh token.
    pub fn refresh(&self) -> &RefreshToken {
        &self.refresh
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access", &"[REDACTED]")
            .field("refresh", &"[REDACTED]")
            .finish()
    }
}
