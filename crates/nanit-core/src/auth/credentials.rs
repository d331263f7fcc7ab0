//! Login credentials type.

use std::fmt;

/// Account credentials for the Nanit cloud API.
///
/// Holds the email address and password submitted on both phases of the
/// login flow. The password is never exposed in Debug output to prevent
/// accidental logging.
///
/// # Example
///
/// ```
/// use nanit_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "app-password-here");
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// No client-side format validation is performed; the server is
    /// authoritative on what constitutes a valid email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the account email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// Use this only when constructing authentication requests. Never log
    /// or display this value.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide the password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
