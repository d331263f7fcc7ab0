//! Session lifecycle state machine for the Nanit cloud API.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::auth::{AccessToken, Credentials, MfaToken, RefreshToken, TokenPair};
use crate::error::{AuthError, MalformedResponse, RequestFailed};
use crate::media;
use crate::transport::Transport;
use crate::types::BabyUid;
use crate::wire::{
    self, LoginChallengeResponse, LoginRequest, RefreshRequest, TokenPairResponse,
};
use crate::Result;

/// Default page size for message and event listings.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Manages one logical device-account session against the Nanit cloud API.
///
/// The manager owns the credential state for the session: an access/refresh
/// token pair that starts absent and is set by [`complete_login`], then
/// rotated by [`refresh_session`]. It is bound to one transport instance
/// for its whole life and issues exactly one network round trip per
/// operation.
///
/// # Lifecycle
///
/// `initiate_login` → (user receives an emailed code) → `complete_login` →
/// authorized data operations → `refresh_session` when the access token
/// expires. Expired-token handling is deliberately the caller's: an
/// authorized request never refreshes and retries on its own.
///
/// # Concurrency
///
/// A plain mutable-state object with no internal locking. Token-mutating
/// transitions take `&mut self` and reads take `&self`, so racing a refresh
/// against an in-flight authorized request on one manager is rejected at
/// compile time. Callers sharing a manager across tasks must provide their
/// own synchronization.
///
/// [`complete_login`]: SessionManager::complete_login
/// [`refresh_session`]: SessionManager::refresh_session
pub struct SessionManager<T: Transport> {
    transport: T,
    tokens: Option<TokenPair>,
}

impl<T: Transport> SessionManager<T> {
    /// Create a manager with no stored credentials.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            tokens: None,
        }
    }

    /// Restore a manager from a caller-persisted token pair.
    ///
    /// The library defines no persistence format; callers that stored a
    /// pair across process restarts hand it back here.
    pub fn with_tokens(transport: T, tokens: TokenPair) -> Self {
        Self {
            transport,
            tokens: Some(tokens),
        }
    }

    /// Returns the transport this manager is bound to.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the stored token pair, if a login has completed.
    pub fn tokens(&self) -> Option<&TokenPair> {
        self.tokens.as_ref()
    }

    /// True once a login or restore has populated credentials.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_some()
    }

    /// Start the login flow by submitting credentials.
    ///
    /// Declares the MFA delivery channel as email; the server responds with
    /// an MFA challenge token and sends a one-time code to the account's
    /// email address. Both a plain OK and the dedicated "MFA challenge
    /// issued" status are success paths here — the state machine must not
    /// conflate "authentication rejected" with "authentication requires a
    /// second factor".
    ///
    /// Never touches stored credentials.
    ///
    /// # Errors
    ///
    /// [`AuthError::AuthenticationFailed`] for any other status, carrying
    /// the status and decoded body; [`MalformedResponse`] if a success
    /// status arrives without an MFA token.
    #[instrument(skip(self, credentials), fields(email = credentials.email()))]
    pub async fn initiate_login(&self, credentials: &Credentials) -> Result<MfaToken> {
        info!("Initiating login");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
            channel: wire::MFA_CHANNEL,
            mfa_token: None,
            mfa_code: None,
        };

        let response = self
            .transport
            .post_json(wire::LOGIN, &serde_json::to_value(&request)?, &login_headers())
            .await?;

        match response.status {
            200 | wire::STATUS_MFA_REQUIRED => {
                let challenge: LoginChallengeResponse =
                    parse_body("login initiation", response.body)?;
                debug!("MFA challenge issued");
                Ok(MfaToken::new(challenge.mfa_token))
            }
            status => Err(AuthError::AuthenticationFailed {
                status,
                body: render_body(&response.body),
            }
            .into()),
        }
    }

    /// Finish the login flow with the challenge token and the emailed code.
    ///
    /// On success the returned pair atomically replaces any stored tokens;
    /// it is also handed back to the caller for optional external
    /// persistence.
    ///
    /// # Errors
    ///
    /// [`AuthError::AuthenticationFailed`] for any status outside
    /// {200, 201}; [`MalformedResponse`] if either token is missing from a
    /// success body — the manager never proceeds with absent credentials.
    #[instrument(skip_all, fields(email = credentials.email()))]
    pub async fn complete_login(
        &mut self,
        credentials: &Credentials,
        mfa_token: &MfaToken,
        mfa_code: &str,
    ) -> Result<TokenPair> {
        info!("Completing login");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
            channel: wire::MFA_CHANNEL,
            mfa_token: Some(mfa_token.as_str()),
            mfa_code: Some(mfa_code),
        };

        let response = self
            .transport
            .post_json(wire::LOGIN, &serde_json::to_value(&request)?, &login_headers())
            .await?;

        match response.status {
            200 | 201 => {
                let issued: TokenPairResponse = parse_body("login completion", response.body)?;
                let pair = TokenPair::new(
                    AccessToken::new(issued.access_token),
                    RefreshToken::new(issued.refresh_token),
                );
                self.tokens = Some(pair.clone());
                debug!("Session established");
                Ok(pair)
            }
            status => Err(AuthError::AuthenticationFailed {
                status,
                body: render_body(&response.body),
            }
            .into()),
        }
    }

    /// Rotate the stored token pair using the stored refresh token.
    ///
    /// Refresh tokens are single-use: on success both stored tokens are
    /// replaced and the prior refresh token is never submitted again. Any
    /// stream URL minted before the rotation is stale afterwards.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when called before any login;
    /// [`AuthError::RefreshFailed`] for a non-200 status — distinct from
    /// initial-auth failure so callers can fall back to a full login;
    /// [`MalformedResponse`] if either token is missing from a success body.
    #[instrument(skip(self))]
    pub async fn refresh_session(&mut self) -> Result<TokenPair> {
        info!("Refreshing session");

        let refresh_token = self
            .tokens
            .as_ref()
            .ok_or(AuthError::NotAuthenticated)?
            .refresh()
            .as_str()
            .to_string();

        let request = RefreshRequest {
            refresh_token: &refresh_token,
        };

        let response = self
            .transport
            .post_json(wire::REFRESH_TOKENS, &serde_json::to_value(&request)?, &[])
            .await?;

        match response.status {
            200 => {
                let issued: TokenPairResponse = parse_body("token refresh", response.body)?;
                let pair = TokenPair::new(
                    AccessToken::new(issued.access_token),
                    RefreshToken::new(issued.refresh_token),
                );
                self.tokens = Some(pair.clone());
                debug!("Session refreshed");
                Ok(pair)
            }
            status => Err(AuthError::RefreshFailed {
                status,
                body: render_body(&response.body),
            }
            .into()),
        }
    }

    /// List the devices on the account.
    pub async fn babies(&self) -> Result<Value> {
        self.authorized_get(wire::BABIES, &[]).await
    }

    /// List messages for a device, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_LIST_LIMIT`].
    pub async fn messages(&self, uid: &BabyUid, limit: Option<u32>) -> Result<Value> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        self.authorized_get(&wire::baby_messages(uid), &[("limit", limit.to_string())])
            .await
    }

    /// List events for a device, newest first.
    ///
    /// `limit` defaults to [`DEFAULT_LIST_LIMIT`].
    pub async fn events(&self, uid: &BabyUid, limit: Option<u32>) -> Result<Value> {
        let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
        self.authorized_get(&wire::baby_events(uid), &[("limit", limit.to_string())])
            .await
    }

    /// Build the streaming-media URL for a device using the current access
    /// token.
    ///
    /// The token is embedded by value: regenerate after every
    /// [`refresh_session`], since rotation makes previously minted URLs
    /// stale.
    ///
    /// # Errors
    ///
    /// [`AuthError::NotAuthenticated`] when called before any login.
    ///
    /// [`refresh_session`]: SessionManager::refresh_session
    pub fn stream_url(&self, uid: &BabyUid) -> Result<String> {
        let tokens = self.tokens.as_ref().ok_or(AuthError::NotAuthenticated)?;
        Ok(media::stream_url(uid, tokens.access()))
    }

    /// Build the real-time control-channel URL for a device.
    ///
    /// Token-free, so unaffected by rotation and usable before login.
    pub fn websocket_url(&self, uid: &BabyUid) -> String {
        media::websocket_url(uid)
    }

    /// Issue an authorized GET with the stored access token.
    ///
    /// Expiry handling is the caller's responsibility: a failure status is
    /// reported as-is and never triggers an internal refresh-and-retry.
    #[instrument(skip(self, query))]
    async fn authorized_get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let token = self
            .tokens
            .as_ref()
            .ok_or(AuthError::NotAuthenticated)?
            .access();

        debug!("Authorized GET");

        let headers = [(wire::AUTHORIZATION_HEADER, token.as_str().to_string())];
        let response = self.transport.get_json(path, query, &headers).await?;

        if response.status >= 400 {
            return Err(RequestFailed {
                status: response.status,
            }
            .into());
        }

        Ok(response.body)
    }
}

impl<T: Transport> std::fmt::Debug for SessionManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("authenticated", &self.tokens.is_some())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

/// Headers sent on both login phases.
fn login_headers() -> [(&'static str, String); 1] {
    [(wire::API_VERSION_HEADER, wire::API_VERSION.to_string())]
}

/// Parse a success body into its typed form, reporting missing fields as a
/// malformed-response failure for the named operation.
fn parse_body<R: DeserializeOwned>(operation: &'static str, body: Value) -> Result<R> {
    serde_json::from_value(body).map_err(|e| {
        MalformedResponse {
            operation,
            reason: e.to_string(),
        }
        .into()
    })
}

/// Render a response body for error diagnostics.
fn render_body(body: &Value) -> String {
    match body {
        Value::Null => "<empty body>".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
